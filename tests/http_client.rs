//! `HttpClient` 통합 테스트
//!
//! axum으로 127.0.0.1의 임의 포트에 가짜 관리자 API를 띄우고
//! 실제 HTTP 왕복으로 헤더, 쿼리, 봉투 해석을 확인합니다.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Multipart, Path, Query};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use backoffice::api::endpoints::TEAM_PHOTO_UPLOAD;
use backoffice::api::UploadFile;
use backoffice::models::{EntityId, Job, TeamMember};
use backoffice::{
    ApiClient, ApiRequest, AppError, CrudScreen, Editor, HttpClient, ListController, Phase,
    RequestContext, ToastLog,
};
use serde_json::{json, Value};

const TOKEN: &str = "secret-admin-token";

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {}", TOKEN))
}

async fn list_jobs(
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    if !authorized(&headers) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"success": false, "message": "Invalid token"})),
        );
    }
    if !headers.contains_key("x-request-id") {
        return (StatusCode::BAD_REQUEST, Json(json!({"error": "missing request id"})));
    }
    let search = params.get("search").cloned().unwrap_or_default();
    (
        StatusCode::OK,
        Json(json!({
            "success": true,
            "data": {
                "jobs": [{"id": 1, "title": format!("Echo: {}", search)}],
                "total": 1,
                "totalPages": 1
            }
        })),
    )
}

async fn create_job(Json(mut body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["title"] == "dup" {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"success": false, "message": "Title already used"})),
        );
    }
    body["id"] = json!(77);
    (
        StatusCode::CREATED,
        Json(json!({"success": true, "data": {"job": body}})),
    )
}

async fn delete_job(Path(id): Path<i64>) -> StatusCode {
    if id == 1 {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

async fn upload_photo(mut multipart: Multipart) -> Json<Value> {
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() == Some("photo") {
            let name = field.file_name().unwrap_or_default().to_string();
            return Json(json!({"success": true, "data": {"url": format!("/uploads/team/{}", name)}}));
        }
    }
    Json(json!({"success": false, "message": "photo field missing"}))
}

async fn spawn_stub() -> anyhow::Result<String> {
    let app = Router::new()
        .route("/api/admin/jobs", get(list_jobs).post(create_job))
        .route("/api/admin/jobs/{id}", delete(delete_job))
        .route(TEAM_PHOTO_UPLOAD, post(upload_photo));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(format!("http://{}", addr))
}

fn admin() -> RequestContext {
    RequestContext::with_token(TOKEN)
}

#[tokio::test]
async fn missing_token_is_unauthorized() -> anyhow::Result<()> {
    let client = HttpClient::new(&spawn_stub().await?)?;
    let err = client
        .send(&RequestContext::anonymous(), ApiRequest::get("/api/admin/jobs"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Unauthorized(ref m) if m == "Invalid token"));
    assert_eq!(err.user_message(), "Invalid token");
    Ok(())
}

#[tokio::test]
async fn list_reads_flat_pagination_over_http() -> anyhow::Result<()> {
    let client = HttpClient::new(&spawn_stub().await?)?;
    let mut list: ListController<Job> = ListController::new(10);
    list.set_filter("search", "rust dev");

    list.reload(&client, &admin()).await?;

    assert_eq!(list.items()[0].title, "Echo: rust dev");
    assert_eq!(list.total_count(), 1);
    assert_eq!(list.total_pages(), 1);
    Ok(())
}

#[tokio::test]
async fn editor_round_trip_and_server_rejection() -> anyhow::Result<()> {
    let client = HttpClient::new(&spawn_stub().await?)?;
    let mut editor = Editor::from_record(Job {
        title: "Backend Engineer".into(),
        company_name: "Acme".into(),
        description: "APIs".into(),
        ..Job::default()
    });

    let saved = editor.save(&client, &admin(), None).await?;
    assert_eq!(saved.id, Some(EntityId::Int(77)));
    assert_eq!(saved.company_name, "Acme");

    let mut duplicate = Editor::from_record(Job {
        title: "dup".into(),
        ..saved
    });
    duplicate.draft_mut().id = None;
    assert!(duplicate.save(&client, &admin(), None).await.is_err());
    assert_eq!(duplicate.phase(), &Phase::Editing);
    assert_eq!(duplicate.last_error(), Some("Title already used"));
    Ok(())
}

#[tokio::test]
async fn delete_with_empty_body_succeeds() -> anyhow::Result<()> {
    let client = HttpClient::new(&spawn_stub().await?)?;

    let envelope = client
        .send(&admin(), ApiRequest::delete("/api/admin/jobs/1"))
        .await?;
    assert!(envelope.success);

    let missing = client
        .send(&admin(), ApiRequest::delete("/api/admin/jobs/2"))
        .await;
    assert!(matches!(missing, Err(AppError::NotFound)));
    Ok(())
}

#[tokio::test]
async fn team_photo_upload_returns_url() -> anyhow::Result<()> {
    let client: Arc<dyn ApiClient> = Arc::new(HttpClient::new(&spawn_stub().await?)?);
    let screen: CrudScreen<TeamMember> = CrudScreen::new(client, Arc::new(ToastLog::new()), 10);

    let file = UploadFile::from_bytes("photo", "ana.png", vec![0x89, 0x50, 0x4e, 0x47]);
    let url = screen.upload(&admin(), TEAM_PHOTO_UPLOAD, file).await;

    assert_eq!(url.as_deref(), Some("/uploads/team/ana.png"));
    Ok(())
}
