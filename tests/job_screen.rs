//! 채용공고 관리 화면 시나리오 테스트
//!
//! 네트워크 없이 `ScriptedClient`로 응답을 재생하고,
//! 화면이 보낸 요청과 띄운 알림을 확인합니다.

use std::sync::Arc;

use backoffice::api::Method;
use backoffice::models::{EntityId, Job};
use backoffice::services::Level;
use backoffice::{CrudScreen, RequestContext, ScriptedClient, ToastLog};
use serde_json::{json, Value};

const JOBS: &str = "/api/admin/jobs";

fn job_page() -> Value {
    json!({
        "success": true,
        "data": {
            "jobs": [
                {"id": 5, "title": "Senior Engineer", "company_name": "Acme", "status": "active"},
                {"id": 6, "title": "Staff Engineer", "company_name": "Initech", "skills_required": "rust, go"}
            ],
            "pagination": {"total": 37, "pages": 4}
        }
    })
}

fn setup() -> (Arc<ScriptedClient>, Arc<ToastLog>, CrudScreen<Job>) {
    let api = Arc::new(ScriptedClient::new());
    api.respond(Method::Get, JOBS, job_page());
    let toasts = Arc::new(ToastLog::new());
    let screen = CrudScreen::new(api.clone(), toasts.clone(), 10);
    (api, toasts, screen)
}

fn ctx() -> RequestContext {
    RequestContext::with_token("admin-token")
}

#[tokio::test]
async fn search_builds_query_and_reads_pagination() {
    let (api, _, mut screen) = setup();

    assert!(screen.apply_filter(&ctx(), "search", "engineer").await);

    let sent = api.last().unwrap();
    assert_eq!(sent.path, JOBS);
    assert!(sent.query_string().contains("search=engineer&page=1"));
    assert_eq!(sent.token.as_deref(), Some("admin-token"));

    let list = screen.list();
    assert_eq!(list.total_count(), 37);
    assert_eq!(list.total_pages(), 4);
    assert_eq!(list.items().len(), 2);
    assert_eq!(list.items()[1].skills.as_slice(), ["rust", "go"]);
}

#[tokio::test]
async fn changing_a_filter_returns_to_first_page() {
    let (api, _, mut screen) = setup();
    screen.refresh(&ctx()).await;
    screen.go_to_page(&ctx(), 3).await;
    assert_eq!(screen.list().page(), 3);
    assert!(api.last().unwrap().query_string().contains("page=3"));

    screen.apply_filter(&ctx(), "status", "active").await;

    assert_eq!(screen.list().page(), 1);
    let query = api.last().unwrap().query_string();
    assert!(query.starts_with("status=active&page=1"));
}

#[tokio::test]
async fn delete_waits_for_confirmation() {
    let (api, toasts, mut screen) = setup();
    api.respond(Method::Delete, "/api/admin/jobs/5", json!({"success": true}));
    screen.refresh(&ctx()).await;

    screen.request_delete(EntityId::Int(5));
    assert_eq!(api.count(Method::Delete, "/api/admin/jobs/5"), 0);
    assert_eq!(screen.pending_delete(), Some(&[EntityId::Int(5)][..]));

    screen.cancel_delete();
    assert_eq!(screen.confirm_delete(&ctx()).await, 0);
    assert_eq!(api.count(Method::Delete, "/api/admin/jobs/5"), 0);
    assert_eq!(screen.list().items().len(), 2);

    screen.request_delete(EntityId::Int(5));
    assert_eq!(screen.confirm_delete(&ctx()).await, 1);
    assert_eq!(api.count(Method::Delete, "/api/admin/jobs/5"), 1);

    let toast = toasts.last().unwrap();
    assert_eq!(toast.level, Level::Success);
    assert_eq!(toast.message, "Job deleted successfully");
}

#[tokio::test]
async fn failed_delete_is_reported_and_row_stays() {
    let (api, toasts, mut screen) = setup();
    api.respond_with_status(
        Method::Delete,
        "/api/admin/jobs/6",
        409,
        json!({"success": false, "message": "Job has applicants"}),
    );
    screen.refresh(&ctx()).await;

    screen.request_delete(EntityId::Int(6));
    assert_eq!(screen.confirm_delete(&ctx()).await, 0);

    assert_eq!(screen.list().items().len(), 2);
    assert_eq!(toasts.last().unwrap().message, "Job has applicants");
}

#[tokio::test]
async fn bulk_delete_uses_selection() {
    let (api, _, mut screen) = setup();
    api.respond(Method::Delete, "/api/admin/jobs/5", json!({"success": true}));
    api.respond(Method::Delete, "/api/admin/jobs/6", json!({"success": true}));
    screen.refresh(&ctx()).await;

    assert!(!screen.request_bulk_delete());
    screen.list_mut().select_all(true);
    assert!(screen.request_bulk_delete());
    assert_eq!(screen.confirm_delete(&ctx()).await, 2);
}

#[tokio::test]
async fn empty_bulk_request_keeps_open_single_delete() {
    let (api, _, mut screen) = setup();
    api.respond(Method::Delete, "/api/admin/jobs/5", json!({"success": true}));
    screen.refresh(&ctx()).await;

    screen.request_delete(EntityId::Int(5));
    assert!(!screen.request_bulk_delete());
    assert_eq!(screen.pending_delete(), Some(&[EntityId::Int(5)][..]));

    assert_eq!(screen.confirm_delete(&ctx()).await, 1);
}

#[tokio::test]
async fn invalid_job_is_never_submitted() {
    let (api, toasts, mut screen) = setup();
    screen.open_new();
    let editor = screen.editor_mut().unwrap();
    editor.set_field("title", "Hello World").unwrap();

    assert!(screen.submit(&ctx(), None).await.is_none());
    assert_eq!(api.count(Method::Post, JOBS), 0);
    assert_eq!(
        toasts.last().unwrap().message,
        "Company name is required\nDescription is required"
    );
    assert_eq!(screen.editor().unwrap().draft().slug, "hello-world");
}

#[tokio::test]
async fn create_publishes_and_refreshes() {
    let (api, toasts, mut screen) = setup();
    api.respond(
        Method::Post,
        JOBS,
        json!({"success": true, "message": "Job created", "data": {"id": 90}}),
    );

    screen.open_new();
    let editor = screen.editor_mut().unwrap();
    editor.set_field("title", "Platform Engineer").unwrap();
    editor.set_field("company_name", "Acme").unwrap();
    editor.set_field("description", "Build the platform").unwrap();
    editor.add_array_value("skills", "Rust").unwrap();
    editor.add_array_item("skills").unwrap();

    let saved = screen.submit(&ctx(), Some(true)).await.unwrap();
    assert_eq!(saved.id, Some(EntityId::Int(90)));
    assert!(screen.editor().is_none());
    assert_eq!(toasts.last().unwrap().message, "Job saved successfully");

    let post = api
        .requests()
        .into_iter()
        .find(|r| r.method == Method::Post)
        .unwrap();
    let body = post.body.unwrap();
    assert_eq!(body["slug"], "platform-engineer");
    assert_eq!(body["status"], "active");
    assert_eq!(body["skills"], json!(["Rust"]));

    assert_eq!(api.last().unwrap().method, Method::Get);
}
