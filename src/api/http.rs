//! # reqwest 기반 HTTP 클라이언트
//!
//! `ApiClient`의 실제 네트워크 구현입니다.
//!
//! - 경로를 `API_BASE_URL` 뒤에 붙여 전체 URL을 만듭니다.
//! - 컨텍스트에 토큰이 있으면 `Authorization: Bearer <token>`을 붙입니다.
//! - 요청마다 `X-Request-Id`(UUIDv7)를 붙이고 로그에 남깁니다.
//! - 2xx가 아니어도 본문을 봉투로 해석해서 서버 메시지를 살립니다.
//!
//! 타임아웃과 재시도는 설정하지 않습니다. 실패하면 사용자가 다시 시도합니다.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, USER_AGENT}; // 표준 헤더 이름 상수
use reqwest::multipart::{Form, Part};              // multipart/form-data 본문 구성
use serde_json::Value;
use url::Url;   // URL 파싱 + 쿼리 문자열 인코딩
use uuid::Uuid; // 요청 ID (UUIDv7: 시간순 정렬 가능)

use super::envelope::{interpret, Envelope};
use super::request::{ApiRequest, Method, UploadFile};
use super::ApiClient;
use crate::auth::RequestContext;
use crate::config::Config;
use crate::error::AppError;

/// 관리자 REST API용 HTTP 클라이언트
///
/// `reqwest::Client`는 내부적으로 Arc로 연결 풀을 공유하므로 clone해도 저렴합니다.
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    user_agent: String,
    inner: reqwest::Client,
}

impl HttpClient {
    /// API 루트 주소로 클라이언트를 만듭니다.
    ///
    /// 주소가 URL로 파싱되지 않으면 에러입니다.
    pub fn new(base_url: &str) -> Result<Self, AppError> {
        Url::parse(base_url)?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            user_agent: format!("backoffice/{}", env!("CARGO_PKG_VERSION")),
            inner: reqwest::Client::new(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let mut client = Self::new(&config.api_base_url)?;
        client.user_agent = config.user_agent.clone();
        Ok(client)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 경로와 쿼리로 전체 URL을 만듭니다.
    ///
    /// `Url::join`은 "/"로 시작하는 경로가 루트 주소의 하위 경로를 덮어쓰므로
    /// 문자열로 이어 붙입니다 (예: "https://host/backend" + "/api/admin/jobs").
    fn url(&self, path: &str, query: &[(String, String)]) -> Result<Url, AppError> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, path))?;
        // 빈 쿼리로 query_pairs_mut()을 부르면 URL 끝에 "?"가 남습니다.
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.iter());
        }
        Ok(url)
    }

    fn builder(
        &self,
        ctx: &RequestContext,
        method: Method,
        url: Url,
        request_id: Uuid,
    ) -> reqwest::RequestBuilder {
        let mut builder = self
            .inner
            .request(method.into(), url)
            .header(USER_AGENT, &self.user_agent)
            .header("X-Request-Id", request_id.to_string());
        if let Some(bearer) = ctx.bearer() {
            builder = builder.header(AUTHORIZATION, bearer);
        }
        builder
    }
}

#[async_trait]
impl ApiClient for HttpClient {
    async fn send(&self, ctx: &RequestContext, request: ApiRequest) -> Result<Envelope, AppError> {
        let url = self.url(&request.path, &request.query)?;
        let request_id = Uuid::now_v7();
        tracing::debug!(
            %request_id,
            method = %request.method,
            path = %request.path,
            authenticated = ctx.token().is_some(),
            "api request"
        );

        let mut builder = self.builder(ctx, request.method, url, request_id);
        // .json(): 본문을 직렬화하고 Content-Type: application/json을 붙입니다.
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        // .send().await: 요청을 보내고 응답 헤더까지 기다립니다.
        // 연결 실패 같은 전송 오류만 여기서 Err가 됩니다 (4xx/5xx는 Ok).
        let response = builder.send().await.map_err(|e| {
            tracing::warn!(%request_id, "transport failure: {}", e);
            AppError::from(e)
        })?;
        read_envelope(response, request_id).await
    }

    async fn upload(
        &self,
        ctx: &RequestContext,
        path: &str,
        file: UploadFile,
    ) -> Result<Envelope, AppError> {
        let url = self.url(path, &[])?;
        let request_id = Uuid::now_v7();
        tracing::debug!(%request_id, path, file = %file.file_name, size = file.bytes.len(), "api upload");

        // Part: multipart 본문의 파일 한 조각.
        // mime_str()은 Content-Type 문자열이 잘못되면 reqwest::Error를 돌려줍니다.
        let part = Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(&file.content_type)?;
        let form = Form::new().part(file.field, part);

        let response = self
            .builder(ctx, Method::Post, url, request_id)
            .multipart(form)
            .send()
            .await?;
        read_envelope(response, request_id).await
    }
}

/// 응답 본문을 읽어 봉투로 해석합니다.
///
/// 본문이 비어 있으면 null로 취급합니다 (204 No Content 등).
/// 2xx인데 JSON이 아니면 디코딩 에러, 2xx가 아닌데 JSON이 아니면 상태 코드 에러입니다.
async fn read_envelope(response: reqwest::Response, request_id: Uuid) -> Result<Envelope, AppError> {
    let status = response.status();
    let text = response.text().await?;

    let body = if text.trim().is_empty() {
        Value::Null
    } else {
        match serde_json::from_str::<Value>(&text) {
            Ok(value) => value,
            Err(e) if status.is_success() => return Err(e.into()),
            Err(_) => {
                tracing::warn!(%request_id, status = status.as_u16(), "non-JSON error body");
                Value::Null
            }
        }
    };

    let result = interpret(status.as_u16(), body);
    if let Err(err) = &result {
        tracing::warn!(%request_id, status = status.as_u16(), "api request failed: {}", err);
    }
    result
}
