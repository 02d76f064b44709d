//! # 메모리 안의 스크립트 클라이언트
//!
//! 네트워크 없이 `ApiClient`를 흉내냅니다. `(메서드, 경로)`마다 응답을 큐에 넣어두면
//! 순서대로 돌려주고, 받은 요청은 전부 기록합니다.
//! 오프라인 미리보기와 테스트에서 사용합니다.
//!
//! 큐에 마지막으로 남은 응답은 소비되지 않고 계속 재사용됩니다.
//! 그래서 "저장 후 목록 새로고침"처럼 같은 GET이 여러 번 나가도 한 번만 등록하면 됩니다.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use super::envelope::{interpret, Envelope};
use super::request::{ApiRequest, Method, UploadFile};
use super::ApiClient;
use crate::auth::RequestContext;
use crate::error::AppError;

/// 기록된 요청 하나
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    /// 요청에 실린 토큰
    pub token: Option<String>,
    /// 업로드 요청이면 파일 이름
    pub upload: Option<String>,
}

impl RecordedRequest {
    pub fn query_string(&self) -> String {
        ApiRequest::new(self.method, self.path.clone())
            .with_query(self.query.clone())
            .query_string()
    }
}

#[derive(Debug, Clone)]
struct Reply {
    status: u16,
    body: Value,
}

/// 스크립트된 응답을 돌려주는 `ApiClient`
#[derive(Debug, Default)]
pub struct ScriptedClient {
    replies: Mutex<HashMap<(Method, String), VecDeque<Reply>>>,
    log: Mutex<Vec<RecordedRequest>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// 200 응답을 등록합니다.
    pub fn respond(&self, method: Method, path: &str, body: Value) -> &Self {
        self.respond_with_status(method, path, 200, body)
    }

    /// 임의의 상태 코드 응답을 등록합니다.
    pub fn respond_with_status(&self, method: Method, path: &str, status: u16, body: Value) -> &Self {
        let mut replies = self.replies.lock().unwrap_or_else(|e| e.into_inner());
        replies
            .entry((method, path.to_string()))
            .or_default()
            .push_back(Reply { status, body });
        self
    }

    /// 지금까지 받은 모든 요청
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.log.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// 특정 메서드/경로로 받은 요청 수
    pub fn count(&self, method: Method, path: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }

    pub fn last(&self) -> Option<RecordedRequest> {
        self.requests().pop()
    }

    fn record(&self, entry: RecordedRequest) {
        self.log.lock().unwrap_or_else(|e| e.into_inner()).push(entry);
    }

    fn next_reply(&self, method: Method, path: &str) -> Option<Reply> {
        let mut replies = self.replies.lock().unwrap_or_else(|e| e.into_inner());
        let queue = replies.get_mut(&(method, path.to_string()))?;
        if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        }
    }

    fn answer(&self, method: Method, path: &str) -> Result<Envelope, AppError> {
        match self.next_reply(method, path) {
            Some(reply) => interpret(reply.status, reply.body),
            None => {
                tracing::warn!(%method, path, "no scripted response");
                Err(AppError::NotFound)
            }
        }
    }
}

#[async_trait]
impl ApiClient for ScriptedClient {
    async fn send(&self, ctx: &RequestContext, request: ApiRequest) -> Result<Envelope, AppError> {
        tracing::debug!(method = %request.method, path = %request.path, "scripted request");
        let (method, path) = (request.method, request.path.clone());
        self.record(RecordedRequest {
            method: request.method,
            path: request.path,
            query: request.query,
            body: request.body,
            token: ctx.token().map(str::to_string),
            upload: None,
        });
        self.answer(method, &path)
    }

    async fn upload(
        &self,
        ctx: &RequestContext,
        path: &str,
        file: UploadFile,
    ) -> Result<Envelope, AppError> {
        self.record(RecordedRequest {
            method: Method::Post,
            path: path.to_string(),
            query: Vec::new(),
            body: None,
            token: ctx.token().map(str::to_string),
            upload: Some(file.file_name),
        });
        self.answer(Method::Post, path)
    }
}
