//! # API 요청 표현
//!
//! 컨트롤러는 HTTP 라이브러리를 직접 다루지 않고 `ApiRequest` 값을 만들어
//! `ApiClient`에 넘깁니다. 덕분에 같은 요청을 실제 HTTP 클라이언트로도,
//! 메모리 안의 스크립트 클라이언트로도 보낼 수 있습니다.

use std::fmt;
use std::path::Path;

use serde_json::Value;

use crate::error::AppError;

/// HTTP 메서드
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// API에 보낼 요청 하나
///
/// `path`는 API 루트 기준 경로입니다 (예: "/api/admin/jobs/12").
/// `query`는 순서가 유지되는 (키, 값) 목록입니다.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self::new(Method::Post, path).with_body(body)
    }

    pub fn put(path: impl Into<String>, body: Value) -> Self {
        Self::new(Method::Put, path).with_body(body)
    }

    pub fn patch(path: impl Into<String>, body: Value) -> Self {
        Self::new(Method::Patch, path).with_body(body)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// 쿼리를 `a=1&b=2` 형태의 문자열로 인코딩합니다 (form-urlencoded).
    pub fn query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query.iter())
            .finish()
    }
}

/// multipart 업로드할 파일 하나
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    /// multipart 필드 이름 (예: "photo")
    pub field: String,
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    /// 메모리의 바이트로 업로드 파일을 만듭니다. Content-Type은 확장자로 추측합니다.
    pub fn from_bytes(field: impl Into<String>, file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        // mime_guess: "avatar.png" → "image/png", 모르는 확장자는 application/octet-stream
        let content_type = mime_guess::from_path(&file_name)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        Self {
            field: field.into(),
            file_name,
            content_type,
            bytes,
        }
    }

    /// 디스크의 파일을 읽어 업로드 파일을 만듭니다.
    pub async fn from_path(field: impl Into<String>, path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        Ok(Self::from_bytes(field, file_name, bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_string_keeps_order_and_encodes() {
        let req = ApiRequest::get("/api/admin/jobs").with_query(vec![
            ("search".to_string(), "senior engineer".to_string()),
            ("page".to_string(), "1".to_string()),
        ]);
        assert_eq!(req.query_string(), "search=senior+engineer&page=1");
    }

    #[test]
    fn upload_guesses_content_type() {
        let file = UploadFile::from_bytes("photo", "avatar.png", vec![0x89, 0x50]);
        assert_eq!(file.content_type, "image/png");

        let file = UploadFile::from_bytes("file", "blob.unknownext", vec![]);
        assert_eq!(file.content_type, "application/octet-stream");
    }
}
