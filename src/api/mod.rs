//! # API 접근 계층
//!
//! 관리자 REST API와 상호작용하는 코드를 모아둔 모듈입니다.
//! 컨트롤러(editor/, list/)는 이 모듈의 `ApiClient` 트레이트만 알고,
//! 실제 구현이 네트워크인지 메모리인지는 모릅니다.
//!
//! 각 하위 모듈:
//! - `endpoints`: 리소스별 경로
//! - `envelope`: 일관성 없는 응답 봉투를 방어적으로 해석
//! - `http`: reqwest 기반 실제 클라이언트
//! - `lookups`: 지역/학력/카테고리 같은 선택지 목록과 통계 조회
//! - `request`: 요청/업로드 파일 표현
//! - `scripted`: 네트워크 없이 응답을 재생하는 클라이언트

pub mod endpoints;
pub mod envelope;
pub mod http;
pub mod lookups;
pub mod request;
pub mod scripted;

pub use endpoints::Resource;
pub use envelope::{Envelope, Pagination};
pub use http::HttpClient;
pub use request::{ApiRequest, Method, UploadFile};
pub use scripted::{RecordedRequest, ScriptedClient};

use async_trait::async_trait; // 트레이트 안의 async fn을 dyn으로 쓸 수 있게 해주는 매크로

use crate::auth::RequestContext;
use crate::error::AppError;

/// 관리자 API 클라이언트
///
/// 모든 호출은 인증 정보를 `RequestContext`로 명시적으로 받습니다.
/// `success: false` 봉투와 2xx가 아닌 응답은 `Err`로 돌려줍니다.
///
/// # 트레이트 경계
/// - `Send + Sync`: `Arc<dyn ApiClient>`로 여러 화면과 태스크가 함께 쓸 수 있습니다.
/// - `#[async_trait]`: async fn을 `Pin<Box<dyn Future + Send>>`를 반환하는 함수로 바꿔줍니다.
///   그래서 `&dyn ApiClient`로 호출할 수 있습니다.
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// JSON 요청을 보내고 응답 봉투를 돌려줍니다.
    async fn send(&self, ctx: &RequestContext, request: ApiRequest) -> Result<Envelope, AppError>;

    /// 파일 하나를 multipart로 업로드합니다. 재시도나 이어받기는 하지 않습니다.
    async fn upload(
        &self,
        ctx: &RequestContext,
        path: &str,
        file: UploadFile,
    ) -> Result<Envelope, AppError>;
}
