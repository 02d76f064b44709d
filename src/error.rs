//! # 에러 처리 모듈
//!
//! 관리자 화면 코어에서 발생할 수 있는 모든 에러 타입을 정의합니다.
//! Rust에서는 예외(exception) 대신 `Result<T, E>` 타입으로 에러를 처리합니다.
//!
//! 이 모듈의 핵심:
//! - `AppError` 열거형(enum): 검증/네트워크/API/디코딩 에러를 하나의 타입으로 통합
//! - `user_message()`: 에러를 토스트나 배너에 표시할 문자열로 변환
//!
//! 에러 분류:
//! - (a) 검증 에러: 네트워크 호출 전에 필수 필드를 확인하여 발생
//! - (b) 전송 에러: 연결 실패, 2xx가 아닌 응답
//! - (c) 애플리케이션 에러: `success: false` 봉투와 서버 메시지
//! - (d) 응답 형태 에러: 배열이 와야 할 곳에 다른 값이 온 경우 (에러 대신 빈 목록으로 처리)

use thiserror::Error;

/// 사용자에게 보여줄 기본 에러 메시지
///
/// 서버가 메시지를 주지 않았거나, 내부 구현을 노출하면 안 되는 에러에 사용합니다.
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// 관리자 코어에서 발생할 수 있는 모든 에러 종류
///
/// 각 variant는 `user_message()`로 화면 표시용 문자열이 됩니다.
/// 컨트롤러는 `Result<T, AppError>`를 반환하고,
/// 화면 오케스트레이터(`CrudScreen`)가 이를 잡아 알림으로 바꿉니다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 필수 필드 검증 실패. 저장 전에 발생하며 네트워크 호출을 막습니다.
    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    /// 엔티티에 존재하지 않는 필드 이름
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// 필드에 맞지 않는 타입의 값
    #[error("Invalid value for {field}: {reason}")]
    InvalidField { field: String, reason: String },

    /// `success: false` 봉투. 서버가 보낸 메시지를 그대로 담습니다.
    #[error("{0}")]
    Api(String),

    /// 2xx가 아닌 HTTP 상태 코드
    /// message는 응답 본문에서 찾은 서버 메시지입니다 (없으면 None).
    #[error("HTTP {status}")]
    Status { status: u16, message: Option<String> },

    /// HTTP 전송 오류 (연결 실패, DNS 실패 등)
    /// #[from]: reqwest::Error → AppError::Http 자동 변환
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON 파싱/생성 오류
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// 파일 입출력 오류 (업로드 파일 읽기)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// 잘못된 URL (API_BASE_URL 또는 경로 결합 실패)
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// 필수 환경변수 누락 (API_BASE_URL)
    #[error("Missing configuration: {0}")]
    Config(#[from] std::env::VarError),

    /// 인증 실패 (토큰 없음/만료)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// 요청한 리소스를 찾을 수 없음
    #[error("Resource not found")]
    NotFound,
}

impl AppError {
    /// 에러를 사용자에게 보여줄 문자열로 변환합니다.
    ///
    /// 서버 메시지가 있으면 그대로 보여주고, 없으면 일반 메시지로 대체합니다.
    /// 전송/디코딩 같은 내부 에러는 로그에만 자세히 남기고,
    /// 화면에는 일반 메시지만 표시합니다.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(errors) => errors.join("\n"),
            AppError::UnknownField(_) => self.to_string(),
            AppError::InvalidField { .. } => self.to_string(),
            AppError::Api(msg) if !msg.trim().is_empty() => msg.clone(),
            AppError::Api(_) => GENERIC_FAILURE.to_string(),
            AppError::Status {
                message: Some(msg), ..
            } if !msg.trim().is_empty() => msg.clone(),
            AppError::Status { status, .. } => {
                tracing::warn!(status, "request failed without a server message");
                GENERIC_FAILURE.to_string()
            }
            AppError::Http(e) => {
                tracing::error!("HTTP error: {}", e);
                GENERIC_FAILURE.to_string()
            }
            AppError::Json(e) => {
                tracing::error!("JSON error: {}", e);
                GENERIC_FAILURE.to_string()
            }
            AppError::Io(e) => {
                tracing::error!("IO error: {}", e);
                GENERIC_FAILURE.to_string()
            }
            AppError::Url(e) => {
                tracing::error!("URL error: {}", e);
                GENERIC_FAILURE.to_string()
            }
            AppError::Config(e) => {
                tracing::error!("configuration error: {}", e);
                GENERIC_FAILURE.to_string()
            }
            AppError::Unauthorized(msg) => msg.clone(),
            AppError::NotFound => self.to_string(),
        }
    }

    /// 서버에 도달하기 전에 실패했는지 (검증/필드 에러) 여부
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            AppError::Validation(_)
                | AppError::UnknownField(_)
                | AppError::InvalidField { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_message_is_shown_verbatim() {
        let err = AppError::Api("Slug already exists".to_string());
        assert_eq!(err.user_message(), "Slug already exists");
    }

    #[test]
    fn blank_api_message_falls_back() {
        let err = AppError::Api("  ".to_string());
        assert_eq!(err.user_message(), GENERIC_FAILURE);

        let err = AppError::Status {
            status: 502,
            message: None,
        };
        assert_eq!(err.user_message(), GENERIC_FAILURE);
    }

    #[test]
    fn validation_errors_are_joined_per_line() {
        let err = AppError::Validation(vec![
            "Title is required".to_string(),
            "Provider is required".to_string(),
        ]);
        assert_eq!(err.user_message(), "Title is required\nProvider is required");
        assert!(err.is_local());
    }
}
