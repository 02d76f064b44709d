//! # 애플리케이션 설정(Configuration) 모듈
//!
//! 환경변수에서 관리자 코어의 설정값을 읽어오는 모듈입니다.
//! `.env` 파일이나 시스템 환경변수에서 값을 가져옵니다.
//!
//! 설정 항목:
//! - `API_BASE_URL`: 관리자 REST API의 루트 주소 (필수)
//! - `ADMIN_TOKEN`: 세션을 미리 채울 Bearer 토큰 (선택)
//! - `PAGE_SIZE`: 목록 화면의 기본 페이지 크기 (기본값: 10)
//! - `USER_AGENT`: HTTP 요청의 User-Agent (기본값: backoffice/<버전>)

use std::env;

/// 목록 화면의 기본 페이지 크기
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// 관리자 코어 전체 설정을 담는 구조체
///
/// 시작 시 환경변수에서 한 번 읽어온 후 HTTP 클라이언트와
/// 목록 컨트롤러 생성에 사용됩니다.
#[derive(Debug, Clone)]
pub struct Config {
    /// API 루트 주소 (예: "https://cms.example.com")
    pub api_base_url: String,
    /// 시작 시 로그인 상태로 만들 토큰
    pub admin_token: Option<String>,
    /// 목록 화면 기본 페이지 크기
    pub page_size: u32,
    /// HTTP User-Agent 헤더 값
    pub user_agent: String,
}

impl Config {
    /// 환경변수에서 설정값을 읽어 Config 인스턴스를 생성합니다.
    ///
    /// `.env` 파일이 있으면 먼저 로딩합니다. 파일이 없어도 에러가 아닙니다.
    ///
    /// # 에러
    /// `API_BASE_URL`은 필수이며, 없으면 `VarError`를 반환합니다.
    /// 나머지 설정은 기본값이 있어 환경변수가 없어도 동작합니다.
    pub fn from_env() -> Result<Self, env::VarError> {
        // .ok(): .env 파일이 없어도 에러 없이 넘어갑니다.
        dotenvy::dotenv().ok();

        Ok(Self {
            api_base_url: env::var("API_BASE_URL")?,
            // 빈 문자열 토큰은 "토큰 없음"과 같습니다.
            admin_token: env::var("ADMIN_TOKEN").ok().filter(|t| !t.trim().is_empty()),
            page_size: parse_page_size(env::var("PAGE_SIZE").ok().as_deref()),
            user_agent: env::var("USER_AGENT")
                .unwrap_or_else(|_| format!("backoffice/{}", env!("CARGO_PKG_VERSION"))),
        })
    }
}

/// 페이지 크기 문자열을 파싱합니다. 0이나 숫자가 아닌 값은 기본값으로 대체합니다.
fn parse_page_size(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse::<u32>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_PAGE_SIZE)
}
