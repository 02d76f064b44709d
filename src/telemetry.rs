//! # 로깅(tracing) 초기화
//!
//! tracing은 Rust 생태계의 표준 로깅 프레임워크입니다.
//! 관리자 코어의 모든 컴포넌트는 `tracing::debug!` 등의 매크로로 로그를 남기고,
//! 이 모듈이 그 로그를 터미널로 출력하는 구독자(subscriber)를 설치합니다.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// 전역 tracing 구독자를 설치합니다.
///
/// `RUST_LOG` 환경변수가 없으면 `backoffice=debug`를 기본 필터로 사용합니다.
/// 이미 구독자가 설치되어 있으면(테스트에서 여러 번 호출 등) 조용히 무시합니다.
pub fn init_tracing() {
    let result = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "backoffice=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        // try_init(): init()과 달리 두 번째 호출에서 패닉하지 않고 Err를 반환합니다.
        .try_init();

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
