//! # 애플리케이션 공유 상태
//!
//! 관리자 UI가 시작할 때 한 번 만들어서 모든 화면이 함께 쓰는 묶음입니다.
//!
//! 시작 순서:
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. API 클라이언트 생성
//! 4. 저장된 토큰으로 세션 복원

use std::sync::Arc;

use crate::api::{ApiClient, HttpClient};
use crate::auth::{AuthSession, RequestContext};
use crate::composer::Scene;
use crate::config::Config;
use crate::editor::{CrudScreen, Entity};
use crate::error::AppError;
use crate::services::{Notifier, ToastLog};
use crate::telemetry;

/// 화면들이 공유하는 상태
///
/// `api`와 `notifier`는 Arc라서 clone해도 같은 클라이언트/알림 목록을 가리킵니다.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub api: Arc<dyn ApiClient>,
    pub notifier: Arc<dyn Notifier>,
    pub session: AuthSession,
}

impl AppState {
    /// 환경변수로 실제 HTTP 클라이언트를 가진 상태를 만듭니다.
    ///
    /// 알림은 `ToastLog`에 쌓입니다. UI는 `toasts`를 읽어 표시합니다.
    pub fn from_env() -> Result<(Self, Arc<ToastLog>), AppError> {
        let config = Config::from_env()?;
        telemetry::init_tracing();
        tracing::info!(api = %config.api_base_url, "starting admin core");

        let api: Arc<dyn ApiClient> = Arc::new(HttpClient::from_config(&config)?);
        let toasts = Arc::new(ToastLog::new());
        Ok((Self::new(config, api, toasts.clone()), toasts))
    }

    /// 주어진 클라이언트와 알림 창구로 상태를 만듭니다.
    /// 설정에 토큰이 있으면 로그인 상태로 시작합니다.
    pub fn new(config: Config, api: Arc<dyn ApiClient>, notifier: Arc<dyn Notifier>) -> Self {
        let mut session = AuthSession::new();
        if let Some(token) = &config.admin_token {
            session.login(token.clone());
        }
        Self {
            config,
            api,
            notifier,
            session,
        }
    }

    /// 지금 보낼 요청의 인증 정보. 만료된 토큰은 싣지 않습니다.
    pub fn context(&self) -> RequestContext {
        self.session.context()
    }

    /// 엔티티 관리 화면 하나를 만듭니다.
    pub fn screen<E: Entity>(&self) -> CrudScreen<E> {
        CrudScreen::new(self.api.clone(), self.notifier.clone(), self.config.page_size)
    }

    /// 빈 뉴스레터 작성기를 만듭니다.
    pub fn composer(&self) -> Scene {
        Scene::new(self.notifier.clone())
    }
}
