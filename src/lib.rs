//! # backoffice
//!
//! 콘텐츠 관리(CMS) 관리자 화면의 상태 모델과 API 연동 코어입니다.
//! 화면을 그리지는 않고, 화면이 호출할 컨트롤러와 그 상태만 제공합니다.
//!
//! 구성:
//! 1. 목록/필터 컨트롤러 (`list`): 필터 → 쿼리 → 목록 + 페이지 정보
//! 2. 폼 편집 패턴 (`editor`): 불러오기 → 필드 수정 → 검증 → 저장, 삭제 확인
//! 3. 비주얼 컴포저 (`composer`): 뉴스레터 캔버스 요소와 본문 HTML
//! 4. API 클라이언트 (`api`): 일관성 없는 응답 봉투를 방어적으로 해석
//!
//! 데이터 흐름:
//! 목록 컨트롤러 → API(읽기) → 행 표시 → 편집 초안 → 검증 → API(쓰기) → 목록 새로고침

// ── 모듈 선언 ──
pub mod api;
pub mod app;
pub mod auth;
pub mod composer;
pub mod config;
pub mod editor;
pub mod error;
pub mod list;
pub mod models;
pub mod services;
pub mod telemetry;

// ── 자주 쓰는 항목 재공개 ──
pub use api::{ApiClient, ApiRequest, Envelope, HttpClient, Method, Resource, ScriptedClient, UploadFile};
pub use app::AppState;
pub use auth::{AuthSession, RequestContext};
pub use composer::{ComposerError, Scene};
pub use config::Config;
pub use editor::{CrudScreen, DeleteGate, Editor, Entity, Phase};
pub use error::AppError;
pub use list::{FilterValue, ListController, SortDirection, SortSpec};
pub use services::{Notifier, ToastLog};
