//! # 공통 서비스
//!
//! 여러 화면에서 함께 쓰는 보조 기능입니다:
//! - `notify`: 사용자 알림(토스트)
//! - `text`: slug 생성, 필드 파생, 간단한 형식 검사

pub mod notify;
pub mod text;

pub use notify::{Level, Notification, Notifier, ToastLog, TracingNotifier};
