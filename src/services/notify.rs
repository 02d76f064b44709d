//! # 사용자 알림(토스트)
//!
//! 저장 성공, 삭제 실패 같은 결과를 사용자에게 알리는 창구입니다.
//! 컨트롤러는 `Notifier` 트레이트에만 의존하고, 실제 표시 방법(토스트, 배너, 로그)은
//! 구현체가 정합니다.
//!
//! - `ToastLog`: 알림을 메모리에 쌓아두는 구현 (UI가 읽어가서 표시)
//! - `TracingNotifier`: 로그로만 남기는 구현

use std::sync::Mutex;

/// 알림 수준
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
    Info,
}

/// 사용자에게 보여줄 알림 하나
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: Level,
    pub message: String,
}

/// 알림을 받는 쪽
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);

    fn success(&self, message: &str) {
        self.notify(Notification {
            level: Level::Success,
            message: message.to_string(),
        });
    }

    fn error(&self, message: &str) {
        self.notify(Notification {
            level: Level::Error,
            message: message.to_string(),
        });
    }

    fn info(&self, message: &str) {
        self.notify(Notification {
            level: Level::Info,
            message: message.to_string(),
        });
    }
}

fn log(notification: &Notification) {
    match notification.level {
        Level::Success | Level::Info => tracing::info!(message = %notification.message, "notify"),
        Level::Error => tracing::warn!(message = %notification.message, "notify error"),
    }
}

/// 알림을 쌓아두는 토스트 목록
#[derive(Debug, Default)]
pub struct ToastLog {
    entries: Mutex<Vec<Notification>>,
}

impl ToastLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<Notification> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn last(&self) -> Option<Notification> {
        self.entries().pop()
    }

    /// 쌓인 알림을 모두 꺼냅니다 (UI가 표시한 뒤 비움).
    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.entries.lock().unwrap_or_else(|e| e.into_inner()))
    }
}

impl Notifier for ToastLog {
    fn notify(&self, notification: Notification) {
        log(&notification);
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(notification);
    }
}

/// 로그로만 남기는 알림
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        log(&notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_log_keeps_order_and_drains() {
        let toasts = ToastLog::new();
        toasts.success("Saved");
        toasts.error("Failed");

        assert_eq!(toasts.last().map(|n| n.level), Some(Level::Error));
        let drained = toasts.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].message, "Saved");
        assert!(toasts.entries().is_empty());
    }
}
