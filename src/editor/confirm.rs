//! # 삭제 확인 게이트
//!
//! 삭제는 항상 두 단계입니다: 요청(확인 창 표시) → 확인.
//! 확인되지 않은 ID는 DELETE 호출까지 가지 못합니다.
//! 대기 중인 요청은 하나뿐이고, 새 요청은 이전 요청을 대체합니다.

use crate::models::EntityId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteGate {
    pending: Option<Vec<EntityId>>,
}

impl DeleteGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// 레코드 하나의 삭제 확인을 요청합니다.
    pub fn request(&mut self, id: EntityId) {
        self.pending = Some(vec![id]);
    }

    /// 선택한 여러 레코드를 한 번의 확인으로 삭제하도록 요청합니다.
    ///
    /// 빈 목록이면 아무것도 하지 않고 false. 이미 열린 확인 창도 그대로 둡니다.
    pub fn request_many(&mut self, ids: Vec<EntityId>) -> bool {
        if ids.is_empty() {
            return false;
        }
        self.pending = Some(ids);
        true
    }

    /// 확인 창에서 "취소"
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// 확인 창에서 "삭제". 대기 중이던 ID들을 꺼냅니다.
    pub fn take_confirmed(&mut self) -> Option<Vec<EntityId>> {
        self.pending.take()
    }

    /// 확인 창에 표시할 대기 중인 ID들
    pub fn pending(&self) -> Option<&[EntityId]> {
        self.pending.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }
}
