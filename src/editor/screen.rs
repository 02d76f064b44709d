//! # 관리 화면 오케스트레이터
//!
//! 목록 + 편집 패널 + 삭제 확인 창을 하나로 묶은 화면 단위입니다.
//! 화면의 버튼 하나가 메서드 하나에 대응합니다.
//!
//! 컨트롤러들은 `Result`를 돌려주지만, 이 계층은 에러를 잡아서 알림(토스트)으로 바꾸고
//! 성공 여부만 `bool`/`Option`으로 돌려줍니다. 화면은 에러 타입을 몰라도 됩니다.

use std::sync::Arc;

use serde_json::Value;

use super::confirm::DeleteGate;
use super::draft::Editor;
use super::entity::Entity;
use crate::api::{ApiClient, ApiRequest, UploadFile};
use crate::auth::RequestContext;
use crate::error::AppError;
use crate::list::{FilterValue, ListController};
use crate::models::EntityId;
use crate::services::Notifier;

/// 엔티티 하나를 관리하는 화면
///
/// 제네릭 `E: Entity`: 채용공고, 장학금 같은 레코드 타입마다 같은 화면 코드를 씁니다.
/// 경로와 검증 규칙은 `E`의 연관 상수/메서드에서 가져옵니다.
pub struct CrudScreen<E: Entity> {
    /// 공유 API 클라이언트 (Arc라서 여러 화면이 같은 연결 풀을 씁니다)
    api: Arc<dyn ApiClient>,
    /// 성공/실패 토스트를 받는 곳
    notifier: Arc<dyn Notifier>,
    list: ListController<E>,
    /// 열린 편집 패널. None이면 패널이 닫혀 있습니다.
    editor: Option<Editor<E>>,
    gate: DeleteGate,
}

impl<E: Entity> CrudScreen<E> {
    pub fn new(api: Arc<dyn ApiClient>, notifier: Arc<dyn Notifier>, page_size: u32) -> Self {
        Self {
            api,
            notifier,
            list: ListController::new(page_size),
            editor: None,
            gate: DeleteGate::new(),
        }
    }

    pub fn list(&self) -> &ListController<E> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ListController<E> {
        &mut self.list
    }

    /// 열려 있는 편집 패널
    pub fn editor(&self) -> Option<&Editor<E>> {
        self.editor.as_ref()
    }

    pub fn editor_mut(&mut self) -> Option<&mut Editor<E>> {
        self.editor.as_mut()
    }

    /// 확인 창에 띄울 삭제 대기 ID들
    pub fn pending_delete(&self) -> Option<&[EntityId]> {
        self.gate.pending()
    }

    fn report(&self, err: &AppError) {
        self.notifier.error(&err.user_message());
    }

    // ── 목록 ──

    pub async fn refresh(&mut self, ctx: &RequestContext) -> bool {
        match self.list.reload(self.api.as_ref(), ctx).await {
            Ok(()) => true,
            Err(err) => {
                self.report(&err);
                false
            }
        }
    }

    /// 필터를 바꾸고 1페이지부터 다시 불러옵니다.
    pub async fn apply_filter(
        &mut self,
        ctx: &RequestContext,
        key: &str,
        value: impl Into<FilterValue>,
    ) -> bool {
        self.list.set_filter(key, value);
        self.refresh(ctx).await
    }

    pub async fn clear_filters(&mut self, ctx: &RequestContext) -> bool {
        self.list.reset_filters();
        self.refresh(ctx).await
    }

    pub async fn go_to_page(&mut self, ctx: &RequestContext, page: u32) -> bool {
        self.list.set_page(page);
        self.refresh(ctx).await
    }

    // ── 편집 패널 ──

    /// "새로 만들기" 버튼
    pub fn open_new(&mut self) {
        self.editor = Some(Editor::from_record(E::default()));
    }

    /// 행의 "수정" 버튼. 실패하면 패널은 LoadFailed 상태로 남습니다.
    pub async fn open_existing(&mut self, ctx: &RequestContext, id: &EntityId) -> bool {
        let mut editor = Editor::new();
        let result = editor.load(self.api.as_ref(), ctx, Some(id)).await;
        self.editor = Some(editor);
        match result {
            Ok(()) => true,
            Err(err) => {
                self.report(&err);
                false
            }
        }
    }

    pub fn close_editor(&mut self) {
        self.editor = None;
    }

    /// "저장"/"게시" 버튼
    ///
    /// 성공하면 알림을 띄우고, 목록에 반영하고, 패널을 닫고, 목록을 다시 불러옵니다.
    /// 검증 에러를 포함한 모든 실패는 에러 알림이 되고 패널은 열린 채로 남습니다.
    pub async fn submit(&mut self, ctx: &RequestContext, publish: Option<bool>) -> Option<E> {
        let editor = self.editor.as_mut()?;
        match editor.save(self.api.as_ref(), ctx, publish).await {
            Ok(saved) => {
                self.notifier
                    .success(&format!("{} saved successfully", E::LABEL));
                self.list.upsert_local(saved.clone());
                self.editor = None;
                self.refresh(ctx).await;
                Some(saved)
            }
            Err(err) => {
                self.report(&err);
                None
            }
        }
    }

    // ── 삭제 ──

    /// 행의 "삭제" 버튼. 확인 창만 엽니다 (아직 호출 없음).
    pub fn request_delete(&mut self, id: EntityId) {
        self.gate.request(id);
    }

    /// 선택한 행들을 한 번에 삭제하도록 확인 창을 엽니다.
    /// 선택한 행이 없으면 false이고, 열려 있던 확인 창은 그대로입니다.
    pub fn request_bulk_delete(&mut self) -> bool {
        self.gate.request_many(self.list.selected_ids())
    }

    pub fn cancel_delete(&mut self) {
        self.gate.cancel();
    }

    /// 확인 창의 "삭제" 버튼. 삭제에 성공한 개수를 돌려줍니다.
    pub async fn confirm_delete(&mut self, ctx: &RequestContext) -> usize {
        let Some(ids) = self.gate.take_confirmed() else {
            return 0;
        };

        // 한 건씩 보냅니다. 실패한 건은 알림만 띄우고 다음 건으로 넘어갑니다.
        let mut deleted = 0;
        for id in ids {
            let request = ApiRequest::delete(E::RESOURCE.item_path(&id));
            match self.api.send(ctx, request).await {
                Ok(_) => {
                    self.list.remove_local(&id);
                    deleted += 1;
                }
                Err(err) => {
                    tracing::warn!(resource = E::RESOURCE.path(), %id, error = %err, "delete failed");
                    self.report(&err);
                }
            }
        }

        if deleted > 0 {
            self.notifier
                .success(&format!("{} deleted successfully", E::LABEL));
            self.refresh(ctx).await;
        }
        deleted
    }

    // ── 업로드 ──

    /// 파일 하나를 올리고 응답의 URL을 돌려줍니다.
    ///
    /// URL은 `url`, `path`, `file_url` 순서로 찾습니다.
    pub async fn upload(&self, ctx: &RequestContext, path: &str, file: UploadFile) -> Option<String> {
        match self.api.upload(ctx, path, file).await {
            Ok(envelope) => {
                let url = [envelope.body(), &envelope.raw]
                    .into_iter()
                    .find_map(uploaded_url);
                if url.is_none() {
                    self.notifier.error("Upload finished but no file URL was returned");
                }
                url
            }
            Err(err) => {
                self.report(&err);
                None
            }
        }
    }
}

fn uploaded_url(body: &Value) -> Option<String> {
    ["url", "path", "file_url"]
        .iter()
        .filter_map(|key| body.get(*key).and_then(Value::as_str))
        .find(|url| !url.trim().is_empty())
        .map(str::to_string)
}
