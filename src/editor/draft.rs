//! # 편집 초안 컨트롤러
//!
//! 모든 관리 화면이 같은 흐름을 따릅니다:
//! 불러오기 → 필드 수정 → 검증 → 저장.
//!
//! ## 상태 전이
//! ```text
//! Idle ──load(None)──────────────→ Editing
//! Idle ──load(Some)─→ Loading ─┬→ Editing
//!                              └→ LoadFailed(msg)
//! Editing ──save──→ Saving ─┬→ Saved
//!                           └→ Editing (last_error 설정)
//! ```
//! 검증 에러가 있으면 Saving으로 넘어가지 않고, API도 호출하지 않습니다.

use serde_json::Value;

use super::entity::{normalize_remote, Entity};
use crate::api::{ApiClient, ApiRequest, Envelope};
use crate::auth::RequestContext;
use crate::error::AppError;
use crate::models::{EntityId, StringList};

/// 편집 화면의 상태
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Editing,
    /// 불러오기 실패. 화면에 보여줄 메시지를 담습니다.
    LoadFailed(String),
    Saving,
    Saved,
}

/// 엔티티 하나의 편집 초안
#[derive(Debug, Clone)]
pub struct Editor<E: Entity> {
    draft: E,
    /// 불러온 시점(또는 마지막 저장 시점)의 스냅샷. `is_dirty()` 비교용.
    original: E,
    phase: Phase,
    last_error: Option<String>,
}

impl<E: Entity> Default for Editor<E> {
    fn default() -> Self {
        Self {
            draft: E::default(),
            original: E::default(),
            phase: Phase::Idle,
            last_error: None,
        }
    }
}

impl<E: Entity> Editor<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 이미 가진 레코드로 바로 편집을 시작합니다 (목록에서 행을 눌렀을 때).
    pub fn from_record(record: E) -> Self {
        Self {
            original: record.clone(),
            draft: record,
            phase: Phase::Editing,
            last_error: None,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn draft(&self) -> &E {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut E {
        &mut self.draft
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// 아직 서버에 없는 레코드인지 (저장하면 POST)
    pub fn is_new(&self) -> bool {
        self.draft.id().is_none()
    }

    pub fn is_dirty(&self) -> bool {
        self.draft != self.original
    }

    // ── 불러오기 ──

    /// 편집할 레코드를 준비합니다.
    ///
    /// - `None`: 기본값으로 새 초안을 만듭니다 (네트워크 호출 없음).
    /// - `Some(id)`: `GET {path}/{id}`로 레코드를 받아옵니다.
    pub async fn load(
        &mut self,
        api: &dyn ApiClient,
        ctx: &RequestContext,
        id: Option<&EntityId>,
    ) -> Result<(), AppError> {
        self.last_error = None;

        let Some(id) = id else {
            self.draft = E::default();
            self.original = E::default();
            self.phase = Phase::Editing;
            return Ok(());
        };

        self.phase = Phase::Loading;
        match fetch_record::<E>(api, ctx, id).await {
            Ok(record) => {
                self.original = record.clone();
                self.draft = record;
                self.phase = Phase::Editing;
                Ok(())
            }
            Err(err) => {
                let message = err.user_message();
                tracing::warn!(resource = E::RESOURCE.path(), %id, error = %err, "failed to load record");
                self.phase = Phase::LoadFailed(message.clone());
                self.last_error = Some(message);
                Err(err)
            }
        }
    }

    // ── 필드 수정 ──

    /// 필드 하나를 바꿉니다.
    ///
    /// 초안을 JSON 객체로 바꿔 값을 덮어쓴 뒤 다시 구조체로 되돌립니다.
    /// 없는 필드면 `UnknownField`, 타입이 맞지 않으면 `InvalidField`이고 초안은 그대로입니다.
    /// 성공하면 `derive_fields()`로 slug 같은 파생 필드를 갱신합니다.
    pub fn set_field(&mut self, name: &str, value: impl Into<Value>) -> Result<(), AppError> {
        let mut map = match serde_json::to_value(&self.draft)? {
            Value::Object(map) => map,
            _ => return Err(AppError::UnknownField(name.to_string())),
        };
        if !map.contains_key(name) {
            return Err(AppError::UnknownField(name.to_string()));
        }
        map.insert(name.to_string(), value.into());

        let updated: E =
            serde_json::from_value(Value::Object(map)).map_err(|e| AppError::InvalidField {
                field: name.to_string(),
                reason: e.to_string(),
            })?;

        let before = std::mem::replace(&mut self.draft, updated);
        self.draft.derive_fields(name, &before);
        Ok(())
    }

    fn array_mut(&mut self, field: &str) -> Result<&mut StringList, AppError> {
        self.draft
            .array_field_mut(field)
            .ok_or_else(|| AppError::UnknownField(field.to_string()))
    }

    /// 목록 필드 끝에 빈 행을 추가합니다.
    pub fn add_array_item(&mut self, field: &str) -> Result<(), AppError> {
        self.array_mut(field)?.push("");
        Ok(())
    }

    /// 목록 필드에 값을 추가합니다 (태그 입력창에서 Enter).
    ///
    /// 공백 값은 무시합니다. 중복 금지 필드(skills 등)는 같은 값이 있으면 추가하지 않습니다.
    /// 추가했으면 true.
    pub fn add_array_value(&mut self, field: &str, value: &str) -> Result<bool, AppError> {
        let unique = E::UNIQUE_ARRAY_FIELDS.contains(&field);
        let list = self.array_mut(field)?;
        if unique {
            return Ok(list.push_unique(value));
        }
        let value = value.trim();
        if value.is_empty() {
            return Ok(false);
        }
        list.push(value);
        Ok(true)
    }

    /// 위치로 값을 바꿉니다. 범위 밖이면 아무것도 하지 않고 false.
    pub fn update_array_item(
        &mut self,
        field: &str,
        index: usize,
        value: impl Into<String>,
    ) -> Result<bool, AppError> {
        Ok(self.array_mut(field)?.set(index, value))
    }

    /// 위치로 행을 지웁니다. 범위 밖이면 아무것도 하지 않고 false.
    pub fn remove_array_item(&mut self, field: &str, index: usize) -> Result<bool, AppError> {
        Ok(self.array_mut(field)?.remove(index).is_some())
    }

    /// 화면에 그릴 입력 행들. 비어 있어도 빈 행 하나를 돌려줍니다.
    pub fn array_rows(&self, field: &str) -> Result<Vec<String>, AppError> {
        let mut draft = self.draft.clone();
        draft
            .array_field_mut(field)
            .map(|list| list.rows())
            .ok_or_else(|| AppError::UnknownField(field.to_string()))
    }

    // ── 검증과 저장 ──

    pub fn validate(&self) -> Vec<String> {
        self.draft.validate()
    }

    /// 초안을 저장합니다.
    ///
    /// `publish`가 있으면 보낼 사본에만 게시 상태를 반영합니다.
    /// 새 레코드는 `POST {path}`, 기존 레코드는 `update_method()`로 `{path}/{id}`에 보냅니다.
    /// 응답에 레코드가 있으면 그 값으로 초안을 갱신합니다 (서버가 만든 id, slug 등).
    pub async fn save(
        &mut self,
        api: &dyn ApiClient,
        ctx: &RequestContext,
        publish: Option<bool>,
    ) -> Result<E, AppError> {
        let errors = self.draft.validate();
        if !errors.is_empty() {
            self.last_error = Some(errors.join(", "));
            return Err(AppError::Validation(errors));
        }
        // 게시 상태는 보낼 사본에만 반영합니다. 실패하면 초안은 그대로입니다.
        let mut outgoing = self.draft.clone();
        if let Some(publish) = publish {
            outgoing.apply_publish(publish);
        }

        self.phase = Phase::Saving;
        match Self::submit(api, ctx, &outgoing).await {
            Ok(saved) => {
                self.draft = saved.clone();
                self.original = saved.clone();
                self.phase = Phase::Saved;
                self.last_error = None;
                Ok(saved)
            }
            Err(err) => {
                tracing::warn!(resource = E::RESOURCE.path(), error = %err, "failed to save record");
                self.phase = Phase::Editing;
                self.last_error = Some(err.user_message());
                Err(err)
            }
        }
    }

    async fn submit(api: &dyn ApiClient, ctx: &RequestContext, record: &E) -> Result<E, AppError> {
        let payload = record.to_payload()?;
        let request = match record.id() {
            None => ApiRequest::post(E::RESOURCE.path(), payload),
            Some(id) => {
                ApiRequest::new(E::update_method(), E::RESOURCE.item_path(&id)).with_body(payload)
            }
        };
        tracing::debug!(method = %request.method, path = %request.path, "submitting {}", E::LABEL);

        let envelope = api.send(ctx, request).await?;
        Ok(Self::merge_returned(record, &envelope))
    }

    /// 응답 레코드를 보낸 레코드 위에 덮어씁니다. 해석할 수 없으면 보낸 레코드를 그대로 씁니다.
    fn merge_returned(sent: &E, envelope: &Envelope) -> E {
        let Some(record) = envelope.record(E::RESOURCE.singular()) else {
            return sent.clone();
        };
        let mut base = match serde_json::to_value(sent) {
            Ok(Value::Object(map)) => map,
            _ => return sent.clone(),
        };
        base.extend(normalize_remote::<E>(record));

        serde_json::from_value(Value::Object(base)).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "returned record did not parse, keeping draft");
            sent.clone()
        })
    }
}

/// `GET {path}/{id}`로 레코드 하나를 받아옵니다.
pub(crate) async fn fetch_record<E: Entity>(
    api: &dyn ApiClient,
    ctx: &RequestContext,
    id: &EntityId,
) -> Result<E, AppError> {
    let envelope = api
        .send(ctx, ApiRequest::get(E::RESOURCE.item_path(id)))
        .await?;
    let record = envelope
        .record(E::RESOURCE.singular())
        .ok_or(AppError::NotFound)?;
    E::from_remote(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Method, ScriptedClient};
    use crate::models::Job;
    use serde_json::json;

    fn valid_job() -> Job {
        Job {
            title: "Rust Engineer".into(),
            company_name: "Acme".into(),
            description: "Write services".into(),
            ..Job::default()
        }
    }

    #[test]
    fn title_derives_slug_and_meta_title() {
        let mut editor: Editor<Job> = Editor::new();
        editor.set_field("title", "Hello World").unwrap();
        assert_eq!(editor.draft().slug, "hello-world");
        assert_eq!(editor.draft().meta_title, "Hello World");

        editor.set_field("slug", "custom").unwrap();
        editor.set_field("title", "Hello Again").unwrap();
        assert_eq!(editor.draft().slug, "custom");
        assert_eq!(editor.draft().meta_title, "Hello World");
    }

    #[test]
    fn title_edit_keeps_existing_slug() {
        let mut editor = Editor::from_record(Job {
            id: Some(EntityId::Int(5)),
            title: "Hello World".into(),
            slug: "hello-world".into(),
            meta_title: "Hello World".into(),
            ..valid_job()
        });

        editor.set_field("title", "Goodbye World").unwrap();

        assert_eq!(editor.draft().title, "Goodbye World");
        assert_eq!(editor.draft().slug, "hello-world");
        assert_eq!(editor.draft().meta_title, "Hello World");
    }

    #[test]
    fn unknown_and_mistyped_fields_are_rejected() {
        let mut editor: Editor<Job> = Editor::new();
        assert!(matches!(
            editor.set_field("nope", "x"),
            Err(AppError::UnknownField(_))
        ));
        assert!(matches!(
            editor.set_field("title", json!({"a": 1})),
            Err(AppError::InvalidField { .. })
        ));
        assert_eq!(editor.draft(), &Job::default());
    }

    #[test]
    fn add_then_remove_restores_list() {
        let mut editor: Editor<Job> = Editor::new();
        editor.add_array_value("skills", "rust").unwrap();
        let before = editor.draft().skills.clone();

        editor.add_array_item("skills").unwrap();
        let last = editor.draft().skills.len() - 1;
        assert!(editor.remove_array_item("skills", last).unwrap());
        assert_eq!(editor.draft().skills, before);

        assert!(!editor.remove_array_item("skills", 99).unwrap());
        assert_eq!(editor.draft().skills, before);
    }

    #[test]
    fn unique_fields_skip_duplicates() {
        let mut editor: Editor<Job> = Editor::new();
        assert!(editor.add_array_value("skills", "Rust").unwrap());
        assert!(!editor.add_array_value("skills", "rust").unwrap());
        assert!(editor.add_array_value("benefits", "Remote").unwrap());
        assert!(editor.add_array_value("benefits", "Remote").unwrap());
        assert_eq!(editor.draft().benefits.len(), 2);
    }

    #[test]
    fn array_rows_show_one_blank_row() {
        let editor: Editor<Job> = Editor::new();
        assert_eq!(editor.array_rows("requirements").unwrap(), vec![String::new()]);
        assert!(editor.array_rows("title").is_err());
    }

    #[tokio::test]
    async fn invalid_draft_never_reaches_api() {
        let api = ScriptedClient::new();
        let mut editor: Editor<Job> = Editor::new();
        editor.load(&api, &RequestContext::anonymous(), None).await.unwrap();

        let err = editor
            .save(&api, &RequestContext::anonymous(), None)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(ref e) if e.len() == 3));
        assert!(api.requests().is_empty());
        assert_eq!(editor.phase(), &Phase::Editing);
    }

    #[tokio::test]
    async fn new_record_is_posted_and_merged() {
        let api = ScriptedClient::new();
        api.respond(
            Method::Post,
            "/api/admin/jobs",
            json!({"success": true, "data": {"job": {"id": 41, "slug": "rust-engineer"}}}),
        );
        let ctx = RequestContext::with_token("t0k");
        let mut editor = Editor::from_record(valid_job());
        editor.add_array_item("skills").unwrap();

        let saved = editor.save(&api, &ctx, Some(true)).await.unwrap();
        assert_eq!(saved.id, Some(EntityId::Int(41)));
        assert_eq!(saved.status, "active");
        assert_eq!(editor.phase(), &Phase::Saved);
        assert!(!editor.is_dirty());

        let sent = api.last().unwrap();
        assert_eq!(sent.token.as_deref(), Some("t0k"));
        let body = sent.body.unwrap();
        assert_eq!(body["skills"], json!([]));
        assert!(body.get("id").is_none());
    }

    #[tokio::test]
    async fn existing_record_is_put_to_item_path() {
        let api = ScriptedClient::new();
        api.respond(Method::Put, "/api/admin/jobs/9", json!({"success": true}));
        let mut editor = Editor::from_record(Job {
            id: Some(EntityId::Int(9)),
            ..valid_job()
        });
        editor.save(&api, &RequestContext::anonymous(), None).await.unwrap();
        assert_eq!(api.count(Method::Put, "/api/admin/jobs/9"), 1);
        assert_eq!(editor.draft().id, Some(EntityId::Int(9)));
    }

    #[tokio::test]
    async fn failed_save_returns_to_editing() {
        let api = ScriptedClient::new();
        api.respond(
            Method::Post,
            "/api/admin/jobs",
            json!({"success": false, "message": "Slug already exists"}),
        );
        let mut editor = Editor::from_record(valid_job());
        let result = editor.save(&api, &RequestContext::anonymous(), None).await;

        assert!(result.is_err());
        assert_eq!(editor.phase(), &Phase::Editing);
        assert_eq!(editor.last_error(), Some("Slug already exists"));
        assert!(editor.is_new());
    }

    #[tokio::test]
    async fn failed_publish_leaves_draft_unpublished() {
        let api = ScriptedClient::new();
        api.respond_with_status(
            Method::Put,
            "/api/admin/jobs/9",
            500,
            json!({"success": false, "message": "Database is locked"}),
        );
        api.respond(Method::Put, "/api/admin/jobs/9", json!({"success": true}));
        let ctx = RequestContext::anonymous();
        let mut editor = Editor::from_record(Job {
            id: Some(EntityId::Int(9)),
            ..valid_job()
        });

        assert!(editor.save(&api, &ctx, Some(true)).await.is_err());
        assert_eq!(api.last().unwrap().body.unwrap()["status"], "active");
        assert_eq!(editor.draft().status, "draft");
        assert!(!editor.is_dirty());

        editor.save(&api, &ctx, None).await.unwrap();
        assert_eq!(api.last().unwrap().body.unwrap()["status"], "draft");
        assert_eq!(editor.draft().status, "draft");
    }

    #[tokio::test]
    async fn load_failure_is_reported() {
        let api = ScriptedClient::new();
        api.respond_with_status(Method::Get, "/api/admin/jobs/3", 500, json!({}));
        let mut editor: Editor<Job> = Editor::new();
        let id = EntityId::Int(3);

        assert!(editor
            .load(&api, &RequestContext::anonymous(), Some(&id))
            .await
            .is_err());
        assert!(matches!(editor.phase(), Phase::LoadFailed(_)));
    }

    #[tokio::test]
    async fn load_reads_nested_record() {
        let api = ScriptedClient::new();
        api.respond(
            Method::Get,
            "/api/admin/jobs/5",
            json!({"success": true, "data": {"job": {"id": 5, "title": "Ops", "skills_required": "[\"k8s\"]"}}}),
        );
        let mut editor: Editor<Job> = Editor::new();
        editor
            .load(&api, &RequestContext::anonymous(), Some(&EntityId::Int(5)))
            .await
            .unwrap();

        assert_eq!(editor.draft().title, "Ops");
        assert_eq!(editor.draft().skills.as_slice(), ["k8s"]);
        assert!(!editor.is_dirty());
    }
}
