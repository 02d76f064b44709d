//! # 목록/필터 컨트롤러
//!
//! 관리 화면 왼쪽의 표(테이블)를 담당합니다:
//! 필터 → 쿼리 문자열 → GET → 항목과 페이지 정보 갱신.
//!
//! ## 규칙
//! - 필터나 정렬이 바뀌면 1페이지로 돌아갑니다.
//! - 빈 필터 값("", 빈 목록)은 "설정 안 됨"으로 보고 쿼리에 넣지 않습니다.
//! - 쿼리 순서: 필터(키 이름순) → page → limit → sort → order
//! - 불러오기에 실패하면 이전 항목을 그대로 두고 `last_error`만 설정합니다.

use std::collections::{BTreeMap, BTreeSet};

use crate::api::{ApiClient, ApiRequest, Envelope, Pagination};
use crate::auth::RequestContext;
use crate::config::DEFAULT_PAGE_SIZE;
use crate::editor::Entity;
use crate::error::AppError;
use crate::models::EntityId;

/// 필터 값 하나
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    /// 검색어, 드롭다운 선택값
    Text(String),
    /// 다중 선택 (쉼표로 이어서 보냄)
    Many(Vec<String>),
    /// 체크박스 (예: featured만 보기)
    Flag(bool),
}

impl FilterValue {
    /// 쿼리에 넣을 값. 설정되지 않은 필터면 None.
    pub fn to_query(&self) -> Option<String> {
        match self {
            FilterValue::Text(text) => {
                let text = text.trim();
                (!text.is_empty()).then(|| text.to_string())
            }
            FilterValue::Many(values) => {
                let joined = values
                    .iter()
                    .map(|v| v.trim())
                    .filter(|v| !v.is_empty())
                    .collect::<Vec<_>>()
                    .join(",");
                (!joined.is_empty()).then_some(joined)
            }
            FilterValue::Flag(flag) => Some(flag.to_string()),
        }
    }

    pub fn is_set(&self) -> bool {
        self.to_query().is_some()
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Text(value)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        FilterValue::Flag(value)
    }
}

impl From<Vec<String>> for FilterValue {
    fn from(values: Vec<String>) -> Self {
        FilterValue::Many(values)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// 정렬 기준. 기본은 최신순(created_at desc).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            field: "created_at".to_string(),
            direction: SortDirection::Desc,
        }
    }
}

/// 엔티티 목록 화면의 상태
#[derive(Debug, Clone)]
pub struct ListController<E: Entity> {
    items: Vec<E>,
    page: u32,
    page_size: u32,
    total_count: u64,
    total_pages: u32,
    filters: BTreeMap<String, FilterValue>,
    sort: SortSpec,
    selected: BTreeSet<EntityId>,
    last_error: Option<String>,
}

impl<E: Entity> Default for ListController<E> {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl<E: Entity> ListController<E> {
    pub fn new(page_size: u32) -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            page_size: page_size.max(1),
            total_count: 0,
            total_pages: 1,
            filters: BTreeMap::new(),
            sort: SortSpec::default(),
            selected: BTreeSet::new(),
            last_error: None,
        }
    }

    pub fn items(&self) -> &[E] {
        &self.items
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn filters(&self) -> &BTreeMap<String, FilterValue> {
        &self.filters
    }

    pub fn filter(&self, key: &str) -> Option<&FilterValue> {
        self.filters.get(key)
    }

    pub fn sort(&self) -> &SortSpec {
        &self.sort
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    // ── 필터/정렬/페이지 ──

    /// 필터를 설정합니다. 빈 값이면 필터를 지웁니다. 1페이지로 돌아갑니다.
    pub fn set_filter(&mut self, key: &str, value: impl Into<FilterValue>) {
        let value = value.into();
        if value.is_set() {
            self.filters.insert(key.to_string(), value);
        } else {
            self.filters.remove(key);
        }
        self.page = 1;
    }

    pub fn clear_filter(&mut self, key: &str) {
        self.filters.remove(key);
        self.page = 1;
    }

    pub fn reset_filters(&mut self) {
        self.filters.clear();
        self.page = 1;
    }

    pub fn set_sort(&mut self, field: &str, direction: SortDirection) {
        self.sort = SortSpec {
            field: field.to_string(),
            direction,
        };
        self.page = 1;
    }

    /// 페이지를 옮깁니다. `[1, total_pages]` 범위로 맞춥니다.
    pub fn set_page(&mut self, page: u32) {
        self.page = page.clamp(1, self.total_pages.max(1));
    }

    /// 현재 상태를 쿼리 파라미터로 만듭니다.
    pub fn query(&self) -> Vec<(String, String)> {
        let mut query: Vec<(String, String)> = self
            .filters
            .iter()
            .filter_map(|(key, value)| value.to_query().map(|v| (key.clone(), v)))
            .collect();
        query.push(("page".to_string(), self.page.to_string()));
        query.push(("limit".to_string(), self.page_size.to_string()));
        query.push(("sort".to_string(), self.sort.field.clone()));
        query.push(("order".to_string(), self.sort.direction.as_str().to_string()));
        query
    }

    // ── 불러오기 ──

    /// 현재 쿼리로 목록을 다시 불러옵니다.
    ///
    /// 다른 곳에서 행이 지워져 요청한 페이지가 마지막 페이지를 넘으면
    /// 마지막 페이지로 한 번 더 불러옵니다.
    pub async fn reload(&mut self, api: &dyn ApiClient, ctx: &RequestContext) -> Result<(), AppError> {
        let requested = self.page;
        self.fetch(api, ctx).await?;
        if self.page < requested {
            tracing::debug!(
                resource = E::RESOURCE.path(),
                requested,
                page = self.page,
                "page out of range, loading last page"
            );
            self.fetch(api, ctx).await?;
        }
        Ok(())
    }

    async fn fetch(&mut self, api: &dyn ApiClient, ctx: &RequestContext) -> Result<(), AppError> {
        let request = ApiRequest::get(E::RESOURCE.path()).with_query(self.query());
        match api.send(ctx, request).await {
            Ok(envelope) => {
                self.apply(&envelope);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(resource = E::RESOURCE.path(), error = %err, "failed to load list");
                self.last_error = Some(err.user_message());
                Err(err)
            }
        }
    }

    fn apply(&mut self, envelope: &Envelope) {
        let rows = envelope.items();
        let pagination = Pagination::from_envelope(envelope, self.page_size, rows.len());

        self.items = rows
            .iter()
            .filter_map(|row| match E::from_remote(row) {
                Ok(item) => Some(item),
                Err(err) => {
                    tracing::warn!(resource = E::RESOURCE.path(), error = %err, "skipping unreadable row");
                    None
                }
            })
            .collect();
        self.total_count = pagination.total;
        self.total_pages = pagination.pages;
        self.page = self.page.clamp(1, self.total_pages);
        self.selected.clear();
        self.last_error = None;

        tracing::debug!(
            resource = E::RESOURCE.path(),
            items = self.items.len(),
            total = self.total_count,
            "list loaded"
        );
    }

    // ── 선택 ──

    /// 행 체크박스를 토글합니다. 선택 상태가 되면 true.
    pub fn toggle_select(&mut self, id: EntityId) -> bool {
        if self.selected.remove(&id) {
            false
        } else {
            self.selected.insert(id);
            true
        }
    }

    /// 헤더 체크박스: 현재 페이지 전체 선택/해제
    pub fn select_all(&mut self, selected: bool) {
        self.selected.clear();
        if selected {
            self.selected.extend(self.items.iter().filter_map(|item| item.id()));
        }
    }

    pub fn is_selected(&self, id: &EntityId) -> bool {
        self.selected.contains(id)
    }

    pub fn selected_ids(&self) -> Vec<EntityId> {
        self.selected.iter().cloned().collect()
    }

    // ── 로컬 반영 ──

    /// 저장 결과를 목록에 바로 반영합니다. 같은 ID가 있으면 교체, 없으면 맨 앞에 추가.
    pub fn upsert_local(&mut self, record: E) {
        let id = record.id();
        let existing = id
            .as_ref()
            .and_then(|id| self.items.iter().position(|item| item.id().as_ref() == Some(id)));
        match existing {
            Some(index) => self.items[index] = record,
            None => {
                self.items.insert(0, record);
                self.total_count += 1;
            }
        }
    }

    /// 삭제된 레코드를 목록에서 뺍니다.
    pub fn remove_local(&mut self, id: &EntityId) {
        let before = self.items.len();
        self.items.retain(|item| item.id().as_ref() != Some(id));
        if self.items.len() < before {
            self.total_count = self.total_count.saturating_sub(1);
        }
        self.selected.remove(id);
    }
}
