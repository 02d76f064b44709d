//! # 선택지 목록과 통계 조회
//!
//! 편집 화면의 드롭다운(장학금 지역, 학력 수준, 채용 카테고리)과
//! 채용공고 대시보드 통계를 가져옵니다.
//!
//! 선택지 응답은 문자열 배열이거나 `{ id, name }` 객체 배열입니다.
//! 둘 다 `LookupOption { value, label }`으로 맞춥니다.

use serde::Serialize;
use serde_json::Value;

use super::endpoints::{JOB_CATEGORIES, JOB_STATS, SCHOLARSHIP_EDUCATION_LEVELS, SCHOLARSHIP_REGIONS};
use super::envelope::as_u64;
use super::{ApiClient, ApiRequest};
use crate::auth::RequestContext;
use crate::error::AppError;

/// 드롭다운 선택지 하나
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupOption {
    pub value: String,
    pub label: String,
}

impl LookupOption {
    /// JSON 값 하나를 선택지로 바꿉니다. 알아볼 수 없는 값은 None입니다.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) if !s.trim().is_empty() => Some(Self {
                value: s.clone(),
                label: s.clone(),
            }),
            Value::Object(map) => {
                let pick = |keys: &[&str]| {
                    keys.iter().find_map(|k| match map.get(*k) {
                        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
                        Some(Value::Number(n)) => Some(n.to_string()),
                        _ => None,
                    })
                };
                let value = pick(&["id", "value", "slug", "code"]);
                let label = pick(&["name", "label", "title"]);
                match (value, label) {
                    (Some(v), Some(l)) => Some(Self { value: v, label: l }),
                    (Some(v), None) => Some(Self { value: v.clone(), label: v }),
                    (None, Some(l)) => Some(Self { value: l.clone(), label: l }),
                    (None, None) => None,
                }
            }
            _ => None,
        }
    }
}

/// 선택지 목록을 가져옵니다.
pub async fn fetch_options(
    api: &dyn ApiClient,
    ctx: &RequestContext,
    path: &str,
) -> Result<Vec<LookupOption>, AppError> {
    let envelope = api.send(ctx, ApiRequest::get(path)).await?;
    Ok(envelope
        .items()
        .iter()
        .filter_map(LookupOption::from_value)
        .collect())
}

pub async fn scholarship_regions(
    api: &dyn ApiClient,
    ctx: &RequestContext,
) -> Result<Vec<LookupOption>, AppError> {
    fetch_options(api, ctx, SCHOLARSHIP_REGIONS).await
}

pub async fn education_levels(
    api: &dyn ApiClient,
    ctx: &RequestContext,
) -> Result<Vec<LookupOption>, AppError> {
    fetch_options(api, ctx, SCHOLARSHIP_EDUCATION_LEVELS).await
}

pub async fn job_categories(
    api: &dyn ApiClient,
    ctx: &RequestContext,
) -> Result<Vec<LookupOption>, AppError> {
    fetch_options(api, ctx, JOB_CATEGORIES).await
}

/// 채용공고 대시보드 통계. 응답에 없는 값은 0입니다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct JobStats {
    pub total: u64,
    pub active: u64,
    pub featured: u64,
    pub expired: u64,
}

pub async fn job_stats(api: &dyn ApiClient, ctx: &RequestContext) -> Result<JobStats, AppError> {
    let envelope = api.send(ctx, ApiRequest::get(JOB_STATS)).await?;
    let body = envelope.body();
    let read = |keys: &[&str]| {
        keys.iter()
            .find_map(|k| body.get(*k).and_then(as_u64))
            .unwrap_or(0)
    };
    Ok(JobStats {
        total: read(&["total", "total_jobs", "totalJobs"]),
        active: read(&["active", "active_jobs", "activeJobs"]),
        featured: read(&["featured", "featured_jobs", "featuredJobs"]),
        expired: read(&["expired", "expired_jobs", "expiredJobs"]),
    })
}
