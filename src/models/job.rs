//! # 채용공고 모델
//!
//! 채용공고 편집 화면의 초안 구조체입니다.
//!
//! ## 원격 필드 이름 차이
//! - `skills_required` → `skills`
//! - `application_deadline` → `deadline`
//!
//! ## 파생 필드
//! 제목(title)을 바꿀 때 slug나 meta_title이 비어 있었으면 제목으로 채웁니다.

use serde::{Deserialize, Serialize};

use super::flex::bool_from_any;
use super::{EntityId, StringList};
use crate::api::Resource;
use crate::editor::{require, Entity};
use crate::services::text;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Job {
    pub id: Option<EntityId>,
    pub title: String,
    pub slug: String,
    pub company_name: String,
    pub company_logo: String,
    pub location: String,
    /// "full-time", "part-time", "contract", "internship"
    pub job_type: String,
    pub experience_level: String,
    pub category: String,
    pub salary_range: String,
    pub description: String,
    pub requirements: StringList,
    pub benefits: StringList,
    pub skills: StringList,
    pub application_url: String,
    pub application_email: String,
    /// 마감일 (`YYYY-MM-DD`)
    pub deadline: Option<String>,
    /// "draft", "active", "closed"
    pub status: String,
    #[serde(deserialize_with = "bool_from_any")]
    pub is_featured: bool,
    #[serde(deserialize_with = "bool_from_any")]
    pub is_remote: bool,
    pub meta_title: String,
    pub meta_description: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Default for Job {
    fn default() -> Self {
        Self {
            id: None,
            title: String::new(),
            slug: String::new(),
            company_name: String::new(),
            company_logo: String::new(),
            location: String::new(),
            job_type: "full-time".to_string(),
            experience_level: String::new(),
            category: String::new(),
            salary_range: String::new(),
            description: String::new(),
            requirements: StringList::new(),
            benefits: StringList::new(),
            skills: StringList::new(),
            application_url: String::new(),
            application_email: String::new(),
            deadline: None,
            status: "draft".to_string(),
            is_featured: false,
            is_remote: false,
            meta_title: String::new(),
            meta_description: String::new(),
            created_at: None,
            updated_at: None,
        }
    }
}

impl Entity for Job {
    const RESOURCE: Resource = Resource::Jobs;
    const LABEL: &'static str = "Job";
    const ARRAY_FIELDS: &'static [&'static str] = &["requirements", "benefits", "skills"];
    const UNIQUE_ARRAY_FIELDS: &'static [&'static str] = &["skills"];
    const FIELD_ALIASES: &'static [(&'static str, &'static str)] = &[
        ("skills_required", "skills"),
        ("application_deadline", "deadline"),
        ("company", "company_name"),
    ];

    fn id(&self) -> Option<EntityId> {
        self.id.clone()
    }

    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        require(&mut errors, "Title", &self.title);
        require(&mut errors, "Company name", &self.company_name);
        require(&mut errors, "Description", &self.description);
        if let Some(deadline) = self.deadline.as_deref().filter(|d| !text::is_blank(d)) {
            if !text::is_iso_date(deadline) {
                errors.push("Deadline must be a valid date (YYYY-MM-DD)".to_string());
            }
        }
        if !text::is_blank(&self.application_email) && !text::looks_like_email(&self.application_email) {
            errors.push("Application email is not valid".to_string());
        }
        errors
    }

    fn array_field_mut(&mut self, name: &str) -> Option<&mut StringList> {
        match name {
            "requirements" => Some(&mut self.requirements),
            "benefits" => Some(&mut self.benefits),
            "skills" => Some(&mut self.skills),
            _ => None,
        }
    }

    fn derive_fields(&mut self, changed: &str, before: &Self) {
        if changed == "title" {
            text::sync_slug(&mut self.slug, &before.slug, &self.title);
            text::sync_mirror(&mut self.meta_title, &before.meta_title, &self.title);
        }
    }

    fn apply_publish(&mut self, publish: bool) {
        self.status = if publish { "active" } else { "draft" }.to_string();
    }
}
