//! # 장학금 모델
//!
//! 장학금 편집 화면은 필수 필드가 가장 많습니다:
//! title, slug, short_description, provider, category, education_level,
//! funding_type, 그리고 지역(region) 최소 1개.
//!
//! `study_fields`는 백엔드가 JSON 문자열로 받습니다.

use serde::{Deserialize, Serialize};

use super::flex::bool_from_any;
use super::{EntityId, StringList};
use crate::api::Resource;
use crate::editor::{require, Entity};
use crate::services::text;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scholarship {
    pub id: Option<EntityId>,
    pub title: String,
    pub slug: String,
    pub short_description: String,
    pub description: String,
    pub provider: String,
    pub provider_url: String,
    pub category: String,
    pub education_level: String,
    /// "fully-funded", "partially-funded", "tuition-only" 등
    pub funding_type: String,
    pub amount: String,
    pub regions: StringList,
    pub study_fields: StringList,
    pub eligibility: StringList,
    pub deadline: Option<String>,
    pub application_url: String,
    /// "draft", "published"
    pub status: String,
    #[serde(deserialize_with = "bool_from_any")]
    pub is_featured: bool,
    pub meta_title: String,
    pub meta_description: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Default for Scholarship {
    fn default() -> Self {
        Self {
            id: None,
            title: String::new(),
            slug: String::new(),
            short_description: String::new(),
            description: String::new(),
            provider: String::new(),
            provider_url: String::new(),
            category: String::new(),
            education_level: String::new(),
            funding_type: String::new(),
            amount: String::new(),
            regions: StringList::new(),
            study_fields: StringList::new(),
            eligibility: StringList::new(),
            deadline: None,
            application_url: String::new(),
            status: "draft".to_string(),
            is_featured: false,
            meta_title: String::new(),
            meta_description: String::new(),
            created_at: None,
            updated_at: None,
        }
    }
}

impl Entity for Scholarship {
    const RESOURCE: Resource = Resource::Scholarships;
    const LABEL: &'static str = "Scholarship";
    const ARRAY_FIELDS: &'static [&'static str] = &["regions", "study_fields", "eligibility"];
    const JSON_STRING_FIELDS: &'static [&'static str] = &["study_fields"];
    const UNIQUE_ARRAY_FIELDS: &'static [&'static str] = &["regions"];
    const FIELD_ALIASES: &'static [(&'static str, &'static str)] = &[
        ("application_deadline", "deadline"),
        ("region", "regions"),
        ("eligibility_criteria", "eligibility"),
    ];

    fn id(&self) -> Option<EntityId> {
        self.id.clone()
    }

    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        require(&mut errors, "Title", &self.title);
        require(&mut errors, "Slug", &self.slug);
        require(&mut errors, "Short description", &self.short_description);
        require(&mut errors, "Provider", &self.provider);
        require(&mut errors, "Category", &self.category);
        require(&mut errors, "Education level", &self.education_level);
        require(&mut errors, "Funding type", &self.funding_type);
        if !self.regions.has_content() {
            errors.push("At least one region is required".to_string());
        }
        if let Some(deadline) = self.deadline.as_deref().filter(|d| !text::is_blank(d)) {
            if !text::is_iso_date(deadline) {
                errors.push("Deadline must be a valid date (YYYY-MM-DD)".to_string());
            }
        }
        errors
    }

    fn array_field_mut(&mut self, name: &str) -> Option<&mut StringList> {
        match name {
            "regions" => Some(&mut self.regions),
            "study_fields" => Some(&mut self.study_fields),
            "eligibility" => Some(&mut self.eligibility),
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
        self.status = if publish { "published" } else { "draft" }.to_string();
    }
}
