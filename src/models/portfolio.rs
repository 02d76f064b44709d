//! # 포트폴리오(Portfolio) 모델
//!
//! 완료한 프로젝트 소개 항목입니다.
//!
//! 원격 필드 이름이 화면마다 달라서 별칭을 받습니다:
//! - `tech_stack` → `technologies`
//! - `image` → `image_url`
//! - `url` → `project_url`
//!
//! 게시 버튼은 `is_published`를 바꿉니다.

use serde::{Deserialize, Serialize};

use super::flex::bool_from_any;
use super::{EntityId, StringList};
use crate::api::Resource;
use crate::editor::{require, Entity};
use crate::services::text;

/// 포트폴리오 항목 (완료한 프로젝트)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioItem {
    pub id: Option<EntityId>,
    pub title: String,
    pub slug: String,
    pub category: String,
    pub client: String,
    pub description: String,
    pub image_url: String,
    pub project_url: String,
    pub technologies: StringList,
    pub tags: StringList,
    pub completion_date: Option<String>,
    #[serde(deserialize_with = "bool_from_any")]
    pub is_featured: bool,
    #[serde(deserialize_with = "bool_from_any")]
    pub is_published: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Entity for PortfolioItem {
    const RESOURCE: Resource = Resource::Portfolio;
    const LABEL: &'static str = "Portfolio item";
    const ARRAY_FIELDS: &'static [&'static str] = &["technologies", "tags"];
    const JSON_STRING_FIELDS: &'static [&'static str] = &["tags"];
    const FIELD_ALIASES: &'static [(&'static str, &'static str)] = &[
        ("tech_stack", "technologies"),
        ("image", "image_url"),
        ("url", "project_url"),
    ];

    fn id(&self) -> Option<EntityId> {
        self.id.clone()
    }

    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        require(&mut errors, "Title", &self.title);
        require(&mut errors, "Category", &self.category);
        if !text::is_blank(&self.project_url) && !text::is_http_url(&self.project_url) {
            errors.push("Project URL must start with http:// or https://".to_string());
        }
        errors
    }

    fn array_field_mut(&mut self, name: &str) -> Option<&mut StringList> {
        match name {
            "technologies" => Some(&mut self.technologies),
            "tags" => Some(&mut self.tags),
            _ => None,
        }
    }

    fn derive_fields(&mut self, changed: &str, before: &Self) {
        if changed == "title" {
            text::sync_slug(&mut self.slug, &before.slug, &self.title);
        }
    }

    fn apply_publish(&mut self, publish: bool) {
        self.is_published = publish;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publish_flag_is_applied() {
        let mut item = PortfolioItem::default();
        item.apply_publish(true);
        assert!(item.is_published);
        item.apply_publish(false);
        assert!(!item.is_published);
    }

    #[test]
    fn project_url_must_be_http() {
        let item = PortfolioItem {
            title: "Shop".into(),
            category: "web".into(),
            project_url: "shop.example.com".into(),
            ..PortfolioItem::default()
        };
        assert_eq!(item.validate().len(), 1);
    }
}
