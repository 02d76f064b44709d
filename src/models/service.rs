//! # 서비스(Service) 모델
//!
//! 회사 소개 페이지에 나오는 서비스 항목입니다.
//!
//! - `features`: 평범한 배열로 보냅니다.
//! - `tags`: 백엔드가 JSON 문자열(`"[\"web\"]"`)로 저장하므로 인코딩해서 보냅니다.
//! - 수정은 PUT 대신 PATCH를 씁니다.

use serde::{Deserialize, Serialize};

use super::flex::{bool_from_any, int_from_any};
use super::{EntityId, StringList};
use crate::api::{Method, Resource};
use crate::editor::{require, Entity};
use crate::services::text;

/// 회사가 제공하는 서비스 항목
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Service {
    pub id: Option<EntityId>,
    pub title: String,
    pub slug: String,
    pub short_description: String,
    pub description: String,
    pub icon: String,
    pub price: String,
    pub features: StringList,
    pub tags: StringList,
    #[serde(deserialize_with = "int_from_any")]
    pub display_order: i64,
    #[serde(deserialize_with = "bool_from_any")]
    pub is_active: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Default for Service {
    fn default() -> Self {
        Self {
            id: None,
            title: String::new(),
            slug: String::new(),
            short_description: String::new(),
            description: String::new(),
            icon: String::new(),
            price: String::new(),
            features: StringList::new(),
            tags: StringList::new(),
            display_order: 0,
            is_active: true,
            created_at: None,
            updated_at: None,
        }
    }
}

impl Entity for Service {
    const RESOURCE: Resource = Resource::Services;
    const LABEL: &'static str = "Service";
    const ARRAY_FIELDS: &'static [&'static str] = &["features", "tags"];
    const JSON_STRING_FIELDS: &'static [&'static str] = &["tags"];

    fn id(&self) -> Option<EntityId> {
        self.id.clone()
    }

    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        require(&mut errors, "Title", &self.title);
        require(&mut errors, "Description", &self.description);
        errors
    }

    fn array_field_mut(&mut self, name: &str) -> Option<&mut StringList> {
        match name {
            "features" => Some(&mut self.features),
            "tags" => Some(&mut self.tags),
            _ => None,
        }
    }

    fn derive_fields(&mut self, changed: &str, before: &Self) {
        if changed == "title" {
            text::sync_slug(&mut self.slug, &before.slug, &self.title);
        }
    }

    // 서비스 화면은 부분 수정(PATCH)을 씁니다.
    fn update_method() -> Method {
        Method::Patch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tags_go_out_as_json_string_features_as_array() {
        let service = Service {
            title: "Web".into(),
            description: "Sites".into(),
            features: ["SEO", ""].into_iter().collect(),
            tags: ["web"].into_iter().collect(),
            ..Service::default()
        };
        let payload = service.to_payload().unwrap();
        assert_eq!(payload["features"], json!(["SEO"]));
        assert_eq!(payload["tags"], json!("[\"web\"]"));
        assert_eq!(Service::update_method(), Method::Patch);
    }
}
