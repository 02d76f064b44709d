use serde::{Deserialize, Serialize};

use super::flex::{bool_from_any, int_from_any};
use super::{EntityId, StringList};
use crate::api::Resource;
use crate::editor::{require, Entity};
use crate::services::text;

/// 추천 도구 목록의 항목
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tool {
    pub id: Option<EntityId>,
    pub name: String,
    pub url: String,
    pub description: String,
    pub category: String,
    pub icon: String,
    pub tags: StringList,
    #[serde(deserialize_with = "int_from_any")]
    pub display_order: i64,
    #[serde(deserialize_with = "bool_from_any")]
    pub is_free: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Entity for Tool {
    const RESOURCE: Resource = Resource::Tools;
    const LABEL: &'static str = "Tool";
    const ARRAY_FIELDS: &'static [&'static str] = &["tags"];
    const UNIQUE_ARRAY_FIELDS: &'static [&'static str] = &["tags"];
    const FIELD_ALIASES: &'static [(&'static str, &'static str)] = &[("link", "url")];

    fn id(&self) -> Option<EntityId> {
        self.id.clone()
    }

    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        require(&mut errors, "Name", &self.name);
        require(&mut errors, "URL", &self.url);
        if !text::is_blank(&self.url) && !text::is_http_url(&self.url) {
            errors.push("URL must start with http:// or https://".to_string());
        }
        errors
    }

    fn array_field_mut(&mut self, name: &str) -> Option<&mut StringList> {
        match name {
            "tags" => Some(&mut self.tags),
            _ => None,
        }
    }
}
