use serde::{Deserialize, Serialize};

use super::flex::bool_from_any;
use super::{EntityId, StringList};
use crate::api::Resource;
use crate::editor::{require, Entity};
use crate::services::text;

/// 협력 기관 / 고객사
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Organization {
    pub id: Option<EntityId>,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub logo_url: String,
    pub website: String,
    pub country: String,
    pub tags: StringList,
    #[serde(deserialize_with = "bool_from_any")]
    pub is_verified: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Entity for Organization {
    const RESOURCE: Resource = Resource::Organizations;
    const LABEL: &'static str = "Organization";
    const ARRAY_FIELDS: &'static [&'static str] = &["tags"];
    const FIELD_ALIASES: &'static [(&'static str, &'static str)] =
        &[("logo", "logo_url"), ("website_url", "website")];

    fn id(&self) -> Option<EntityId> {
        self.id.clone()
    }

    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        require(&mut errors, "Name", &self.name);
        if !text::is_blank(&self.website) && !text::is_http_url(&self.website) {
            errors.push("Website must start with http:// or https://".to_string());
        }
        errors
    }

    fn array_field_mut(&mut self, name: &str) -> Option<&mut StringList> {
        match name {
            "tags" => Some(&mut self.tags),
            _ => None,
        }
    }

    // 기관은 제목 대신 이름에서 slug를 만듭니다.
    fn derive_fields(&mut self, changed: &str, before: &Self) {
        if changed == "name" {
            text::sync_slug(&mut self.slug, &before.slug, &self.name);
        }
    }
}
