use serde::{Deserialize, Serialize};

use super::flex::{bool_from_any, int_from_any};
use super::EntityId;
use crate::api::Resource;
use crate::editor::{require, Entity};
use crate::services::text;

/// 사이드바에 고정되는 중요 링크
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportantLink {
    pub id: Option<EntityId>,
    pub title: String,
    pub url: String,
    pub description: String,
    pub category: String,
    #[serde(deserialize_with = "int_from_any")]
    pub display_order: i64,
    #[serde(deserialize_with = "bool_from_any")]
    pub is_active: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Entity for ImportantLink {
    const RESOURCE: Resource = Resource::ImportantLinks;
    const LABEL: &'static str = "Link";

    fn id(&self) -> Option<EntityId> {
        self.id.clone()
    }

    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        require(&mut errors, "Title", &self.title);
        require(&mut errors, "URL", &self.url);
        if !text::is_blank(&self.url) && !text::is_http_url(&self.url) {
            errors.push("URL must start with http:// or https://".to_string());
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_scheme_is_checked() {
        let link = ImportantLink {
            title: "Docs".into(),
            url: "ftp://example.com".into(),
            ..ImportantLink::default()
        };
        assert_eq!(link.validate(), vec!["URL must start with http:// or https://"]);

        let link = ImportantLink {
            url: "https://example.com".into(),
            ..link
        };
        assert!(link.validate().is_empty());
    }
}
