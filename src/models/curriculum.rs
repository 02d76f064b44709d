use serde::{Deserialize, Serialize};

use super::flex::{bool_from_any, int_from_any};
use super::{EntityId, StringList};
use crate::api::Resource;
use crate::editor::{require, Entity};

/// 교육 과정의 한 모듈
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurriculumModule {
    pub id: Option<EntityId>,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub level: String,
    pub topics: StringList,
    #[serde(deserialize_with = "int_from_any")]
    pub display_order: i64,
    #[serde(deserialize_with = "bool_from_any")]
    pub is_published: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Entity for CurriculumModule {
    const RESOURCE: Resource = Resource::CurriculumModules;
    const LABEL: &'static str = "Module";
    const ARRAY_FIELDS: &'static [&'static str] = &["topics"];
    const FIELD_ALIASES: &'static [(&'static str, &'static str)] = &[("order", "display_order")];

    fn id(&self) -> Option<EntityId> {
        self.id.clone()
    }

    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        require(&mut errors, "Title", &self.title);
        errors
    }

    fn array_field_mut(&mut self, name: &str) -> Option<&mut StringList> {
        match name {
            "topics" => Some(&mut self.topics),
            _ => None,
        }
    }

    fn apply_publish(&mut self, publish: bool) {
        self.is_published = publish;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn order_alias_and_csv_topics() {
        let module = CurriculumModule::from_remote(&json!({
            "id": 2,
            "title": "Ownership",
            "order": "3",
            "topics": "moves, borrows ,lifetimes"
        }))
        .unwrap();
        assert_eq!(module.display_order, 3);
        assert_eq!(module.topics.as_slice(), ["moves", "borrows", "lifetimes"]);
    }
}
