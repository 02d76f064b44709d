//! # 사이트 설정
//!
//! 설정은 숫자 ID가 없고 `key`가 곧 식별자입니다.
//! 값은 문자열일 수도, 숫자/불리언/객체일 수도 있어서 JSON 그대로 둡니다.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::EntityId;
use crate::api::Resource;
use crate::editor::{require, Entity};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Setting {
    pub key: String,
    pub value: Value,
    /// 설정 화면의 탭 이름 ("general", "seo", "social" ...)
    pub group: String,
    pub description: String,
    /// 입력 위젯 종류 ("text", "boolean", "number", "json")
    #[serde(rename = "type")]
    pub kind: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Default for Setting {
    fn default() -> Self {
        Self {
            key: String::new(),
            value: Value::String(String::new()),
            group: "general".to_string(),
            description: String::new(),
            kind: "text".to_string(),
            created_at: None,
            updated_at: None,
        }
    }
}

impl Entity for Setting {
    const RESOURCE: Resource = Resource::Settings;
    const LABEL: &'static str = "Setting";
    const FIELD_ALIASES: &'static [(&'static str, &'static str)] =
        &[("setting_key", "key"), ("setting_value", "value")];

    // 서버에서 받은 적 없는 설정(타임스탬프 없음)은 새 설정으로 봅니다.
    fn id(&self) -> Option<EntityId> {
        let persisted = self.created_at.is_some() || self.updated_at.is_some();
        if self.key.trim().is_empty() || !persisted {
            None
        } else {
            Some(EntityId::Text(self.key.clone()))
        }
    }

    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        require(&mut errors, "Key", &self.key);
        if self.key.chars().any(char::is_whitespace) && !self.key.trim().is_empty() {
            errors.push("Key must not contain spaces".to_string());
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn saved_setting_is_addressed_by_key() {
        let setting = Setting::from_remote(&json!({
            "key": "site_name",
            "value": "Acme",
            "type": "text",
            "created_at": "2025-01-01T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(setting.id(), Some(EntityId::Text("site_name".into())));

        let payload = setting.to_payload().unwrap();
        assert_eq!(payload["key"], json!("site_name"));
        assert_eq!(payload["type"], json!("text"));
    }

    #[test]
    fn new_setting_has_no_id() {
        let setting = Setting {
            key: "maintenance".into(),
            value: json!(false),
            ..Setting::default()
        };
        assert_eq!(setting.id(), None);
        assert!(setting.validate().is_empty());
    }

    #[test]
    fn key_with_spaces_is_rejected() {
        let setting = Setting {
            key: "site name".into(),
            ..Setting::default()
        };
        assert_eq!(setting.validate(), vec!["Key must not contain spaces"]);
    }
}
