//! # 팀원 모델
//!
//! 팀 소개 페이지에 노출되는 구성원입니다.
//! 사진은 별도 업로드 엔드포인트로 올린 뒤 받은 URL을 `photo_url`에 넣습니다.

use serde::{Deserialize, Serialize};

use super::flex::{bool_from_any, int_from_any};
use super::{EntityId, StringList};
use crate::api::Resource;
use crate::editor::{require, Entity};
use crate::services::text;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamMember {
    pub id: Option<EntityId>,
    pub name: String,
    pub position: String,
    pub department: String,
    pub bio: String,
    pub email: String,
    pub photo_url: String,
    pub linkedin_url: String,
    pub twitter_url: String,
    pub skills: StringList,
    #[serde(deserialize_with = "int_from_any")]
    pub display_order: i64,
    #[serde(deserialize_with = "bool_from_any")]
    pub is_active: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Default for TeamMember {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            position: String::new(),
            department: String::new(),
            bio: String::new(),
            email: String::new(),
            photo_url: String::new(),
            linkedin_url: String::new(),
            twitter_url: String::new(),
            skills: StringList::new(),
            display_order: 0,
            is_active: true,
            created_at: None,
            updated_at: None,
        }
    }
}

impl Entity for TeamMember {
    const RESOURCE: Resource = Resource::Team;
    const LABEL: &'static str = "Team member";
    const ARRAY_FIELDS: &'static [&'static str] = &["skills"];
    const UNIQUE_ARRAY_FIELDS: &'static [&'static str] = &["skills"];
    const FIELD_ALIASES: &'static [(&'static str, &'static str)] = &[
        ("role", "position"),
        ("image", "photo_url"),
        ("photo", "photo_url"),
    ];

    fn id(&self) -> Option<EntityId> {
        self.id.clone()
    }

    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        require(&mut errors, "Name", &self.name);
        require(&mut errors, "Position", &self.position);
        if !text::is_blank(&self.email) && !text::looks_like_email(&self.email) {
            errors.push("Email is not valid".to_string());
        }
        errors
    }

    fn array_field_mut(&mut self, name: &str) -> Option<&mut StringList> {
        match name {
            "skills" => Some(&mut self.skills),
            _ => None,
        }
    }
}
