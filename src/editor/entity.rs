//! # 엔티티 트레이트
//!
//! 편집 화면마다 필드 구성, 필수 필드, 원격 필드 이름이 다릅니다.
//! 하나의 거대한 동적 객체 대신 엔티티마다 별도의 구조체를 두고,
//! 공통 동작(불러오기/필드 설정/검증/저장)은 이 트레이트로 묶습니다.
//! `Editor<E>`와 `ListController<E>`는 이 트레이트에 대해 제네릭입니다.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::api::{Method, Resource};
use crate::error::AppError;
use crate::models::{EntityId, StringList};

/// 관리 화면이 편집하는 원격 레코드
pub trait Entity:
    Serialize + DeserializeOwned + Default + Clone + PartialEq + Send + Sync + 'static
{
    /// 원격 컬렉션
    const RESOURCE: Resource;

    /// 알림 문구에 쓰는 이름 (예: "Job")
    const LABEL: &'static str;

    /// 문자열 목록 필드 이름들. 제출 전에 빈 항목을 걸러냅니다.
    const ARRAY_FIELDS: &'static [&'static str] = &[];

    /// 백엔드가 JSON 문자열로 받는 목록 필드들
    const JSON_STRING_FIELDS: &'static [&'static str] = &[];

    /// 중복을 허용하지 않는 목록 필드들
    const UNIQUE_ARRAY_FIELDS: &'static [&'static str] = &[];

    /// (원격 이름, 로컬 이름) 둘 중 어느 쪽이 와도 로컬 필드로 읽습니다.
    const FIELD_ALIASES: &'static [(&'static str, &'static str)] = &[];

    /// 서버가 관리하므로 제출하지 않는 필드들
    const READ_ONLY_FIELDS: &'static [&'static str] = &["id", "created_at", "updated_at"];

    /// 원격 ID. 아직 저장되지 않은 초안이면 None.
    fn id(&self) -> Option<EntityId>;

    /// 저장을 막는 검증 에러 목록. 비어 있으면 저장할 수 있습니다.
    fn validate(&self) -> Vec<String>;

    /// 이름으로 목록 필드에 접근합니다.
    fn array_field_mut(&mut self, _name: &str) -> Option<&mut StringList> {
        None
    }

    /// 필드 `changed`가 바뀐 직후 파생 필드를 갱신합니다 (예: 제목 → slug).
    fn derive_fields(&mut self, _changed: &str, _before: &Self) {}

    /// 게시/임시저장 버튼에 따라 상태 필드를 바꿉니다.
    fn apply_publish(&mut self, _publish: bool) {}

    /// 기존 레코드 수정에 쓰는 메서드
    fn update_method() -> Method {
        Method::Put
    }

    /// 원격 레코드를 로컬 초안으로 바꿉니다.
    fn from_remote(value: &Value) -> Result<Self, AppError> {
        if !value.is_object() {
            return Err(AppError::InvalidField {
                field: Self::LABEL.to_string(),
                reason: "expected an object".to_string(),
            });
        }
        let map = normalize_remote::<Self>(value);
        Ok(serde_json::from_value(Value::Object(map))?)
    }

    /// 제출할 본문을 만듭니다.
    ///
    /// - 읽기 전용 필드 제거
    /// - 목록 필드의 빈 항목 제거
    /// - JSON 문자열 필드 인코딩
    fn to_payload(&self) -> Result<Value, AppError> {
        let mut map = match serde_json::to_value(self)? {
            Value::Object(map) => map,
            other => return Ok(other),
        };
        for key in Self::READ_ONLY_FIELDS {
            map.remove(*key);
        }
        for key in Self::ARRAY_FIELDS {
            if let Some(value) = map.get_mut(*key) {
                let list: StringList = serde_json::from_value(value.take())?;
                let cleaned = list.non_blank();
                *value = if Self::JSON_STRING_FIELDS.contains(key) {
                    Value::String(serde_json::to_string(&cleaned)?)
                } else {
                    Value::from(cleaned)
                };
            }
        }
        Ok(Value::Object(map))
    }
}

/// 원격 레코드를 로컬 필드 이름 기준의 맵으로 정리합니다.
///
/// - null 값은 버려서 기본값이 적용되게 합니다.
/// - 별칭은 로컬 이름으로 옮깁니다. 둘 다 있으면 비어 있지 않은 로컬 값을 우선합니다.
pub fn normalize_remote<E: Entity>(value: &Value) -> Map<String, Value> {
    let mut map: Map<String, Value> = match value {
        Value::Object(map) => map
            .iter()
            .filter(|(_, v)| !v.is_null())
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect(),
        _ => Map::new(),
    };

    for (remote, local) in E::FIELD_ALIASES {
        let Some(aliased) = map.remove(*remote) else {
            continue;
        };
        let local_is_empty = match map.get(*local) {
            None => true,
            Some(Value::String(s)) => s.trim().is_empty(),
            Some(Value::Array(items)) => items.is_empty(),
            Some(_) => false,
        };
        if local_is_empty {
            map.insert(local.to_string(), aliased);
        }
    }
    map
}

/// 필수 텍스트 필드 검사 헬퍼
pub fn require(errors: &mut Vec<String>, label: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(format!("{} is required", label));
    }
}
