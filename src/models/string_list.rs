//! # 문자열 목록 필드 (skills, tags, features 등)
//!
//! 같은 필드가 코드 경로에 따라 세 가지 모양으로 옵니다:
//! - JSON 배열: `["rust", "go"]`
//! - JSON으로 인코딩된 문자열: `"[\"rust\",\"go\"]"`
//! - 쉼표로 구분된 문자열: `"rust, go"`
//!
//! 시스템 경계(역직렬화)에서 `RawStringList`로 분류한 뒤 `normalize()` 한 번으로
//! `StringList`(순서 있는 문자열 목록)로 바꾸고, 내부에서는 항상 `StringList`만 씁니다.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// 원격에서 받은 목록 필드의 원래 모양
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawStringList {
    Array(Vec<String>),
    JsonString(String),
    CsvString(String),
}

impl RawStringList {
    /// JSON 값이 어떤 모양인지 분류합니다.
    ///
    /// null은 빈 배열, 숫자/불리언 같은 단일 값은 원소 하나짜리 배열로 봅니다.
    pub fn classify(value: &Value) -> Self {
        match value {
            Value::Null => RawStringList::Array(Vec::new()),
            Value::Array(items) => RawStringList::Array(items.iter().filter_map(scalar_text).collect()),
            Value::String(s) if s.trim_start().starts_with('[') => RawStringList::JsonString(s.clone()),
            Value::String(s) => RawStringList::CsvString(s.clone()),
            other => RawStringList::Array(scalar_text(other).into_iter().collect()),
        }
    }

    /// 표준 형태로 바꿉니다.
    ///
    /// 배열은 편집 중인 빈 행까지 그대로 유지합니다.
    /// 문자열로 인코딩된 목록은 항목을 trim하고 빈 항목을 버립니다.
    /// JSON 문자열이 깨져 있으면 대괄호를 벗겨 쉼표 구분 문자열로 다시 시도합니다.
    pub fn normalize(self) -> StringList {
        match self {
            RawStringList::Array(items) => StringList(items),
            RawStringList::JsonString(text) => match serde_json::from_str::<Vec<Value>>(&text) {
                Ok(values) => StringList(
                    values
                        .iter()
                        .filter_map(scalar_text)
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect(),
                ),
                Err(_) => {
                    tracing::debug!("malformed JSON list, falling back to comma split");
                    let inner = text.trim().trim_start_matches('[').trim_end_matches(']');
                    split_csv(&inner.replace('"', ""))
                }
            },
            RawStringList::CsvString(text) => split_csv(&text),
        }
    }
}

fn split_csv(text: &str) -> StringList {
    StringList(
        text.split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
    )
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// 순서 있는 문자열 목록
///
/// 직렬화하면 평범한 JSON 배열이 됩니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StringList(Vec<String>);

impl StringList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, value: impl Into<String>) {
        self.0.push(value.into());
    }

    /// 같은 값(대소문자 무시)이 없을 때만 추가합니다. 추가했으면 true.
    pub fn push_unique(&mut self, value: &str) -> bool {
        let value = value.trim();
        if value.is_empty() || self.0.iter().any(|v| v.trim().eq_ignore_ascii_case(value)) {
            return false;
        }
        self.0.push(value.to_string());
        true
    }

    /// 위치로 값을 바꿉니다. 범위를 벗어나면 아무것도 하지 않습니다.
    pub fn set(&mut self, index: usize, value: impl Into<String>) -> bool {
        match self.0.get_mut(index) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// 위치로 삭제합니다. 범위를 벗어나면 None.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        (index < self.0.len()).then(|| self.0.remove(index))
    }

    /// 공백이 아닌 항목만 (trim해서) 남긴 목록. 제출 직전에 사용합니다.
    pub fn non_blank(&self) -> Vec<String> {
        self.0
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// 공백이 아닌 항목이 하나라도 있는지
    pub fn has_content(&self) -> bool {
        self.0.iter().any(|s| !s.trim().is_empty())
    }

    /// 입력 행 목록. 비어 있어도 빈 행 하나는 보여줍니다.
    pub fn rows(&self) -> Vec<String> {
        if self.0.is_empty() {
            vec![String::new()]
        } else {
            self.0.clone()
        }
    }
}

impl<S: Into<String>> FromIterator<S> for StringList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        StringList(iter.into_iter().map(Into::into).collect())
    }
}

impl<'de> Deserialize<'de> for StringList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(RawStringList::classify(&value).normalize())
    }
}
