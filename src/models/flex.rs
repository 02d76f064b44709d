//! 느슨한 타입의 원격 값을 받아주는 역직렬화 헬퍼.
//!
//! SQLite 계열 백엔드는 불리언을 `0`/`1`로, 폼에서 온 값은 `"true"`로 보내기도 합니다.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// `true`, `1`, `"1"`, `"true"`, `"yes"`, `"on"`을 참으로 읽습니다. null은 거짓입니다.
pub fn bool_from_any<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        ),
        _ => false,
    })
}

/// 숫자나 숫자 문자열을 i64로 읽습니다. 읽을 수 없으면 0입니다.
pub fn int_from_any<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)).unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}
