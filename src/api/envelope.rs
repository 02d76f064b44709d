//! # 응답 봉투(Envelope) 해석
//!
//! 관리자 API는 보통 `{ success, data, message, error }` 형태로 응답하지만,
//! 엔드포인트마다 모양이 조금씩 다릅니다:
//! - 목록이 `data.items`, `data` 자체, 예전 형식의 `data.recent` 등에 들어 있음
//! - 페이지 정보가 `data.pagination`에 중첩되거나, 최상위에 평평하게 있음
//! - `success` 없이 배열이나 객체만 오는 경우도 있음
//!
//! 그래서 응답을 하나의 정해진 구조체로 역직렬화하지 않고, `serde_json::Value`를 들고
//! 소비하는 쪽이 정해진 순서대로 방어적으로 꺼내 쓰게 합니다.

use serde_json::{Map, Value};

use crate::error::AppError;

/// 파싱된 API 응답
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    pub success: bool,
    /// `data` 키의 값 (`success`가 없는 응답이면 응답 전체)
    pub data: Option<Value>,
    pub message: Option<String>,
    pub error: Option<String>,
    /// 원본 응답 (평평한 페이지 정보 등을 찾을 때 사용)
    pub raw: Value,
}

impl Envelope {
    /// 임의의 JSON 값을 봉투로 해석합니다.
    ///
    /// - `success` 키가 있는 객체: 표준 봉투
    /// - `success` 없이 `error`만 있는 객체: 실패 봉투
    /// - 그 외 (배열, 일반 객체): 성공으로 보고 값 전체를 data로 취급
    /// - null (204 No Content 등): 데이터 없는 성공
    pub fn from_value(raw: Value) -> Self {
        match &raw {
            Value::Null => Self {
                success: true,
                data: None,
                message: None,
                error: None,
                raw,
            },
            Value::Object(map) if map.contains_key("success") => Self {
                success: truthy(map.get("success")),
                data: map.get("data").filter(|v| !v.is_null()).cloned(),
                message: text_of(map.get("message")),
                error: error_text(map.get("error")),
                raw,
            },
            Value::Object(map) if map.contains_key("error") && !map.contains_key("data") => Self {
                success: false,
                data: None,
                message: text_of(map.get("message")),
                error: error_text(map.get("error")),
                raw,
            },
            _ => Self {
                success: true,
                data: Some(raw.clone()),
                message: None,
                error: None,
                raw,
            },
        }
    }

    /// 성공 봉투를 만듭니다.
    pub fn ok(data: Value) -> Self {
        Self::from_value(serde_json::json!({ "success": true, "data": data }))
    }

    /// 서버가 준 실패 메시지 (`message` 우선, 없으면 `error`)
    pub fn failure_message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .or_else(|| self.error.as_deref().filter(|e| !e.trim().is_empty()))
    }

    /// `success: false`이면 서버 메시지를 담은 `AppError::Api`로 바꿉니다.
    pub fn into_result(self) -> Result<Self, AppError> {
        if self.success {
            Ok(self)
        } else {
            let message = self.failure_message().unwrap_or_default().to_string();
            Err(AppError::Api(message))
        }
    }

    /// 데이터가 들어 있는 본문. `data`가 없으면 원본 응답 자체입니다.
    pub fn body(&self) -> &Value {
        self.data.as_ref().unwrap_or(&self.raw)
    }

    /// 목록 응답에서 항목 배열을 꺼냅니다.
    ///
    /// 찾는 순서: 본문이 배열 → `items` → `data` → `recent` → `results` →
    /// 처음 나오는 배열 값. 배열이 아니면 빈 목록입니다 (에러로 만들지 않음).
    pub fn items(&self) -> Vec<Value> {
        let body = self.body();
        if let Value::Array(items) = body {
            return items.clone();
        }
        let Value::Object(map) = body else {
            return Vec::new();
        };
        for key in ["items", "data", "recent", "results"] {
            if let Some(Value::Array(items)) = map.get(key) {
                return items.clone();
            }
        }
        map.values()
            .find_map(|v| v.as_array().cloned())
            .unwrap_or_default()
    }

    /// 단일 레코드 응답에서 레코드를 꺼냅니다.
    ///
    /// `data.item` → `data.<singular>` (예: "job") → `data` 순서로 찾습니다.
    pub fn record(&self, singular: &str) -> Option<&Value> {
        let body = self.body();
        if let Value::Object(map) = body {
            for key in ["item", singular] {
                if let Some(v @ Value::Object(_)) = map.get(key) {
                    return Some(v);
                }
            }
            return Some(body);
        }
        None
    }
}

/// 목록 응답의 페이지 정보
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub total: u64,
    pub pages: u32,
    pub page: Option<u32>,
}

impl Pagination {
    /// 봉투에서 페이지 정보를 찾습니다.
    ///
    /// 찾는 순서: `data.pagination` → 최상위 `pagination` → `data`의 평평한 키 →
    /// 최상위의 평평한 키. total이 없으면 받은 항목 수, pages가 없으면
    /// `ceil(total / page_size)`(최소 1)로 계산합니다.
    pub fn from_envelope(envelope: &Envelope, page_size: u32, item_count: usize) -> Self {
        let body = envelope.body();
        let candidates = [
            body.get("pagination"),
            envelope.raw.get("pagination"),
            Some(body),
            Some(&envelope.raw),
        ];

        let found = candidates
            .into_iter()
            .flatten()
            .filter_map(Value::as_object)
            .find_map(read_flat_pagination);

        let (total, pages, page) = found.unwrap_or((None, None, None));
        let total = total.unwrap_or(item_count as u64);
        let pages = pages
            .map(|p| p as u32)
            .unwrap_or_else(|| page_count(total, page_size))
            .max(1);

        Self {
            total,
            pages,
            page: page.map(|p| p as u32),
        }
    }
}

/// 전체 항목 수와 페이지 크기로 페이지 수를 계산합니다 (최소 1).
pub fn page_count(total: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 1;
    }
    (total.div_ceil(page_size as u64) as u32).max(1)
}

type FlatPagination = (Option<u64>, Option<u64>, Option<u64>);

fn read_flat_pagination(map: &Map<String, Value>) -> Option<FlatPagination> {
    let pick = |keys: &[&str]| keys.iter().find_map(|k| map.get(*k).and_then(as_u64));

    let total = pick(&["total", "total_count", "totalCount", "totalItems"]);
    let pages = pick(&["pages", "total_pages", "totalPages"]);
    let page = pick(&["page", "current_page", "currentPage"]);

    if total.is_none() && pages.is_none() {
        return None;
    }
    Some((total, pages, page))
}

/// 숫자나 숫자 문자열을 u64로 읽습니다.
pub(crate) fn as_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn truthy(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s.eq_ignore_ascii_case("true"),
        Some(Value::Number(n)) => n.as_i64() == Some(1),
        _ => false,
    }
}

fn text_of(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => Some(s.clone()),
        _ => None,
    }
}

/// `error`는 문자열이거나 `{ code, message }` 객체입니다.
fn error_text(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Object(map)) => text_of(map.get("message")),
        _ => None,
    }
}

/// HTTP 상태 코드와 본문으로 최종 결과를 만듭니다.
///
/// 실제 HTTP 클라이언트와 스크립트 클라이언트가 같은 규칙을 쓰도록 여기에 둡니다.
pub fn interpret(status: u16, body: Value) -> Result<Envelope, AppError> {
    let envelope = Envelope::from_value(body);
    if !(200..300).contains(&status) {
        let message = envelope.failure_message().map(str::to_string);
        return Err(match status {
            401 => AppError::Unauthorized(
                message.unwrap_or_else(|| "Session expired. Please log in again.".to_string()),
            ),
            404 if message.is_none() => AppError::NotFound,
            _ => AppError::Status { status, message },
        });
    }
    envelope.into_result()
}
