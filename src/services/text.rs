//! # 텍스트 유틸리티
//!
//! 폼 필드 자동 파생과 검증에 쓰는 문자열 함수들입니다.
//!
//! - `sync_slug()`: 비어 있던 slug를 제목으로 채움
//! - `sync_mirror()`: 비어 있던 meta_title 같은 필드를 제목으로 채움
//! - `is_blank()`: 공백만 있는 문자열인지
//! - `is_iso_date()`: `YYYY-MM-DD` 형식인지

use chrono::NaiveDate;

/// 공백만 있거나 빈 문자열인지 확인합니다.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// 제목으로 slug를 만듭니다.
///
/// slug::slugify(): 소문자로 바꾸고, 영숫자가 아닌 문자를 없애고, 공백을 하이픈으로 바꿉니다.
/// 앞뒤 하이픈은 남지 않습니다. 예: "Hello World!" → "hello-world"
pub fn make_slug(title: &str) -> String {
    slug::slugify(title)
}

/// 원본 필드(제목)가 바뀌었을 때 slug를 채웁니다.
///
/// 변경 전 slug가 비어 있었을 때만 바꿉니다.
/// 이미 저장된 레코드의 공개 주소는 제목을 고쳐도 그대로입니다.
pub fn sync_slug(slug: &mut String, before_slug: &str, source: &str) {
    if before_slug.is_empty() {
        *slug = make_slug(source);
    }
}

/// 원본 필드가 바뀌었을 때 비어 있던 거울 필드(meta_title 등)를 채웁니다.
pub fn sync_mirror(target: &mut String, before_target: &str, source: &str) {
    if before_target.is_empty() {
        *target = source.to_string();
    }
}

/// `YYYY-MM-DD` 날짜 문자열인지 확인합니다. 시각이 붙은 ISO 문자열(`2025-01-31T00:00:00Z`)도 허용합니다.
pub fn is_iso_date(text: &str) -> bool {
    let date_part = text.trim().get(..10).unwrap_or(text);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").is_ok()
}

/// http(s) 주소인지 확인합니다.
pub fn is_http_url(text: &str) -> bool {
    let text = text.trim();
    text.starts_with("http://") || text.starts_with("https://")
}

/// 아주 느슨한 이메일 형식 확인 (`@` 앞뒤에 글자가 있는지)
pub fn looks_like_email(text: &str) -> bool {
    match text.trim().split_once('@') {
        Some((user, domain)) => !user.is_empty() && domain.contains('.'),
        None => false,
    }
}
