//! # 문서 본문(HTML)
//!
//! 캔버스와 나란히 유지되는 뉴스레터 본문 문자열입니다.
//! 삽입 작업은 HTML 조각을 끝에 덧붙이기만 하고, 이미 들어간 조각을 다시 고치지 않습니다.
//! 그래서 캔버스 요소를 지워도 본문의 `<img>`는 남습니다.

use std::fmt;

/// HTML 특수문자 이스케이프
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentContent(String);

impl DocumentContent {
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn append(&mut self, fragment: &str) {
        self.0.push_str(fragment);
    }

    /// HTML 원문 입력창에서 직접 고친 내용으로 통째로 바꿉니다.
    pub fn replace(&mut self, html: impl Into<String>) {
        self.0 = html.into();
    }
}

impl fmt::Display for DocumentContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── 링크 ──

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkTarget {
    /// 새 탭
    #[default]
    Blank,
    SameTab,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkStyle {
    #[default]
    Text,
    Button,
}

pub fn link_fragment(url: &str, text: &str, target: LinkTarget, style: LinkStyle) -> String {
    let target_attr = match target {
        LinkTarget::Blank => " target=\"_blank\" rel=\"noopener noreferrer\"",
        LinkTarget::SameTab => "",
    };
    let css = match style {
        LinkStyle::Text => "color: #667eea; text-decoration: underline;",
        LinkStyle::Button => {
            "display: inline-block; padding: 12px 24px; background: #667eea; \
             color: #ffffff; border-radius: 6px; text-decoration: none; font-weight: 600;"
        }
    };
    format!(
        "<a href=\"{}\"{} style=\"{}\">{}</a>",
        escape_html(url),
        target_attr,
        css,
        escape_html(text)
    )
}

// ── 이미지 ──

pub fn image_fragment(src: &str, radius: u32, shadow: bool) -> String {
    let shadow_css = if shadow {
        " box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);"
    } else {
        ""
    };
    format!(
        "<img src=\"{}\" alt=\"\" style=\"max-width: 100%; height: auto; border-radius: {}px;{}\">",
        escape_html(src),
        radius,
        shadow_css
    )
}

// ── 서식 텍스트 ──

/// 서식 텍스트 도구의 블록 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextTag {
    H1,
    H2,
    Paragraph,
    Quote,
    /// 그라데이션 배경의 강조 박스
    Callout,
}

pub const DEFAULT_TEXT: &str = "Your text here";

pub fn text_fragment(tag: TextTag, text: &str) -> String {
    let text = escape_html(text);
    match tag {
        TextTag::H1 => format!(
            "<h1 style=\"font-size: 32px; font-weight: 700; margin: 16px 0;\">{}</h1>",
            text
        ),
        TextTag::H2 => format!(
            "<h2 style=\"font-size: 24px; font-weight: 600; margin: 14px 0;\">{}</h2>",
            text
        ),
        TextTag::Paragraph => format!(
            "<p style=\"font-size: 16px; line-height: 1.6; margin: 12px 0;\">{}</p>",
            text
        ),
        TextTag::Quote => format!(
            "<blockquote style=\"border-left: 4px solid #667eea; padding-left: 16px; \
             margin: 16px 0; font-style: italic; color: #4a5568;\">{}</blockquote>",
            text
        ),
        TextTag::Callout => format!(
            "<div style=\"background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); \
             color: #ffffff; padding: 20px; border-radius: 8px; margin: 16px 0;\">{}</div>",
            text
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn link_fragment_has_target_and_escaped_text() {
        let html = link_fragment("https://a.io/?q=1&r=2", "Read <more>", LinkTarget::Blank, LinkStyle::Text);
        assert!(html.starts_with("<a href=\"https://a.io/?q=1&amp;r=2\" target=\"_blank\""));
        assert!(html.ends_with(">Read &lt;more&gt;</a>"));

        let same_tab = link_fragment("/x", "x", LinkTarget::SameTab, LinkStyle::Button);
        assert!(!same_tab.contains("target="));
        assert!(same_tab.contains("inline-block"));
    }

    #[test]
    fn text_tags_pick_elements() {
        assert!(text_fragment(TextTag::H2, "Hi").starts_with("<h2"));
        assert!(text_fragment(TextTag::Quote, "Hi").starts_with("<blockquote"));
        assert!(text_fragment(TextTag::Callout, "Hi").contains("linear-gradient"));
    }
}
