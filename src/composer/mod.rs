//! # 뉴스레터 비주얼 컴포저
//!
//! 위치를 가진 요소(이미지, 도형)들의 장면과, 그와 느슨하게 연결된 본문 HTML을 관리합니다.
//!
//! 두 결과물은 일부러 따로 둡니다:
//! - 캔버스 요소 목록: 이동/복제/삭제/순서 변경의 대상
//! - 본문 HTML: 삽입 작업이 조각을 덧붙이는 문자열
//!
//! 한쪽을 고쳐도 다른 쪽은 다시 계산하지 않습니다.
//!
//! 각 하위 모듈:
//! - `element`: 요소, 좌표, 스타일 타입
//! - `document`: 본문 문자열과 HTML 조각 생성
//! - `scene`: 편집 작업

pub mod document;
pub mod element;
pub mod scene;

pub use document::{escape_html, DocumentContent, LinkStyle, LinkTarget, TextTag};
pub use element::{
    CanvasElement, Direction, ElementId, ElementKind, ImageStyle, Point, ShapeStyle, ShapeType, Size,
};
pub use scene::{ComposerError, Scene};
