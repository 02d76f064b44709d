//! # 비주얼 컴포저 장면(Scene)
//!
//! 뉴스레터 편집기의 상태 전체를 담습니다:
//! - 캔버스 요소 목록 (생성 순서 유지)
//! - 선택된 요소
//! - 본문 HTML
//! - 도형 도구의 현재 스타일
//!
//! ## 동작 규칙
//! - 모든 변경은 `revision`을 1 올립니다. 화면은 이 값으로 다시 그릴지 판단합니다.
//! - 없는 ID에 대한 작업은 조용히 무시합니다 (false/None 반환).
//! - 검증이 있는 작업은 `insert_link` 하나뿐입니다.
//! - 삽입/복제/삭제/앞으로/뒤로는 성공 알림을 보냅니다. 이동은 알림이 없습니다.

use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;

use super::document::{
    image_fragment, link_fragment, text_fragment, DocumentContent, LinkStyle, LinkTarget, TextTag,
    DEFAULT_TEXT,
};
use super::element::{
    clamp_opacity, CanvasElement, Direction, ElementId, ElementKind, ImageStyle, Point, ShapeStyle,
    ShapeType, Size,
};
use crate::services::Notifier;

/// 이미지를 위치 지정 없이 넣을 때의 자리
pub const DEFAULT_IMAGE_POSITION: Point = Point { x: 50.0, y: 50.0 };
pub const DEFAULT_IMAGE_SIZE: Size = Size {
    width: 200.0,
    height: 150.0,
};
pub const DEFAULT_SHAPE_POSITION: Point = Point { x: 150.0, y: 150.0 };
pub const DEFAULT_SHAPE_SIZE: Size = Size {
    width: 100.0,
    height: 100.0,
};
/// 방향키 한 번의 이동 거리
pub const MOVE_STEP: f64 = 10.0;
/// 복제본이 원본에서 떨어지는 거리
pub const DUPLICATE_OFFSET: f64 = 20.0;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComposerError {
    #[error("Please enter both URL and link text")]
    LinkFieldsRequired,
}

/// 뉴스레터 편집기 한 개의 상태
pub struct Scene {
    /// 생성 순서대로 쌓인 요소들. 그리는 순서는 `stack_order`로 따로 정합니다.
    elements: Vec<CanvasElement>,
    selected: Option<ElementId>,
    /// 본문 HTML. 캔버스 요소와 자동으로 맞추지 않습니다.
    document: DocumentContent,
    /// 도형 도구 패널의 현재 스타일. 새 도형에 복사됩니다.
    shape_defaults: ShapeStyle,
    image_defaults: ImageStyle,
    /// 변경 횟수. 화면이 다시 그릴지 판단하는 신호입니다.
    revision: u64,
    /// 마지막으로 발급한 ID (같은 밀리초 충돌 방지용)
    last_id: i64,
    notifier: Arc<dyn Notifier>,
}

impl Scene {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            elements: Vec::new(),
            selected: None,
            document: DocumentContent::default(),
            shape_defaults: ShapeStyle::default(),
            image_defaults: ImageStyle::default(),
            revision: 0,
            last_id: 0,
            notifier,
        }
    }

    /// 저장된 본문으로 시작합니다 (기존 뉴스레터 수정).
    pub fn with_document(notifier: Arc<dyn Notifier>, html: impl Into<String>) -> Self {
        let mut scene = Self::new(notifier);
        scene.document = DocumentContent::new(html);
        scene
    }

    // ── 조회 ──

    /// 생성 순서대로의 요소들
    pub fn elements(&self) -> &[CanvasElement] {
        &self.elements
    }

    pub fn element(&self, id: ElementId) -> Option<&CanvasElement> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// 그리는 순서 (아래 → 위). stack_order가 같으면 생성 순서를 따릅니다.
    pub fn elements_by_stack(&self) -> Vec<&CanvasElement> {
        let mut ordered: Vec<&CanvasElement> = self.elements.iter().collect();
        ordered.sort_by_key(|e| e.stack_order);
        ordered
    }

    pub fn selected(&self) -> Option<&CanvasElement> {
        self.selected.and_then(|id| self.element(id))
    }

    pub fn document(&self) -> &DocumentContent {
        &self.document
    }

    pub fn shape_defaults(&self) -> &ShapeStyle {
        &self.shape_defaults
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    // ── 내부 도우미 ──

    fn touch(&mut self) {
        self.revision += 1;
    }

    /// 밀리초 타임스탬프 ID. 같은 밀리초 안에서 여러 번 만들면 1씩 올립니다.
    fn next_id(&mut self) -> ElementId {
        let now = Utc::now().timestamp_millis();
        self.last_id = now.max(self.last_id + 1);
        ElementId(self.last_id)
    }

    fn next_stack_order(&self) -> i64 {
        self.elements.len() as i64
    }

    fn element_mut(&mut self, id: ElementId) -> Option<&mut CanvasElement> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    /// 현재 쌓임 순서의 (최솟값, 최댓값). 요소가 없으면 None.
    fn stack_bounds(&self) -> Option<(i64, i64)> {
        // Iterator는 한 번 소비하면 끝이라 clone()으로 한 벌 더 만듭니다 (요소는 복사 안 됨).
        let orders = self.elements.iter().map(|e| e.stack_order);
        let min = orders.clone().min()?;
        let max = orders.max()?;
        Some((min, max))
    }

    // ── 삽입 ──

    /// 이미지 요소를 추가하고 본문에 `<img>`를 덧붙입니다. 실패하지 않습니다.
    pub fn insert_image(&mut self, url: &str, position: Option<Point>) -> ElementId {
        let id = self.next_id();
        let style = self.image_defaults.clone();
        self.document
            .append(&image_fragment(url, style.border_radius, style.shadow));
        self.elements.push(CanvasElement {
            id,
            kind: ElementKind::Image {
                src: url.to_string(),
                style,
            },
            position: position.unwrap_or(DEFAULT_IMAGE_POSITION),
            size: DEFAULT_IMAGE_SIZE,
            rotation_degrees: 0.0,
            opacity: 1.0,
            stack_order: self.next_stack_order(),
        });
        self.touch();
        self.notifier.success("Image added");
        id
    }

    /// 도형 요소를 추가합니다. 도형은 캔버스 전용이라 본문은 건드리지 않습니다.
    pub fn insert_shape(&mut self, shape_type: ShapeType) -> ElementId {
        let id = self.next_id();
        let style = self.shape_defaults.clone();
        let opacity = clamp_opacity(style.opacity);
        self.elements.push(CanvasElement {
            id,
            kind: ElementKind::Shape { shape_type, style },
            position: DEFAULT_SHAPE_POSITION,
            size: DEFAULT_SHAPE_SIZE,
            rotation_degrees: 0.0,
            opacity,
            stack_order: self.next_stack_order(),
        });
        self.touch();
        self.notifier.success("Shape added");
        id
    }

    /// 본문에 링크를 덧붙입니다. 캔버스 요소는 만들지 않습니다.
    pub fn insert_link(
        &mut self,
        url: &str,
        text: &str,
        target: LinkTarget,
        style: LinkStyle,
    ) -> Result<(), ComposerError> {
        let (url, text) = (url.trim(), text.trim());
        if url.is_empty() || text.is_empty() {
            let err = ComposerError::LinkFieldsRequired;
            self.notifier.error(&err.to_string());
            return Err(err);
        }
        self.document.append(&link_fragment(url, text, target, style));
        self.touch();
        self.notifier.success("Link inserted");
        Ok(())
    }

    /// 서식 텍스트 블록을 본문에 덧붙입니다.
    ///
    /// 내용은 선택된 텍스트 → 입력한 내용 → "Your text here" 순서로 정합니다.
    pub fn insert_formatted_text(&mut self, tag: TextTag, content: &str, selection: Option<&str>) {
        let text = [selection.unwrap_or_default(), content]
            .into_iter()
            .map(str::trim)
            .find(|t| !t.is_empty())
            .unwrap_or(DEFAULT_TEXT);
        self.document.append(&text_fragment(tag, text));
        self.touch();
        self.notifier.success("Text inserted");
    }

    // ── 배치 ──

    /// 한 칸(10) 이동합니다.
    pub fn move_element(&mut self, id: ElementId, direction: Direction) -> bool {
        let (dx, dy) = direction.delta(MOVE_STEP);
        let Some(element) = self.element_mut(id) else {
            return false;
        };
        element.position = element.position.offset(dx, dy);
        self.touch();
        true
    }

    /// 맨 앞으로: 현재 최댓값 + 1
    pub fn move_to_front(&mut self, id: ElementId) -> bool {
        let Some((_, max)) = self.stack_bounds() else {
            return false;
        };
        let Some(element) = self.element_mut(id) else {
            return false;
        };
        element.stack_order = max + 1;
        self.touch();
        self.notifier.success("Brought to front");
        true
    }

    /// 맨 뒤로: 현재 최솟값 - 1
    pub fn move_to_back(&mut self, id: ElementId) -> bool {
        let Some((min, _)) = self.stack_bounds() else {
            return false;
        };
        let Some(element) = self.element_mut(id) else {
            return false;
        };
        element.stack_order = min - 1;
        self.touch();
        self.notifier.success("Sent to back");
        true
    }

    /// 요소를 복제합니다. 새 ID, (+20, +20) 위치, 맨 위 순서.
    pub fn duplicate_element(&mut self, id: ElementId) -> Option<ElementId> {
        let mut copy = self.element(id)?.clone();
        copy.id = self.next_id();
        copy.position = copy.position.offset(DUPLICATE_OFFSET, DUPLICATE_OFFSET);
        copy.stack_order = self.next_stack_order();

        let new_id = copy.id;
        self.elements.push(copy);
        self.touch();
        self.notifier.success("Element duplicated");
        Some(new_id)
    }

    /// 요소를 지웁니다. 선택되어 있었다면 선택도 해제합니다.
    /// 본문에 이미 들어간 HTML은 그대로 남습니다.
    pub fn delete_element(&mut self, id: ElementId) -> bool {
        let before = self.elements.len();
        self.elements.retain(|e| e.id != id);
        if self.elements.len() == before {
            return false;
        }
        if self.selected == Some(id) {
            self.selected = None;
        }
        self.touch();
        self.notifier.success("Element deleted");
        true
    }

    // ── 선택과 속성 ──

    /// 요소를 선택합니다. `None`이면 선택 해제. 없는 ID면 false.
    pub fn select(&mut self, id: Option<ElementId>) -> bool {
        if let Some(id) = id {
            if self.element(id).is_none() {
                return false;
            }
        }
        self.selected = id;
        self.touch();
        true
    }

    pub fn set_opacity(&mut self, id: ElementId, opacity: f64) -> bool {
        let Some(element) = self.element_mut(id) else {
            return false;
        };
        element.opacity = clamp_opacity(opacity);
        self.touch();
        true
    }

    pub fn set_rotation(&mut self, id: ElementId, degrees: f64) -> bool {
        let Some(element) = self.element_mut(id) else {
            return false;
        };
        element.rotation_degrees = degrees.rem_euclid(360.0);
        self.touch();
        true
    }

    pub fn resize(&mut self, id: ElementId, size: Size) -> bool {
        let Some(element) = self.element_mut(id) else {
            return false;
        };
        element.size = Size::new(size.width, size.height);
        self.touch();
        true
    }

    /// 이후 추가할 도형의 스타일
    pub fn set_shape_defaults(&mut self, style: ShapeStyle) {
        self.shape_defaults = ShapeStyle {
            opacity: clamp_opacity(style.opacity),
            ..style
        };
        self.touch();
    }

    /// 이후 추가할 이미지의 스타일
    pub fn set_image_defaults(&mut self, style: ImageStyle) {
        self.image_defaults = style;
        self.touch();
    }

    // ── 전체 ──

    /// 캔버스를 비웁니다. 본문은 남깁니다.
    pub fn reset(&mut self) {
        self.elements.clear();
        self.selected = None;
        self.touch();
    }

    /// HTML 원문 입력창에서 고친 본문으로 바꿉니다. 캔버스는 건드리지 않습니다.
    pub fn replace_document(&mut self, html: impl Into<String>) {
        self.document.replace(html);
        self.touch();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{Level, ToastLog};

    fn scene() -> (Scene, Arc<ToastLog>) {
        let toasts = Arc::new(ToastLog::new());
        (Scene::new(toasts.clone()), toasts)
    }

    #[test]
    fn ids_are_unique_and_increasing() {
        let (mut scene, _) = scene();
        let ids: Vec<ElementId> = (0..20)
            .map(|i| {
                if i % 2 == 0 {
                    scene.insert_image("a.png", None)
                } else {
                    scene.insert_shape(ShapeType::Rectangle)
                }
            })
            .collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn image_defaults_and_document_fragment() {
        let (mut scene, toasts) = scene();
        let id = scene.insert_image("https://cdn.io/a.png", None);
        let image = scene.element(id).unwrap();

        assert_eq!(image.position, Point::new(50.0, 50.0));
        assert_eq!(image.size, Size::new(200.0, 150.0));
        assert_eq!(image.stack_order, 0);
        assert!(scene.document().as_str().starts_with("<img src=\"https://cdn.io/a.png\""));
        assert_eq!(toasts.last().map(|t| t.level), Some(Level::Success));
    }

    #[test]
    fn shapes_do_not_touch_document() {
        let (mut scene, _) = scene();
        scene.set_shape_defaults(ShapeStyle {
            fill_color: "#ff0000".into(),
            opacity: 0.5,
            ..ShapeStyle::default()
        });
        let id = scene.insert_shape(ShapeType::Triangle);
        let shape = scene.element(id).unwrap();

        assert!(scene.document().is_empty());
        assert_eq!(shape.position, Point::new(150.0, 150.0));
        assert_eq!(shape.opacity, 0.5);
        assert!(matches!(
            &shape.kind,
            ElementKind::Shape { style, .. } if style.fill_color == "#ff0000"
        ));
    }

    #[test]
    fn link_requires_url_and_text() {
        let (mut scene, toasts) = scene();
        let before = scene.revision();

        let err = scene.insert_link("  ", "Click", LinkTarget::Blank, LinkStyle::Text);
        assert_eq!(err, Err(ComposerError::LinkFieldsRequired));
        assert!(scene.insert_link("https://a.io", "", LinkTarget::Blank, LinkStyle::Text).is_err());
        assert!(scene.document().is_empty());
        assert_eq!(scene.revision(), before);
        assert_eq!(toasts.last().map(|t| t.level), Some(Level::Error));

        scene
            .insert_link("https://a.io", "Click", LinkTarget::Blank, LinkStyle::Button)
            .unwrap();
        assert!(scene.document().as_str().contains("href=\"https://a.io\""));
        assert!(scene.is_empty());
    }

    #[test]
    fn formatted_text_falls_back() {
        let (mut scene, _) = scene();
        scene.insert_formatted_text(TextTag::H1, "typed", Some("selected"));
        scene.insert_formatted_text(TextTag::Paragraph, "typed", Some("  "));
        scene.insert_formatted_text(TextTag::Quote, "", None);

        let html = scene.document().as_str();
        assert!(html.contains(">selected</h1>"));
        assert!(html.contains(">typed</p>"));
        assert!(html.contains(">Your text here</blockquote>"));
    }

    #[test]
    fn move_steps_by_ten_without_notification() {
        let (mut scene, toasts) = scene();
        let id = scene.insert_shape(ShapeType::Circle);
        toasts.drain();

        scene.move_element(id, Direction::Left);
        scene.move_element(id, Direction::Down);
        assert_eq!(scene.element(id).unwrap().position, Point::new(140.0, 160.0));
        assert!(toasts.entries().is_empty());

        assert!(!scene.move_element(ElementId(-1), Direction::Up));
    }

    #[test]
    fn front_and_back_are_strict() {
        let (mut scene, _) = scene();
        let a = scene.insert_shape(ShapeType::Rectangle);
        let b = scene.insert_shape(ShapeType::Circle);
        let c = scene.insert_image("c.png", None);

        assert!(scene.move_to_front(a));
        let others_max = [b, c].iter().map(|id| scene.element(*id).unwrap().stack_order).max().unwrap();
        assert!(scene.element(a).unwrap().stack_order > others_max);

        assert!(scene.move_to_back(c));
        let others_min = [a, b].iter().map(|id| scene.element(*id).unwrap().stack_order).min().unwrap();
        assert!(scene.element(c).unwrap().stack_order < others_min);

        let order: Vec<ElementId> = scene.elements_by_stack().iter().map(|e| e.id).collect();
        assert_eq!(order, vec![c, b, a]);
    }

    #[test]
    fn empty_scene_reorder_is_a_no_op() {
        let (mut scene, toasts) = scene();
        assert!(!scene.move_to_front(ElementId(1)));
        assert!(!scene.move_to_back(ElementId(1)));
        assert_eq!(scene.revision(), 0);
        assert!(toasts.entries().is_empty());
    }

    #[test]
    fn duplicate_offsets_and_stacks_on_top() {
        let (mut scene, _) = scene();
        let a = scene.insert_image("a.png", Some(Point::new(10.0, 10.0)));
        scene.insert_shape(ShapeType::Circle);

        let copy = scene.duplicate_element(a).unwrap();
        let copy = scene.element(copy).unwrap();
        assert_ne!(copy.id, a);
        assert_eq!(copy.position, Point::new(30.0, 30.0));
        assert_eq!(copy.stack_order, 2);
        assert!(scene.duplicate_element(ElementId(0)).is_none());
    }

    #[test]
    fn delete_clears_selection_but_keeps_html() {
        let (mut scene, _) = scene();
        let a = scene.insert_image("a.png", None);
        assert!(scene.select(Some(a)));
        assert!(scene.delete_element(a));

        assert!(scene.selected().is_none());
        assert!(scene.is_empty());
        assert!(scene.document().as_str().contains("a.png"));
        assert!(!scene.delete_element(a));
    }

    #[test]
    fn property_edits_are_clamped() {
        let (mut scene, _) = scene();
        let a = scene.insert_shape(ShapeType::Rectangle);
        scene.set_opacity(a, 3.0);
        scene.set_rotation(a, -90.0);
        scene.resize(a, Size { width: -1.0, height: 40.0 });

        let element = scene.element(a).unwrap();
        assert_eq!(element.opacity, 1.0);
        assert_eq!(element.rotation_degrees, 270.0);
        assert_eq!(element.size, Size::new(1.0, 40.0));
    }

    #[test]
    fn reset_keeps_document_and_replace_keeps_canvas() {
        let (mut scene, _) = scene();
        scene.insert_image("a.png", None);
        scene.reset();
        assert!(scene.is_empty());
        assert!(!scene.document().is_empty());

        scene.insert_shape(ShapeType::Circle);
        scene.replace_document("<p>raw</p>");
        assert_eq!(scene.document().as_str(), "<p>raw</p>");
        assert_eq!(scene.len(), 1);
    }
}
