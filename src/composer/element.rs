//! # 캔버스 요소
//!
//! 뉴스레터 편집기 위에 떠 있는 이미지/도형 하나하나입니다.
//!
//! - 좌표는 캔버스 왼쪽 위가 원점입니다.
//! - `stack_order`는 클수록 위에 그려집니다. 서로 비교만 하므로 연속이거나 유일할 필요가 없습니다.
//! - 크기는 항상 양수, 불투명도는 `[0, 1]` 범위입니다.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 요소 ID (생성 시각의 밀리초 타임스탬프)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub i64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// 요소 크기. 0 이하의 값은 1로 올립니다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const MIN: f64 = 1.0;

    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: clamp_extent(width),
            height: clamp_extent(height),
        }
    }
}

fn clamp_extent(value: f64) -> f64 {
    if value.is_finite() && value >= Size::MIN {
        value
    } else {
        Size::MIN
    }
}

/// 불투명도를 `[0, 1]`로 맞춥니다. NaN은 1(완전 불투명)로 봅니다.
pub fn clamp_opacity(value: f64) -> f64 {
    if value.is_nan() {
        1.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// 이동 방향 (방향키 한 번)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// 한 번 이동할 때의 (dx, dy)
    pub fn delta(self, step: f64) -> (f64, f64) {
        match self {
            Direction::Up => (0.0, -step),
            Direction::Down => (0.0, step),
            Direction::Left => (-step, 0.0),
            Direction::Right => (step, 0.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeType {
    Rectangle,
    Circle,
    Triangle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageStyle {
    /// 모서리 둥글기 (px)
    pub border_radius: u32,
    pub shadow: bool,
}

impl Default for ImageStyle {
    fn default() -> Self {
        Self {
            border_radius: 8,
            shadow: false,
        }
    }
}

/// 도형 도구에서 고른 색/선 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    pub fill_color: String,
    pub stroke_color: String,
    pub stroke_width: u32,
    pub opacity: f64,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            fill_color: "#667eea".to_string(),
            stroke_color: "#4c51bf".to_string(),
            stroke_width: 2,
            opacity: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ElementKind {
    Image { src: String, style: ImageStyle },
    Shape { shape_type: ShapeType, style: ShapeStyle },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasElement {
    pub id: ElementId,
    #[serde(flatten)]
    pub kind: ElementKind,
    pub position: Point,
    pub size: Size,
    pub rotation_degrees: f64,
    pub opacity: f64,
    pub stack_order: i64,
}

impl CanvasElement {
    pub fn is_image(&self) -> bool {
        matches!(self.kind, ElementKind::Image { .. })
    }
}
