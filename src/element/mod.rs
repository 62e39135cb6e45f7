use std::fmt;

use egui::{Color32, Painter, Pos2, Rect};

use crate::page::PageId;

mod common;
mod shape;

pub use common::*;
pub use shape::Shape;

/// Stable element identifier, allocated from a monotonically increasing
/// counter. Ids are never reused, even after the page that owned an element
/// is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Discriminant of the element variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Rectangle,
    Circle,
    Text,
    Image,
    Svg,
}

impl ElementKind {
    pub const ALL: [Self; 5] = [
        Self::Rectangle,
        Self::Circle,
        Self::Text,
        Self::Image,
        Self::Svg,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Rectangle => "RECTANGLE",
            Self::Circle => "CIRCLE",
            Self::Text => "TEXT",
            Self::Image => "IMAGE",
            Self::Svg => "SVG",
        }
    }
}

/// A drawable shape placed on a page
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    id: ElementId,
    page: PageId,
    position: Pos2,
    fill: Color32,
    shape: Shape,
    visible: bool,
    locked: bool,
}

impl Element {
    /// Creates an element of `kind` with that kind's default fill and geometry
    pub fn new(id: ElementId, kind: ElementKind, page: PageId, position: Pos2) -> Self {
        let (shape, fill) = Shape::defaults(kind);
        Self {
            id,
            page,
            position,
            fill,
            shape,
            visible: true,
            locked: false,
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn kind(&self) -> ElementKind {
        self.shape.kind()
    }

    /// Page this element belongs to
    pub fn page(&self) -> PageId {
        self.page
    }

    /// Anchor position in canvas units
    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub(crate) fn set_position(&mut self, position: Pos2) {
        self.position = position;
    }

    pub fn fill(&self) -> Color32 {
        self.fill
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Locked elements are drawn but cannot be dragged
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    /// Draws the element on a page whose top-left corner sits at `origin`
    /// (screen space). Returns the element's screen-space bounds.
    pub fn paint(&self, painter: &Painter, origin: Pos2, scale: f32) -> Rect {
        let anchor = origin + self.position.to_vec2() * scale;
        self.shape.paint(painter, anchor, scale, self.fill)
    }
}
