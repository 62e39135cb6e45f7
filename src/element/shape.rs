use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke, Vec2};

use super::ElementKind;
use super::common::*;

/// Geometry specific to each element variant.
///
/// Sizes are in canvas units; `paint` multiplies them by the current scale.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Anchored at its top-left corner
    Rectangle { size: Vec2 },
    /// Anchored at its center
    Circle { radius: f32 },
    /// Anchored at the top-left of the first line
    Text { text: String, font_size: f32 },
    Image { size: Vec2 },
    Svg { size: Vec2 },
}

impl Shape {
    /// Default geometry and fill for a newly created element of `kind`
    pub fn defaults(kind: ElementKind) -> (Self, Color32) {
        match kind {
            ElementKind::Rectangle => (
                Self::Rectangle {
                    size: RECTANGLE_SIZE,
                },
                RECTANGLE_FILL,
            ),
            ElementKind::Circle => (
                Self::Circle {
                    radius: CIRCLE_RADIUS,
                },
                CIRCLE_FILL,
            ),
            ElementKind::Text => (
                Self::Text {
                    text: DEFAULT_TEXT.to_owned(),
                    font_size: TEXT_FONT_SIZE,
                },
                TEXT_FILL,
            ),
            ElementKind::Image => (
                Self::Image {
                    size: PLACEHOLDER_SIZE,
                },
                PLACEHOLDER_FILL,
            ),
            ElementKind::Svg => (
                Self::Svg {
                    size: PLACEHOLDER_SIZE,
                },
                PLACEHOLDER_FILL,
            ),
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Rectangle { .. } => ElementKind::Rectangle,
            Self::Circle { .. } => ElementKind::Circle,
            Self::Text { .. } => ElementKind::Text,
            Self::Image { .. } => ElementKind::Image,
            Self::Svg { .. } => ElementKind::Svg,
        }
    }

    /// Draws the shape with its anchor at `anchor` (screen space) and returns
    /// the screen-space bounds, which double as the drag handle.
    pub fn paint(&self, painter: &Painter, anchor: Pos2, scale: f32, fill: Color32) -> Rect {
        match self {
            Self::Rectangle { size } => {
                let rect = Rect::from_min_size(anchor, *size * scale);
                painter.rect_filled(rect, 0.0, fill);
                rect
            }
            Self::Circle { radius } => {
                let radius = radius * scale;
                painter.circle_filled(anchor, radius, fill);
                Rect::from_center_size(anchor, Vec2::splat(radius * 2.0))
            }
            Self::Text { text, font_size } => {
                let galley =
                    painter.layout_no_wrap(text.clone(), FontId::proportional(font_size * scale), fill);
                let rect = Rect::from_min_size(anchor, galley.size());
                painter.galley(anchor, galley, fill);
                rect
            }
            Self::Image { size } => paint_placeholder(painter, anchor, *size, scale, fill, "IMAGE"),
            Self::Svg { size } => paint_placeholder(painter, anchor, *size, scale, fill, "SVG"),
        }
    }
}

// Image and SVG content is never loaded, so both draw a labelled frame.
fn paint_placeholder(
    painter: &Painter,
    anchor: Pos2,
    size: Vec2,
    scale: f32,
    color: Color32,
    label: &str,
) -> Rect {
    let rect = Rect::from_min_size(anchor, size * scale);
    let stroke = Stroke::new(PLACEHOLDER_STROKE * scale, color);
    painter.rect_stroke(rect, 0.0, stroke);
    painter.line_segment([rect.left_top(), rect.right_bottom()], stroke);
    painter.line_segment([rect.right_top(), rect.left_bottom()], stroke);
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        label,
        FontId::proportional(12.0 * scale),
        color,
    );
    rect
}
