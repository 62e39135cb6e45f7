use egui::{Color32, Vec2};

// Defaults applied when an element is created from the toolbar
pub const RECTANGLE_FILL: Color32 = Color32::RED;
pub const CIRCLE_FILL: Color32 = Color32::BLUE;
pub const TEXT_FILL: Color32 = Color32::BLACK;
pub const PLACEHOLDER_FILL: Color32 = Color32::BLACK;

pub const RECTANGLE_SIZE: Vec2 = Vec2::new(100.0, 100.0);
pub const CIRCLE_RADIUS: f32 = 30.0;
pub const PLACEHOLDER_SIZE: Vec2 = Vec2::new(100.0, 100.0);

pub const DEFAULT_TEXT: &str = "New Text";
pub const TEXT_FONT_SIZE: f32 = 16.0;

/// Stroke width of image/svg placeholder frames, in canvas units
pub const PLACEHOLDER_STROKE: f32 = 1.0;
