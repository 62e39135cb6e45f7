use serde::Deserialize;

/// Bounds and step sizes for the zoom controller
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    /// Lowest scale reachable by gestures and the wheel
    pub min_scale: f32,
    pub max_scale: f32,
    /// Zoom Out never goes below this
    pub button_min_scale: f32,
    pub button_step: f32,
    pub wheel_zoom_in: f32,
    pub wheel_zoom_out: f32,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min_scale: 0.1,
            max_scale: 3.0,
            button_min_scale: 0.5,
            button_step: 0.1,
            wheel_zoom_in: 1.1,
            wheel_zoom_out: 0.9,
        }
    }
}

/// Pointer-free description of a zoom input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZoomGesture {
    /// A second finger touched down; `distance` is between the two touches
    PinchStarted { distance: f32 },
    PinchMoved { distance: f32 },
    /// A finger lifted or the touch was cancelled
    PinchEnded,
    /// `scroll_y` follows egui: positive when the wheel rolls away from the user
    Wheel { scroll_y: f32, modifier: bool },
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Pinch {
    initial_distance: f32,
    initial_scale: f32,
}

// Touches closer than this cannot anchor a pinch ratio.
const MIN_PINCH_DISTANCE: f32 = 1e-3;

/// Holds the canvas scale and turns button, pinch and wheel input into
/// scale changes, always clamped to the configured bounds.
#[derive(Debug, Clone)]
pub struct ZoomController {
    config: ZoomConfig,
    scale: f32,
    pinch: Option<Pinch>,
}

impl Default for ZoomController {
    fn default() -> Self {
        Self::new(ZoomConfig::default())
    }
}

impl ZoomController {
    pub fn new(config: ZoomConfig) -> Self {
        Self {
            config,
            scale: 1.0_f32.max(config.min_scale).min(config.max_scale),
            pinch: None,
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    pub fn is_pinching(&self) -> bool {
        self.pinch.is_some()
    }

    /// Sets the scale directly, clamped to `[min_scale, max_scale]`
    pub fn set_scale(&mut self, scale: f32) -> bool {
        let scale = scale.max(self.config.min_scale).min(self.config.max_scale);
        let changed = scale != self.scale;
        self.scale = scale;
        changed
    }

    pub fn zoom_in(&mut self) -> bool {
        let next = (self.scale + self.config.button_step).min(self.config.max_scale);
        self.set_scale(next)
    }

    /// Steps down, but never below `button_min_scale` and never upwards when
    /// a gesture already took the scale under that floor.
    pub fn zoom_out(&mut self) -> bool {
        let next = (self.scale - self.config.button_step).max(self.config.button_min_scale);
        if next >= self.scale {
            return false;
        }
        self.set_scale(next)
    }

    pub fn begin_pinch(&mut self, distance: f32) {
        if distance < MIN_PINCH_DISTANCE {
            self.pinch = None;
            return;
        }
        self.pinch = Some(Pinch {
            initial_distance: distance,
            initial_scale: self.scale,
        });
    }

    pub fn update_pinch(&mut self, distance: f32) -> bool {
        let Some(pinch) = self.pinch else {
            return false;
        };
        self.set_scale(pinch.initial_scale * (distance / pinch.initial_distance))
    }

    pub fn end_pinch(&mut self) {
        self.pinch = None;
    }

    /// Applies a wheel step. Unmodified or zero-delta wheel input is left
    /// alone; egui already routes Ctrl/Cmd + wheel away from scrolling.
    pub fn wheel(&mut self, scroll_y: f32, modifier: bool) -> bool {
        if !modifier || scroll_y == 0.0 {
            return false;
        }
        let factor = if scroll_y > 0.0 {
            self.config.wheel_zoom_in
        } else {
            self.config.wheel_zoom_out
        };
        self.set_scale(self.scale * factor)
    }

    /// Dispatches a gesture. Returns whether the scale changed.
    pub fn apply(&mut self, gesture: ZoomGesture) -> bool {
        match gesture {
            ZoomGesture::PinchStarted { distance } => {
                self.begin_pinch(distance);
                false
            }
            ZoomGesture::PinchMoved { distance } => self.update_pinch(distance),
            ZoomGesture::PinchEnded => {
                self.end_pinch();
                false
            }
            ZoomGesture::Wheel { scroll_y, modifier } => self.wheel(scroll_y, modifier),
        }
    }
}
