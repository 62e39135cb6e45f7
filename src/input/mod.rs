use egui::{Context, Event, Rect, TouchPhase};

mod touch;
pub use touch::{TouchKey, TouchTracker};

use crate::zoom::ZoomGesture;

/// Converts the frame's raw egui events into zoom gestures for the canvas.
///
/// Touches are only tracked when they start over the canvas, and wheel
/// events only count while the pointer hovers it with Ctrl/Cmd held.
#[derive(Debug, Default)]
pub struct CanvasInput {
    touches: TouchTracker,
}

impl CanvasInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pinching(&self) -> bool {
        self.touches.is_pinching()
    }

    pub fn process_input(&mut self, ctx: &Context, canvas_rect: Rect) -> Vec<ZoomGesture> {
        let mut gestures = Vec::new();

        ctx.input(|input| {
            let hovering = input
                .pointer
                .hover_pos()
                .is_some_and(|pos| canvas_rect.contains(pos));

            for event in &input.raw.events {
                match event {
                    Event::Touch {
                        device_id,
                        id,
                        phase,
                        pos,
                        ..
                    } => {
                        if *phase == TouchPhase::Start && !canvas_rect.contains(*pos) {
                            continue;
                        }
                        if let Some(gesture) = self.touches.handle((device_id.0, id.0), *phase, *pos) {
                            gestures.push(gesture);
                        }
                    }
                    Event::MouseWheel {
                        delta, modifiers, ..
                    } if hovering && (modifiers.ctrl || modifiers.command) => {
                        gestures.push(ZoomGesture::Wheel {
                            scroll_y: delta.y,
                            modifier: true,
                        });
                    }
                    _ => {}
                }
            }
        });

        gestures
    }

    /// Drops all touch tracking, ending any pinch in progress
    pub fn reset(&mut self) -> Option<ZoomGesture> {
        self.touches.reset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::headless::{self, run_frames};
    use egui::{Modifiers, Pos2, pos2};

    const CANVAS: Rect = Rect::from_min_max(Pos2::ZERO, pos2(500.0, 500.0));

    fn collect_gestures(input: &mut CanvasInput, frames: Vec<Vec<Event>>) -> Vec<ZoomGesture> {
        let ctx = Context::default();
        let mut gestures = Vec::new();
        run_frames(&ctx, frames, |ctx| {
            gestures.extend(input.process_input(ctx, CANVAS));
        });
        gestures
    }

    #[test]
    fn test_touch_starting_off_canvas_is_ignored() {
        let mut input = CanvasInput::new();
        let started = collect_gestures(
            &mut input,
            vec![vec![
                headless::touch(1, TouchPhase::Start, pos2(100.0, 100.0)),
                headless::touch(2, TouchPhase::Start, pos2(700.0, 100.0)),
            ]],
        );
        assert_eq!(started, Vec::new());
        assert!(!input.is_pinching());

        let pinch = collect_gestures(
            &mut input,
            vec![
                vec![headless::touch(2, TouchPhase::End, pos2(700.0, 100.0))],
                vec![headless::touch(3, TouchPhase::Start, pos2(200.0, 100.0))],
                vec![headless::touch(3, TouchPhase::Move, pos2(300.0, 100.0))],
            ],
        );
        assert_eq!(
            pinch,
            vec![
                ZoomGesture::PinchStarted { distance: 100.0 },
                ZoomGesture::PinchMoved { distance: 200.0 },
            ]
        );
    }

    #[test]
    fn test_lifting_off_canvas_finger_keeps_pinch() {
        let mut input = CanvasInput::new();
        let events = collect_gestures(
            &mut input,
            vec![
                vec![headless::touch(1, TouchPhase::Start, pos2(100.0, 100.0))],
                vec![headless::touch(2, TouchPhase::Start, pos2(200.0, 100.0))],
                vec![headless::touch(9, TouchPhase::Start, pos2(900.0, 100.0))],
                vec![headless::touch(9, TouchPhase::End, pos2(900.0, 100.0))],
            ],
        );
        assert_eq!(events, vec![ZoomGesture::PinchStarted { distance: 100.0 }]);
        assert!(input.is_pinching());
        assert_eq!(input.reset(), Some(ZoomGesture::PinchEnded));
    }

    #[test]
    fn test_wheel_needs_hover_and_modifier() {
        let mut input = CanvasInput::new();
        let events = collect_gestures(
            &mut input,
            vec![
                vec![
                    Event::PointerMoved(pos2(100.0, 100.0)),
                    headless::wheel(10.0, Modifiers::CTRL),
                ],
                vec![headless::wheel(10.0, Modifiers::NONE)],
                vec![headless::wheel(-5.0, Modifiers::COMMAND)],
                vec![
                    Event::PointerMoved(pos2(700.0, 100.0)),
                    headless::wheel(10.0, Modifiers::CTRL),
                ],
            ],
        );
        assert_eq!(
            events,
            vec![
                ZoomGesture::Wheel {
                    scroll_y: 10.0,
                    modifier: true,
                },
                ZoomGesture::Wheel {
                    scroll_y: -5.0,
                    modifier: true,
                },
            ]
        );
    }
}
