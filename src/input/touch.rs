use std::collections::HashMap;

use egui::{Pos2, TouchPhase};

use crate::zoom::ZoomGesture;

/// (device id, touch id) as reported by egui
pub type TouchKey = (u64, u64);

/// Tracks active touches and recognizes two-finger pinches.
///
/// A pinch starts when exactly two touches are down, moves only while
/// exactly two touches are down, and ends as soon as any touch lifts.
#[derive(Debug, Default)]
pub struct TouchTracker {
    touches: HashMap<TouchKey, Pos2>,
    pinching: bool,
}

impl TouchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_touches(&self) -> usize {
        self.touches.len()
    }

    pub fn is_pinching(&self) -> bool {
        self.pinching
    }

    pub fn handle(&mut self, key: TouchKey, phase: TouchPhase, pos: Pos2) -> Option<ZoomGesture> {
        match phase {
            TouchPhase::Start => {
                self.touches.insert(key, pos);
                let distance = self.pair_distance()?;
                self.pinching = true;
                Some(ZoomGesture::PinchStarted { distance })
            }
            TouchPhase::Move => {
                let touch = self.touches.get_mut(&key)?;
                *touch = pos;
                if !self.pinching {
                    return None;
                }
                let distance = self.pair_distance()?;
                Some(ZoomGesture::PinchMoved { distance })
            }
            TouchPhase::End | TouchPhase::Cancel => {
                // Touches that started off the canvas were never tracked.
                if self.touches.remove(&key).is_none() || !self.pinching {
                    return None;
                }
                self.pinching = false;
                Some(ZoomGesture::PinchEnded)
            }
        }
    }

    /// Forgets every touch, e.g. when the canvas stops receiving input
    pub fn reset(&mut self) -> Option<ZoomGesture> {
        self.touches.clear();
        std::mem::take(&mut self.pinching).then_some(ZoomGesture::PinchEnded)
    }

    fn pair_distance(&self) -> Option<f32> {
        if self.touches.len() != 2 {
            return None;
        }
        let mut points = self.touches.values();
        let a = points.next()?;
        let b = points.next()?;
        Some(a.distance(*b))
    }
}
