//! Drives a headless egui context frame by frame for widget tests.
use egui::{
    Context, Event, Key, Modifiers, MouseWheelUnit, PointerButton, Pos2, RawInput, Rect,
    TouchDeviceId, TouchId, TouchPhase, pos2, vec2,
};

pub(crate) const SCREEN: Rect = Rect::from_min_max(Pos2::ZERO, pos2(1200.0, 1600.0));

/// Runs one frame per entry of `frames`, feeding that entry's events.
pub(crate) fn run_frames(ctx: &Context, frames: Vec<Vec<Event>>, mut ui: impl FnMut(&Context)) {
    for events in frames {
        let input = RawInput {
            screen_rect: Some(SCREEN),
            events,
            ..Default::default()
        };
        let _ = ctx.run(input, &mut ui);
    }
}

pub(crate) fn idle(count: usize) -> Vec<Vec<Event>> {
    vec![Vec::new(); count]
}

pub(crate) fn button(pos: Pos2, pressed: bool) -> Event {
    Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed,
        modifiers: Modifiers::NONE,
    }
}

/// Hover, press and release at `pos` over three frames
pub(crate) fn click(pos: Pos2) -> Vec<Vec<Event>> {
    vec![
        vec![Event::PointerMoved(pos)],
        vec![button(pos, true)],
        vec![button(pos, false)],
    ]
}

/// Press at `from`, move to `to` in `steps` equal frames, release
pub(crate) fn drag(from: Pos2, to: Pos2, steps: usize) -> Vec<Vec<Event>> {
    let mut frames = vec![vec![Event::PointerMoved(from)], vec![button(from, true)]];
    for step in 1..=steps {
        let pos = from + (to - from) * (step as f32 / steps as f32);
        frames.push(vec![Event::PointerMoved(pos)]);
    }
    frames.push(vec![button(to, false)]);
    frames
}

pub(crate) fn key(key: Key) -> Event {
    Event::Key {
        key,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers: Modifiers::NONE,
    }
}

pub(crate) fn touch(id: u64, phase: TouchPhase, pos: Pos2) -> Event {
    Event::Touch {
        device_id: TouchDeviceId(0),
        id: TouchId(id),
        phase,
        pos,
        force: None,
    }
}

pub(crate) fn wheel(scroll_y: f32, modifiers: Modifiers) -> Event {
    Event::MouseWheel {
        unit: MouseWheelUnit::Point,
        delta: vec2(0.0, scroll_y),
        modifiers,
    }
}
