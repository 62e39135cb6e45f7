use paged_canvas::zoom::{ZoomConfig, ZoomController, ZoomGesture};

fn assert_close(actual: f32, expected: f32) {
    assert!((actual - expected).abs() < 1e-5, "expected {expected}, got {actual}");
}

#[test]
fn test_buttons_stay_within_button_bounds() {
    let mut zoom = ZoomController::default();
    for _ in 0..50 {
        zoom.zoom_in();
        assert!(zoom.scale() <= 3.0);
    }
    assert_eq!(zoom.scale(), 3.0);

    for _ in 0..50 {
        zoom.zoom_out();
        assert!(zoom.scale() >= 0.5);
    }
    assert_eq!(zoom.scale(), 0.5);
}

#[test]
fn test_single_steps() {
    let mut zoom = ZoomController::default();
    assert!(zoom.zoom_in());
    assert_close(zoom.scale(), 1.1);
    assert!(zoom.zoom_out());
    assert!(zoom.zoom_out());
    assert_close(zoom.scale(), 0.9);
}

#[test]
fn test_pinch_scales_relative_to_start() {
    let mut zoom = ZoomController::default();
    zoom.begin_pinch(100.0);
    assert!(zoom.is_pinching());

    zoom.update_pinch(200.0);
    assert_close(zoom.scale(), 2.0);
    // Ratio is always taken against the initial distance and scale.
    zoom.update_pinch(50.0);
    assert_close(zoom.scale(), 0.5);

    zoom.end_pinch();
    assert!(!zoom.is_pinching());
    assert!(!zoom.update_pinch(400.0));
    assert_close(zoom.scale(), 0.5);
}

#[test]
fn test_pinch_is_clamped() {
    let mut zoom = ZoomController::default();
    zoom.begin_pinch(100.0);
    zoom.update_pinch(10_000.0);
    assert_eq!(zoom.scale(), 3.0);
    zoom.update_pinch(1.0);
    assert_eq!(zoom.scale(), 0.1);
}

#[test]
fn test_zoom_out_never_raises_scale_below_button_floor() {
    let mut zoom = ZoomController::default();
    zoom.begin_pinch(100.0);
    zoom.update_pinch(20.0);
    zoom.end_pinch();
    assert_close(zoom.scale(), 0.2);

    assert!(!zoom.zoom_out());
    assert_close(zoom.scale(), 0.2);

    assert!(zoom.zoom_in());
    assert_close(zoom.scale(), 0.3);
}

#[test]
fn test_wheel_requires_modifier() {
    let mut zoom = ZoomController::default();
    assert!(!zoom.wheel(1.0, false));
    assert_eq!(zoom.scale(), 1.0);

    assert!(zoom.wheel(1.0, true));
    assert_close(zoom.scale(), 1.1);
    assert!(zoom.wheel(-1.0, true));
    assert_close(zoom.scale(), 0.99);
}

#[test]
fn test_wheel_is_clamped() {
    let mut zoom = ZoomController::default();
    for _ in 0..100 {
        zoom.wheel(-3.0, true);
    }
    assert_eq!(zoom.scale(), 0.1);
    for _ in 0..100 {
        zoom.wheel(3.0, true);
    }
    assert_eq!(zoom.scale(), 3.0);
}

#[test]
fn test_mixed_gestures_stay_in_bounds() {
    let mut zoom = ZoomController::default();
    let gestures = [
        ZoomGesture::Wheel { scroll_y: 2.0, modifier: true },
        ZoomGesture::PinchStarted { distance: 40.0 },
        ZoomGesture::PinchMoved { distance: 400.0 },
        ZoomGesture::PinchMoved { distance: 2.0 },
        ZoomGesture::PinchEnded,
        ZoomGesture::Wheel { scroll_y: -2.0, modifier: true },
        ZoomGesture::PinchStarted { distance: 10.0 },
        ZoomGesture::PinchMoved { distance: 1000.0 },
    ];
    for gesture in gestures {
        zoom.apply(gesture);
        assert!((0.1..=3.0).contains(&zoom.scale()), "scale {} out of bounds", zoom.scale());
        zoom.zoom_out();
        assert!((0.1..=3.0).contains(&zoom.scale()));
    }
}

#[test]
fn test_custom_bounds() {
    let config = ZoomConfig {
        min_scale: 0.25,
        max_scale: 2.0,
        ..ZoomConfig::default()
    };
    let mut zoom = ZoomController::new(config);
    zoom.begin_pinch(100.0);
    zoom.update_pinch(1.0);
    assert_eq!(zoom.scale(), 0.25);
    zoom.update_pinch(1000.0);
    assert_eq!(zoom.scale(), 2.0);
}
