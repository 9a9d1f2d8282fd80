#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// MouseButton
// =============================================================

#[test]
fn from_index_maps_all_six_buttons() {
    assert_eq!(MouseButton::from_index(0), Some(MouseButton::Primary));
    assert_eq!(MouseButton::from_index(1), Some(MouseButton::Middle));
    assert_eq!(MouseButton::from_index(2), Some(MouseButton::Secondary));
    assert_eq!(MouseButton::from_index(3), Some(MouseButton::Back));
    assert_eq!(MouseButton::from_index(4), Some(MouseButton::Forward));
    assert_eq!(MouseButton::from_index(5), Some(MouseButton::Eraser));
}

#[test]
fn from_index_rejects_out_of_range() {
    assert_eq!(MouseButton::from_index(6), None);
    assert_eq!(MouseButton::from_index(-1), None);
    assert_eq!(MouseButton::from_index(i16::MAX), None);
}

#[test]
fn index_inverts_from_index() {
    for i in 0..6_i16 {
        let button = MouseButton::from_index(i).unwrap();
        assert_eq!(button.index(), usize::try_from(i).unwrap());
    }
}

// =============================================================
// Tracker defaults
// =============================================================

#[test]
fn new_tracker_has_no_keys_pressed() {
    let tracker = InputTracker::new();
    assert!(!tracker.is_key_pressed(0));
    assert!(!tracker.is_key_pressed(65));
    assert!(!tracker.is_key_pressed(255));
}

#[test]
fn new_tracker_has_no_buttons_pressed() {
    let tracker = InputTracker::new();
    for i in 0..6_i16 {
        assert!(!tracker.is_button_pressed(MouseButton::from_index(i).unwrap()));
    }
}

#[test]
fn new_tracker_pointer_at_origin() {
    let tracker = InputTracker::new();
    assert_eq!(tracker.pointer_x(), 0.0);
    assert_eq!(tracker.pointer_y(), 0.0);
}

// =============================================================
// Key events
// =============================================================

#[test]
fn key_down_then_up_round_trip() {
    let mut tracker = InputTracker::new();

    tracker.apply(InputEvent::KeyDown { code: 65 });
    assert!(tracker.is_key_pressed(65));

    tracker.apply(InputEvent::KeyUp { code: 65 });
    assert!(!tracker.is_key_pressed(65));
}

#[test]
fn untouched_keys_stay_unpressed() {
    let mut tracker = InputTracker::new();
    tracker.apply(InputEvent::KeyDown { code: 65 });

    assert!(!tracker.is_key_pressed(64));
    assert!(!tracker.is_key_pressed(66));
    assert!(!tracker.is_key_pressed(0));
    assert!(!tracker.is_key_pressed(255));
}

#[test]
fn repeated_key_down_is_idempotent() {
    let mut tracker = InputTracker::new();
    tracker.apply(InputEvent::KeyDown { code: 32 });
    tracker.apply(InputEvent::KeyDown { code: 32 });
    assert!(tracker.is_key_pressed(32));

    tracker.apply(InputEvent::KeyUp { code: 32 });
    assert!(!tracker.is_key_pressed(32));
}

#[test]
fn key_up_without_down_is_a_no_op() {
    let mut tracker = InputTracker::new();
    tracker.apply(InputEvent::KeyUp { code: 65 });
    assert!(!tracker.is_key_pressed(65));
}

#[test]
fn boundary_key_codes_are_tracked() {
    let mut tracker = InputTracker::new();
    tracker.apply(InputEvent::KeyDown { code: 0 });
    tracker.apply(InputEvent::KeyDown { code: 255 });
    assert!(tracker.is_key_pressed(0));
    assert!(tracker.is_key_pressed(255));
}

#[test]
fn multiple_keys_held_simultaneously() {
    let mut tracker = InputTracker::new();
    tracker.apply(InputEvent::KeyDown { code: 87 });
    tracker.apply(InputEvent::KeyDown { code: 68 });
    assert!(tracker.is_key_pressed(87));
    assert!(tracker.is_key_pressed(68));

    tracker.apply(InputEvent::KeyUp { code: 87 });
    assert!(!tracker.is_key_pressed(87));
    assert!(tracker.is_key_pressed(68));
}

// =============================================================
// Button events
// =============================================================

#[test]
fn button_down_then_up_round_trip() {
    let mut tracker = InputTracker::new();

    tracker.apply(InputEvent::ButtonDown { button: MouseButton::Primary });
    assert!(tracker.is_button_pressed(MouseButton::Primary));

    tracker.apply(InputEvent::ButtonUp { button: MouseButton::Primary });
    assert!(!tracker.is_button_pressed(MouseButton::Primary));
}

#[test]
fn buttons_are_tracked_independently() {
    let mut tracker = InputTracker::new();
    tracker.apply(InputEvent::ButtonDown { button: MouseButton::Secondary });

    assert!(!tracker.is_button_pressed(MouseButton::Primary));
    assert!(!tracker.is_button_pressed(MouseButton::Middle));
    assert!(tracker.is_button_pressed(MouseButton::Secondary));
}

// =============================================================
// Pointer events
// =============================================================

#[test]
fn pointer_move_records_position() {
    let mut tracker = InputTracker::new();
    tracker.apply(InputEvent::PointerMoved { x: 120.0, y: 80.0 });
    assert_eq!(tracker.pointer_position(), Vec2::new(120.0, 80.0));
    assert_eq!(tracker.pointer_x(), 120.0);
    assert_eq!(tracker.pointer_y(), 80.0);
}

#[test]
fn later_pointer_move_overwrites_earlier() {
    let mut tracker = InputTracker::new();
    tracker.apply(InputEvent::PointerMoved { x: 1.0, y: 2.0 });
    tracker.apply(InputEvent::PointerMoved { x: 3.0, y: 4.0 });
    assert_eq!(tracker.pointer_position(), Vec2::new(3.0, 4.0));
}

#[test]
fn enter_and_leave_update_position_like_motion() {
    let mut tracker = InputTracker::new();

    tracker.apply(InputEvent::PointerEntered { x: 10.0, y: 20.0 });
    assert_eq!(tracker.pointer_position(), Vec2::new(10.0, 20.0));

    tracker.apply(InputEvent::PointerLeft { x: -5.0, y: 700.0 });
    assert_eq!(tracker.pointer_position(), Vec2::new(-5.0, 700.0));
}

#[test]
fn pointer_events_do_not_disturb_buttons_or_keys() {
    let mut tracker = InputTracker::new();
    tracker.apply(InputEvent::KeyDown { code: 65 });
    tracker.apply(InputEvent::ButtonDown { button: MouseButton::Primary });

    tracker.apply(InputEvent::PointerMoved { x: 50.0, y: 60.0 });

    assert!(tracker.is_key_pressed(65));
    assert!(tracker.is_button_pressed(MouseButton::Primary));
}

// =============================================================
// Combined scenario
// =============================================================

#[test]
fn drag_gesture_sequence() {
    let mut tracker = InputTracker::new();

    tracker.apply(InputEvent::PointerMoved { x: 100.0, y: 100.0 });
    tracker.apply(InputEvent::ButtonDown { button: MouseButton::Primary });
    tracker.apply(InputEvent::PointerMoved { x: 140.0, y: 90.0 });

    assert!(tracker.is_button_pressed(MouseButton::Primary));
    assert_eq!(tracker.pointer_position(), Vec2::new(140.0, 90.0));

    tracker.apply(InputEvent::ButtonUp { button: MouseButton::Primary });
    assert!(!tracker.is_button_pressed(MouseButton::Primary));
    assert_eq!(tracker.pointer_position(), Vec2::new(140.0, 90.0));
}
