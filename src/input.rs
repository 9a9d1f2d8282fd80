//! Input model: typed UI events and the pressed-state tracker.
//!
//! `InputTracker` is a passive record of what is held right now: a table of
//! key codes, a table of mouse buttons, and the last observed pointer
//! position. It is mutated only through [`InputTracker::apply`], which the
//! event layer ([`crate::listen`]) calls once per delivered browser event.
//! Application code reads the tracker between frames; it never writes.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::consts::{BUTTON_COUNT, KEY_COUNT};
use crate::vec2::Vec2;

/// Mouse button identifier, covering the six indices DOM events can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Left button.
    Primary,
    /// Scroll-wheel click.
    Middle,
    /// Right button.
    Secondary,
    /// Browser-back side button.
    Back,
    /// Browser-forward side button.
    Forward,
    /// Sixth button (pen eraser on some devices).
    Eraser,
}

impl MouseButton {
    /// Map a DOM `button` index (0–5) to a button, or `None` past the range.
    #[must_use]
    pub fn from_index(index: i16) -> Option<Self> {
        match index {
            0 => Some(Self::Primary),
            1 => Some(Self::Middle),
            2 => Some(Self::Secondary),
            3 => Some(Self::Back),
            4 => Some(Self::Forward),
            5 => Some(Self::Eraser),
            _ => None,
        }
    }

    /// Slot in the pressed-state table.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Primary => 0,
            Self::Middle => 1,
            Self::Secondary => 2,
            Self::Back => 3,
            Self::Forward => 4,
            Self::Eraser => 5,
        }
    }
}

/// A UI input event, as delivered by the host event layer.
///
/// Key codes are `u8`, so the tracked 0–255 range is enforced by the type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A key went down.
    KeyDown { code: u8 },
    /// A key was released.
    KeyUp { code: u8 },
    /// A mouse button went down.
    ButtonDown { button: MouseButton },
    /// A mouse button was released.
    ButtonUp { button: MouseButton },
    /// The pointer moved to `(x, y)`.
    PointerMoved { x: f64, y: f64 },
    /// The pointer entered the tracked region at `(x, y)`.
    PointerEntered { x: f64, y: f64 },
    /// The pointer left the tracked region; `(x, y)` is its last position.
    PointerLeft { x: f64, y: f64 },
}

/// Current keyboard/mouse state, folded in one event at a time.
///
/// Coordinates are in whatever space the host events report (viewport
/// coordinates for DOM mouse events), not canvas-local space.
#[derive(Debug, Clone)]
pub struct InputTracker {
    keys: [bool; KEY_COUNT],
    buttons: [bool; BUTTON_COUNT],
    pointer: Vec2,
}

impl Default for InputTracker {
    fn default() -> Self {
        Self {
            keys: [false; KEY_COUNT],
            buttons: [false; BUTTON_COUNT],
            pointer: Vec2::default(),
        }
    }
}

impl InputTracker {
    /// A tracker with nothing pressed and the pointer at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one event into the state.
    ///
    /// Each event is a single idempotent write: a boolean flip or a
    /// coordinate overwrite. Enter and leave events update the pointer
    /// position exactly as motion does.
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown { code } => self.keys[usize::from(code)] = true,
            InputEvent::KeyUp { code } => self.keys[usize::from(code)] = false,
            InputEvent::ButtonDown { button } => self.buttons[button.index()] = true,
            InputEvent::ButtonUp { button } => self.buttons[button.index()] = false,
            InputEvent::PointerMoved { x, y }
            | InputEvent::PointerEntered { x, y }
            | InputEvent::PointerLeft { x, y } => self.pointer = Vec2::new(x, y),
        }
    }

    /// Whether the key with code `code` is currently held.
    #[must_use]
    pub fn is_key_pressed(&self, code: u8) -> bool {
        self.keys[usize::from(code)]
    }

    /// Whether `button` is currently held.
    #[must_use]
    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.buttons[button.index()]
    }

    /// Last observed pointer position.
    #[must_use]
    pub fn pointer_position(&self) -> Vec2 {
        self.pointer
    }

    /// Horizontal component of the last observed pointer position.
    #[must_use]
    pub fn pointer_x(&self) -> f64 {
        self.pointer.x
    }

    /// Vertical component of the last observed pointer position.
    #[must_use]
    pub fn pointer_y(&self) -> f64 {
        self.pointer.y
    }
}
