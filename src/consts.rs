//! Shared numeric constants for the easel crate.

// ── Surface discovery ───────────────────────────────────────────

/// Element id probed first when locating the drawing surface.
pub const DEFAULT_CANVAS_ID: &str = "easel-canvas";

// ── Input tables ────────────────────────────────────────────────

/// Number of tracked key codes (DOM `keyCode` range).
pub const KEY_COUNT: usize = 256;

/// Number of tracked mouse buttons (DOM `button` indices 0–5).
pub const BUTTON_COUNT: usize = 6;

// ── Rotated-shape geometry ──────────────────────────────────────

/// Angular step between adjacent square corners, in degrees.
pub const SQUARE_STEP_DEG: f64 = 90.0;

/// Offset from the rotation angle to the first square corner, in degrees.
pub const SQUARE_CORNER_OFFSET_DEG: f64 = 45.0;

/// Angular step between adjacent triangle vertices, in degrees.
pub const TRIANGLE_STEP_DEG: f64 = 120.0;
