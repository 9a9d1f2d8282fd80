//! Shape drawing helpers over a [`Surface`]'s 2d context.
//!
//! Each helper computes its geometry first, then issues a short, fixed
//! sequence of primitive calls (begin path, move/line/arc, close path, set
//! style, stroke or fill). Color and font parameters are passed through to
//! the context untouched.
//!
//! Fallible context calls (`arc`, `fill_text`, `draw_image`) propagate
//! errors via `Result<(), JsValue>`; pure path construction cannot fail.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::HtmlImageElement;

use crate::geometry::{rotated_square_corners, rotated_triangle_vertices};
use crate::surface::Surface;
use crate::vec2::Vec2;

// =============================================================
// Lines and circles
// =============================================================

/// Stroke a line segment from `start` to `end`.
pub fn line(surface: &Surface, start: Vec2, end: Vec2, color: &str) {
    let ctx = surface.context();
    ctx.begin_path();
    ctx.set_stroke_style_str(color);
    ctx.move_to(start.x, start.y);
    ctx.line_to(end.x, end.y);
    ctx.stroke();
}

/// Stroke a circle of diameter `size` centered on `center`.
///
/// # Errors
///
/// Returns `Err` if the underlying arc call fails.
pub fn circle(surface: &Surface, center: Vec2, size: f64, color: &str) -> Result<(), JsValue> {
    let ctx = surface.context();
    ctx.begin_path();
    ctx.set_stroke_style_str(color);
    ctx.arc(center.x, center.y, (size / 2.0).abs(), 0.0, 2.0 * PI)?;
    ctx.stroke();
    Ok(())
}

/// Fill a circle of diameter `size` centered on `center`.
///
/// # Errors
///
/// Returns `Err` if the underlying arc call fails.
pub fn filled_circle(surface: &Surface, center: Vec2, size: f64, color: &str) -> Result<(), JsValue> {
    let ctx = surface.context();
    ctx.begin_path();
    ctx.set_fill_style_str(color);
    ctx.arc(center.x, center.y, (size / 2.0).abs(), 0.0, 2.0 * PI)?;
    ctx.fill();
    Ok(())
}

// =============================================================
// Rectangles
// =============================================================

/// Stroke an axis-aligned rectangle with top-left corner `origin`.
pub fn rect(surface: &Surface, origin: Vec2, width: f64, height: f64, color: &str) {
    let ctx = surface.context();
    ctx.begin_path();
    ctx.set_stroke_style_str(color);
    ctx.rect(origin.x, origin.y, width, height);
    ctx.stroke();
}

/// Fill an axis-aligned rectangle with top-left corner `origin`.
pub fn filled_rect(surface: &Surface, origin: Vec2, width: f64, height: f64, color: &str) {
    let ctx = surface.context();
    ctx.begin_path();
    ctx.set_fill_style_str(color);
    ctx.rect(origin.x, origin.y, width, height);
    ctx.fill();
}

// =============================================================
// Polygons with explicit vertices
// =============================================================

/// Stroke a quadrilateral through four explicit vertices.
pub fn quad(surface: &Surface, points: [Vec2; 4], color: &str) {
    let ctx = surface.context();
    ctx.begin_path();
    ctx.move_to(points[0].x, points[0].y);
    ctx.line_to(points[1].x, points[1].y);
    ctx.line_to(points[2].x, points[2].y);
    ctx.line_to(points[3].x, points[3].y);
    ctx.close_path();
    ctx.set_stroke_style_str(color);
    ctx.stroke();
}

/// Fill a quadrilateral through four explicit vertices.
pub fn filled_quad(surface: &Surface, points: [Vec2; 4], color: &str) {
    let ctx = surface.context();
    ctx.begin_path();
    ctx.move_to(points[0].x, points[0].y);
    ctx.line_to(points[1].x, points[1].y);
    ctx.line_to(points[2].x, points[2].y);
    ctx.line_to(points[3].x, points[3].y);
    ctx.close_path();
    ctx.set_fill_style_str(color);
    ctx.fill();
}

/// Stroke a triangle through three explicit vertices.
pub fn triangle(surface: &Surface, points: [Vec2; 3], color: &str) {
    let ctx = surface.context();
    ctx.begin_path();
    ctx.move_to(points[0].x, points[0].y);
    ctx.line_to(points[1].x, points[1].y);
    ctx.line_to(points[2].x, points[2].y);
    ctx.close_path();
    ctx.set_stroke_style_str(color);
    ctx.stroke();
}

/// Fill a triangle through three explicit vertices.
pub fn filled_triangle(surface: &Surface, points: [Vec2; 3], color: &str) {
    let ctx = surface.context();
    ctx.begin_path();
    ctx.move_to(points[0].x, points[0].y);
    ctx.line_to(points[1].x, points[1].y);
    ctx.line_to(points[2].x, points[2].y);
    ctx.close_path();
    ctx.set_fill_style_str(color);
    ctx.fill();
}

// =============================================================
// Rotated shapes
// =============================================================

/// Stroke a square of size `size` centered on `center`, rotated by
/// `angle_deg` degrees.
pub fn rotated_square(surface: &Surface, center: Vec2, size: f64, angle_deg: f64, color: &str) {
    quad(surface, rotated_square_corners(center, size, angle_deg), color);
}

/// Fill a square of size `size` centered on `center`, rotated by
/// `angle_deg` degrees.
pub fn rotated_filled_square(surface: &Surface, center: Vec2, size: f64, angle_deg: f64, color: &str) {
    filled_quad(surface, rotated_square_corners(center, size, angle_deg), color);
}

/// Stroke an equilateral triangle of size `size` centered on `center`,
/// rotated by `angle_deg` degrees.
pub fn rotated_triangle(surface: &Surface, center: Vec2, size: f64, angle_deg: f64, color: &str) {
    triangle(surface, rotated_triangle_vertices(center, size, angle_deg), color);
}

/// Fill an equilateral triangle of size `size` centered on `center`,
/// rotated by `angle_deg` degrees.
pub fn rotated_filled_triangle(surface: &Surface, center: Vec2, size: f64, angle_deg: f64, color: &str) {
    filled_triangle(surface, rotated_triangle_vertices(center, size, angle_deg), color);
}

// =============================================================
// Text and images
// =============================================================

/// Draw `text` at `pos` with the given CSS font descriptor and fill color.
///
/// # Errors
///
/// Returns `Err` if the underlying text call fails.
pub fn text(surface: &Surface, text: &str, pos: Vec2, font: &str, color: &str) -> Result<(), JsValue> {
    let ctx = surface.context();
    ctx.set_font(font);
    ctx.set_fill_style_str(color);
    ctx.fill_text(text, pos.x, pos.y)?;
    Ok(())
}

/// Blit `img` at `pos`, scaled to `width` × `height`.
///
/// # Errors
///
/// Returns `Err` if the underlying image call fails (e.g. the image is in a
/// broken state).
pub fn image(
    surface: &Surface,
    img: &HtmlImageElement,
    pos: Vec2,
    width: f64,
    height: f64,
) -> Result<(), JsValue> {
    surface
        .context()
        .draw_image_with_html_image_element_and_dw_and_dh(img, pos.x, pos.y, width, height)
}
