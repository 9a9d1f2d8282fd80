//! Polygon vertex math for the rotated-shape helpers.
//!
//! Pure functions: they compute where the corners of a rotated shape land
//! and leave all drawing to [`crate::draw`]. Sizes are edge-to-edge spans;
//! vertices sit on a circle of radius `size / 2` around the center.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use crate::consts::{SQUARE_CORNER_OFFSET_DEG, SQUARE_STEP_DEG, TRIANGLE_STEP_DEG};
use crate::vec2::Vec2;

/// Corners of a square of size `size` centered on `center`, rotated by
/// `angle_deg` degrees.
///
/// Corners sit at 90° steps starting 45° past the rotation angle, in path
/// order.
#[must_use]
pub fn rotated_square_corners(center: Vec2, size: f64, angle_deg: f64) -> [Vec2; 4] {
    let radius = size / 2.0;
    let mut corners = [Vec2::default(); 4];
    for (i, corner) in corners.iter_mut().enumerate() {
        let theta = angle_deg + SQUARE_CORNER_OFFSET_DEG + SQUARE_STEP_DEG * i as f64;
        let mut offset = Vec2::from_angle_deg(theta);
        offset.scale(radius);
        offset.add(center);
        *corner = offset;
    }
    corners
}

/// Vertices of an equilateral triangle of size `size` centered on `center`,
/// rotated by `angle_deg` degrees.
///
/// The first vertex points along the rotation angle; the others follow at
/// 120° steps.
#[must_use]
pub fn rotated_triangle_vertices(center: Vec2, size: f64, angle_deg: f64) -> [Vec2; 3] {
    let radius = size / 2.0;
    let mut vertices = [Vec2::default(); 3];
    for (i, vertex) in vertices.iter_mut().enumerate() {
        let theta = angle_deg + TRIANGLE_STEP_DEG * i as f64;
        let mut offset = Vec2::from_angle_deg(theta);
        offset.scale(radius);
        offset.add(center);
        *vertex = offset;
    }
    vertices
}
