#[cfg(test)]
#[path = "vec2_test.rs"]
mod vec2_test;

/// A position or offset in 2-D space.
///
/// Arithmetic methods mutate the receiver in place; the type is `Copy`, so
/// binding it to a new name yields an independent value (the copy operation).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing along `angle_deg` degrees.
    #[must_use]
    pub fn from_angle_deg(angle_deg: f64) -> Self {
        let r = angle_deg.to_radians();
        Self::new(r.cos(), r.sin())
    }

    /// Add `other` component-wise.
    pub fn add(&mut self, other: Vec2) {
        self.x += other.x;
        self.y += other.y;
    }

    /// Subtract `other` component-wise.
    pub fn sub(&mut self, other: Vec2) {
        self.x -= other.x;
        self.y -= other.y;
    }

    /// Multiply both components by `k`.
    pub fn scale(&mut self, k: f64) {
        self.x *= k;
        self.y *= k;
    }

    /// Divide both components by `k`.
    ///
    /// Division by zero follows IEEE semantics and yields non-finite
    /// components rather than an error.
    pub fn div(&mut self, k: f64) {
        self.x /= k;
        self.y /= k;
    }

    /// Euclidean norm.
    #[must_use]
    pub fn mag(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Rescale to unit magnitude, keeping the direction.
    ///
    /// # Panics
    ///
    /// Panics on a zero-magnitude vector, which has no direction.
    pub fn normalize(&mut self) {
        let mag = self.mag();
        assert_ne!(mag, 0.0, "normalize on a zero-magnitude vector");
        self.x /= mag;
        self.y /= mag;
    }

    /// Rescale to magnitude `m`, keeping the direction.
    ///
    /// # Panics
    ///
    /// Panics on a zero-magnitude vector, which has no direction.
    pub fn set_mag(&mut self, m: f64) {
        let mag = self.mag();
        assert_ne!(mag, 0.0, "set_mag on a zero-magnitude vector");
        let k = m / mag;
        self.x *= k;
        self.y *= k;
    }
}

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: Vec2, b: Vec2) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}
