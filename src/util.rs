//! Scalar helpers: clamping, angle conversion, and random selection.

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;

use rand::Rng;

/// Clamp `n` into `[lo, hi]`.
///
/// # Panics
///
/// Panics when `lo > hi`, matching the contract of [`f64::clamp`].
#[must_use]
pub fn clamp(n: f64, lo: f64, hi: f64) -> f64 {
    assert!(lo <= hi, "clamp requires lo <= hi");
    if n > hi {
        hi
    } else if n < lo {
        lo
    } else {
        n
    }
}

/// Convert degrees to radians.
#[must_use]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Convert radians to degrees.
#[must_use]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Uniform random integer in the inclusive range `[min, max]`.
///
/// # Panics
///
/// Panics when `min > max` (empty range).
#[must_use]
pub fn random_int(min: i64, max: i64) -> i64 {
    rand::rng().random_range(min..=max)
}

/// Uniformly chosen element of `items`.
///
/// # Panics
///
/// Panics on an empty slice, which has nothing to choose from.
#[must_use]
pub fn random_element<T>(items: &[T]) -> &T {
    assert!(!items.is_empty(), "random_element on an empty slice");
    &items[rand::rng().random_range(0..items.len())]
}
