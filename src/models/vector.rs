//! Plain 2-vectors used for positions and velocities.
//!
//! Vectors are `[f64; 2]` and always passed by value, so callers never
//! share storage with a ship.

use super::constants::DIMENSIONS;

/// (x, y) in km for positions, km/s for velocities.
pub type Vector2 = [f64; DIMENSIONS];

/// The zero vector.
pub const ZERO: Vector2 = [0.0, 0.0];

/// Euclidean length.
pub fn norm(v: Vector2) -> f64 {
    v[0].hypot(v[1])
}

pub fn is_finite(v: Vector2) -> bool {
    v.iter().all(|c| c.is_finite())
}

/// Convert a slice of exactly two coordinates.
pub fn from_slice(coords: &[f64]) -> Option<Vector2> {
    match coords {
        [x, y] => Some([*x, *y]),
        _ => None,
    }
}

/// Same direction as `v`, scaled to `length`.
///
/// Returns `None` for the zero vector and for non-finite input, where no
/// direction can be derived. Finite input whose norm would overflow is
/// handled.
pub fn with_length(v: Vector2, length: f64) -> Option<Vector2> {
    if !is_finite(v) {
        return None;
    }
    let largest = v[0].abs().max(v[1].abs());
    if largest == 0.0 {
        return None;
    }
    // Unit-scale first so neither the norm nor the product can overflow.
    let scaled = [v[0] / largest, v[1] / largest];
    let current = norm(scaled);
    Some([scaled[0] / current * length, scaled[1] / current * length])
}
