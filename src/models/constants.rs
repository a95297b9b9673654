use std::f64::consts::PI;

/// Speed of light in km/s. Upper bound for every ship's speed limit.
pub const SPEED_OF_LIGHT: f64 = 300000.0;

/// Minimal radius a freshly built shipyard starts with.
pub const DEFAULT_MINIMAL_RADIUS: f64 = 10.0;

/// Orientations live in [0, MAX_ORIENTATION].
pub const MAX_ORIENTATION: f64 = 2.0 * PI;

/// Number of coordinates in a position or velocity.
pub const DIMENSIONS: usize = 2;
