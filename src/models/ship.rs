//! Ship model
//!
//! A circular space ship with a position, orientation, radius and a
//! velocity bounded by its speed limit. Ships are built by a
//! [`Shipyard`](super::shipyard::Shipyard), which owns the minimal radius
//! every radius is checked against.

use std::fmt;

use super::constants::{MAX_ORIENTATION, SPEED_OF_LIGHT};
use super::errors::{ShipError, ShipResult};
use super::vector::{self, Vector2, ZERO};

/// A single space ship.
///
/// Invariants:
/// - the position has two finite coordinates
/// - the orientation lies in [0, 2π]
/// - the speed never exceeds the speed limit
///
/// Radius and speed limit never change after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Ship {
    position: Vector2,
    orientation: f64,
    radius: f64,
    velocity: Vector2,
    speed_limit: f64,
}

impl Ship {
    /// Bare ship at the origin, at rest, heading 0. The shipyard has
    /// already checked both arguments.
    pub(super) fn new_unchecked(radius: f64, speed_limit: f64) -> Self {
        Ship {
            position: ZERO,
            orientation: 0.0,
            radius,
            velocity: ZERO,
            speed_limit,
        }
    }

    // ========== Position ==========

    pub fn position(&self) -> Vector2 {
        self.position
    }

    /// True iff `position` has exactly two coordinates and both are finite.
    pub fn is_valid_position(position: &[f64]) -> bool {
        vector::from_slice(position).is_some_and(vector::is_finite)
    }

    /// Move the ship. On error the previous position is kept.
    pub fn set_position(&mut self, position: &[f64]) -> ShipResult<()> {
        match vector::from_slice(position) {
            Some(p) if vector::is_finite(p) => {
                self.position = p;
                Ok(())
            }
            _ => {
                log::warn!("rejected position {:?}", position);
                Err(ShipError::InvalidPosition)
            }
        }
    }

    // ========== Orientation ==========

    /// Heading in radians.
    pub fn orientation(&self) -> f64 {
        self.orientation
    }

    pub fn is_valid_orientation(orientation: f64) -> bool {
        (0.0..=MAX_ORIENTATION).contains(&orientation)
    }

    /// Turn the ship.
    ///
    /// # Panics
    ///
    /// Panics if `orientation` is outside [0, 2π]. Callers must check with
    /// [`Ship::is_valid_orientation`] first.
    pub fn set_orientation(&mut self, orientation: f64) {
        assert!(
            Self::is_valid_orientation(orientation),
            "orientation {} outside [0, 2π]",
            orientation
        );
        self.orientation = orientation;
    }

    // ========== Radius ==========

    pub fn radius(&self) -> f64 {
        self.radius
    }

    // ========== Velocity ==========

    pub fn velocity(&self) -> Vector2 {
        self.velocity
    }

    /// Current speed, the length of the velocity.
    pub fn speed(&self) -> f64 {
        vector::norm(self.velocity)
    }

    /// True iff the speed of `velocity` does not exceed this ship's limit.
    pub fn is_valid_velocity(&self, velocity: Vector2) -> bool {
        vector::norm(velocity) <= self.speed_limit
    }

    /// Set the velocity, scaling it down to the speed limit when it is too
    /// fast. The direction is always preserved.
    ///
    /// Velocities with a NaN or infinite component have no usable
    /// direction and are ignored.
    pub fn set_velocity(&mut self, velocity: Vector2) {
        if !vector::is_finite(velocity) {
            log::warn!("ignored non-finite velocity {:?}", velocity);
            return;
        }
        if self.is_valid_velocity(velocity) {
            self.velocity = velocity;
            return;
        }
        // Too fast implies a non-zero norm, so a direction always exists.
        if let Some(mut clamped) = vector::with_length(velocity, self.speed_limit) {
            // Rounding can leave the rescaled speed an ulp above the limit.
            // Each step lowers every non-zero component by at least one ulp.
            while !self.is_valid_velocity(clamped) {
                clamped = [
                    clamped[0] * (1.0 - f64::EPSILON),
                    clamped[1] * (1.0 - f64::EPSILON),
                ];
            }
            log::debug!(
                "clamped velocity {:?} to {:?} (limit {})",
                velocity,
                clamped,
                self.speed_limit
            );
            self.velocity = clamped;
        }
    }

    // ========== Speed limit ==========

    pub fn speed_limit(&self) -> f64 {
        self.speed_limit
    }

    /// True iff `speed_limit` is in (0, c].
    pub fn can_have_as_speed_limit(speed_limit: f64) -> bool {
        speed_limit > 0.0 && speed_limit <= SPEED_OF_LIGHT
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "ship r={:.1} at ({:.1}, {:.1}) heading {:.3} moving ({:.1}, {:.1})",
            self.radius,
            self.position[0],
            self.position[1],
            self.orientation,
            self.velocity[0],
            self.velocity[1],
        )
    }
}
