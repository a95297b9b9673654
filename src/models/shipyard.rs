//! Shipyard
//!
//! Owns the minimal radius that every ship radius is checked against and
//! builds ships. Changing the minimal radius only affects ships built
//! afterwards; ships already handed out are not re-checked.
//!
//! Share one shipyard between threads by wrapping it in a `Mutex`.

use super::constants::{DEFAULT_MINIMAL_RADIUS, SPEED_OF_LIGHT};
use super::errors::{ShipError, ShipResult};
use super::ship::Ship;
use super::vector::{Vector2, ZERO};

#[derive(Debug, Clone, PartialEq)]
pub struct Shipyard {
    minimal_radius: f64,
}

impl Default for Shipyard {
    fn default() -> Self {
        Self::new()
    }
}

impl Shipyard {
    /// A shipyard with the default minimal radius of 10.
    pub fn new() -> Self {
        Shipyard {
            minimal_radius: DEFAULT_MINIMAL_RADIUS,
        }
    }

    pub fn with_minimal_radius(minimal_radius: f64) -> ShipResult<Self> {
        let mut yard = Self::new();
        yard.set_minimal_radius(minimal_radius)?;
        Ok(yard)
    }

    // ========== Minimal radius ==========

    pub fn minimal_radius(&self) -> f64 {
        self.minimal_radius
    }

    /// True iff `minimal_radius` is strictly positive.
    pub fn is_valid_minimal_radius(minimal_radius: f64) -> bool {
        minimal_radius > 0.0
    }

    /// On error the previous minimal radius is kept.
    pub fn set_minimal_radius(&mut self, minimal_radius: f64) -> ShipResult<()> {
        if !Self::is_valid_minimal_radius(minimal_radius) {
            log::warn!("rejected minimal radius {}", minimal_radius);
            return Err(ShipError::InvalidMinimalRadius);
        }
        log::debug!(
            "minimal radius changed from {} to {}",
            self.minimal_radius,
            minimal_radius
        );
        self.minimal_radius = minimal_radius;
        Ok(())
    }

    /// True iff `radius` is at least the current minimal radius.
    pub fn is_valid_radius(&self, radius: f64) -> bool {
        radius >= self.minimal_radius
    }

    // ========== Construction ==========

    /// A ship of the given radius at rest at the origin, heading 0.
    pub fn ship(&self, radius: f64) -> ShipResult<Ship> {
        if !self.is_valid_radius(radius) {
            log::warn!(
                "rejected radius {} (minimal radius {})",
                radius,
                self.minimal_radius
            );
            return Err(ShipError::InvalidRadius);
        }
        log::debug!("built ship with radius {}", radius);
        Ok(Ship::new_unchecked(radius, SPEED_OF_LIGHT))
    }

    pub fn ship_at(&self, position: &[f64], radius: f64) -> ShipResult<Ship> {
        let mut ship = self.ship(radius)?;
        ship.set_position(position)?;
        Ok(ship)
    }

    /// # Panics
    ///
    /// Panics if `orientation` is outside [0, 2π].
    pub fn ship_oriented(&self, orientation: f64, radius: f64) -> ShipResult<Ship> {
        let mut ship = self.ship(radius)?;
        ship.set_orientation(orientation);
        Ok(ship)
    }

    /// A ship of minimal radius at `position`, with `velocity` clamped to
    /// the speed of light.
    pub fn ship_moving(&self, position: &[f64], velocity: Vector2) -> ShipResult<Ship> {
        self.ship_with_speed_limit(position, velocity, SPEED_OF_LIGHT)
    }

    pub fn ship_at_rest(&self, position: &[f64]) -> ShipResult<Ship> {
        self.ship_moving(position, ZERO)
    }

    /// Like [`Shipyard::ship_moving`] with a custom speed limit. A speed
    /// limit outside (0, c] falls back to the speed of light.
    pub fn ship_with_speed_limit(
        &self,
        position: &[f64],
        velocity: Vector2,
        speed_limit: f64,
    ) -> ShipResult<Ship> {
        let speed_limit = if Ship::can_have_as_speed_limit(speed_limit) {
            speed_limit
        } else {
            log::warn!(
                "speed limit {} out of range, using {}",
                speed_limit,
                SPEED_OF_LIGHT
            );
            SPEED_OF_LIGHT
        };
        let mut ship = Ship::new_unchecked(self.minimal_radius, speed_limit);
        ship.set_position(position)?;
        ship.set_velocity(velocity);
        log::debug!("built {}", ship);
        Ok(ship)
    }
}
