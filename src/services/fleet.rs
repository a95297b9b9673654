use rand::rngs::StdRng;
use rand::Rng;

use crate::models::constants::{MAX_ORIENTATION, SPEED_OF_LIGHT};
use crate::models::errors::ShipResult;
use crate::models::ship::Ship;
use crate::models::shipyard::Shipyard;

/// Half-width of the square positions are drawn from.
pub const FIELD_EXTENT: f64 = 1000.0;

/// Velocity components are drawn from ±this, so some ships start out
/// faster than light and get clamped.
pub const MAX_VELOCITY_COMPONENT: f64 = SPEED_OF_LIGHT * 4.0 / 3.0;

/// Build `count` ships with random radius, position, heading and velocity.
/// Radii fall in [minimal radius, 2 * minimal radius], capped at `f64::MAX`.
pub fn generate_fleet(
    shipyard: &Shipyard,
    rng: &mut StdRng,
    count: usize,
) -> ShipResult<Vec<Ship>> {
    let minimal = shipyard.minimal_radius();
    // Doubling a huge minimal radius overflows, and rand rejects non-finite bounds.
    let largest = (minimal * 2.0).min(f64::MAX);
    let mut fleet = Vec::with_capacity(count);

    for _ in 0..count {
        let radius = if largest > minimal {
            rng.gen_range(minimal..=largest)
        } else {
            minimal
        };
        let position = [
            rng.gen_range(-FIELD_EXTENT..=FIELD_EXTENT),
            rng.gen_range(-FIELD_EXTENT..=FIELD_EXTENT),
        ];
        let velocity = [
            rng.gen_range(-MAX_VELOCITY_COMPONENT..=MAX_VELOCITY_COMPONENT),
            rng.gen_range(-MAX_VELOCITY_COMPONENT..=MAX_VELOCITY_COMPONENT),
        ];

        let orientation = rng.gen_range(0.0..=MAX_ORIENTATION);

        let mut ship = shipyard.ship_oriented(orientation, radius)?;
        ship.set_position(&position)?;
        ship.set_velocity(velocity);
        fleet.push(ship);
    }

    log::info!("generated fleet of {} ships", fleet.len());
    Ok(fleet)
}
