//! Asteroids ship model
//!
//! A circular space ship with a position, orientation, radius and a
//! velocity bounded by a speed limit, plus the shipyard that validates and
//! builds ships.
//!
//! # Modules
//!
//! - [`models`] - Ship, Shipyard, errors and constants
//! - [`services`] - Seeded fleet generation
//! - [`io`] - Output abstraction for testing
//! - [`ui`] - Console presentation
//! - [`cli`] - Argument parsing for the console binary
//!
//! # Example
//!
//! ```rust
//! use asteroids::{Shipyard, ShipError};
//!
//! let yard = Shipyard::new();
//! assert_eq!(yard.ship(5.0), Err(ShipError::InvalidRadius));
//!
//! let mut ship = yard.ship_at(&[0.0, 0.0], 10.0).unwrap();
//! ship.set_velocity([400000.0, 0.0]);
//! assert_eq!(ship.velocity(), [300000.0, 0.0]);
//! ```

pub mod cli;
pub mod io;
pub mod models;
pub mod services;
pub mod ui;

// Re-export commonly used types
pub use models::constants::SPEED_OF_LIGHT;
pub use models::errors::{ShipError, ShipResult};
pub use models::ship::Ship;
pub use models::shipyard::Shipyard;
