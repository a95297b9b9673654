//! Services
//!
//! Operations built on top of the ship models for the console driver.

pub mod fleet;
