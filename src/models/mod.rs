//! Domain models
//!
//! The ship, the shipyard that builds it, and the small value types they
//! share. Models are pure data with validation and no I/O.

pub mod constants;
pub mod errors;
pub mod ship;
pub mod shipyard;
pub mod vector;
