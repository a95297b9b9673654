use std::fmt;

/// Ship-specific error types
///
/// Each variant names the invariant that was violated. Orientation is not
/// here: an out-of-range orientation is a caller bug and panics instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipError {
    /// Position does not have exactly two finite coordinates
    InvalidPosition,
    /// Radius is below the shipyard's minimal radius
    InvalidRadius,
    /// Minimal radius is not strictly positive
    InvalidMinimalRadius,
}

/// Type alias for Results using ShipError
pub type ShipResult<T> = Result<T, ShipError>;

impl fmt::Display for ShipError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ShipError::InvalidPosition => {
                write!(f, "Invalid position: expected two finite coordinates")
            }
            ShipError::InvalidRadius => {
                write!(f, "Invalid radius: below the minimal radius")
            }
            ShipError::InvalidMinimalRadius => {
                write!(f, "Invalid minimal radius: must be strictly positive")
            }
        }
    }
}

impl std::error::Error for ShipError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_broken_invariant() {
        assert!(ShipError::InvalidPosition.to_string().contains("position"));
        assert!(ShipError::InvalidRadius.to_string().contains("radius"));
        assert!(ShipError::InvalidMinimalRadius
            .to_string()
            .contains("minimal radius"));
    }

    #[test]
    fn usable_as_boxed_error() {
        let err: Box<dyn std::error::Error> = Box::new(ShipError::InvalidRadius);
        assert!(std::error::Error::source(err.as_ref()).is_none());
    }
}
