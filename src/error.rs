//! Errors for body construction. The per-frame step never fails.

use core::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum BodyError {
    /// Radius must be positive and finite.
    InvalidRadius,
    /// Spring stiffness must be in [0, 1].
    InvalidStiffness,
    /// Bounce factor must be in [0, 1).
    InvalidBounce,
    /// At least one relaxation iteration is required.
    InvalidIterations,
    /// No monitor to spawn on.
    NoMonitor,
}

impl fmt::Display for BodyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BodyError::InvalidRadius => write!(f, "radius must be positive and finite"),
            BodyError::InvalidStiffness => write!(f, "stiffness must be in [0, 1]"),
            BodyError::InvalidBounce => write!(f, "bounce factor must be in [0, 1)"),
            BodyError::InvalidIterations => write!(f, "at least one relaxation iteration is required"),
            BodyError::NoMonitor => write!(f, "no monitor to spawn on"),
        }
    }
}
