//! Error types for joint construction and configuration.

use core::fmt;

/// Errors that can occur when configuring a spring joint or its bodies.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Mass must be positive and finite.
    InvalidMass,
    /// Frequency must be positive and finite.
    InvalidFrequency,
    /// Damping ratio must be non-negative and finite.
    InvalidDampingRatio,
    /// Rest distance must be non-negative and finite.
    InvalidDistance,
    /// Break thresholds must be non-negative (infinity means no limit).
    InvalidBreakThreshold,
    /// Anchor offsets must be finite.
    InvalidAnchor,
    /// Body handle does not refer to a body in the set.
    BodyOutOfBounds { index: usize, count: usize },
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::InvalidMass => write!(f, "mass must be positive and finite"),
            PhysicsError::InvalidFrequency => write!(f, "frequency must be positive and finite"),
            PhysicsError::InvalidDampingRatio => {
                write!(f, "damping ratio must be non-negative and finite")
            }
            PhysicsError::InvalidDistance => {
                write!(f, "rest distance must be non-negative and finite")
            }
            PhysicsError::InvalidBreakThreshold => {
                write!(f, "break threshold must be non-negative")
            }
            PhysicsError::InvalidAnchor => write!(f, "anchor offsets must be finite"),
            PhysicsError::BodyOutOfBounds { index, count } => {
                write!(f, "body index {} out of bounds (count: {})", index, count)
            }
        }
    }
}

impl core::error::Error for PhysicsError {}
