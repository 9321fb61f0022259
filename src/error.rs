//! Error types shared by board construction and cell access

use std::fmt;

use crate::geometry::Axial;

/// Main error type for all board operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Board construction rejected a negative radius
    InvalidRadius {
        /// The rejected radius
        radius: i32,
    },

    /// Coordinate outside the backing storage of a grid
    ///
    /// Raised by every accessor rather than trusting callers to validate,
    /// so a stray coordinate can never index past the cell array.
    OutOfBounds {
        /// The rejected coordinate
        coordinate: Axial,
        /// Radius of the grid that rejected it
        radius: i32,
    },

    /// Region query outside the six-point classification domain
    InvalidRegion {
        /// Description of the offending query
        reason: String,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRadius { radius } => {
                write!(f, "Invalid radius {radius}: a board needs zero or more rings")
            }
            Self::OutOfBounds { coordinate, radius } => {
                write!(
                    f,
                    "Coordinate {coordinate} is outside the grid of radius {radius}"
                )
            }
            Self::InvalidRegion { reason } => {
                write!(f, "Invalid region query: {reason}")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Convenience type alias for board results
pub type Result<T> = std::result::Result<T, BoardError>;

/// Create an invalid region error
pub(crate) fn invalid_region(reason: impl Into<String>) -> BoardError {
    BoardError::InvalidRegion {
        reason: reason.into(),
    }
}
