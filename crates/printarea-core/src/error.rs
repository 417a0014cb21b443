//! Error handling for PrintArea
//!
//! Provides the error type raised by the geometry core for invalid corner
//! sequences and unmatched corners.
//!
//! All error types use `thiserror` for ergonomic error handling.
//! Disjoint rectangles are not an error: the solver reports them as `None`.

use thiserror::Error;

/// Geometry error type
///
/// Represents failures of the corner-sequence helpers and the canonicalizer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A sequence that must contain corners was empty
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Why the input was rejected.
        reason: String,
    },

    /// A candidate rectangle shares no corner alignment with its reference
    #[error("Ambiguous corners: first corner lies {distance} from the reference northwest corner and matches no reference edge")]
    AmbiguousCorners {
        /// Distance between the candidate's first corner and the reference northwest corner.
        distance: f64,
    },
}

impl GeometryError {
    /// Create an `InvalidInput` error from a message
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        GeometryError::InvalidInput {
            reason: reason.into(),
        }
    }
}
