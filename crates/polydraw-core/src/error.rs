//! Error handling for the Polydraw geometry core.
//!
//! The core has exactly one failure mode: constructing a shape from
//! degenerate dimensions. All other operations (`distance_to`,
//! `overlaps`) are total functions.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Geometry error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Shape construction was given dimensions its algebra cannot solve
    #[error("invalid rectangle dimensions: {reason}")]
    InvalidGeometry {
        /// Which part of the construction degenerated.
        reason: String,
    },
}

impl Error {
    /// Create an `InvalidGeometry` error from a reason message.
    pub fn invalid_geometry(reason: impl Into<String>) -> Self {
        Error::InvalidGeometry {
            reason: reason.into(),
        }
    }
}

/// Convenience result type for geometry operations
pub type Result<T> = std::result::Result<T, Error>;
