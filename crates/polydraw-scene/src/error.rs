//! Error handling for the scene layer.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Scene layer error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// Scene settings failed validation
    #[error("invalid scene settings: {reason}")]
    InvalidSettings {
        /// Which setting was rejected and why.
        reason: String,
    },
}

/// Convenience result type for scene operations
pub type Result<T> = std::result::Result<T, SceneError>;
