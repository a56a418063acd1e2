//! Error types for the edge pipeline.
//!
//! All validation is fail-fast: a stage checks its own inputs before touching
//! any pixel, so an error never comes with a partially computed grid.

use thiserror::Error;

/// Errors raised by the Canny pipeline stages.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CannyError {
    /// Malformed kernel size, spread or thresholds.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Two grids that must share a shape do not.
    #[error("shape mismatch: expected {expected:?} (rows, cols), got {actual:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },
}

impl CannyError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        CannyError::InvalidParameter(msg.into())
    }
}
