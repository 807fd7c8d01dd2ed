//! Error types for resampling operations.

use thiserror::Error;

/// Error type for resampling operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OpsError {
    /// Scale factor is not a finite positive number, or yields an empty output.
    #[error("invalid ratio {ratio}: {reason}")]
    InvalidRatio {
        /// Rejected scale factor.
        ratio: f32,
        /// Why it was rejected.
        reason: String,
    },

    /// Source too small for any output pixel to gather a full 4x4 neighbourhood.
    #[error("source {rows}x{cols} is smaller than the 4x4 bicubic neighbourhood")]
    UndersizedSource {
        /// Source rows.
        rows: usize,
        /// Source columns.
        cols: usize,
    },

    /// Buffer length does not equal `rows * cols * channels`.
    #[error("buffer mismatch: expected {expected} samples, got {got}")]
    BufferMismatch {
        /// Required sample count.
        expected: usize,
        /// Supplied sample count.
        got: usize,
    },

    /// Invalid dimensions specified.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Configuration could not be parsed or serialized.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Error raised by an [`bicubic_core::Image`] operation.
    #[error(transparent)]
    Core(#[from] bicubic_core::Error),
}

impl OpsError {
    /// Creates an [`OpsError::InvalidRatio`] error.
    #[inline]
    pub fn invalid_ratio(ratio: f32, reason: impl Into<String>) -> Self {
        Self::InvalidRatio {
            ratio,
            reason: reason.into(),
        }
    }
}

/// Result type for resampling operations.
pub type OpsResult<T> = Result<T, OpsError>;
