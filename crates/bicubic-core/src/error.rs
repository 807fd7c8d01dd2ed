//! Error types for bicubic-core operations.
//!
//! Every fallible operation on an [`crate::Image`] reports one of the
//! [`Error`] variants below instead of reading or writing outside its buffer.
//!
//! # Usage
//!
//! ```rust
//! use bicubic_core::{Error, Image};
//!
//! let img = Image::new(4, 4, 3).unwrap();
//! match img.get(10, 0, 0) {
//!     Err(Error::OutOfBounds { row, .. }) => assert_eq!(row, 10),
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - [`crate::image::Image`] - Construction and bounds checking
//! - `bicubic-ops` - Wrapped by `OpsError::Core`

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building or accessing an image.
///
/// # Categories
///
/// - **Bounds errors**: [`OutOfBounds`](Error::OutOfBounds)
/// - **Buffer errors**: [`BufferMismatch`](Error::BufferMismatch)
/// - **Dimension errors**: [`InvalidDimensions`](Error::InvalidDimensions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Sample coordinates are outside image bounds.
    ///
    /// Returned when accessing `(row, col, channel)` where any index is
    /// not below the matching image extent.
    #[error(
        "sample ({row}, {col}, {channel}) out of bounds for image {rows}x{cols}x{channels}"
    )]
    OutOfBounds {
        /// Row that was accessed
        row: usize,
        /// Column that was accessed
        col: usize,
        /// Channel that was accessed
        channel: usize,
        /// Image rows
        rows: usize,
        /// Image columns
        cols: usize,
        /// Image channels
        channels: usize,
    },

    /// Buffer length does not equal `rows * cols * channels`.
    #[error("buffer mismatch: expected {expected} samples, got {got}")]
    BufferMismatch {
        /// Required sample count
        expected: usize,
        /// Supplied sample count
        got: usize,
    },

    /// Invalid image dimensions.
    ///
    /// Returned when the channel count is zero, or the dimensions would
    /// overflow the buffer size calculation.
    #[error("invalid dimensions: {rows}x{cols}x{channels} ({reason})")]
    InvalidDimensions {
        /// Requested rows
        rows: usize,
        /// Requested columns
        cols: usize,
        /// Requested channels
        channels: usize,
        /// Reason why dimensions are invalid
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::OutOfBounds`] error.
    #[inline]
    pub fn out_of_bounds(
        (row, col, channel): (usize, usize, usize),
        (rows, cols, channels): (usize, usize, usize),
    ) -> Self {
        Self::OutOfBounds {
            row,
            col,
            channel,
            rows,
            cols,
            channels,
        }
    }

    /// Creates an [`Error::BufferMismatch`] error.
    #[inline]
    pub fn buffer_mismatch(expected: usize, got: usize) -> Self {
        Self::BufferMismatch { expected, got }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(
        rows: usize,
        cols: usize,
        channels: usize,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidDimensions {
            rows,
            cols,
            channels,
            reason: reason.into(),
        }
    }

    /// Returns `true` if this is a bounds-related error.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }
}
