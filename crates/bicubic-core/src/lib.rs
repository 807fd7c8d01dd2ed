//! # bicubic-core
//!
//! Core types for the bicubic upscaler.
//!
//! - [`Image`] - Owned 8-bit, row-major, channel-interleaved raster
//! - [`Error`], [`Result`] - Construction and bounds-checking failures
//!
//! ## Crate Structure
//!
//! This crate has no internal dependencies. The resampler in
//! `bicubic-ops` depends on it:
//!
//! ```text
//! bicubic-core (this crate)
//!    ^
//!    |
//!    +-- bicubic-ops (kernel, coefficients, resize)
//!    +-- bicubic-bench
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod image;

pub use error::*;
pub use image::*;
