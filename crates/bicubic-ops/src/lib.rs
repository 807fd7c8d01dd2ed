//! # bicubic-ops
//!
//! Bicubic convolution upscaling of 8-bit rasters.
//!
//! Three layers, leaves first:
//!
//! - [`kernel`] - 1-D cubic convolution weight, `a = -0.5`
//! - [`coeff`] - 4x4 separable weight matrix for a source coordinate
//! - [`resize`] - per-pixel inverse mapping and weighted gather
//!
//! [`parallel`] runs the same row computation on the rayon pool, and
//! [`config`] holds the policies both paths share.
//!
//! # Example
//!
//! ```rust
//! use bicubic_core::Image;
//! use bicubic_ops::{resize, ResizeConfig, OverflowPolicy};
//!
//! let src = Image::filled(32, 48, &[12, 34, 56]).unwrap();
//!
//! let dst = resize(&src, 2.0).unwrap();
//! assert_eq!(dst.dimensions(), (64, 96));
//!
//! // Byte-compatible with the classic wrapping cast
//! let cfg = ResizeConfig::default().with_overflow(OverflowPolicy::Wrap);
//! let legacy = bicubic_ops::resize_with(&src, 2.0, &cfg).unwrap();
//! assert_eq!(legacy.dimensions(), (64, 96));
//! ```
//!
//! # Logging
//!
//! Operations emit [`tracing`] events (`trace` on entry, `debug` with
//! output size, elapsed time and saturated sample count on completion).
//! No subscriber is installed by this crate.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod coeff;
pub mod config;
pub mod kernel;
pub mod resize;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use config::{OverflowPolicy, ResizeConfig, UndersizedPolicy};
pub use error::{OpsError, OpsResult};
pub use resize::{resize, resize_u8, resize_with};
