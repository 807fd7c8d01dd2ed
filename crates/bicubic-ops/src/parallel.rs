//! Row-parallel resampling using Rayon.
//!
//! Output rows are disjoint slices of the destination buffer, so each
//! rayon task owns its row outright and only reads the shared source.
//! The result is byte-identical to the sequential path.
//!
//! # Example
//!
//! ```rust
//! use bicubic_core::Image;
//! use bicubic_ops::parallel;
//!
//! let src = Image::filled(64, 64, &[128, 64, 32, 255]).unwrap();
//! let dst = parallel::resize(&src, 3.0).unwrap();
//! assert_eq!(dst.dimensions(), (192, 192));
//! ```

use bicubic_core::Image;
use rayon::prelude::*;

use crate::config::{OverflowPolicy, ResizeConfig};
use crate::resize::{resample_row, resize_with, Source};
use crate::OpsResult;

/// Resizes with the default config, always on the rayon pool.
pub fn resize(src: &Image, ratio: f32) -> OpsResult<Image> {
    resize_with(src, ratio, &ResizeConfig::default().with_parallel(true))
}

/// Parallel pass over all output rows. Returns the saturated sample count.
pub(crate) fn resample_rows(
    src: &Source<'_>,
    ratio: f32,
    dst: &mut [u8],
    out_cols: usize,
    overflow: OverflowPolicy,
) -> usize {
    dst.par_chunks_mut(out_cols * src.channels)
        .enumerate()
        .map(|(i, row)| resample_row(src, ratio, i, row, overflow))
        .sum()
}
