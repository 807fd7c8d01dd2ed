//! Bicubic convolution upscaling.
//!
//! Every output pixel `(i, j)` is mapped back to the source coordinate
//! `(i / ratio, j / ratio)` and computed from the surrounding 4x4 source
//! samples weighted by [`crate::coeff::coeff4x4`].
//!
//! # Border Policy
//!
//! A pixel is computed only if its source coordinate lies strictly inside
//! `(1, rows - 2) x (1, cols - 2)`, so the whole neighbourhood (one sample
//! before the anchor, two after) is inside the source. All other output
//! pixels stay zero. There is no edge clamping or mirroring.
//!
//! # Example
//!
//! ```rust
//! use bicubic_core::Image;
//! use bicubic_ops::resize::resize;
//!
//! let src = Image::filled(6, 6, &[100, 100, 100]).unwrap();
//! let dst = resize(&src, 2.0).unwrap();
//! assert_eq!(dst.dimensions(), (12, 12));
//! assert_eq!(dst.pixel(6, 6), &[100, 100, 100]);
//! assert_eq!(dst.pixel(0, 0), &[0, 0, 0]);
//! ```

use std::time::Instant;

use bicubic_core::Image;
use tracing::{debug, trace, warn};

use crate::coeff::coeff4x4;
use crate::config::{OverflowPolicy, ResizeConfig, UndersizedPolicy};
use crate::kernel::TAPS;
use crate::{OpsError, OpsResult};

/// Smallest source extent with a non-empty interior.
pub const MIN_SOURCE_DIM: usize = TAPS;

/// Borrowed, validated source buffer.
#[derive(Clone, Copy)]
pub(crate) struct Source<'a> {
    pub data: &'a [u8],
    pub rows: usize,
    pub cols: usize,
    pub channels: usize,
}

/// Computes the output size for `ratio`, truncating toward zero.
///
/// # Errors
///
/// [`OpsError::InvalidRatio`] if `ratio` is not finite and positive, or if
/// either output dimension would be zero.
///
/// # Example
///
/// ```rust
/// use bicubic_ops::resize::output_dimensions;
///
/// assert_eq!(output_dimensions(480, 640, 1.5).unwrap(), (720, 960));
/// assert_eq!(output_dimensions(5, 7, 1.3).unwrap(), (6, 9));
/// assert!(output_dimensions(5, 7, 0.0).is_err());
/// ```
pub fn output_dimensions(rows: usize, cols: usize, ratio: f32) -> OpsResult<(usize, usize)> {
    if !ratio.is_finite() || ratio <= 0.0 {
        return Err(OpsError::invalid_ratio(ratio, "must be finite and > 0"));
    }
    let out_rows = (rows as f32 * ratio) as usize;
    let out_cols = (cols as f32 * ratio) as usize;
    if out_rows == 0 || out_cols == 0 {
        return Err(OpsError::invalid_ratio(
            ratio,
            format!("{rows}x{cols} scales to empty {out_rows}x{out_cols}"),
        ));
    }
    Ok((out_rows, out_cols))
}

/// Returns `true` if the 4x4 neighbourhood of `(src_x, src_y)` lies
/// entirely inside a `rows` x `cols` source.
#[inline]
pub fn is_interior(src_x: f32, src_y: f32, rows: usize, cols: usize) -> bool {
    src_x > 1.0 && src_x < rows as f32 - 2.0 && src_y > 1.0 && src_y < cols as f32 - 2.0
}

/// Resizes with the default [`ResizeConfig`].
pub fn resize(src: &Image, ratio: f32) -> OpsResult<Image> {
    resize_with(src, ratio, &ResizeConfig::default())
}

/// Resizes `src` by `ratio` on both axes.
///
/// The source is only read. The returned image has
/// `floor(rows * ratio)` x `floor(cols * ratio)` pixels and the same
/// channel count.
///
/// # Errors
///
/// - [`OpsError::InvalidRatio`] - see [`output_dimensions`]
/// - [`OpsError::UndersizedSource`] - source under 4x4 and
///   [`UndersizedPolicy::Reject`] is set
/// - [`OpsError::InvalidDimensions`] - output size overflows `usize` or
///   cannot be allocated
pub fn resize_with(src: &Image, ratio: f32, config: &ResizeConfig) -> OpsResult<Image> {
    let source = Source {
        data: src.data(),
        rows: src.rows(),
        cols: src.cols(),
        channels: src.channels(),
    };
    let (data, out_rows, out_cols) = resample(source, ratio, config)?;
    Ok(Image::from_data(out_rows, out_cols, src.channels(), data)?)
}

/// Resizes a raw row-major, channel-interleaved buffer.
///
/// # Errors
///
/// As [`resize_with`], plus [`OpsError::BufferMismatch`] if `src.len()` is
/// not `rows * cols * channels`.
///
/// # Example
///
/// ```rust
/// use bicubic_ops::{resize::resize_u8, ResizeConfig};
///
/// let src = vec![50u8; 8 * 8];
/// let dst = resize_u8(&src, 8, 8, 1, 2.0, &ResizeConfig::default()).unwrap();
/// assert_eq!(dst.len(), 16 * 16);
/// ```
pub fn resize_u8(
    src: &[u8],
    rows: usize,
    cols: usize,
    channels: usize,
    ratio: f32,
    config: &ResizeConfig,
) -> OpsResult<Vec<u8>> {
    let source = Source {
        data: src,
        rows,
        cols,
        channels,
    };
    resample(source, ratio, config).map(|(data, _, _)| data)
}

fn validate(src: &Source<'_>, ratio: f32) -> OpsResult<(usize, usize, usize)> {
    let (out_rows, out_cols) = output_dimensions(src.rows, src.cols, ratio)?;

    if src.channels == 0 {
        return Err(OpsError::InvalidDimensions("channels must be > 0".into()));
    }
    let expected = src
        .rows
        .checked_mul(src.cols)
        .and_then(|v| v.checked_mul(src.channels))
        .ok_or_else(|| OpsError::InvalidDimensions("source dimensions overflow".into()))?;
    if src.data.len() != expected {
        return Err(OpsError::BufferMismatch {
            expected,
            got: src.data.len(),
        });
    }

    let out_len = out_rows
        .checked_mul(out_cols)
        .and_then(|v| v.checked_mul(src.channels))
        .ok_or_else(|| {
            OpsError::InvalidDimensions(format!(
                "output {out_rows}x{out_cols}x{} overflows",
                src.channels
            ))
        })?;

    Ok((out_rows, out_cols, out_len))
}

/// Validates, allocates and fills the output. Returns `(data, rows, cols)`.
fn resample(
    src: Source<'_>,
    ratio: f32,
    config: &ResizeConfig,
) -> OpsResult<(Vec<u8>, usize, usize)> {
    let (rows, cols, channels) = (src.rows, src.cols, src.channels);
    trace!(rows, cols, channels, ratio, "resize");

    let (out_rows, out_cols, out_len) = validate(&src, ratio)?;

    if rows < MIN_SOURCE_DIM || cols < MIN_SOURCE_DIM {
        match config.undersized {
            UndersizedPolicy::Reject => return Err(OpsError::UndersizedSource { rows, cols }),
            UndersizedPolicy::ZeroFill => {
                warn!(rows, cols, "source smaller than 4x4, output will be all zero");
            }
        }
    }

    let start = Instant::now();
    let mut dst: Vec<u8> = Vec::new();
    dst.try_reserve_exact(out_len).map_err(|e| {
        OpsError::InvalidDimensions(format!(
            "cannot allocate {out_rows}x{out_cols}x{channels} output: {e}"
        ))
    })?;
    dst.resize(out_len, 0);
    let saturated = run_rows(&src, ratio, &mut dst, out_cols, config);

    debug!(
        out_rows,
        out_cols,
        channels,
        saturated,
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Resized image"
    );

    Ok((dst, out_rows, out_cols))
}

#[cfg(feature = "parallel")]
fn run_rows(
    src: &Source<'_>,
    ratio: f32,
    dst: &mut [u8],
    out_cols: usize,
    config: &ResizeConfig,
) -> usize {
    if config.parallel {
        crate::parallel::resample_rows(src, ratio, dst, out_cols, config.overflow)
    } else {
        resample_rows(src, ratio, dst, out_cols, config.overflow)
    }
}

#[cfg(not(feature = "parallel"))]
fn run_rows(
    src: &Source<'_>,
    ratio: f32,
    dst: &mut [u8],
    out_cols: usize,
    config: &ResizeConfig,
) -> usize {
    resample_rows(src, ratio, dst, out_cols, config.overflow)
}

/// Sequential pass over all output rows. Returns the saturated sample count.
pub(crate) fn resample_rows(
    src: &Source<'_>,
    ratio: f32,
    dst: &mut [u8],
    out_cols: usize,
    overflow: OverflowPolicy,
) -> usize {
    dst.chunks_mut(out_cols * src.channels)
        .enumerate()
        .map(|(i, row)| resample_row(src, ratio, i, row, overflow))
        .sum()
}

/// Fills output row `i`. Border pixels are left untouched.
///
/// Returns how many samples fell outside `[0, 256)` before narrowing.
pub(crate) fn resample_row(
    src: &Source<'_>,
    ratio: f32,
    i: usize,
    row: &mut [u8],
    overflow: OverflowPolicy,
) -> usize {
    let channels = src.channels;
    let src_x = i as f32 / ratio;
    let mut saturated = 0;

    for (j, out) in row.chunks_exact_mut(channels).enumerate() {
        let src_y = j as f32 / ratio;
        if !is_interior(src_x, src_y, src.rows, src.cols) {
            continue;
        }

        // Interior implies floor(src_x), floor(src_y) >= 1.
        let x0 = src_x as usize - 1;
        let y0 = src_y as usize - 1;
        let m = coeff4x4(src_x, src_y);

        for (d, sample) in out.iter_mut().enumerate() {
            let mut sum = 0.0f32;
            for (a, weights) in m.iter().enumerate() {
                let base = ((x0 + a) * src.cols + y0) * channels + d;
                for (b, &w) in weights.iter().enumerate() {
                    sum += w * src.data[base + b * channels] as f32;
                }
            }
            if !(0.0..256.0).contains(&sum) {
                saturated += 1;
            }
            *sample = overflow.narrow(sum);
        }
    }

    saturated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequential() -> ResizeConfig {
        ResizeConfig::default().with_parallel(false)
    }

    #[test]
    fn test_output_dimensions() {
        assert_eq!(output_dimensions(6, 6, 2.0).unwrap(), (12, 12));
        assert_eq!(output_dimensions(10, 3, 0.5).unwrap(), (5, 1));
        assert_eq!(output_dimensions(7, 9, 1.0).unwrap(), (7, 9));
    }

    #[test]
    fn test_output_dimensions_invalid() {
        for ratio in [0.0, -1.0, f32::NAN, f32::INFINITY, -f32::INFINITY] {
            let err = output_dimensions(10, 10, ratio).unwrap_err();
            assert!(matches!(err, OpsError::InvalidRatio { .. }), "ratio {ratio}");
        }
        // Non-zero ratio that truncates an axis to nothing
        let err = output_dimensions(10, 3, 0.2).unwrap_err();
        assert!(matches!(err, OpsError::InvalidRatio { .. }));
    }

    #[test]
    fn test_is_interior() {
        assert!(is_interior(1.5, 1.5, 6, 6));
        assert!(is_interior(3.99, 2.0, 6, 6));
        assert!(!is_interior(1.0, 2.0, 6, 6));
        assert!(!is_interior(2.0, 4.0, 6, 6));
        assert!(!is_interior(4.0, 2.0, 6, 6));
        assert!(!is_interior(1.5, 1.5, 3, 3));
    }

    #[test]
    fn test_buffer_mismatch() {
        let err = resize_u8(&[0; 47], 4, 4, 3, 2.0, &sequential()).unwrap_err();
        assert_eq!(err, OpsError::BufferMismatch { expected: 48, got: 47 });
    }

    #[test]
    fn test_zero_channels() {
        let err = resize_u8(&[], 4, 4, 0, 2.0, &sequential()).unwrap_err();
        assert!(matches!(err, OpsError::InvalidDimensions(_)));
    }

    #[test]
    fn test_ratio_checked_before_buffer() {
        let err = resize_u8(&[0; 3], 4, 4, 3, -2.0, &sequential()).unwrap_err();
        assert!(matches!(err, OpsError::InvalidRatio { .. }));
    }

    #[test]
    fn test_constant_image() {
        let src = Image::filled(6, 6, &[100, 100, 100]).unwrap();
        let dst = resize_with(&src, 2.0, &sequential()).unwrap();
        assert_eq!(dst.dimensions(), (12, 12));
        assert_eq!(dst.channels(), 3);

        for i in 0..12 {
            for j in 0..12 {
                let interior = is_interior(i as f32 / 2.0, j as f32 / 2.0, 6, 6);
                let expected: &[u8] = if interior { &[100; 3] } else { &[0; 3] };
                assert_eq!(dst.pixel(i, j), expected, "pixel ({i}, {j})");
            }
        }
    }

    #[test]
    fn test_identity_ratio() {
        let data: Vec<u8> = (0..10 * 12).map(|v| (v * 7 % 251) as u8).collect();
        let src = Image::from_data(10, 12, 1, data).unwrap();
        let dst = resize_with(&src, 1.0, &sequential()).unwrap();
        assert_eq!(dst.dimensions(), (10, 12));
        for i in 2..8 {
            for j in 2..10 {
                assert_eq!(dst.get(i, j, 0).unwrap(), src.get(i, j, 0).unwrap());
            }
        }
    }

    #[test]
    fn test_source_untouched() {
        let src = Image::filled(8, 8, &[10, 20]).unwrap();
        let before = src.clone();
        let _ = resize_with(&src, 1.7, &sequential()).unwrap();
        assert_eq!(src, before);
    }

    #[test]
    fn test_step_edge_overshoot() {
        // Columns 0..5 dark, 5..10 bright
        let mut src = Image::new(10, 10, 1).unwrap();
        for r in 0..10 {
            for c in 5..10 {
                src.set(r, c, 0, 255).unwrap();
            }
        }

        let clamped = resize_with(&src, 2.0, &sequential()).unwrap();
        let wrap = sequential().with_overflow(OverflowPolicy::Wrap);
        let wrapped = resize_with(&src, 2.0, &wrap).unwrap();

        // Column 11 maps to 5.5: 0*-0.0625 + 255*0.5625*2 + 255*-0.0625 = 270.9375
        assert_eq!(clamped.get(8, 11, 0).unwrap(), 255);
        assert_eq!(wrapped.get(8, 11, 0).unwrap(), 14);
        // Column 7 maps to 3.5: 255*-0.0625 = -15.9375
        assert_eq!(clamped.get(8, 7, 0).unwrap(), 0);
        assert_eq!(wrapped.get(8, 7, 0).unwrap(), 241);
        // Integer positions are exact
        assert_eq!(clamped.get(8, 12, 0).unwrap(), 255);
        assert_eq!(clamped.get(8, 8, 0).unwrap(), 0);
    }

    #[test]
    fn test_saturation_count() {
        let mut src = Image::new(10, 10, 1).unwrap();
        for r in 0..10 {
            for c in 5..10 {
                src.set(r, c, 0, 255).unwrap();
            }
        }
        let source = Source {
            data: src.data(),
            rows: 10,
            cols: 10,
            channels: 1,
        };
        let mut row = vec![0u8; 20];
        // Row 8 maps to source row 4; columns 7 and 11 ring
        let saturated = resample_row(&source, 2.0, 8, &mut row, OverflowPolicy::Clamp);
        assert_eq!(saturated, 2);
    }

    #[test]
    fn test_undersized_zero_fill() {
        let src = Image::filled(3, 3, &[200, 200, 200]).unwrap();
        let dst = resize_with(&src, 4.0, &sequential()).unwrap();
        assert_eq!(dst.dimensions(), (12, 12));
        assert!(dst.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_undersized_reject() {
        let src = Image::filled(3, 8, &[200]).unwrap();
        let cfg = sequential().with_undersized(UndersizedPolicy::Reject);
        let err = resize_with(&src, 2.0, &cfg).unwrap_err();
        assert_eq!(err, OpsError::UndersizedSource { rows: 3, cols: 8 });
    }

    #[test]
    fn test_unallocatable_output() {
        // 4e7 x 4e7 samples: dimensions fit in usize, memory does not
        let err = resize_u8(&[1; 16], 4, 4, 1, 1.0e7, &sequential()).unwrap_err();
        assert!(matches!(err, OpsError::InvalidDimensions(_)), "{err:?}");
    }
}
