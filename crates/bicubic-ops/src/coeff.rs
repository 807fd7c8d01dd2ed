//! 4x4 bicubic coefficient matrices.
//!
//! For a continuous source coordinate `(x, y)` the resampler gathers the
//! samples at `(floor(x) - 1 + i, floor(y) - 1 + j)` for `i, j` in `0..4`.
//! Cell `[i][j]` of the matrix built here is the weight of that sample.
//!
//! The 2-D kernel is separable, so the matrix is the outer product of two
//! 4-tap vectors. Weights are not renormalised.
//!
//! # Example
//!
//! ```rust
//! use bicubic_ops::coeff::{coeff4x4, coeff_sum};
//!
//! let m = coeff4x4(10.25, 3.5);
//! assert!((coeff_sum(&m) - 1.0).abs() < 1e-3);
//! ```

use crate::kernel::{weight, A, TAPS};

/// Weights of the 4x4 source neighbourhood, indexed `[row][col]`.
pub type Coeff4x4 = [[f32; TAPS]; TAPS];

/// Returns the 4 kernel taps for the fractional part `frac` of a coordinate.
///
/// Tap `k` weighs the sample at offset `k - 1` from the anchor, i.e. at
/// distance `|frac + 1 - k|`.
#[inline]
pub fn taps(frac: f32, a: f32) -> [f32; TAPS] {
    let u = frac + 1.0;
    [
        weight((u - 0.0).abs(), a),
        weight((u - 1.0).abs(), a),
        weight((u - 2.0).abs(), a),
        weight((u - 3.0).abs(), a),
    ]
}

/// Builds the coefficient matrix for `(x, y)` with sharpening parameter `a`.
#[inline]
pub fn coeff4x4_with(x: f32, y: f32, a: f32) -> Coeff4x4 {
    let wx = taps(x - x.floor(), a);
    let wy = taps(y - y.floor(), a);

    let mut m = [[0.0f32; TAPS]; TAPS];
    for (row, &wi) in m.iter_mut().zip(wx.iter()) {
        for (cell, &wj) in row.iter_mut().zip(wy.iter()) {
            *cell = wi * wj;
        }
    }
    m
}

/// Builds the coefficient matrix for `(x, y)` with the default parameter [`A`].
#[inline]
pub fn coeff4x4(x: f32, y: f32) -> Coeff4x4 {
    coeff4x4_with(x, y, A)
}

/// Sum of all 16 weights.
pub fn coeff_sum(m: &Coeff4x4) -> f32 {
    m.iter().flatten().sum()
}
