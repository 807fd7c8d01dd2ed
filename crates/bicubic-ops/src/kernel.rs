//! Cubic convolution kernel.
//!
//! The piecewise cubic of Keys (1981), parametrised by the sharpening
//! parameter `a`. With [`A`] = -0.5 it is the Catmull-Rom spline:
//!
//! ```text
//!        | 1 - (a+3)x² + (a+2)x³            x <= 1
//! W(x) = | -4a + 8a·x - 5a·x² + a·x³        1 < x < 2
//!        | 0                                otherwise
//! ```
//!
//! # Example
//!
//! ```rust
//! use bicubic_ops::kernel::{weight, A};
//!
//! assert_eq!(weight(0.0, A), 1.0);
//! assert_eq!(weight(2.0, A), 0.0);
//! ```

/// Sharpening parameter used by the resampler.
pub const A: f32 = -0.5;

/// Kernel radius; weights vanish at and beyond this distance.
pub const SUPPORT: f32 = 2.0;

/// Samples gathered per axis.
pub const TAPS: usize = 4;

/// Evaluates the kernel at non-negative distance `x`.
///
/// Branch boundaries are `x <= 1` and `x < SUPPORT`; the expression order matches
/// the reference so outputs agree bit for bit.
#[inline]
pub fn weight(x: f32, a: f32) -> f32 {
    if x <= 1.0 {
        1.0 - (a + 3.0) * x * x + (a + 2.0) * x * x * x
    } else if x < SUPPORT {
        -4.0 * a + 8.0 * a * x - 5.0 * a * x * x + a * x * x * x
    } else {
        0.0
    }
}
