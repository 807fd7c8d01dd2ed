//! Raster image buffer.
//!
//! [`Image`] is the unit of exchange between the resampler and its external
//! collaborators: a decoder hands one in, an encoder or display sink takes
//! the resized one out.
//!
//! # Memory Layout
//!
//! Samples are stored as `u8` in **row-major** order, channels interleaved:
//!
//! ```text
//! Memory: [R G B R G B R G B ...]  ← Row 0
//!         [R G B R G B R G B ...]  ← Row 1
//!         ...
//! ```
//!
//! Sample `(row, col, channel)` is at `(row * cols + col) * channels + channel`.
//!
//! # Usage
//!
//! ```rust
//! use bicubic_core::Image;
//!
//! let mut img = Image::new(480, 640, 3).unwrap();
//! img.set(10, 20, 1, 200).unwrap();
//! assert_eq!(img.get(10, 20, 1).unwrap(), 200);
//! assert_eq!(img.pixel(10, 20), &[0, 200, 0]);
//! ```
//!
//! # Used By
//!
//! - `bicubic-ops` - Resampling input and output

use crate::{Error, Result};

/// Owned 8-bit raster with `rows * cols * channels` interleaved samples.
///
/// The buffer length always equals `rows * cols * channels`; every
/// constructor checks it. Cloning copies the buffer.
///
/// # Example
///
/// ```rust
/// use bicubic_core::Image;
///
/// let gray = Image::filled(4, 6, &[128]).unwrap();
/// assert_eq!(gray.dimensions(), (4, 6));
/// assert_eq!(gray.len(), 24);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Image {
    data: Vec<u8>,
    rows: usize,
    cols: usize,
    channels: usize,
}

/// Returns `rows * cols * channels`, or an error if `channels` is zero or
/// the product overflows.
fn buffer_len(rows: usize, cols: usize, channels: usize) -> Result<usize> {
    if channels == 0 {
        return Err(Error::invalid_dimensions(
            rows,
            cols,
            channels,
            "channels must be > 0",
        ));
    }
    rows.checked_mul(cols)
        .and_then(|v| v.checked_mul(channels))
        .ok_or_else(|| Error::invalid_dimensions(rows, cols, channels, "buffer size overflows"))
}

impl Image {
    /// Creates a new image filled with zeros.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `channels` is zero or the
    /// buffer size overflows `usize`.
    pub fn new(rows: usize, cols: usize, channels: usize) -> Result<Self> {
        let len = buffer_len(rows, cols, channels)?;
        Ok(Self {
            data: vec![0; len],
            rows,
            cols,
            channels,
        })
    }

    /// Creates an image from an existing sample buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferMismatch`] if `data.len()` is not
    /// `rows * cols * channels`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bicubic_core::Image;
    ///
    /// let img = Image::from_data(2, 2, 4, vec![255; 16]).unwrap();
    /// assert_eq!(img.pixel(1, 1), &[255, 255, 255, 255]);
    ///
    /// assert!(Image::from_data(2, 2, 4, vec![255; 15]).is_err());
    /// ```
    pub fn from_data(rows: usize, cols: usize, channels: usize, data: Vec<u8>) -> Result<Self> {
        let expected = buffer_len(rows, cols, channels)?;
        if data.len() != expected {
            return Err(Error::buffer_mismatch(expected, data.len()));
        }
        Ok(Self {
            data,
            rows,
            cols,
            channels,
        })
    }

    /// Creates an image where every pixel equals `pixel`.
    ///
    /// The channel count is `pixel.len()`.
    pub fn filled(rows: usize, cols: usize, pixel: &[u8]) -> Result<Self> {
        let len = buffer_len(rows, cols, pixel.len())?;
        let mut data = Vec::with_capacity(len);
        for _ in 0..rows * cols {
            data.extend_from_slice(pixel);
        }
        Ok(Self {
            data,
            rows,
            cols,
            channels: pixel.len(),
        })
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the number of interleaved channels per pixel.
    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Returns `(rows, cols)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the total number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the image has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the raw sample buffer.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the raw sample buffer mutably.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consumes the image and returns its buffer.
    #[inline]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Returns the buffer offset of a sample, or `None` if out of bounds.
    #[inline]
    pub fn checked_offset(&self, row: usize, col: usize, channel: usize) -> Option<usize> {
        if row < self.rows && col < self.cols && channel < self.channels {
            Some((row * self.cols + col) * self.channels + channel)
        } else {
            None
        }
    }

    fn bounds_error(&self, row: usize, col: usize, channel: usize) -> Error {
        Error::out_of_bounds((row, col, channel), (self.rows, self.cols, self.channels))
    }

    /// Reads one sample.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if any index is outside the image.
    #[inline]
    pub fn get(&self, row: usize, col: usize, channel: usize) -> Result<u8> {
        self.checked_offset(row, col, channel)
            .map(|offset| self.data[offset])
            .ok_or_else(|| self.bounds_error(row, col, channel))
    }

    /// Writes one sample.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if any index is outside the image.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, channel: usize, value: u8) -> Result<()> {
        let offset = self
            .checked_offset(row, col, channel)
            .ok_or_else(|| self.bounds_error(row, col, channel))?;
        self.data[offset] = value;
        Ok(())
    }

    /// Returns all channels of the pixel at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is out of bounds.
    #[inline]
    pub fn pixel(&self, row: usize, col: usize) -> &[u8] {
        assert!(row < self.rows && col < self.cols, "pixel out of bounds");
        let start = (row * self.cols + col) * self.channels;
        &self.data[start..start + self.channels]
    }

    /// Returns a row of samples.
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows`.
    #[inline]
    pub fn row(&self, row: usize) -> &[u8] {
        assert!(row < self.rows, "row out of bounds");
        let stride = self.cols * self.channels;
        &self.data[row * stride..(row + 1) * stride]
    }
}

impl std::fmt::Debug for Image {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Image")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("channels", &self.channels)
            .finish()
    }
}
