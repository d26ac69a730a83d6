//! PixelBuffer - the canonical image container
//!
//! A `PixelBuffer` holds one decoded raster image as a flat, row-major
//! array of 8-bit samples plus shape metadata.
//!
//! # Sample layout
//!
//! - Samples are ordered row by row, left to right within a row
//! - Within a pixel, channels are interleaved R, G, B and, for RGBA, A
//! - Total length is exactly `width * height * samples_per_pixel`
//!
//! # Ownership model
//!
//! A `PixelBuffer` has exactly one owner at a time. Pipeline stages take
//! buffers by move and hand back fresh ones; dropping a buffer releases it
//! on every exit path, success or error. A process-wide live-buffer counter
//! ([`PixelBuffer::live_count`]) makes that release observable in tests.

use crate::error::{Error, Result};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Number of `PixelBuffer` values currently alive in the process.
static LIVE_BUFFERS: AtomicUsize = AtomicUsize::new(0);

/// Channel layout of a pixel buffer
///
/// The canonical representation admits only interleaved 8-bit RGB and
/// RGBA. Decoders that encounter any other samples-per-pixel count must
/// fail with [`Error::UnsupportedChannelCount`] before a buffer exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelLayout {
    /// Three channels: red, green, blue
    Rgb,
    /// Four channels: red, green, blue, alpha
    Rgba,
}

impl ChannelLayout {
    /// Create a `ChannelLayout` from a raw samples-per-pixel count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedChannelCount`] if `spp` is not 3 or 4.
    pub fn from_samples_per_pixel(spp: u32) -> Result<Self> {
        match spp {
            3 => Ok(ChannelLayout::Rgb),
            4 => Ok(ChannelLayout::Rgba),
            _ => Err(Error::UnsupportedChannelCount(spp)),
        }
    }

    /// Get the number of samples per pixel.
    #[inline]
    pub fn samples_per_pixel(self) -> usize {
        match self {
            ChannelLayout::Rgb => 3,
            ChannelLayout::Rgba => 4,
        }
    }

    /// Check whether the layout carries an alpha channel.
    #[inline]
    pub fn has_alpha(self) -> bool {
        self == ChannelLayout::Rgba
    }
}

/// Canonical in-memory image: shape metadata plus row-major 8-bit samples.
#[derive(Debug)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    layout: ChannelLayout,
    samples: Vec<u8>,
}

impl PixelBuffer {
    /// Create a new zero-filled buffer with the given shape.
    ///
    /// # Arguments
    ///
    /// * `width` - Width in pixels (must be > 0)
    /// * `height` - Height in pixels (must be > 0)
    /// * `layout` - Channel layout
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32, layout: ChannelLayout) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let len = Self::sample_len(width, height, layout);
        Ok(Self::from_parts(width, height, layout, vec![0; len]))
    }

    /// Create a buffer from existing samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, or
    /// [`Error::SampleCountMismatch`] if `samples.len()` is not exactly
    /// `width * height * samples_per_pixel`.
    pub fn from_samples(
        width: u32,
        height: u32,
        layout: ChannelLayout,
        samples: Vec<u8>,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = Self::sample_len(width, height, layout);
        if samples.len() != expected {
            return Err(Error::SampleCountMismatch {
                expected,
                actual: samples.len(),
            });
        }
        Ok(Self::from_parts(width, height, layout, samples))
    }

    /// Internal constructor; shape must already be validated.
    fn from_parts(width: u32, height: u32, layout: ChannelLayout, samples: Vec<u8>) -> Self {
        LIVE_BUFFERS.fetch_add(1, Ordering::Relaxed);
        PixelBuffer {
            width,
            height,
            layout,
            samples,
        }
    }

    #[inline]
    fn sample_len(width: u32, height: u32, layout: ChannelLayout) -> usize {
        width as usize * height as usize * layout.samples_per_pixel()
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the channel layout.
    #[inline]
    pub fn layout(&self) -> ChannelLayout {
        self.layout
    }

    /// Get the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Get the flat sample array.
    #[inline]
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Get mutable access to the flat sample array.
    #[inline]
    pub fn samples_mut(&mut self) -> &mut [u8] {
        &mut self.samples
    }

    /// Consume the buffer and return its samples.
    pub fn into_samples(mut self) -> Vec<u8> {
        // Drop still runs for `self`; hand out the data without copying.
        std::mem::take(&mut self.samples)
    }

    /// Get the samples of one row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        assert!(y < self.height, "row {} out of bounds", y);
        let stride = self.width as usize * self.layout.samples_per_pixel();
        let start = y as usize * stride;
        &self.samples[start..start + stride]
    }

    /// Get the channel samples of one pixel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CoordinateOutOfBounds`] if `(x, y)` is outside the
    /// buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Result<&[u8]> {
        if x >= self.width || y >= self.height {
            return Err(Error::CoordinateOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let spp = self.layout.samples_per_pixel();
        let idx = (y as usize * self.width as usize + x as usize) * spp;
        Ok(&self.samples[idx..idx + spp])
    }

    /// Number of live `PixelBuffer` values in the process.
    ///
    /// Intended for resource-safety assertions in tests: after a pipeline
    /// run returns, the count must equal its pre-request value whether the
    /// run succeeded or failed.
    pub fn live_count() -> usize {
        LIVE_BUFFERS.load(Ordering::Relaxed)
    }
}

impl Clone for PixelBuffer {
    fn clone(&self) -> Self {
        Self::from_parts(self.width, self.height, self.layout, self.samples.clone())
    }
}

impl Drop for PixelBuffer {
    fn drop(&mut self) {
        LIVE_BUFFERS.fetch_sub(1, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_layout() {
        assert_eq!(
            ChannelLayout::from_samples_per_pixel(3).unwrap(),
            ChannelLayout::Rgb
        );
        assert_eq!(
            ChannelLayout::from_samples_per_pixel(4).unwrap(),
            ChannelLayout::Rgba
        );
        assert!(ChannelLayout::from_samples_per_pixel(1).is_err());
        assert!(ChannelLayout::from_samples_per_pixel(5).is_err());

        assert_eq!(ChannelLayout::Rgb.samples_per_pixel(), 3);
        assert_eq!(ChannelLayout::Rgba.samples_per_pixel(), 4);
        assert!(ChannelLayout::Rgba.has_alpha());
        assert!(!ChannelLayout::Rgb.has_alpha());
    }

    #[test]
    fn test_buffer_creation() {
        let buf = PixelBuffer::new(10, 20, ChannelLayout::Rgba).unwrap();
        assert_eq!(buf.width(), 10);
        assert_eq!(buf.height(), 20);
        assert_eq!(buf.layout(), ChannelLayout::Rgba);
        assert_eq!(buf.pixel_count(), 200);
        assert_eq!(buf.samples().len(), 10 * 20 * 4);
        assert!(buf.samples().iter().all(|&s| s == 0));
    }

    #[test]
    fn test_buffer_creation_invalid() {
        assert!(matches!(
            PixelBuffer::new(0, 10, ChannelLayout::Rgb),
            Err(Error::InvalidDimension { width: 0, height: 10 })
        ));
        assert!(PixelBuffer::new(10, 0, ChannelLayout::Rgb).is_err());
    }

    #[test]
    fn test_from_samples_length_check() {
        let ok = PixelBuffer::from_samples(2, 2, ChannelLayout::Rgb, vec![7; 12]);
        assert!(ok.is_ok());

        let bad = PixelBuffer::from_samples(2, 2, ChannelLayout::Rgb, vec![7; 11]);
        assert!(matches!(
            bad,
            Err(Error::SampleCountMismatch {
                expected: 12,
                actual: 11
            })
        ));
    }

    #[test]
    fn test_row_and_pixel_access() {
        let samples: Vec<u8> = (0..24).collect();
        let buf = PixelBuffer::from_samples(2, 3, ChannelLayout::Rgba, samples).unwrap();

        assert_eq!(buf.row(1), &[8, 9, 10, 11, 12, 13, 14, 15]);
        assert_eq!(buf.pixel(1, 0).unwrap(), &[4, 5, 6, 7]);
        assert_eq!(buf.pixel(0, 2).unwrap(), &[16, 17, 18, 19]);
        assert!(buf.pixel(2, 0).is_err());
        assert!(buf.pixel(0, 3).is_err());
    }

    #[test]
    fn test_into_samples() {
        let samples: Vec<u8> = (0..12).collect();
        let buf = PixelBuffer::from_samples(2, 2, ChannelLayout::Rgb, samples.clone()).unwrap();
        assert_eq!(buf.into_samples(), samples);
    }
}
