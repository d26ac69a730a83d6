//! Channel normalization
//!
//! Converts between the two canonical layouts: RGB gains a fully opaque
//! alpha channel on the way to RGBA, RGBA drops its alpha on the way back.
//! Resampling itself never changes the channel count; these conversions
//! are a separate stage so the encoder always sees RGBA.

use pixelup_core::{ChannelLayout, PixelBuffer};

/// Fully opaque alpha, used when a source image carries no alpha channel.
pub const OPAQUE_ALPHA: u8 = 255;

/// Normalize a buffer to RGBA.
///
/// A 4-channel input is copied with its alpha as given; a 3-channel input
/// gains an alpha of [`OPAQUE_ALPHA`] at every pixel.
pub fn to_rgba(src: &PixelBuffer) -> PixelBuffer {
    match src.layout() {
        ChannelLayout::Rgba => src.clone(),
        ChannelLayout::Rgb => {
            let mut out = Vec::with_capacity(src.samples().len() / 3 * 4);
            for rgb in src.samples().chunks_exact(3) {
                out.extend_from_slice(rgb);
                out.push(OPAQUE_ALPHA);
            }
            // Shape is preserved and the length is exact by construction.
            PixelBuffer::from_samples(src.width(), src.height(), ChannelLayout::Rgba, out)
                .unwrap_or_else(|_| unreachable!("rgba expansion preserves shape"))
        }
    }
}

/// Normalize a buffer to RGB, discarding alpha if present.
pub fn to_rgb(src: &PixelBuffer) -> PixelBuffer {
    match src.layout() {
        ChannelLayout::Rgb => src.clone(),
        ChannelLayout::Rgba => {
            let mut out = Vec::with_capacity(src.samples().len() / 4 * 3);
            for rgba in src.samples().chunks_exact(4) {
                out.extend_from_slice(&rgba[..3]);
            }
            PixelBuffer::from_samples(src.width(), src.height(), ChannelLayout::Rgb, out)
                .unwrap_or_else(|_| unreachable!("alpha removal preserves shape"))
        }
    }
}
