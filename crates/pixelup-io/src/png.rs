//! PNG image format support
//!
//! Decodes PNG payloads into the canonical [`PixelBuffer`] layout and
//! encodes RGBA buffers back to PNG bytes using the `png` crate.
//!
//! Grayscale sources are expanded to RGB (and grayscale+alpha to RGBA) so
//! that every decoded buffer carries 3 or 4 channels; 16-bit samples are
//! narrowed to their high byte. Sub-8-bit depths are not supported.

use crate::{IoError, IoResult};
use pixelup_core::{ChannelLayout, PixelBuffer};
use png::{BitDepth, ColorType, Decoder, Encoder};
use std::io::Cursor;

/// Read a PNG image from encoded bytes.
///
/// # Returns
///
/// A `PixelBuffer` with 3 (no alpha in source) or 4 channels.
pub fn read_png(bytes: &[u8]) -> IoResult<PixelBuffer> {
    let decoder = Decoder::new(Cursor::new(bytes));
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let color_type = info.color_type;
    let bit_depth = info.bit_depth;

    if !matches!(bit_depth, BitDepth::Eight | BitDepth::Sixteen) {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG bit depth: {:?}",
            bit_depth
        )));
    }
    if color_type == ColorType::Indexed && bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(
            "indexed PNG requires 8-bit depth".to_string(),
        ));
    }

    // Read image data
    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;
    let data = &buf[..output_info.buffer_size()];

    // 16-bit samples are big-endian; keep the high byte of each pair.
    let data: Vec<u8> = if bit_depth == BitDepth::Sixteen {
        data.iter().step_by(2).copied().collect()
    } else {
        data.to_vec()
    };

    let (layout, samples) = match color_type {
        ColorType::Grayscale => {
            let mut samples = Vec::with_capacity(data.len() * 3);
            for &g in &data {
                samples.extend_from_slice(&[g, g, g]);
            }
            (ChannelLayout::Rgb, samples)
        }
        ColorType::GrayscaleAlpha => {
            let mut samples = Vec::with_capacity(data.len() * 2);
            for ga in data.chunks_exact(2) {
                samples.extend_from_slice(&[ga[0], ga[0], ga[0], ga[1]]);
            }
            (ChannelLayout::Rgba, samples)
        }
        ColorType::Rgb => (ChannelLayout::Rgb, data),
        ColorType::Rgba => (ChannelLayout::Rgba, data),
        ColorType::Indexed => {
            let palette = reader.info().palette.as_ref().ok_or_else(|| {
                IoError::DecodeError("indexed PNG is missing its palette".to_string())
            })?;
            let palette: &[u8] = palette;
            let mut samples = Vec::with_capacity(data.len() * 3);
            for &index in &data {
                let at = index as usize * 3;
                let rgb = palette.get(at..at + 3).ok_or_else(|| {
                    IoError::DecodeError(format!("palette index {} out of range", index))
                })?;
                samples.extend_from_slice(rgb);
            }
            (ChannelLayout::Rgb, samples)
        }
    };

    PixelBuffer::from_samples(width, height, layout, samples).map_err(IoError::Core)
}

/// Write a PNG image from an RGBA buffer.
///
/// The pipeline normalizes to RGBA before encoding; anything else is a
/// caller error, not a recoverable condition.
///
/// # Errors
///
/// Returns [`IoError::InvalidData`] if the buffer is not RGBA, or
/// [`IoError::EncodeError`] if the encoder fails.
pub fn write_png(buffer: &PixelBuffer) -> IoResult<Vec<u8>> {
    if buffer.layout() != ChannelLayout::Rgba {
        return Err(IoError::InvalidData(
            "PNG encoder expects an RGBA buffer".to_string(),
        ));
    }

    let mut out = Vec::new();
    let mut encoder = Encoder::new(&mut out, buffer.width(), buffer.height());
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;
    writer
        .write_image_data(buffer.samples())
        .map_err(|e| IoError::EncodeError(format!("PNG data error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(out)
}
