//! JPEG image format support
//!
//! Reads JPEG images using the `jpeg-decoder` crate. Grayscale sources are
//! expanded to RGB so that every decoded buffer carries 3 channels; 16-bit
//! luma is narrowed to its high byte. CMYK is not supported.
//!
//! JPEG *writing* is intentionally absent: the pipeline always re-encodes
//! to PNG.

use crate::{IoError, IoResult};
use jpeg_decoder::{Decoder, PixelFormat};
use pixelup_core::{ChannelLayout, PixelBuffer};
use std::io::Cursor;

/// Read a JPEG image from encoded bytes.
///
/// # Returns
///
/// A 3-channel `PixelBuffer` (JPEG carries no alpha).
pub fn read_jpeg(bytes: &[u8]) -> IoResult<PixelBuffer> {
    let mut decoder = Decoder::new(Cursor::new(bytes));
    let data = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG header missing after decode".to_string()))?;

    let width = u32::from(info.width);
    let height = u32::from(info.height);

    let samples = match info.pixel_format {
        PixelFormat::RGB24 => data,
        PixelFormat::L8 => {
            let mut samples = Vec::with_capacity(data.len() * 3);
            for &g in &data {
                samples.extend_from_slice(&[g, g, g]);
            }
            samples
        }
        PixelFormat::L16 => {
            // Big-endian 16-bit luma; keep the high byte.
            let mut samples = Vec::with_capacity(data.len() / 2 * 3);
            for pair in data.chunks_exact(2) {
                samples.extend_from_slice(&[pair[0], pair[0], pair[0]]);
            }
            samples
        }
        PixelFormat::CMYK32 => {
            return Err(IoError::UnsupportedFormat(
                "CMYK JPEG is not supported".to_string(),
            ));
        }
    };

    PixelBuffer::from_samples(width, height, ChannelLayout::Rgb, samples).map_err(IoError::Core)
}
