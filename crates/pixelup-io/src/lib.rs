//! pixelup-io - Image I/O for pixelup
//!
//! Decodes PNG and JPEG payloads into the canonical [`PixelBuffer`]
//! representation, encodes RGBA buffers to PNG, and handles the base64 /
//! data-URI framing used by the transport.
//!
//! Format support is feature-gated in the manner of the per-format
//! decoders it wraps: `png-format` and `jpeg` are both enabled by default.
//!
//! [`PixelBuffer`]: pixelup_core::PixelBuffer

mod data_uri;
mod error;
mod format;
#[cfg(feature = "jpeg")]
mod jpeg;
#[cfg(feature = "png-format")]
mod png;

pub use data_uri::{decode_image_payload, encode_png_data_uri};
pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format};
#[cfg(feature = "jpeg")]
pub use jpeg::read_jpeg;
#[cfg(feature = "png-format")]
pub use png::{read_png, write_png};

use pixelup_core::PixelBuffer;

/// Decode an encoded image into a `PixelBuffer`.
///
/// Sniffs the format from the payload's magic bytes, then dispatches to
/// the matching decoder.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] for formats other than PNG and
/// JPEG (or when the matching cargo feature is disabled), and the
/// decoder's error for malformed payloads.
pub fn decode_image(bytes: &[u8]) -> IoResult<PixelBuffer> {
    match detect_format(bytes)? {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => read_png(bytes),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => read_jpeg(bytes),
        other => Err(IoError::UnsupportedFormat(format!(
            "no decoder available for {:?}",
            other
        ))),
    }
}
