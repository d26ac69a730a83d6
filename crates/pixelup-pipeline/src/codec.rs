//! Decoder/encoder collaborator seam
//!
//! The pipeline talks to its codecs through these traits so that the
//! orchestration logic stays independent of the format libraries and so
//! tests can inject failing collaborators.

use pixelup_core::PixelBuffer;
use pixelup_io::IoResult;

/// Turns encoded bytes into a canonical pixel buffer.
pub trait ImageDecoder {
    /// Decode an encoded image payload.
    fn decode(&self, bytes: &[u8]) -> IoResult<PixelBuffer>;
}

/// Turns an RGBA pixel buffer into encoded bytes.
pub trait ImageEncoder {
    /// Encode a normalized (RGBA) buffer. Output must be deterministic
    /// for identical input.
    fn encode(&self, buffer: &PixelBuffer) -> IoResult<Vec<u8>>;
}

/// The production codec: PNG/JPEG in, PNG out, via `pixelup-io`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardCodec;

impl ImageDecoder for StandardCodec {
    fn decode(&self, bytes: &[u8]) -> IoResult<PixelBuffer> {
        pixelup_io::decode_image(bytes)
    }
}

impl ImageEncoder for StandardCodec {
    fn encode(&self, buffer: &PixelBuffer) -> IoResult<Vec<u8>> {
        pixelup_io::write_png(buffer)
    }
}
