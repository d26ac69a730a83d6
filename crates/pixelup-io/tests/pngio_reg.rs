//! PNG I/O regression test
//!
//! Verifies lossless RGBA round trips through our encoder, channel
//! expansion of grayscale and RGB sources, and encoder determinism.
//!
//! Run with:
//! ```
//! cargo test -p pixelup-io --test pngio_reg
//! ```

use pixelup_core::{ChannelLayout, PixelBuffer};
use pixelup_io::{IoError, decode_image, write_png};

/// Synthesize a PNG payload with an arbitrary color type, bypassing our
/// own encoder (which only emits RGBA).
fn synthesize_png(width: u32, height: u32, color: png::ColorType, data: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    let mut encoder = png::Encoder::new(&mut out, width, height);
    encoder.set_color(color);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header().unwrap();
    writer.write_image_data(data).unwrap();
    writer.finish().unwrap();
    out
}

#[test]
fn rgba_round_trip_is_lossless() {
    let samples: Vec<u8> = (0..3 * 2 * 4).map(|i| (i * 7 % 256) as u8).collect();
    let src = PixelBuffer::from_samples(3, 2, ChannelLayout::Rgba, samples).unwrap();

    let encoded = write_png(&src).unwrap();
    let decoded = decode_image(&encoded).unwrap();

    assert_eq!(decoded.width(), 3);
    assert_eq!(decoded.height(), 2);
    assert_eq!(decoded.layout(), ChannelLayout::Rgba);
    assert_eq!(decoded.samples(), src.samples());
}

#[test]
fn encoding_is_deterministic() {
    let src = PixelBuffer::from_samples(2, 2, ChannelLayout::Rgba, vec![50; 16]).unwrap();
    assert_eq!(write_png(&src).unwrap(), write_png(&src).unwrap());
}

#[test]
fn rgb_source_decodes_to_three_channels() {
    let data = vec![10, 20, 30, 40, 50, 60];
    let payload = synthesize_png(2, 1, png::ColorType::Rgb, &data);

    let decoded = decode_image(&payload).unwrap();
    assert_eq!(decoded.layout(), ChannelLayout::Rgb);
    assert_eq!(decoded.samples(), &data[..]);
}

#[test]
fn grayscale_source_expands_to_rgb() {
    let payload = synthesize_png(2, 1, png::ColorType::Grayscale, &[100, 200]);

    let decoded = decode_image(&payload).unwrap();
    assert_eq!(decoded.layout(), ChannelLayout::Rgb);
    assert_eq!(decoded.samples(), &[100, 100, 100, 200, 200, 200]);
}

#[test]
fn grayscale_alpha_expands_to_rgba() {
    let payload = synthesize_png(1, 1, png::ColorType::GrayscaleAlpha, &[77, 128]);

    let decoded = decode_image(&payload).unwrap();
    assert_eq!(decoded.layout(), ChannelLayout::Rgba);
    assert_eq!(decoded.samples(), &[77, 77, 77, 128]);
}

#[test]
fn encoder_rejects_rgb_buffers() {
    let src = PixelBuffer::from_samples(1, 1, ChannelLayout::Rgb, vec![1, 2, 3]).unwrap();
    assert!(matches!(write_png(&src), Err(IoError::InvalidData(_))));
}

#[test]
fn truncated_payload_is_a_decode_error() {
    let src = PixelBuffer::from_samples(4, 4, ChannelLayout::Rgba, vec![9; 64]).unwrap();
    let encoded = write_png(&src).unwrap();
    let truncated = &encoded[..encoded.len() / 2];
    assert!(matches!(
        decode_image(truncated),
        Err(IoError::DecodeError(_))
    ));
}
