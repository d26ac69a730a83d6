//! JPEG I/O regression test
//!
//! Decodes payloads synthesized with `jpeg-encoder` and checks shape,
//! channel expansion, and approximate color fidelity (JPEG is lossy, so
//! solid-color sources are compared with a small tolerance).
//!
//! Run with:
//! ```
//! cargo test -p pixelup-io --test jpegio_reg
//! ```

use jpeg_encoder::{ColorType, Encoder};
use pixelup_core::ChannelLayout;
use pixelup_io::{IoError, decode_image};

fn synthesize_jpeg(width: u16, height: u16, color: ColorType, data: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    let encoder = Encoder::new(&mut out, 95);
    encoder.encode(data, width, height, color).unwrap();
    out
}

#[test]
fn rgb_jpeg_decodes_to_three_channels() {
    // Solid mid-gray survives lossy compression essentially unchanged.
    let data = vec![128u8; 8 * 8 * 3];
    let payload = synthesize_jpeg(8, 8, ColorType::Rgb, &data);

    let decoded = decode_image(&payload).unwrap();
    assert_eq!(decoded.width(), 8);
    assert_eq!(decoded.height(), 8);
    assert_eq!(decoded.layout(), ChannelLayout::Rgb);
    for &s in decoded.samples() {
        assert!((i16::from(s) - 128).abs() <= 4, "sample {} too far from 128", s);
    }
}

#[test]
fn grayscale_jpeg_expands_to_rgb() {
    let data = vec![200u8; 8 * 8];
    let payload = synthesize_jpeg(8, 8, ColorType::Luma, &data);

    let decoded = decode_image(&payload).unwrap();
    assert_eq!(decoded.layout(), ChannelLayout::Rgb);
    for pixel in decoded.samples().chunks_exact(3) {
        assert_eq!(pixel[0], pixel[1]);
        assert_eq!(pixel[1], pixel[2]);
        assert!((i16::from(pixel[0]) - 200).abs() <= 4);
    }
}

#[test]
fn garbage_after_magic_is_a_decode_error() {
    let mut payload = vec![0xFF, 0xD8, 0xFF];
    payload.extend_from_slice(&[0u8; 32]);
    assert!(matches!(
        decode_image(&payload),
        Err(IoError::DecodeError(_))
    ));
}
