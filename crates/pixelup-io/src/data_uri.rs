//! Base64 / data-URI payload framing
//!
//! The transport submits images either as a bare base64 string or framed
//! as a data URI (`data:image/png;base64,<payload>`), and expects the
//! upscaled result framed as a PNG data URI.

use crate::{IoError, IoResult};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Prefix emitted for upscaled PNG payloads.
const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Decode a base64 image payload, stripping an optional data-URI prefix.
///
/// Accepts both `data:image/<subtype>;base64,<payload>` and a bare base64
/// string, matching what browser clients send.
///
/// # Errors
///
/// Returns [`IoError::InvalidData`] if the base64 payload is malformed.
pub fn decode_image_payload(payload: &str) -> IoResult<Vec<u8>> {
    let encoded = strip_data_uri_prefix(payload).unwrap_or(payload);
    STANDARD
        .decode(encoded.trim())
        .map_err(|e| IoError::InvalidData(format!("invalid base64 payload: {}", e)))
}

/// Frame encoded PNG bytes as a data URI.
pub fn encode_png_data_uri(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(PNG_DATA_URI_PREFIX.len() + bytes.len().div_ceil(3) * 4);
    out.push_str(PNG_DATA_URI_PREFIX);
    out.push_str(&STANDARD.encode(bytes));
    out
}

/// Strip a `data:image/<subtype>;base64,` prefix, if present.
fn strip_data_uri_prefix(payload: &str) -> Option<&str> {
    let rest = payload.strip_prefix("data:image/")?;
    let comma = rest.find(',')?;
    let (meta, encoded) = rest.split_at(comma);
    meta.ends_with(";base64").then(|| &encoded[1..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_base64() {
        let bytes = decode_image_payload("aGVsbG8=").unwrap();
        assert_eq!(bytes, b"hello");
    }

    #[test]
    fn test_data_uri_prefix_stripped() {
        let bytes = decode_image_payload("data:image/png;base64,aGVsbG8=").unwrap();
        assert_eq!(bytes, b"hello");
        let bytes = decode_image_payload("data:image/jpeg;base64,aGVsbG8=").unwrap();
        assert_eq!(bytes, b"hello");
    }

    #[test]
    fn test_invalid_base64_rejected() {
        assert!(matches!(
            decode_image_payload("not base64!!"),
            Err(IoError::InvalidData(_))
        ));
    }

    #[test]
    fn test_png_data_uri_round_trip() {
        let framed = encode_png_data_uri(b"hello");
        assert_eq!(framed, "data:image/png;base64,aGVsbG8=");
        assert_eq!(decode_image_payload(&framed).unwrap(), b"hello");
    }
}
