use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    pub encoding_label: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("failed to decode bytes with {encoding}: {message}")]
    DecodeFailure { encoding: String, message: String },
    #[error("content looks binary (NUL byte at offset {offset})")]
    Binary { offset: usize },
}

/// Decode raw file bytes into text using: BOM -> strict UTF-8 -> chardetng fallback.
pub fn decode_text(bytes: &[u8]) -> Result<DecodedText, DecodeError> {
    // 1) BOM aware decode; the BOM itself is stripped.
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        return decode_with(&bytes[bom_len..], encoding);
    }

    // 2) Most inputs are plain UTF-8.
    if let Ok(text) = std::str::from_utf8(bytes) {
        return finish(text.to_string(), UTF_8);
    }

    // 3) Legacy encodings via chardetng detection.
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let enc = detector.guess(None, true);
    decode_with(bytes, enc)
}

fn decode_with(bytes: &[u8], enc: &'static Encoding) -> Result<DecodedText, DecodeError> {
    let (text, had_errors) = enc.decode_without_bom_handling(bytes);
    if had_errors {
        return Err(DecodeError::DecodeFailure {
            encoding: enc.name().to_string(),
            message: "malformed byte sequence".into(),
        });
    }
    finish(text.into_owned(), enc)
}

fn finish(text: String, enc: &'static Encoding) -> Result<DecodedText, DecodeError> {
    if let Some(offset) = text.find('\0') {
        return Err(DecodeError::Binary { offset });
    }
    Ok(DecodedText {
        text,
        encoding_label: enc.name().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::{decode_text, DecodeError};

    #[test]
    fn plain_utf8_is_kept_verbatim() {
        let decoded = decode_text("héllo\r\nwörld".as_bytes()).unwrap();
        assert_eq!(decoded.text, "héllo\r\nwörld");
        assert_eq!(decoded.encoding_label, "UTF-8");
    }

    #[test]
    fn utf8_bom_is_stripped() {
        let decoded = decode_text(b"\xEF\xBB\xBFhi").unwrap();
        assert_eq!(decoded.text, "hi");
    }

    #[test]
    fn utf16le_with_bom_is_decoded() {
        let decoded = decode_text(b"\xFF\xFEh\x00i\x00").unwrap();
        assert_eq!(decoded.text, "hi");
        assert_eq!(decoded.encoding_label, "UTF-16LE");
    }

    #[test]
    fn legacy_single_byte_text_is_detected() {
        // "café" in windows-1252.
        let decoded = decode_text(b"caf\xE9 au lait, s'il vous pla\xEEt").unwrap();
        assert!(decoded.text.starts_with("caf"));
        assert_ne!(decoded.encoding_label, "UTF-8");
    }

    #[test]
    fn empty_input_is_empty_text() {
        assert_eq!(decode_text(b"").unwrap().text, "");
    }

    #[test]
    fn nul_bytes_are_rejected_as_binary() {
        assert_eq!(
            decode_text(b"PK\x03\x04\x00\x00").unwrap_err(),
            DecodeError::Binary { offset: 4 }
        );
    }
}
