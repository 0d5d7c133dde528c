// 🔤 Encoder - Reversible base64 obfuscation of comment text
//
// NOT a security mechanism. Anyone holding the artifact can read every
// comment; the transform only keeps plain text out of casual view.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use log::warn;
use thiserror::Error;

/// Failure to turn a stored value back into text
#[derive(Debug, Error)]
pub enum DecodeFault {
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("decoded bytes are not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Standard-alphabet, padded base64 of the UTF-8 bytes of `text`
pub fn encode(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Strict inverse of [`encode`]
pub fn decode(encoded: &str) -> Result<String, DecodeFault> {
    let bytes = STANDARD.decode(encoded)?;
    Ok(String::from_utf8(bytes)?)
}

/// Same fallback as the artifact's runtime decoder: report and return ""
pub fn decode_or_empty(encoded: &str) -> String {
    match decode(encoded) {
        Ok(text) => text,
        Err(e) => {
            warn!("Failed to decode base64 string {:?}: {}", encoded, e);
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_known_values() {
        assert_eq!(encode(""), "");
        assert_eq!(encode("Final note"), "RmluYWwgbm90ZQ==");
        assert_eq!(encode("Great job!"), "R3JlYXQgam9iIQ==");
    }

    #[test]
    fn test_round_trip() {
        let samples = [
            "",
            "plain",
            "she said \"well done\"",
            "back\\slash",
            "line one\nline two\r\n",
            "“smart quotes” – and dashes",
            "日本語のコメント",
            "emoji 🎉 ok",
        ];

        for text in samples {
            let encoded = encode(text);
            assert_eq!(decode(&encoded).unwrap(), text, "round trip for {:?}", text);
        }
    }

    #[test]
    fn test_output_is_literal_safe() {
        let encoded = encode("quotes \" and \\ and ' and \n");
        assert!(encoded.is_ascii());
        assert!(!encoded.contains('"'));
        assert!(!encoded.contains('\\'));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(decode("not base64!"), Err(DecodeFault::Base64(_))));
    }

    #[test]
    fn test_decode_rejects_non_utf8_payload() {
        // 0xFF 0xFE is not valid UTF-8
        let encoded = STANDARD.encode([0xFF, 0xFE]);
        assert!(matches!(decode(&encoded), Err(DecodeFault::Utf8(_))));
    }

    #[test]
    fn test_decode_or_empty_fallback() {
        assert_eq!(decode_or_empty("%%%"), "");
        assert_eq!(decode_or_empty(&encode("kept")), "kept");
    }
}
