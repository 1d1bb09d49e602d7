//! UTF-8 text adapter, layered on the byte adapter.

#![forbid(unsafe_code)]

use b58_core::Result;

use crate::bytes::{decode_bytes, encode_bytes_to_string};

/// Encode the UTF-8 bytes of `text`.
pub fn encode_text(text: &str) -> String {
    encode_bytes_to_string(text.as_bytes())
}

/// Decode a Base58 string and read the bytes as UTF-8.
///
/// Malformed UTF-8 sequences become U+FFFD.
pub fn decode_text(input: &str) -> Result<String> {
    decode_bytes_to_text(input.as_bytes())
}

/// Decode a buffer of Base58 symbol codes and read the bytes as UTF-8.
pub fn decode_bytes_to_text(input: &[u8]) -> Result<String> {
    let bytes = decode_bytes(input)?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use b58_core::Error;

    #[test]
    fn test_ascii_matches_bytes() {
        assert_eq!(encode_text("Hello World"), "JxF12TrwUP45BMd");
    }

    #[test]
    fn test_unicode_roundtrip() {
        for text in ["", "\u{20ac}", "na\u{ef}ve caf\u{e9}", "\u{1f980} crab", "\u{0}x"] {
            let encoded = encode_text(text);
            assert_eq!(decode_text(&encoded).unwrap(), text);
            assert_eq!(decode_bytes_to_text(encoded.as_bytes()).unwrap(), text);
        }
    }

    #[test]
    fn test_uses_utf8_bytes() {
        let reference = bs58::encode("\u{20ac}".as_bytes()).into_string();
        assert_eq!(encode_text("\u{20ac}"), reference);
    }

    #[test]
    fn test_malformed_utf8_is_replaced() {
        let encoded = bs58::encode([0x61u8, 0xff, 0x62]).into_string();
        assert_eq!(decode_text(&encoded).unwrap(), "a\u{fffd}b");
    }

    #[test]
    fn test_invalid_character() {
        assert_eq!(
            decode_text("ab0").unwrap_err(),
            Error::InvalidCharacter { index: 2 }
        );
    }
}
