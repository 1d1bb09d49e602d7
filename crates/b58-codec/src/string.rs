//! Byte-per-character string adapter.
//!
//! Every char must be in `U+0000..=U+00FF` and stands for one byte. Decoding
//! maps each byte back to the char with the same code point.

#![forbid(unsafe_code)]

use b58_core::{Error, Result};
use tracing::instrument;

use crate::bytes::encode_bytes_to_string;
use crate::run::convert_symbols;

/// Encode a byte-per-character string.
pub fn encode(input: &str) -> Result<String> {
    let bytes = input
        .chars()
        .enumerate()
        .map(|(index, c)| {
            u8::try_from(c).map_err(|_| Error::NonByteCharacter {
                index,
                code_point: u32::from(c),
            })
        })
        .collect::<Result<Vec<u8>>>()?;
    Ok(encode_bytes_to_string(&bytes))
}

/// Decode a Base58 string to a byte-per-character string.
#[instrument(name = "b58::decode", level = "trace", skip(input), fields(len = input.len()))]
pub fn decode(input: &str) -> Result<String> {
    // A non-ASCII char is rejected at its first byte, and every byte before
    // it is ASCII, so byte and char indices agree.
    Ok(convert_symbols(input.as_bytes())?.into_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(encode("").unwrap(), "");
        assert_eq!(decode("").unwrap(), "");
    }

    #[test]
    fn test_ascii() {
        assert_eq!(encode("Hello World").unwrap(), "JxF12TrwUP45BMd");
        assert_eq!(decode("JxF12TrwUP45BMd").unwrap(), "Hello World");
    }

    #[test]
    fn test_latin1_roundtrip() {
        let input = "caf\u{e9} \u{ff}\u{0}\u{80}";
        let encoded = encode(input).unwrap();
        assert_eq!(decode(&encoded).unwrap(), input);
    }

    #[test]
    fn test_latin1_matches_raw_bytes() {
        // U+00E9 is encoded as the single byte 0xe9, not its UTF-8 form
        assert_eq!(
            encode("\u{e9}").unwrap(),
            bs58::encode([0xe9u8]).into_string()
        );
    }

    #[test]
    fn test_leading_nul_chars() {
        let encoded = encode("\u{0}\u{0}a").unwrap();
        assert!(encoded.starts_with("11"));
        assert_eq!(decode(&encoded).unwrap(), "\u{0}\u{0}a");
    }

    #[test]
    fn test_wide_char_rejected() {
        assert_eq!(
            encode("ab\u{20ac}").unwrap_err(),
            Error::NonByteCharacter {
                index: 2,
                code_point: 0x20ac
            }
        );
    }

    #[test]
    fn test_invalid_character_index() {
        assert_eq!(
            decode("1230").unwrap_err(),
            Error::InvalidCharacter { index: 3 }
        );
        assert_eq!(
            decode("0").unwrap_err(),
            Error::InvalidCharacter { index: 0 }
        );
    }

    #[test]
    fn test_non_ascii_in_base58_input() {
        assert_eq!(
            decode("2\u{e9}2").unwrap_err(),
            Error::InvalidCharacter { index: 1 }
        );
    }
}
