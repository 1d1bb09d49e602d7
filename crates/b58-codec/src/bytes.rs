//! Raw byte buffer adapter.
//!
//! The Base58 side is a buffer of ASCII symbol codes.

#![forbid(unsafe_code)]

use b58_core::Result;
use tracing::instrument;

use crate::run::{convert_bytes, convert_symbols};

/// Encode bytes to a buffer of Base58 symbol codes.
pub fn encode_bytes(data: &[u8]) -> Vec<u8> {
    convert_bytes(data).into_vec()
}

/// Encode bytes to a Base58 string.
pub fn encode_bytes_to_string(data: &[u8]) -> String {
    convert_bytes(data).into_string()
}

/// Decode a buffer of Base58 symbol codes to bytes.
#[instrument(name = "b58::decode_bytes", level = "trace", skip(input), fields(len = input.len()))]
pub fn decode_bytes(input: &[u8]) -> Result<Vec<u8>> {
    Ok(convert_symbols(input)?.into_vec())
}

/// Decode a buffer of Base58 symbol codes to a byte-per-character string.
#[instrument(name = "b58::decode_bytes_to_string", level = "trace", skip(input), fields(len = input.len()))]
pub fn decode_bytes_to_string(input: &[u8]) -> Result<String> {
    Ok(convert_symbols(input)?.into_string())
}
