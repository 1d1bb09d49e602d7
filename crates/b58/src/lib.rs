//! Base58 encoding and decoding (Bitcoin alphabet).
//!
//! Representations:
//! - byte buffers: [`encode_bytes`], [`decode_bytes`] and their string variants
//! - byte-per-character strings: [`encode`], [`decode`]
//! - UTF-8 text: [`encode_text`], [`decode_text`], [`decode_bytes_to_text`]
//! - integers: [`encode_int`], [`decode_int`], and with the `bigint` feature
//!   `encode_bigint`, `decode_bigint`
//! - bounded decode into a caller buffer: [`decode_into`]
//!
//! `decode_int` returns `None` for input it cannot decode, while every other
//! decoder returns [`Error::InvalidCharacter`].
//!
//! The conversion engine is not part of the API; only the adapters above
//! reach it.
//!
//! ```compile_fail
//! use b58_codec::engine::DigitBuffer;
//! ```

#![forbid(unsafe_code)]

pub use b58_core::{Alphabet, Error, Result, ALPHABET, BASE, ZERO_SYMBOL};

pub use b58_codec::{
    decode, decode_bytes, decode_bytes_to_string, decode_bytes_to_text, decode_into, decode_text,
    encode, encode_bytes, encode_bytes_to_string, encode_text, is_valid, validate, DecodedInto,
};

pub use b58_int::{decode_int, encode_int};

#[cfg(feature = "bigint")]
pub use b58_int::{decode_bigint, encode_bigint, BigInt};

