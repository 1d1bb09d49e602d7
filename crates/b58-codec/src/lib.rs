//! Base58 codec.
//!
//! One radix conversion engine (`engine`) drives every representation:
//! raw byte buffers, byte-per-character strings, and UTF-8 text. Leading
//! zero bytes and leading `'1'` symbols are carried separately by `run`.

#![forbid(unsafe_code)]

pub mod bytes;
pub mod capacity;
mod engine;
mod run;
pub mod strict;
pub mod string;
pub mod text;
pub mod validate;

pub use b58_core::{Error, Result};
pub use bytes::{decode_bytes, decode_bytes_to_string, encode_bytes, encode_bytes_to_string};
pub use capacity::{decode_capacity, encode_capacity, FACTOR, INVERSE_FACTOR};
pub use strict::{decode_into, DecodedInto};
pub use string::{decode, encode};
pub use text::{decode_bytes_to_text, decode_text, encode_text};
pub use validate::{is_valid, validate};
