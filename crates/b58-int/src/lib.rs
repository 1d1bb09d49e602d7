//! Base58 encoding of integers.
//!
//! Integers are encoded by value: there is no leading run, and `0` is the
//! single symbol `"1"`.

#![forbid(unsafe_code)]

#[cfg(feature = "bigint")]
pub mod bigint;
pub mod bounded;

#[cfg(feature = "bigint")]
pub use bigint::{decode_bigint, encode_bigint};
#[cfg(feature = "bigint")]
pub use num_bigint::BigInt;
pub use bounded::{decode_int, encode_int, MAX_DIGITS};
