//! Arbitrary-precision adapter over `num_bigint::BigInt`.
//!
//! Encoding takes the base-58 digits of the magnitude; decoding folds digits
//! in most significant first. Unlike `decode_int`, `decode_bigint` reports
//! invalid characters as errors.

#![forbid(unsafe_code)]

use b58_core::{Error, Result, ALPHABET, BASE, ZERO_SYMBOL};
use num_bigint::{BigInt, BigUint};
use num_traits::{Signed, Zero};
use tracing::{instrument, trace};

/// Encode a non-negative big integer.
pub fn encode_bigint(value: &BigInt) -> Result<String> {
    if value.is_negative() {
        return Err(Error::OutOfRange(value.to_string()));
    }
    if value.is_zero() {
        return Ok(char::from(ZERO_SYMBOL).to_string());
    }

    Ok(value
        .magnitude()
        .to_radix_be(BASE as u32)
        .into_iter()
        .map(|digit| char::from(ALPHABET.symbol(digit)))
        .collect())
}

/// Decode to a big integer.
#[instrument(name = "b58::decode_bigint", level = "trace", skip(input), fields(len = input.len()))]
pub fn decode_bigint(input: &str) -> Result<BigInt> {
    let base = BigUint::from(BASE);
    let mut value = BigUint::zero();
    for (index, symbol) in input.bytes().enumerate() {
        let Some(digit) = ALPHABET.digit(symbol) else {
            trace!(index, symbol, "rejected non-Base58 input");
            return Err(Error::InvalidCharacter { index });
        };
        value *= &base;
        value += BigUint::from(digit);
    }
    Ok(BigInt::from(value))
}
