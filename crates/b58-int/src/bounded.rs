//! `u64` adapter.
//!
//! `decode_int` never fails loudly: anything it cannot represent, whether a
//! bad character or a value past `u64::MAX`, comes back as `None`.

#![forbid(unsafe_code)]

use std::fmt;

use b58_core::{Error, Result, ALPHABET, BASE, ZERO_SYMBOL};

/// Base58 digits in `u64::MAX`.
pub const MAX_DIGITS: usize = 11;

/// Encode a non-negative integer.
///
/// Accepts any integer type convertible to `u64`; negative or oversized
/// values are `OutOfRange`.
pub fn encode_int<T>(value: T) -> Result<String>
where
    T: TryInto<u64> + fmt::Display + Copy,
{
    let mut n: u64 = value
        .try_into()
        .map_err(|_| Error::OutOfRange(value.to_string()))?;

    if n == 0 {
        return Ok(char::from(ZERO_SYMBOL).to_string());
    }

    let mut symbols = [0u8; MAX_DIGITS];
    let mut start = MAX_DIGITS;
    while n > 0 {
        start -= 1;
        symbols[start] = ALPHABET.symbol((n % BASE as u64) as u8);
        n /= BASE as u64;
    }
    Ok(symbols[start..].iter().map(|&s| char::from(s)).collect())
}

/// Decode to a `u64`, or `None` if `input` is not a representable Base58 integer.
pub fn decode_int(input: &str) -> Option<u64> {
    input.bytes().try_fold(0u64, |acc, symbol| {
        let digit = ALPHABET.digit(symbol)?;
        acc.checked_mul(BASE as u64)?.checked_add(u64::from(digit))
    })
}
