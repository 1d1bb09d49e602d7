//! Worst-case output sizes.
//!
//! An n-digit number in base B1 needs at most ceil(n * ln(B1) / ln(B2))
//! digits in base B2. `n` is always the input length after the leading run
//! has been stripped.

#![forbid(unsafe_code)]

/// ln(256) / ln(58): Base58 digits per byte.
pub const FACTOR: f64 = 1.365_658_237_309_761;

/// ln(58) / ln(256): bytes per Base58 digit.
pub const INVERSE_FACTOR: f64 = 0.732_247_624_390_946_5;

/// Scratch size for encoding `len` bytes to Base58 digits.
pub fn encode_capacity(len: usize) -> usize {
    (len as f64 * FACTOR).ceil() as usize
}

/// Scratch size for decoding `len` Base58 digits to bytes.
pub fn decode_capacity(len: usize) -> usize {
    (len as f64 * INVERSE_FACTOR).ceil() as usize
}
