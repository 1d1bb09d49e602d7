//! Multi-precision radix conversion between base-256 and base-58.
//!
//! Source digits are folded in most significant first. Each new digit
//! multiplies everything accumulated so far by the source radix and adds
//! itself, reducing modulo the target radix and carrying the quotient left.
//! The scratch buffer is filled right-to-left and never grows.

#![forbid(unsafe_code)]

use crate::capacity::{decode_capacity, encode_capacity};
use b58_core::{BASE, ZERO_SYMBOL};

/// Conversion direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    /// Bytes to Base58 digits
    Encode,
    /// Base58 digits to bytes
    Decode,
}

impl Direction {
    /// Radix of the digits fed into the engine.
    pub const fn source_radix(self) -> u32 {
        match self {
            Self::Encode => 256,
            Self::Decode => BASE as u32,
        }
    }

    /// Radix of the digits the engine produces.
    pub const fn target_radix(self) -> u32 {
        match self {
            Self::Encode => BASE as u32,
            Self::Decode => 256,
        }
    }

    /// Input element that counts toward the leading run.
    pub const fn input_zero(self) -> u8 {
        match self {
            Self::Encode => 0,
            Self::Decode => ZERO_SYMBOL,
        }
    }

    /// Output element emitted for each member of the leading run.
    pub const fn output_zero(self) -> u8 {
        match self {
            Self::Encode => ZERO_SYMBOL,
            Self::Decode => 0,
        }
    }

    /// Scratch size needed for `len` source digits.
    pub fn capacity(self, len: usize) -> usize {
        match self {
            Self::Encode => encode_capacity(len),
            Self::Decode => decode_capacity(len),
        }
    }
}

/// Fixed-capacity digit buffer, right-aligned.
///
/// `offset` is the leftmost position written so far. Positions before it
/// are implicitly zero.
#[derive(Clone, Debug)]
pub(crate) struct DigitBuffer {
    direction: Direction,
    digits: Vec<u8>,
    offset: usize,
}

impl DigitBuffer {
    /// Allocate a buffer large enough for `len` source digits.
    pub fn new(direction: Direction, len: usize) -> Self {
        let capacity = direction.capacity(len);
        Self {
            direction,
            digits: vec![0u8; capacity],
            offset: capacity,
        }
    }

    /// Fold in the next (less significant) source digit.
    ///
    /// Pushing more digits than the buffer was sized for is a logic error.
    pub fn push(&mut self, digit: u8) {
        let source = self.direction.source_radix();
        let target = self.direction.target_radix();
        debug_assert!(u32::from(digit) < source);

        let mut carry = u32::from(digit);
        let mut index = self.digits.len();
        while carry != 0 || index > self.offset {
            debug_assert!(index > 0, "digit buffer overflow ({:?})", self.direction);
            index -= 1;
            carry += u32::from(self.digits[index]) * source;
            self.digits[index] = (carry % target) as u8;
            carry /= target;
        }
        self.offset = index;
    }

    /// Converted digits, most significant first.
    pub fn digits(&self) -> &[u8] {
        &self.digits[self.offset..]
    }

    /// Number of converted digits.
    pub fn len(&self) -> usize {
        self.digits.len() - self.offset
    }

    /// Leftmost written index.
    #[cfg(test)]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Allocated size.
    #[cfg(test)]
    pub fn capacity(&self) -> usize {
        self.digits.len()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}

/// Run `len` source digits through a fresh buffer.
///
/// The first failing digit aborts the conversion and its error is returned
/// as is. `input` must not yield more than `len` digits.
pub(crate) fn convert<I, E>(direction: Direction, len: usize, input: I) -> Result<DigitBuffer, E>
where
    I: IntoIterator<Item = Result<u8, E>>,
{
    let mut buffer = DigitBuffer::new(direction, len);
    for digit in input {
        buffer.push(digit?);
    }
    Ok(buffer)
}
