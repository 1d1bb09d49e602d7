//! Bounded decode into a caller-owned buffer.
//!
//! The destination is filled from the front: leading zero bytes first, then
//! the converted bytes, until it is full. Whatever does not fit is dropped,
//! but still counted in `decoded`.

#![forbid(unsafe_code)]

use b58_core::Result;
use tracing::instrument;

use crate::engine::Direction;
use crate::run::{decode_digits, leading_run};

/// Outcome of [`decode_into`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecodedInto {
    /// Input characters consumed.
    pub read: usize,
    /// Total decoded length, which may exceed the destination.
    pub decoded: usize,
    /// Bytes placed in the destination: `min(decoded, destination.len())`.
    pub written: usize,
}

impl DecodedInto {
    /// True if the whole decoded value fit.
    pub fn is_complete(&self) -> bool {
        self.written == self.decoded
    }
}

/// Decode `input` into `destination`.
///
/// `destination` is only written once the whole input has decoded, so a
/// failed call leaves it untouched.
#[instrument(
    name = "b58::decode_into",
    level = "trace",
    skip(input, destination),
    fields(len = input.len(), capacity = destination.len())
)]
pub fn decode_into(input: &str, destination: &mut [u8]) -> Result<DecodedInto> {
    let symbols = input.as_bytes();
    let leading = leading_run(Direction::Decode, symbols);

    if leading == symbols.len() {
        let written = leading.min(destination.len());
        destination[..written].fill(0);
        return Ok(DecodedInto {
            read: leading,
            decoded: leading,
            written,
        });
    }

    let buffer = decode_digits(symbols, leading)?;

    let mut written = leading.min(destination.len());
    destination[..written].fill(0);
    let digits = buffer.digits();
    let count = digits.len().min(destination.len() - written);
    destination[written..written + count].copy_from_slice(&digits[..count]);
    written += count;

    Ok(DecodedInto {
        read: symbols.len(),
        decoded: leading + digits.len(),
        written,
    })
}
