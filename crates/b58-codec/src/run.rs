//! Leading-run handling.
//!
//! Positional conversion drops leading zeros, so a prefix of zero bytes
//! (encode) or `'1'` symbols (decode) is counted up front and re-emitted
//! one-for-one in front of the converted digits.

#![forbid(unsafe_code)]

use std::iter;

use b58_core::{Error, Result, ALPHABET};
use tracing::trace;

use crate::engine::{convert, DigitBuffer, Direction};

/// Length of the leading run of `direction`'s zero-equivalent in `input`.
pub(crate) fn leading_run(direction: Direction, input: &[u8]) -> usize {
    let zero = direction.input_zero();
    input.iter().take_while(|&&b| b == zero).count()
}

/// Leading run plus the engine's digits: the full result of one call.
#[derive(Clone, Debug)]
pub(crate) struct Conversion {
    leading: usize,
    buffer: DigitBuffer,
}

impl Conversion {
    #[cfg(test)]
    pub fn leading(&self) -> usize {
        self.leading
    }

    /// Converted digits after the leading run.
    #[cfg(test)]
    pub fn digits(&self) -> &[u8] {
        self.buffer.digits()
    }

    /// Output length in elements.
    pub fn len(&self) -> usize {
        self.leading + self.buffer.len()
    }

    /// Output elements in order: Base58 symbol codes when encoding, bytes when decoding.
    pub fn output(&self) -> impl Iterator<Item = u8> + '_ {
        let direction = self.buffer.direction();
        iter::repeat(direction.output_zero())
            .take(self.leading)
            .chain(self.buffer.digits().iter().map(move |&d| match direction {
                Direction::Encode => ALPHABET.symbol(d),
                Direction::Decode => d,
            }))
    }

    pub fn into_vec(self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.len());
        out.extend(self.output());
        out
    }

    /// Output as a string, one char per element (Latin-1 for decoded bytes).
    pub fn into_string(self) -> String {
        let mut out = String::with_capacity(self.len());
        out.extend(self.output().map(char::from));
        out
    }
}

/// Encode raw bytes.
pub(crate) fn convert_bytes(data: &[u8]) -> Conversion {
    let leading = leading_run(Direction::Encode, data);
    let rest = &data[leading..];
    let mut buffer = DigitBuffer::new(Direction::Encode, rest.len());
    for &byte in rest {
        buffer.push(byte);
    }
    Conversion { leading, buffer }
}

/// Decode Base58 symbol codes, failing on the first byte outside the alphabet.
pub(crate) fn convert_symbols(symbols: &[u8]) -> Result<Conversion> {
    let leading = leading_run(Direction::Decode, symbols);
    let buffer = decode_digits(symbols, leading)?;
    Ok(Conversion { leading, buffer })
}

/// Run `symbols[start..]` through the decode engine.
pub(crate) fn decode_digits(symbols: &[u8], start: usize) -> Result<DigitBuffer> {
    let rest = &symbols[start..];
    convert(
        Direction::Decode,
        rest.len(),
        rest.iter().enumerate().map(|(i, &symbol)| {
            ALPHABET
                .digit(symbol)
                .ok_or_else(|| invalid_character(start + i, symbol))
        }),
    )
}

pub(crate) fn invalid_character(index: usize, symbol: u8) -> Error {
    trace!(index, symbol, "rejected non-Base58 input");
    Error::InvalidCharacter { index }
}
