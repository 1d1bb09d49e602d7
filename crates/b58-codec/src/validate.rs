//! Alphabet membership checks that do not decode.

#![forbid(unsafe_code)]

use b58_core::{Result, ALPHABET};

use crate::run::invalid_character;

/// True if every character of `input` is a Base58 symbol.
pub fn is_valid(input: &str) -> bool {
    input.bytes().all(|b| ALPHABET.digit(b).is_some())
}

/// Like [`is_valid`], but reports the first offending index.
pub fn validate(input: &str) -> Result<()> {
    match input.bytes().position(|b| ALPHABET.digit(b).is_none()) {
        Some(index) => Err(invalid_character(index, input.as_bytes()[index])),
        None => Ok(()),
    }
}
