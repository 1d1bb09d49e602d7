//! Core types and the Base58 alphabet table.

#![forbid(unsafe_code)]

mod alphabet;
mod error;

pub use alphabet::{Alphabet, ALPHABET, BASE, ZERO_SYMBOL};
pub use error::Error;

pub type Result<T> = std::result::Result<T, Error>;
