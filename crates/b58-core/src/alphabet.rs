//! Base58 alphabet (Bitcoin style).
//!
//! Excludes 0, O, I, l to avoid confusion. Both lookup directions are built
//! at compile time and never change.

#![forbid(unsafe_code)]

/// Radix of the alphabet.
pub const BASE: usize = 58;

/// Symbol for digit 0. Also stands in for each leading zero byte.
pub const ZERO_SYMBOL: u8 = b'1';

const SYMBOLS: &[u8; BASE] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Marker for bytes outside the alphabet in the inverse table.
const INVALID: u8 = 0xff;

/// The shared alphabet table.
pub static ALPHABET: Alphabet = Alphabet::new();

/// Ordered symbol table plus its inverse.
#[derive(Debug)]
pub struct Alphabet {
    symbols: [u8; BASE],
    digits: [u8; 256],
}

impl Alphabet {
    const fn new() -> Self {
        let mut digits = [INVALID; 256];
        let mut i = 0;
        while i < BASE {
            digits[SYMBOLS[i] as usize] = i as u8;
            i += 1;
        }
        Self {
            symbols: *SYMBOLS,
            digits,
        }
    }

    /// Symbol for a digit value. Panics if `digit >= 58`.
    #[inline]
    pub const fn symbol(&self, digit: u8) -> u8 {
        self.symbols[digit as usize]
    }

    /// Digit value for an ASCII symbol code, or `None` if it is not in the alphabet.
    #[inline]
    pub const fn digit(&self, symbol: u8) -> Option<u8> {
        match self.digits[symbol as usize] {
            INVALID => None,
            d => Some(d),
        }
    }

    /// Digit value for a character. Anything outside ASCII is rejected.
    #[inline]
    pub fn digit_of_char(&self, c: char) -> Option<u8> {
        u8::try_from(c).ok().and_then(|b| self.digit(b))
    }

    /// The symbols in digit order.
    pub const fn symbols(&self) -> &[u8; BASE] {
        &self.symbols
    }
}
