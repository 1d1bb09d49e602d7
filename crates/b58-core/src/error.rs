use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid Base58 character at index {index}")]
    InvalidCharacter { index: usize },

    #[error("character {code_point:#06x} at index {index} does not fit in a single byte")]
    NonByteCharacter { index: usize, code_point: u32 },

    #[error("value out of range: {0}")]
    OutOfRange(String),
}

impl Error {
    /// Index of the offending input element, if the error points at one.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::InvalidCharacter { index } | Self::NonByteCharacter { index, .. } => {
                Some(*index)
            }
            Self::OutOfRange(_) => None,
        }
    }
}
