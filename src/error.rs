//! Error types for the classicrypt library.

use std::fmt;

/// Errors produced by the classicrypt library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// Rail fence row count is less than 2.
    RowCountTooSmall,
    /// Permutation key is not a bijection on its index range.
    InvalidPermutation,
    /// Substitution mapping is not a bijection.
    InvalidMapping,
    /// Key string is empty.
    EmptyKey,
    /// Character is outside the A-Z plus space alphabet.
    UnsupportedCharacter,
    /// Character has no entry in the substitution mapping.
    UnmappedCharacter,
    /// XOR operand lengths do not match.
    LengthMismatch,
    /// Ciphertext length is not a multiple of the column count.
    InvalidCiphertextLength,
}

impl fmt::Display for CipherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherError::RowCountTooSmall => {
                write!(f, "Rail fence row count must be at least 2")
            }
            CipherError::InvalidPermutation => {
                write!(f, "Permutation key is not a bijection on its index range")
            }
            CipherError::InvalidMapping => {
                write!(f, "Substitution mapping is not a bijection")
            }
            CipherError::EmptyKey => {
                write!(f, "Key must be at least 1 character long")
            }
            CipherError::UnsupportedCharacter => {
                write!(f, "Character is outside the A-Z plus space alphabet")
            }
            CipherError::UnmappedCharacter => {
                write!(f, "Character has no entry in the substitution mapping")
            }
            CipherError::LengthMismatch => {
                write!(f, "XOR operand lengths do not match")
            }
            CipherError::InvalidCiphertextLength => {
                write!(
                    f,
                    "Ciphertext length is not a multiple of the column count"
                )
            }
        }
    }
}

impl std::error::Error for CipherError {}
