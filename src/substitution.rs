//! Monoalphabetic substitution cipher.
//!
//! Uses two fixed 27-slot lookup tables (26 letters plus space) built once
//! at construction: the forward table from the supplied mapping pairs and
//! the inverse table by scatter. The space character is pre-seeded as an
//! identity in both tables and cannot be remapped.

use crate::error::CipherError;
use crate::utils::alphabet::{alphabet_index, ALPHABET_LEN, SPACE_INDEX};

/// Monoalphabetic substitution cipher over the A-Z plus space alphabet.
///
/// The mapping need not cover the whole alphabet: characters without an
/// entry fail at encrypt/decrypt time, not at construction. Duplicate
/// sources or duplicate targets fail construction immediately.
///
/// # Examples
///
/// ```
/// use classicrypt::Substitution;
///
/// let cipher = Substitution::new(&[('A', 'Z'), ('B', 'Y'), ('C', 'X')]).unwrap();
/// assert_eq!(cipher.encrypt("CAB").unwrap(), "XZY");
/// assert_eq!(cipher.decrypt("XZY").unwrap(), "CAB");
/// ```
pub struct Substitution {
    forward: [Option<char>; ALPHABET_LEN],
    inverse: [Option<char>; ALPHABET_LEN],
}

impl Substitution {
    /// Builds a substitution cipher from character mapping pairs.
    ///
    /// Each `(from, to)` pair maps `from` to `to` under encryption. The
    /// inverse table is scattered at the same time, so every target has
    /// exactly one preimage by construction.
    ///
    /// # Parameters
    /// - `mapping`: Mapping pairs over the alphabet. The space identity is
    ///   implicit; pairs touching the space character collide with it.
    ///
    /// # Errors
    /// Returns [`CipherError::UnsupportedCharacter`] if a pair contains a
    /// character outside the alphabet, or [`CipherError::InvalidMapping`]
    /// if the pairs are not a bijection (duplicate source or target).
    pub fn new(mapping: &[(char, char)]) -> Result<Self, CipherError> {
        let mut forward: [Option<char>; ALPHABET_LEN] = [None; ALPHABET_LEN];
        let mut inverse: [Option<char>; ALPHABET_LEN] = [None; ALPHABET_LEN];
        forward[SPACE_INDEX] = Some(' ');
        inverse[SPACE_INDEX] = Some(' ');

        for &(from, to) in mapping {
            let from_index = alphabet_index(from).ok_or(CipherError::UnsupportedCharacter)?;
            let to_index = alphabet_index(to).ok_or(CipherError::UnsupportedCharacter)?;
            if forward[from_index].is_some() || inverse[to_index].is_some() {
                return Err(CipherError::InvalidMapping);
            }
            forward[from_index] = Some(to);
            inverse[to_index] = Some(from);
        }

        Ok(Substitution { forward, inverse })
    }

    /// Encrypts a message by forward table lookup.
    ///
    /// # Errors
    /// Returns [`CipherError::UnmappedCharacter`] if the message contains
    /// a character without a mapping entry or outside the alphabet.
    pub fn encrypt(&self, message: &str) -> Result<String, CipherError> {
        message.chars().map(|c| lookup(&self.forward, c)).collect()
    }

    /// Decrypts a message by inverse table lookup.
    ///
    /// # Errors
    /// Returns [`CipherError::UnmappedCharacter`] if the ciphertext
    /// contains a character without an inverse entry or outside the
    /// alphabet.
    pub fn decrypt(&self, ciphertext: &str) -> Result<String, CipherError> {
        ciphertext.chars().map(|c| lookup(&self.inverse, c)).collect()
    }
}

/// Resolves one character through a 27-slot lookup table.
fn lookup(table: &[Option<char>; ALPHABET_LEN], c: char) -> Result<char, CipherError> {
    alphabet_index(c)
        .and_then(|index| table[index])
        .ok_or(CipherError::UnmappedCharacter)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Full-alphabet reversal mapping: A<->Z, B<->Y, ...
    fn atbash_pairs() -> Vec<(char, char)> {
        ('A'..='Z')
            .map(|c| {
                let reversed = (b'Z' - (c as u8 - b'A')) as char;
                (c, reversed)
            })
            .collect()
    }

    #[test]
    fn test_encrypt_partial_mapping() {
        let cipher = Substitution::new(&[('A', 'B'), ('B', 'A')]).unwrap();
        assert_eq!(cipher.encrypt("ABBA").unwrap(), "BAAB");
    }

    #[test]
    fn test_roundtrip_full_alphabet() {
        let cipher = Substitution::new(&atbash_pairs()).unwrap();
        let message = "THE QUICK BROWN FOX";
        let encrypted = cipher.encrypt(message).unwrap();
        assert_eq!(cipher.decrypt(&encrypted).unwrap(), message);
    }

    #[test]
    fn test_space_identity_implicit() {
        let cipher = Substitution::new(&[('A', 'B'), ('B', 'A')]).unwrap();
        assert_eq!(cipher.encrypt("A B").unwrap(), "B A");
        assert_eq!(cipher.decrypt("B A").unwrap(), "A B");
    }

    #[test]
    fn test_unmapped_character_fails_on_use() {
        let cipher = Substitution::new(&[('A', 'B')]).unwrap();
        assert_eq!(cipher.encrypt("AC"), Err(CipherError::UnmappedCharacter));
        // 'A' has no inverse entry: nothing maps to it
        assert_eq!(cipher.decrypt("A"), Err(CipherError::UnmappedCharacter));
    }

    #[test]
    fn test_duplicate_source_rejected() {
        let result = Substitution::new(&[('A', 'B'), ('A', 'C')]);
        assert_eq!(result.err(), Some(CipherError::InvalidMapping));
    }

    #[test]
    fn test_duplicate_target_rejected() {
        let result = Substitution::new(&[('A', 'C'), ('B', 'C')]);
        assert_eq!(result.err(), Some(CipherError::InvalidMapping));
    }

    #[test]
    fn test_space_cannot_be_remapped() {
        assert_eq!(
            Substitution::new(&[(' ', 'A')]).err(),
            Some(CipherError::InvalidMapping)
        );
        assert_eq!(
            Substitution::new(&[('A', ' ')]).err(),
            Some(CipherError::InvalidMapping)
        );
    }

    #[test]
    fn test_non_alphabet_pair_rejected() {
        assert_eq!(
            Substitution::new(&[('a', 'B')]).err(),
            Some(CipherError::UnsupportedCharacter)
        );
    }

    #[test]
    fn test_empty_message() {
        let cipher = Substitution::new(&atbash_pairs()).unwrap();
        assert_eq!(cipher.encrypt("").unwrap(), "");
    }
}
