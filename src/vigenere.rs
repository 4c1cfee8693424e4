//! Vigenère polyalphabetic shift cipher.

use crate::error::CipherError;
use crate::utils::alphabet::{repeat_to_length, shift};

/// Vigenère cipher: each message character shifts by the alphabetic index
/// of the corresponding key-stream character.
///
/// The key stream is the key repeated cyclically to the message length.
/// Space characters in the message pass through unshifted but still
/// consume a key-stream position.
///
/// # Examples
///
/// ```
/// use classicrypt::Vigenere;
///
/// let cipher = Vigenere::new("MYKEY").unwrap();
/// let ciphertext = cipher.encrypt("HELLO WORLD").unwrap();
/// assert_eq!(cipher.decrypt(&ciphertext).unwrap(), "HELLO WORLD");
/// ```
pub struct Vigenere {
    key: String,
}

impl Vigenere {
    /// Creates a Vigenère cipher with the given key.
    ///
    /// # Parameters
    /// - `key`: Key string over the alphabet. Must be non-empty.
    ///
    /// # Errors
    /// Returns [`CipherError::EmptyKey`] if `key` is empty.
    pub fn new(key: &str) -> Result<Self, CipherError> {
        if key.is_empty() {
            return Err(CipherError::EmptyKey);
        }
        Ok(Vigenere {
            key: key.to_string(),
        })
    }

    /// Encrypts a message by shifting each character forward by its key
    /// character's alphabetic index (`A` = 0).
    ///
    /// # Errors
    /// Returns [`CipherError::UnsupportedCharacter`] if the message
    /// contains a character outside the A-Z plus space alphabet.
    pub fn encrypt(&self, plaintext: &str) -> Result<String, CipherError> {
        self.apply(plaintext, 1)
    }

    /// Decrypts a message by shifting each character backward by its key
    /// character's alphabetic index.
    ///
    /// # Errors
    /// Returns [`CipherError::UnsupportedCharacter`] if the ciphertext
    /// contains a character outside the A-Z plus space alphabet.
    pub fn decrypt(&self, ciphertext: &str) -> Result<String, CipherError> {
        self.apply(ciphertext, -1)
    }

    /// Shared encrypt/decrypt path; `direction` is +1 or -1.
    fn apply(&self, message: &str, direction: i64) -> Result<String, CipherError> {
        let stream = repeat_to_length(&self.key, message.chars().count())?;
        message
            .chars()
            .zip(stream.chars())
            .map(|(c, k)| shift(c, direction * key_index(k)))
            .collect()
    }
}

/// Alphabetic index of a key character (`A` = 0).
fn key_index(k: char) -> i64 {
    k as i64 - 'A' as i64
}
