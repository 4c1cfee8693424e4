//! Caesar shift cipher.

use crate::error::CipherError;
use crate::utils::alphabet::shift;

/// Classical Caesar cipher: every letter shifts by a fixed amount.
///
/// Stateless beyond the shift amount; one instance may serve any number
/// of independent encrypt/decrypt calls.
///
/// # Examples
///
/// ```
/// use classicrypt::Caesar;
///
/// let cipher = Caesar::new(3);
/// assert_eq!(cipher.encrypt("HELLO").unwrap(), "KHOOR");
/// assert_eq!(cipher.decrypt("KHOOR").unwrap(), "HELLO");
/// ```
pub struct Caesar {
    shift_amount: i32,
}

impl Default for Caesar {
    /// Creates a Caesar cipher with the classical shift of 3.
    fn default() -> Self {
        Self::new(3)
    }
}

impl Caesar {
    /// Creates a Caesar cipher with the given shift amount.
    ///
    /// # Parameters
    /// - `shift_amount`: Shift in letter positions, any sign; taken mod 26.
    pub fn new(shift_amount: i32) -> Self {
        Caesar { shift_amount }
    }

    /// Shifts every character of `plaintext` forward by the shift amount.
    ///
    /// # Errors
    /// Returns [`CipherError::UnsupportedCharacter`] if the input contains
    /// a character outside the A-Z plus space alphabet.
    pub fn encrypt(&self, plaintext: &str) -> Result<String, CipherError> {
        plaintext
            .chars()
            .map(|c| shift(c, self.shift_amount as i64))
            .collect()
    }

    /// Shifts every character of `ciphertext` backward by the shift amount.
    ///
    /// # Errors
    /// Returns [`CipherError::UnsupportedCharacter`] if the input contains
    /// a character outside the A-Z plus space alphabet.
    pub fn decrypt(&self, ciphertext: &str) -> Result<String, CipherError> {
        ciphertext
            .chars()
            .map(|c| shift(c, -(self.shift_amount as i64)))
            .collect()
    }
}
