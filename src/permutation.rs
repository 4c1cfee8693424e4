//! Columnar permutation transposition cipher.
//!
//! Deals the (padded) message round-robin into `ncols` columns, scatters
//! the columns with the key permutation, and concatenates them whole.
//! Decryption gathers the columns back with the inverse permutation and
//! reads across them, truncating away the padding.

use crate::error::CipherError;
use crate::utils::alphabet::pad_with_c;
use crate::utils::permute::{invert_permutation, permute};

/// Columnar permutation cipher keyed by a column permutation vector.
///
/// Encryption pads the message to a multiple of the column count, so the
/// instance records the unpadded plaintext length for [`decrypt`] to
/// truncate with. That makes the stateful `encrypt`/`decrypt` pair a
/// single-conversation contract: `decrypt` is only meaningful after an
/// `encrypt` of the same message on the same instance. For independent
/// use, [`decrypt_to_length`] takes the length explicitly.
///
/// [`decrypt`]: Self::decrypt
/// [`decrypt_to_length`]: Self::decrypt_to_length
///
/// # Examples
///
/// ```
/// use classicrypt::Permutation;
///
/// let mut cipher = Permutation::new(&[2, 0, 3, 1]).unwrap();
/// let ciphertext = cipher.encrypt("ATTACK AT DAWN");
/// assert_eq!(cipher.decrypt(&ciphertext).unwrap(), "ATTACK AT DAWN");
/// ```
pub struct Permutation {
    ncols: usize,
    permutation: Vec<usize>,
    plaintext_length: usize,
}

impl Permutation {
    /// Creates a columnar permutation cipher from a permutation vector.
    ///
    /// # Parameters
    /// - `key`: A bijection on `{0, ..., key.len() - 1}`; element `i`
    ///   sends source column `i` to destination column `key[i]`.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidPermutation`] if the key is empty,
    /// contains an index outside its range, or repeats a destination.
    ///
    /// # Examples
    ///
    /// ```
    /// use classicrypt::Permutation;
    ///
    /// assert!(Permutation::new(&[2, 0, 3, 1]).is_ok());
    /// assert!(Permutation::new(&[0, 0, 2, 3]).is_err());
    /// ```
    pub fn new(key: &[usize]) -> Result<Self, CipherError> {
        if key.is_empty() {
            return Err(CipherError::InvalidPermutation);
        }
        let mut seen = vec![false; key.len()];
        for &dest in key {
            if dest >= key.len() || seen[dest] {
                return Err(CipherError::InvalidPermutation);
            }
            seen[dest] = true;
        }
        Ok(Permutation {
            ncols: key.len(),
            permutation: key.to_vec(),
            plaintext_length: 0,
        })
    }

    /// Encrypts a message and records its unpadded length.
    ///
    /// The message is padded with `'C'` to a multiple of the column
    /// count, dealt round-robin into columns (character `i` lands in
    /// column `i % ncols`), and the columns are scattered with the key
    /// permutation and concatenated top to bottom.
    pub fn encrypt(&mut self, message: &str) -> String {
        self.plaintext_length = message.chars().count();
        let padded = pad_with_c(message, self.ncols);

        let mut cols: Vec<String> = vec![String::new(); self.ncols];
        for (i, c) in padded.chars().enumerate() {
            cols[i % self.ncols].push(c);
        }

        let cols = permute(&cols, &self.permutation);
        cols.concat()
    }

    /// Decrypts a ciphertext, truncating to the last-recorded plaintext
    /// length.
    ///
    /// Only valid in a matched encrypt-decrypt sequence on this instance;
    /// without a prior [`encrypt`](Self::encrypt), or after encrypting a
    /// message of a different length, the truncation is wrong.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidCiphertextLength`] if the ciphertext
    /// length is not a multiple of the column count.
    pub fn decrypt(&self, ciphertext: &str) -> Result<String, CipherError> {
        self.decrypt_to_length(ciphertext, self.plaintext_length)
    }

    /// Decrypts a ciphertext, truncating to an explicit plaintext length.
    ///
    /// Stateless form of [`decrypt`](Self::decrypt): the caller supplies
    /// the unpadded length instead of relying on the instance's recorded
    /// value, so independent conversations can share one instance.
    ///
    /// # Parameters
    /// - `ciphertext`: Output of [`encrypt`](Self::encrypt) with the same
    ///   key. Its length must be a multiple of the column count.
    /// - `plaintext_length`: Unpadded length of the original message.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidCiphertextLength`] if the ciphertext
    /// length is not a multiple of the column count.
    pub fn decrypt_to_length(
        &self,
        ciphertext: &str,
        plaintext_length: usize,
    ) -> Result<String, CipherError> {
        let chars: Vec<char> = ciphertext.chars().collect();
        if !chars.len().is_multiple_of(self.ncols) {
            return Err(CipherError::InvalidCiphertextLength);
        }
        let nrows = chars.len() / self.ncols;

        // Column blocks in destination order
        let mut cols: Vec<Vec<char>> = Vec::with_capacity(self.ncols);
        for i in 0..self.ncols {
            cols.push(chars[i * nrows..(i + 1) * nrows].to_vec());
        }

        let cols = permute(&cols, &invert_permutation(&self.permutation));

        let padded: String = (0..chars.len())
            .map(|i| cols[i % self.ncols][i / self.ncols])
            .collect();
        Ok(padded.chars().take(plaintext_length).collect())
    }

    /// Returns the unpadded length recorded by the last
    /// [`encrypt`](Self::encrypt) call, or 0 before any encryption.
    pub fn plaintext_length(&self) -> usize {
        self.plaintext_length
    }
}
