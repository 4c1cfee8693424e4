//! Rail Fence zig-zag transposition cipher.
//!
//! Writes the message along a zig-zag across `nrows` rows (down to the
//! last row, back up to the first, repeating) and reads the rows off top
//! to bottom. Decryption reverses the reshaping: it re-runs the identical
//! walk to locate row boundaries, then walks a second time to interleave
//! the rows back into the original order.

use crate::error::CipherError;

/// Rail Fence transposition cipher with a fixed row count.
///
/// Immutable after construction; one instance may serve any number of
/// independent encrypt/decrypt calls.
///
/// # Examples
///
/// ```
/// use classicrypt::RailFence;
///
/// let cipher = RailFence::new(3).unwrap();
/// let ciphertext = cipher.encrypt("WEAREDISCOVEREDFLEEATONCE");
/// assert_eq!(ciphertext, "WECRLTEERDSOEEFEAOCAIVDEN");
/// assert_eq!(cipher.decrypt(&ciphertext), "WEAREDISCOVEREDFLEEATONCE");
/// ```
pub struct RailFence {
    nrows: usize,
}

/// Infinite row-index sequence of the zig-zag walk.
///
/// Starts at row 0 stepping downward; the step flips to -1 on reaching
/// the last row and back to +1 on reaching row 0. The update rule checks
/// the last-row condition before the row-0 condition, so a two-row fence
/// alternates 0, 1, 0, 1, ...
struct ZigZagWalk {
    row: usize,
    step: isize,
    nrows: usize,
}

impl ZigZagWalk {
    fn new(nrows: usize) -> Self {
        ZigZagWalk {
            row: 0,
            step: 1,
            nrows,
        }
    }
}

impl Iterator for ZigZagWalk {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let current = self.row;
        if current % (self.nrows - 1) == 0 {
            self.step = -1;
        }
        if current == 0 {
            self.step = 1;
        }
        self.row = (current as isize + self.step) as usize;
        Some(current)
    }
}

impl RailFence {
    /// Creates a Rail Fence cipher with the given row count.
    ///
    /// # Parameters
    /// - `nrows`: Number of rows in the fence. Must be at least 2.
    ///
    /// # Errors
    /// Returns [`CipherError::RowCountTooSmall`] if `nrows < 2`.
    ///
    /// # Examples
    ///
    /// ```
    /// use classicrypt::RailFence;
    ///
    /// assert!(RailFence::new(2).is_ok());
    /// assert!(RailFence::new(1).is_err());
    /// ```
    pub fn new(nrows: usize) -> Result<Self, CipherError> {
        if nrows < 2 {
            return Err(CipherError::RowCountTooSmall);
        }
        Ok(RailFence { nrows })
    }

    /// Encrypts a message by zig-zag distribution into rows.
    ///
    /// Each character lands in the row the walk visits at its position;
    /// the ciphertext is the concatenation of the rows top to bottom.
    /// Row counts larger than the message length are harmless: the walk
    /// simply never reaches the lower rows.
    pub fn encrypt(&self, message: &str) -> String {
        let mut rows: Vec<String> = vec![String::new(); self.nrows];
        for (c, row) in message.chars().zip(ZigZagWalk::new(self.nrows)) {
            rows[row].push(c);
        }
        rows.concat()
    }

    /// Decrypts a ciphertext produced with the same row count.
    ///
    /// First pass re-runs the walk over the ciphertext length to count
    /// how many characters each row received, which fixes the row
    /// boundaries inside the ciphertext. Second pass re-walks the zig-zag,
    /// pulling the next unread character from the visited row's run.
    pub fn decrypt(&self, ciphertext: &str) -> String {
        let chars: Vec<char> = ciphertext.chars().collect();

        let mut counts = vec![0usize; self.nrows];
        for row in ZigZagWalk::new(self.nrows).take(chars.len()) {
            counts[row] += 1;
        }

        // Cursor per row, starting at each row's slice offset
        let mut cursors = Vec::with_capacity(self.nrows);
        let mut offset = 0;
        for &count in &counts {
            cursors.push(offset);
            offset += count;
        }

        let mut plaintext = String::with_capacity(chars.len());
        for row in ZigZagWalk::new(self.nrows).take(chars.len()) {
            plaintext.push(chars[cursors[row]]);
            cursors[row] += 1;
        }
        plaintext
    }
}
