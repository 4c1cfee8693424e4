//! Byte-wise XOR primitive.
//!
//! Stateless helper with a fixed-length precondition. None of the
//! classical ciphers use it; it is exposed as a standalone building
//! block.

use crate::error::CipherError;

/// XORs two byte slices of equal length.
///
/// # Parameters
/// - `a`: First operand.
/// - `b`: Second operand. Must have the same length as `a`.
///
/// # Returns
/// A `Vec<u8>` with `a[i] ^ b[i]` at each position.
///
/// # Errors
/// Returns [`CipherError::LengthMismatch`] if the operand lengths differ.
pub fn xor(a: &[u8], b: &[u8]) -> Result<Vec<u8>, CipherError> {
    if a.len() != b.len() {
        return Err(CipherError::LengthMismatch);
    }
    Ok(a.iter().zip(b.iter()).map(|(x, y)| x ^ y).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xor_basic() {
        let result = xor(&[0b1010, 0xFF, 0x00], &[0b0110, 0x0F, 0x00]).unwrap();
        assert_eq!(result, vec![0b1100, 0xF0, 0x00]);
    }

    #[test]
    fn test_xor_empty() {
        assert_eq!(xor(&[], &[]).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_xor_self_is_zero() {
        let data = [0xDE, 0xAD, 0xBE, 0xEF];
        assert_eq!(xor(&data, &data).unwrap(), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_xor_is_involution() {
        let a = [1u8, 2, 3, 4];
        let b = [9u8, 8, 7, 6];
        let once = xor(&a, &b).unwrap();
        let twice = xor(&once, &b).unwrap();
        assert_eq!(twice, a.to_vec());
    }

    #[test]
    fn test_xor_length_mismatch() {
        assert_eq!(xor(&[1, 2], &[1]), Err(CipherError::LengthMismatch));
    }
}
