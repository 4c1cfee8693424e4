//! Frozen known-answer vectors and key-validation scenarios.
//!
//! All expected ciphertexts are frozen snapshots: any change in output
//! indicates a behavioral regression, not an acceptable variation.

use classicrypt::error::CipherError;
use classicrypt::utils::{alphabet, permute, xor};
use classicrypt::{Caesar, Permutation, RailFence, Substitution, Vigenere};

// ═══════════════════════════════════════════════════════════════════════
// Frozen cipher vectors
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn caesar_hello_becomes_khoor() {
    let cipher = Caesar::new(3);
    assert_eq!(cipher.encrypt("HELLO").unwrap(), "KHOOR");
    assert_eq!(cipher.decrypt("KHOOR").unwrap(), "HELLO");
}

#[test]
fn rail_fence_three_rows_classic_vector() {
    // Zig-zag rows: WECRLTE / ERDSOEEFEAOC / AIVDEN
    let cipher = RailFence::new(3).unwrap();
    let ciphertext = cipher.encrypt("WEAREDISCOVEREDFLEEATONCE");
    assert_eq!(ciphertext, "WECRLTEERDSOEEFEAOCAIVDEN");
    assert_eq!(cipher.decrypt(&ciphertext), "WEAREDISCOVEREDFLEEATONCE");
}

#[test]
fn vigenere_mykey_roundtrips_hello_world() {
    let cipher = Vigenere::new("MYKEY").unwrap();
    let ciphertext = cipher.encrypt("HELLO WORLD").unwrap();
    assert_eq!(ciphertext.chars().nth(5), Some(' '));
    assert_eq!(cipher.decrypt(&ciphertext).unwrap(), "HELLO WORLD");
}

#[test]
fn permutation_pads_and_restores_exact_length() {
    let mut cipher = Permutation::new(&[2, 0, 3, 1]).unwrap();
    let message = "HELLO WORLD";
    let ciphertext = cipher.encrypt(message);
    // 11 characters pad to 12; the pad characters are literal 'C'
    assert_eq!(ciphertext.chars().count(), 12);
    assert_eq!(
        ciphertext.chars().filter(|&c| c == 'C').count(),
        1,
        "exactly the single pad character is a 'C'"
    );
    let decrypted = cipher.decrypt(&ciphertext).unwrap();
    assert_eq!(decrypted, message);
    assert_eq!(decrypted.chars().count(), 11);
}

#[test]
fn substitution_explicit_mapping_vector() {
    let cipher = Substitution::new(&[('H', 'X'), ('I', 'Y')]).unwrap();
    assert_eq!(cipher.encrypt("HI HI").unwrap(), "XY XY");
    assert_eq!(cipher.decrypt("XY XY").unwrap(), "HI HI");
}

// ═══════════════════════════════════════════════════════════════════════
// Key validation
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn rail_fence_rejects_degenerate_row_counts() {
    assert_eq!(RailFence::new(1).err(), Some(CipherError::RowCountTooSmall));
    assert_eq!(RailFence::new(0).err(), Some(CipherError::RowCountTooSmall));
}

#[test]
fn permutation_rejects_non_bijective_keys() {
    assert_eq!(
        Permutation::new(&[0, 0, 2, 3]).err(),
        Some(CipherError::InvalidPermutation)
    );
    assert_eq!(
        Permutation::new(&[0, 1, 4, 3]).err(),
        Some(CipherError::InvalidPermutation)
    );
}

#[test]
fn vigenere_rejects_empty_key() {
    assert_eq!(Vigenere::new("").err(), Some(CipherError::EmptyKey));
}

#[test]
fn substitution_rejects_non_bijective_mapping() {
    assert_eq!(
        Substitution::new(&[('A', 'B'), ('C', 'B')]).err(),
        Some(CipherError::InvalidMapping)
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Helper primitives
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn shift_helper_matches_modular_arithmetic() {
    assert_eq!(alphabet::shift('H', 3).unwrap(), 'K');
    assert_eq!(alphabet::shift('A', -1).unwrap(), 'Z');
    assert_eq!(alphabet::shift(' ', 999).unwrap(), ' ');
}

#[test]
fn repeat_to_length_matches_key_stream_definition() {
    assert_eq!(alphabet::repeat_to_length("MYKEY", 11).unwrap(), "MYKEYMYKEYM");
}

#[test]
fn permute_scatter_and_inverse_agree() {
    let scattered = permute::permute(&[10, 20, 30, 40], &[2, 0, 3, 1]);
    assert_eq!(scattered, vec![20, 40, 10, 30]);
    let inverse = permute::invert_permutation(&[2, 0, 3, 1]);
    assert_eq!(permute::permute(&scattered, &inverse), vec![10, 20, 30, 40]);
}

#[test]
fn xor_requires_equal_lengths() {
    assert_eq!(
        xor::xor(&[1, 2, 3], &[1, 2]).err(),
        Some(CipherError::LengthMismatch)
    );
    assert_eq!(xor::xor(&[0xF0, 0x0F], &[0xFF, 0xFF]).unwrap(), vec![0x0F, 0xF0]);
}
