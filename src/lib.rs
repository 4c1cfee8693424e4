//! Classicrypt: classical text cipher library.
//!
//! Implements five classical (pre-modern) ciphers over the uppercase
//! A-Z plus space alphabet, each with a symmetric encrypt/decrypt pair.
//! The space character is an identity element: it always maps to itself
//! and never participates in shift arithmetic.
//!
//! These are pedagogical, reversible text transforms, not secure
//! ciphers.
//!
//! # Architecture
//!
//! ```text
//! utils        (alphabet shift, key-stream repetition, padding,
//!     ↕         scatter/gather permutation, standalone xor)
//! substitution family   Caesar / Substitution / Vigenere
//!                       (stateless per-call mapping and shift loops)
//! transposition family  RailFence / Permutation
//!                       (2-D reshaping of the message and back)
//! ```
//!
//! # Examples
//!
//! Shift ciphers encrypt and decrypt character-wise:
//!
//! ```
//! use classicrypt::Caesar;
//!
//! let cipher = Caesar::new(3);
//! let ciphertext = cipher.encrypt("HELLO").unwrap();
//! assert_eq!(ciphertext, "KHOOR");
//! assert_eq!(cipher.decrypt(&ciphertext).unwrap(), "HELLO");
//! ```
//!
//! The columnar permutation cipher pads during encryption and records
//! the unpadded length, so decryption restores the exact original:
//!
//! ```
//! use classicrypt::Permutation;
//!
//! let mut cipher = Permutation::new(&[2, 0, 3, 1]).unwrap();
//! let ciphertext = cipher.encrypt("HELLO WORLD");
//! assert_eq!(cipher.decrypt(&ciphertext).unwrap(), "HELLO WORLD");
//! ```

#![deny(clippy::all)]

pub mod error;
pub mod utils;

mod caesar;
mod permutation;
mod rail_fence;
mod substitution;
mod vigenere;

pub use caesar::Caesar;
pub use permutation::Permutation;
pub use rail_fence::RailFence;
pub use substitution::Substitution;
pub use vigenere::Vigenere;
