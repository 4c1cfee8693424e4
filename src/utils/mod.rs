//! Shared helper subsystem for the classical ciphers.
//!
//! Provides the alphabet arithmetic (cyclic shift, key-stream repetition,
//! padding), the scatter/gather column permutation, and the standalone
//! byte-wise XOR primitive.

pub mod alphabet;
pub mod permute;
pub mod xor;
