//! Caesar cipher file operations
//!
//! A fixed-shift substitution: every letter moves the same number of
//! positions in the alphabet. Decryption is encryption with the negated
//! key.

use std::path::Path;

use super::engine;
use crate::error::CipherResult;

/// Encrypt `input` into a new file at `output` with a fixed shift
///
/// The key may be any integer, positive or negative; it is reduced modulo
/// 26. Returns the number of characters processed, counting non-alphabetic
/// characters and line terminators. Letters are uppercased in the output,
/// everything else passes through unchanged.
pub fn encrypt_caesar(input: &Path, output: &Path, key: i32) -> CipherResult<usize> {
    let shift = key.rem_euclid(26);
    engine::transform_file(input, output, || shift)
}

/// Decrypt a Caesar-encrypted file
///
/// Exactly `encrypt_caesar` with the negated key.
pub fn decrypt_caesar(input: &Path, output: &Path, key: i32) -> CipherResult<usize> {
    encrypt_caesar(input, output, -key.rem_euclid(26))
}
