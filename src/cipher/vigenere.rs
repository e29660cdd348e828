//! Vigenere cipher file operations
//!
//! A polyalphabetic substitution: the keyword letters provide a repeating
//! sequence of shifts. The keyword cursor advances only past alphabetic
//! characters, so digits, punctuation and whitespace neither change nor
//! consume a key position.

use std::path::Path;

use super::engine;
use super::key::VigenereKey;
use crate::error::CipherResult;

/// Encrypt `input` into a new file at `output` with a keyword
///
/// Each letter is shifted by the alphabet position of the next keyword
/// letter, cycling through the keyword. Returns the number of characters
/// processed, counting non-alphabetic characters and line terminators.
pub fn encrypt_vigenere(input: &Path, output: &Path, key: &VigenereKey) -> CipherResult<usize> {
    keyed_transform(input, output, key, 1)
}

/// Decrypt a Vigenere-encrypted file
///
/// Applies the same keyword with each shift negated.
pub fn decrypt_vigenere(input: &Path, output: &Path, key: &VigenereKey) -> CipherResult<usize> {
    keyed_transform(input, output, key, -1)
}

fn keyed_transform(
    input: &Path,
    output: &Path,
    key: &VigenereKey,
    direction: i32,
) -> CipherResult<usize> {
    let shifts = key.shifts();
    let mut key_index = 0;
    engine::transform_file(input, output, move || {
        let shift = shifts[key_index % shifts.len()];
        key_index += 1;
        direction * shift
    })
}
