//! Letter occurrence counting

use std::collections::HashMap;

/// Count occurrences of each letter A-Z in `text`
///
/// Letters are counted case-insensitively under their uppercase form.
/// Non-alphabetic characters are ignored. Letters that never occur are
/// absent from the map; callers treat absence as zero.
///
/// # Examples
/// ```
/// use encryptomatic::analysis::analyze_frequency;
///
/// let freq = analyze_frequency("Hello, World!");
/// assert_eq!(freq.get(&'L'), Some(&3));
/// assert_eq!(freq.get(&'Z'), None);
/// ```
pub fn analyze_frequency(text: &str) -> HashMap<char, usize> {
    let mut freq = HashMap::new();
    for ch in text.chars() {
        if ch.is_ascii_alphabetic() {
            *freq.entry(ch.to_ascii_uppercase()).or_insert(0) += 1;
        }
    }
    freq
}
