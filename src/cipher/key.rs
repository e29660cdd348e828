//! Vigenere keyword type
//!
//! A validating newtype: a keyword is a non-empty run of ASCII letters,
//! normalized to uppercase at construction so the shift arithmetic never
//! has to re-check it.

use std::fmt;
use std::str::FromStr;

use crate::error::{CipherError, CipherResult};

/// A validated Vigenere keyword (non-empty, uppercase ASCII letters)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VigenereKey(String);

impl VigenereKey {
    /// Create a key from raw user input
    ///
    /// The input must be non-empty and contain only ASCII letters; it is
    /// normalized to uppercase. Case of the input does not matter.
    ///
    /// # Examples
    /// ```
    /// use encryptomatic::cipher::VigenereKey;
    /// let key = VigenereKey::new("lemon").unwrap();
    /// assert_eq!(key.as_str(), "LEMON");
    /// ```
    pub fn new(raw: &str) -> CipherResult<Self> {
        if raw.is_empty() {
            return Err(CipherError::invalid_key("the key must not be empty"));
        }
        if !raw.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CipherError::invalid_key(format!(
                "the key {:?} must contain only letters A-Z",
                raw
            )));
        }
        Ok(Self(raw.to_ascii_uppercase()))
    }

    /// The normalized (uppercase) keyword
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Shift amounts (0-25) for each keyword letter, in order
    pub(crate) fn shifts(&self) -> Vec<i32> {
        self.0.bytes().map(|b| i32::from(b - b'A')).collect()
    }
}

impl FromStr for VigenereKey {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for VigenereKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_uppercased() {
        let key = VigenereKey::new("LeMoN").unwrap();
        assert_eq!(key.as_str(), "LEMON");
        assert_eq!(key.to_string(), "LEMON");
    }

    #[test]
    fn test_empty_key_rejected() {
        let err = VigenereKey::new("").unwrap_err();
        assert!(err.is_invalid_key());
    }

    #[test]
    fn test_non_letter_key_rejected() {
        assert!(VigenereKey::new("abc123").is_err());
        assert!(VigenereKey::new("two words").is_err());
        assert!(VigenereKey::new("clé").is_err());
    }

    #[test]
    fn test_shifts_match_letter_positions() {
        let key = VigenereKey::new("KEY").unwrap();
        assert_eq!(key.shifts(), vec![10, 4, 24]);
    }

    #[test]
    fn test_parse_via_from_str() {
        let key: VigenereKey = "lemon".parse().unwrap();
        assert_eq!(key.as_str(), "LEMON");
        assert!("not a key".parse::<VigenereKey>().is_err());
    }
}
