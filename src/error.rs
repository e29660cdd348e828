//! Custom error types for Encryptomatic
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for Encryptomatic operations
#[derive(Error, Debug)]
pub enum CipherError {
    /// Key validation errors (wrong form for the selected cipher)
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Input file does not reference an existing regular file
    #[error("The input file {} does not exist.", .0.display())]
    InputNotFound(PathBuf),

    /// Output file already exists (the engine never overwrites)
    #[error("The output file {} already exists.", .0.display())]
    OutputAlreadyExists(PathBuf),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl CipherError {
    /// Create an "invalid key" error
    pub fn invalid_key(message: impl Into<String>) -> Self {
        Self::InvalidKey(message.into())
    }

    /// Create an "input not found" error
    pub fn input_not_found(path: impl Into<PathBuf>) -> Self {
        Self::InputNotFound(path.into())
    }

    /// Create an "output already exists" error
    pub fn output_already_exists(path: impl Into<PathBuf>) -> Self {
        Self::OutputAlreadyExists(path.into())
    }

    /// Check if this is an "input not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::InputNotFound(_))
    }

    /// Check if this is a key validation error
    pub fn is_invalid_key(&self) -> bool {
        matches!(self, Self::InvalidKey(_))
    }
}

impl From<std::io::Error> for CipherError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for Encryptomatic operations
pub type CipherResult<T> = Result<T, CipherError>;
