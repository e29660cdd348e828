//! Encryptomatic - classical cipher toolkit for text files
//!
//! This library provides the core functionality for the Encryptomatic
//! command-line tool. It applies the classical Caesar and Vigenere
//! substitution ciphers to text files and performs letter-frequency
//! analysis on ciphertext.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `cipher`: Caesar and Vigenere file-to-file transforms
//! - `analysis`: letter-frequency counting
//! - `display`: terminal formatting for the frequency graph
//! - `error`: custom error types
//! - `cli`: clap subcommand handlers
//! - `shell`: interactive menu adapter
//!
//! The cipher engine and the frequency analyzer are pure library code that
//! take validated, typed parameters. The `cli` and `shell` modules are thin
//! adapters: they collect parameters, invoke the core, and report results
//! or errors.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::path::Path;
//! use encryptomatic::cipher::encrypt_caesar;
//!
//! let count = encrypt_caesar(Path::new("plain.txt"), Path::new("cipher.txt"), 3)?;
//! println!("Number of characters processed: {}", count);
//! ```

pub mod analysis;
pub mod cipher;
pub mod cli;
pub mod display;
pub mod error;
pub mod shell;

pub use error::{CipherError, CipherResult};
