//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the cipher engine and the frequency
//! analyzer.

pub mod analyze;
pub mod cipher;

pub use analyze::{handle_analyze_command, AnalyzeArgs};
pub use cipher::{handle_caesar_command, handle_vigenere_command, CaesarArgs, Mode, VigenereArgs};
