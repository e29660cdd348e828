//! Cipher subcommands
//!
//! Argument definitions and handlers for the `caesar` and `vigenere`
//! subcommands. The handlers invoke the cipher engine and report the
//! processed-character count; the interactive shell reuses them so both
//! entry points behave identically.

use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::cipher::{decrypt_caesar, decrypt_vigenere, encrypt_caesar, encrypt_vigenere, VigenereKey};
use crate::error::CipherResult;

/// Mode of operation for a cipher command
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Encrypt the input file
    Encrypt,
    /// Decrypt the input file
    Decrypt,
}

/// Arguments for the `caesar` subcommand
#[derive(Args, Debug)]
pub struct CaesarArgs {
    /// Mode of operation (encrypt/decrypt)
    #[arg(short, long, value_enum)]
    pub mode: Mode,

    /// Path to the input file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path to the output file (must not exist yet)
    #[arg(short, long)]
    pub output: PathBuf,

    /// Shift amount (any integer, reduced modulo 26)
    #[arg(short, long, allow_hyphen_values = true)]
    pub key: i32,
}

/// Arguments for the `vigenere` subcommand
#[derive(Args, Debug)]
pub struct VigenereArgs {
    /// Mode of operation (encrypt/decrypt)
    #[arg(short, long, value_enum)]
    pub mode: Mode,

    /// Path to the input file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path to the output file (must not exist yet)
    #[arg(short, long)]
    pub output: PathBuf,

    /// Keyword (letters only, case-insensitive)
    #[arg(short, long)]
    pub key: VigenereKey,
}

/// Handle the `caesar` subcommand
pub fn handle_caesar_command(args: CaesarArgs) -> CipherResult<()> {
    let count = match args.mode {
        Mode::Encrypt => encrypt_caesar(&args.input, &args.output, args.key)?,
        Mode::Decrypt => decrypt_caesar(&args.input, &args.output, args.key)?,
    };
    println!("Number of characters processed: {}", count);
    Ok(())
}

/// Handle the `vigenere` subcommand
pub fn handle_vigenere_command(args: VigenereArgs) -> CipherResult<()> {
    let count = match args.mode {
        Mode::Encrypt => encrypt_vigenere(&args.input, &args.output, &args.key)?,
        Mode::Decrypt => decrypt_vigenere(&args.input, &args.output, &args.key)?,
    };
    println!("Number of characters processed: {}", count);
    Ok(())
}
