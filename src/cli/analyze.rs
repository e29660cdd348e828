//! Frequency analysis subcommand

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::analysis::analyze_frequency;
use crate::display::format_frequency_graph;
use crate::error::{CipherError, CipherResult};

/// Arguments for the `analyze` subcommand
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Path to the cipher text file
    pub file: PathBuf,
}

/// Handle the `analyze` subcommand
///
/// Reads the cipher text and prints one bar per letter A-Z.
pub fn handle_analyze_command(args: AnalyzeArgs) -> CipherResult<()> {
    if !args.file.is_file() {
        return Err(CipherError::InputNotFound(args.file));
    }

    let text = fs::read_to_string(&args.file)?;
    let freq = analyze_frequency(&text);
    print!("{}", format_frequency_graph(&freq));
    Ok(())
}
