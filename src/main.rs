use anyhow::Result;
use clap::{Parser, Subcommand};

use encryptomatic::cli::{
    handle_analyze_command, handle_caesar_command, handle_vigenere_command, AnalyzeArgs,
    CaesarArgs, VigenereArgs,
};
use encryptomatic::shell;

#[derive(Parser)]
#[command(
    name = "encryptomatic",
    version,
    about = "Classical cipher toolkit for text files",
    long_about = "Encryptomatic applies the classical Caesar and Vigenere \
                  substitution ciphers to text files and performs \
                  letter-frequency analysis on ciphertext. Run without a \
                  subcommand to get the interactive menu."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt or decrypt a file with the Caesar cipher
    Caesar(CaesarArgs),

    /// Encrypt or decrypt a file with the Vigenere cipher
    Vigenere(VigenereArgs),

    /// Show a letter-frequency bar graph for a cipher text file
    #[command(alias = "freq")]
    Analyze(AnalyzeArgs),

    /// Launch the interactive menu
    #[command(alias = "menu")]
    Interactive,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Caesar(args)) => handle_caesar_command(args)?,
        Some(Commands::Vigenere(args)) => handle_vigenere_command(args)?,
        Some(Commands::Analyze(args)) => handle_analyze_command(args)?,
        Some(Commands::Interactive) | None => shell::run()?,
    }

    Ok(())
}
