//! Interactive menu shell
//!
//! A thin adapter over the cipher engine and the frequency analyzer:
//! prompts for parameters on stdin, invokes the command handlers, and
//! reports results. This is the single recovery boundary for the tool:
//! every core failure is printed as `Error: <message>` and the menu
//! resumes, so an interactive session never dies on a bad path or key.

use std::io::{self, Write};
use std::path::PathBuf;

use crate::cli::{
    handle_analyze_command, handle_caesar_command, handle_vigenere_command, AnalyzeArgs,
    CaesarArgs, Mode, VigenereArgs,
};
use crate::cipher::VigenereKey;
use crate::error::{CipherError, CipherResult};

/// Main menu options
enum MenuOption {
    Caesar,
    Vigenere,
    Frequency,
    Exit,
}

/// Run the interactive menu loop until the user exits
pub fn run() -> CipherResult<()> {
    loop {
        match prompt_menu_option()? {
            MenuOption::Caesar => report(run_caesar()),
            MenuOption::Vigenere => report(run_vigenere()),
            MenuOption::Frequency => report(run_frequency()),
            MenuOption::Exit => {
                println!("Exiting the program.");
                return Ok(());
            }
        }
    }
}

/// Print a core failure and let the menu resume
fn report(result: CipherResult<()>) {
    if let Err(err) = result {
        println!("Error: {}", err);
    }
}

/// Print the menu and read a valid selection, reprompting on bad input
fn prompt_menu_option() -> CipherResult<MenuOption> {
    loop {
        println!();
        println!("Encryption options:");
        println!("1) Caesar Cipher");
        println!("2) Vigenere Cipher");
        println!("3) Frequency Analysis");
        println!("4) Exit");

        let selection = prompt_string("Input menu option (1 to 4): ")?;
        match selection.as_str() {
            "1" => return Ok(MenuOption::Caesar),
            "2" => return Ok(MenuOption::Vigenere),
            "3" => return Ok(MenuOption::Frequency),
            "4" => return Ok(MenuOption::Exit),
            _ => println!("Invalid input!"),
        }
    }
}

fn run_caesar() -> CipherResult<()> {
    let mode = match prompt_mode()? {
        Some(mode) => mode,
        None => {
            println!("Invalid mode selected.");
            return Ok(());
        }
    };
    let input = prompt_path("Enter the input file name: ")?;
    let output = prompt_path("Enter the output file name: ")?;

    let raw_key = prompt_string("Enter the key (integer): ")?;
    let key: i32 = raw_key
        .parse()
        .map_err(|_| CipherError::invalid_key(format!("{:?} is not an integer", raw_key)))?;

    handle_caesar_command(CaesarArgs {
        mode,
        input,
        output,
        key,
    })
}

fn run_vigenere() -> CipherResult<()> {
    let mode = match prompt_mode()? {
        Some(mode) => mode,
        None => {
            println!("Invalid mode selected.");
            return Ok(());
        }
    };
    let input = prompt_path("Enter the input file name: ")?;
    let output = prompt_path("Enter the output file name: ")?;
    let key = VigenereKey::new(&prompt_string("Enter the key (a string): ")?)?;

    handle_vigenere_command(VigenereArgs {
        mode,
        input,
        output,
        key,
    })
}

fn run_frequency() -> CipherResult<()> {
    let file = prompt_path("Enter the cipher text file name: ")?;
    handle_analyze_command(AnalyzeArgs { file })
}

fn prompt_mode() -> CipherResult<Option<Mode>> {
    let mode = prompt_string("Are you encrypting or decrypting (e/d)? ")?;
    Ok(match mode.to_lowercase().as_str() {
        "e" => Some(Mode::Encrypt),
        "d" => Some(Mode::Decrypt),
        _ => None,
    })
}

fn prompt_path(prompt: &str) -> CipherResult<PathBuf> {
    Ok(PathBuf::from(prompt_string(prompt)?))
}

/// Prompt for a string input
///
/// Reads one line from stdin and trims it. A closed stdin is an error
/// rather than an empty answer, so piped input cannot spin the menu loop
/// forever.
fn prompt_string(prompt: &str) -> CipherResult<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    let bytes_read = io::stdin().read_line(&mut input)?;
    if bytes_read == 0 {
        return Err(CipherError::Io("unexpected end of input".into()));
    }

    Ok(input.trim().to_string())
}
