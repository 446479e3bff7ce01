//! CLI Adapter.

use std::io::{BufRead, ErrorKind, IsTerminal, Write};
use std::path::PathBuf;

use clap::Parser;
use dialoguer::{Error as DialoguerError, Input};

use crate::app::config::{Config, ROOT_ENV_VAR};
use crate::domain::{AppError, DayNumber};

const DAY_PROMPT: &str = "Enter day number";

#[derive(Parser)]
#[command(name = "daykit")]
#[command(version)]
#[command(
    about = "Scaffold a dayNN/ directory with source, build and resource stubs",
    long_about = None
)]
struct Cli {
    /// Day number (prompted for when omitted)
    #[arg(allow_negative_numbers = true)]
    day: Option<String>,
    /// Directory that receives the day directory
    #[arg(short, long, env = ROOT_ENV_VAR)]
    root: Option<PathBuf>,
}

/// Entry point for the CLI.
pub fn run() {
    init_logging();
    let cli = Cli::parse();

    if let Err(e) = run_create_day(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
}

fn run_create_day(cli: Cli) -> Result<(), AppError> {
    let config = Config::resolve(cli.root)?;

    let day = match cli.day {
        Some(value) => value.parse::<DayNumber>()?,
        None => prompt_day_number()?,
    };

    let outcome = crate::create_day_in(&config.root, day)?;
    crate::announce(&outcome);
    Ok(())
}

/// Prompt for the day number.
fn prompt_day_number() -> Result<DayNumber, AppError> {
    if std::io::stdin().is_terminal() && std::io::stdout().is_terminal() {
        return match Input::<String>::new()
            .with_prompt(DAY_PROMPT)
            .validate_with(|input: &String| -> Result<(), String> {
                input.parse::<DayNumber>().map(|_| ()).map_err(|e| e.to_string())
            })
            .interact_text()
        {
            Ok(value) => value.parse::<DayNumber>(),
            Err(err) => Err(prompt_error(err)),
        };
    }

    // Non-interactive: print the prompt and read one line from stdin
    print!("{}: ", DAY_PROMPT);
    std::io::stdout().flush()?;

    let mut input = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut input)
        .map_err(|e| AppError::config_error(format!("Failed to read day number: {}", e)))?;

    input.parse::<DayNumber>()
}

fn prompt_error(err: DialoguerError) -> AppError {
    match err {
        DialoguerError::IO(err) if err.kind() == ErrorKind::Interrupted => {
            AppError::config_error("Day number prompt interrupted")
        }
        err => AppError::config_error(format!("Failed to read day number: {}", err)),
    }
}
