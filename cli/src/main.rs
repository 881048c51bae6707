//! conshow - console output demonstrator.
//!
//! Drives the `conshow-core` printers from the command line: a fixed
//! greeting, verbatim text, numeric values, and the LED indicator stub.
//! Without a subcommand it echoes stdin lines until `/q` or `exit`.

use anyhow::Context as _;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{self, BufRead};
use std::path::Path;
use std::process::ExitCode;

mod colors;
mod logging;
mod separator;

pub use colors::*;
pub use separator::separator;

use conshow_core::{AppConfig, Config, basic, indicator, output};

/// Initialize the logging system.
fn setup_logging(config: &Config) -> bool {
    let log_dir = Path::new(&config.cwd).join("logs");
    match logging::init_logging(&log_dir) {
        Ok(()) => true,
        Err(e) => {
            tracing::error!("Failed to initialize logging: {e}");
            false
        },
    }
}

/// Console output toolkit - prints demonstration lines to stdout.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Output operation to run; omit for interactive echo mode.
    #[command(subcommand)]
    command: Option<Command>,
}

/// Output operation selected on the command line.
#[derive(Subcommand, Debug)]
enum Command {
    /// Print the fixed greeting line.
    Greeting,
    /// Print a message verbatim.
    Text {
        /// Message to print, emitted without transformation.
        message: String,
    },
    /// Print a numeric value using its default rendering.
    Number {
        /// Value to print; `inf`, `-inf` and `NaN` are accepted.
        #[arg(allow_hyphen_values = true)]
        value: f64,
    },
    /// LED indicator stub.
    Led {
        /// Indicator action.
        #[command(subcommand)]
        action: LedAction,
    },
}

/// Actions supported by the indicator stub.
#[derive(Subcommand, Debug)]
enum LedAction {
    /// Print the on-indicator status line.
    On,
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    let config = Config::from_env();
    let _logging_enabled = setup_logging(&config);

    if let Err(e) = run(&args) {
        tracing::error!("Application error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// Run the selected output operation.
fn run(args: &CliArgs) -> Result<()> {
    let mut console = output::stdout();

    match &args.command {
        Some(Command::Greeting) => {
            basic::write_greeting(&mut console).context("Failed to write to stdout")?;
        },
        Some(Command::Text { message }) => {
            basic::write_text(&mut console, message).context("Failed to write to stdout")?;
        },
        Some(Command::Number { value }) => {
            basic::write_number(&mut console, *value).context("Failed to write to stdout")?;
        },
        Some(Command::Led { action: LedAction::On }) => {
            tracing::debug!("Indicator stub invoked, no hardware attached");
            indicator::write_on(&mut console).context("Failed to write to stdout")?;
        },
        None => interactive()?,
    }

    Ok(())
}

/// Echo stdin lines until `/q` or `exit`.
fn interactive() -> Result<()> {
    let app_config = AppConfig::load();
    banner(app_config.output.styled);

    let mut console = output::stdout();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(input) = line else {
            break;
        };

        let trimmed = input.trim();
        if trimmed.is_empty() {
            continue;
        }

        match trimmed {
            "/q" | "exit" => break,
            msg => {
                basic::write_text(&mut console, msg).context("Failed to write to stdout")?;
            },
        }
    }

    Ok(())
}

/// Print the interactive-mode banner.
fn banner(styled: bool) {
    if styled {
        output::println(format_args!(
            "{BOLD}conshow{RESET} | type a line to echo it, /q to quit"
        ));
        output::print(format_args!("{}", separator()));
    } else {
        output::println(format_args!("conshow | type a line to echo it, /q to quit"));
    }
}
