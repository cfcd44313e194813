//! arlington-to-vscode CLI
//!
//! Converts the Arlington PDF Model TSV into editor completion JSON.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::{CommandFactory, Parser};

mod args;
mod error;
mod logging;

use args::Cli;
use error::CliError;

fn main() -> anyhow::Result<ExitCode> {
    let args = Cli::parse();
    logging::init_logging(args.log_level)?;

    if let Err(err) = check_input(&args.pandas) {
        println!("{}", usage_report(&err));
        return Ok(ExitCode::FAILURE);
    }

    println!(
        "Loading from '{}' --> '{}'",
        args.pandas.display(),
        args.json.display()
    );
    arlington_completion::convert(&args.pandas, &args.json, &args.conversion_config())
        .with_context(|| format!("Failed to convert {}", args.pandas.display()))?;
    println!("Done");

    Ok(ExitCode::SUCCESS)
}

/// The input must exist and be a regular file.
fn check_input(path: &Path) -> Result<(), CliError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(CliError::InvalidInput(path.to_path_buf()))
    }
}

/// Error message followed by the help text.
fn usage_report(err: &CliError) -> String {
    format!("{err}\n{}", Cli::command().render_help())
}
