//! Command-line entry point for textngram

use clap::Parser;
use std::process::ExitCode;
use textngram_cli::commands::Commands;

/// Split text into overlapping character n-grams
#[derive(Debug, Parser)]
#[command(name = "textngram", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
