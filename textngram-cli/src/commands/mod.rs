//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod generate_config;
pub mod split;
pub mod validate;

use crate::output::OutputFormat;
use textngram_core::encoding::COMMON_ENCODINGS;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split text or files into character n-grams
    Split(split::SplitArgs),

    /// Write a default configuration file
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check a configuration file
    Validate(validate::ValidateArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List commonly used encoding labels
    Encodings,
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Split(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::List { subcommand } => {
                for line in subcommand.lines() {
                    println!("{line}");
                }
                Ok(())
            }
        }
    }
}

impl ListCommands {
    /// Lines printed for this listing
    pub fn lines(&self) -> Vec<String> {
        match self {
            ListCommands::Formats => OutputFormat::ALL
                .iter()
                .map(|format| format!("{:<8} {}", format.name(), format.description()))
                .collect(),
            ListCommands::Encodings => COMMON_ENCODINGS
                .iter()
                .map(|name| name.to_string())
                .collect(),
        }
    }
}
