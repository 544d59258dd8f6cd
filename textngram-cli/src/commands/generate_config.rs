//! Generate config command implementation

use crate::config::CONFIG_TEMPLATE;
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        let Some(output) = &self.output else {
            print!("{CONFIG_TEMPLATE}");
            return Ok(());
        };

        if output.exists() && !self.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                output.display()
            );
        }

        fs::write(output, CONFIG_TEMPLATE)
            .with_context(|| format!("Failed to write to {}", output.display()))?;

        println!("✓ Configuration generated: {}", output.display());
        println!();
        println!("Next steps:");
        println!("1. Edit window_size and encoding to taste");
        println!("2. Validate your configuration:");
        println!("   textngram validate --config {}", output.display());
        println!("3. Use it for splitting:");
        println!(
            "   textngram split -i input.txt --config {}",
            output.display()
        );

        Ok(())
    }
}
