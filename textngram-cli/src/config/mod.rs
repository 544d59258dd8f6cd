//! Configuration module

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use textngram_core::{NgramConfig, DEFAULT_WINDOW_SIZE};

/// Commented template written by `generate-config`
pub const CONFIG_TEMPLATE: &str = r#"# textngram configuration

[ngram]
# Code points per n-gram (1 = unigram, 2 = bigram, 3 = trigram, ...)
window_size = 2

# Encoding of input files. Any WHATWG label works: "UTF-8", "Shift_JIS",
# "EUC-JP", "windows-1252", ... Leave unset to use UTF-8.
# encoding = "UTF-8"

[output]
# One of: text, indexed, joined, json
format = "text"

# Pretty print JSON output
pretty_json = true
"#;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// N-gram construction settings
    #[serde(default)]
    pub ngram: NgramSection,

    /// Output configuration
    #[serde(default)]
    pub output: OutputSection,
}

/// N-gram construction settings
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct NgramSection {
    /// Code points per window
    pub window_size: usize,

    /// Encoding label for input files
    pub encoding: Option<String>,
}

impl Default for NgramSection {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            encoding: None,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputSection {
    /// Default output format
    pub format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Core configuration described by the `[ngram]` section
    pub fn ngram_config(&self) -> Result<NgramConfig> {
        let mut builder = NgramConfig::builder().window_size(self.ngram.window_size);
        if let Some(label) = &self.ngram.encoding {
            builder = builder
                .encoding_label(label)
                .map_err(|e| CliError::ConfigError(e.to_string()))?;
        }
        builder
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()).into())
    }
}
