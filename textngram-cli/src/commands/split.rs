//! Split command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{create_formatter, OutputFormat};
use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use textngram_core::{Input, NgramConfig, NgramSequence};

/// Pattern that reads standard input
pub const STDIN_PATTERN: &str = "-";

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Input files or patterns (supports glob, "-" for stdin)
    #[arg(
        short,
        long,
        value_name = "FILE/PATTERN",
        required_unless_present = "text",
        conflicts_with = "text"
    )]
    pub input: Vec<String>,

    /// Literal text to split instead of files
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Code points per n-gram [default: 2]
    #[arg(short = 'n', long, value_name = "N")]
    pub window_size: Option<usize>,

    /// Encoding of input files [default: UTF-8]
    #[arg(short, long, value_name = "LABEL")]
    pub encoding: Option<String>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Where one sequence's text comes from
#[derive(Debug)]
enum Source {
    Text(String),
    Stdin,
    File(PathBuf),
}

impl Source {
    fn name(&self) -> String {
        match self {
            Source::Text(_) => "<text>".to_string(),
            Source::Stdin => "<stdin>".to_string(),
            Source::File(path) => path.display().to_string(),
        }
    }

    fn load(&self, config: &NgramConfig) -> Result<NgramSequence> {
        let input = match self {
            Source::Text(text) => Input::from_text(text.as_str()),
            Source::Stdin => Input::from_bytes(FileReader::read_stdin()?),
            Source::File(path) => {
                log::debug!(
                    "Reading {} ({} bytes)",
                    path.display(),
                    FileReader::file_size(path)?
                );
                Input::from_bytes(FileReader::read_bytes(path)?)
            }
        };

        NgramSequence::from_config(input, config)
            .with_context(|| format!("Failed to build n-grams for {}", self.name()))
    }
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting n-gram extraction");
        log::debug!("Arguments: {:?}", self);

        let file_config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };
        let config = self.resolve_ngram_config(&file_config)?;
        let format = self.format.unwrap_or(file_config.output.format);
        log::info!(
            "Window size {}, encoding {}, format {}",
            config.window_size,
            config.resolved_encoding(),
            format.name()
        );

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };
        let mut formatter = create_formatter(format, writer, file_config.output.pretty_json);

        let sources = self.sources()?;
        log::info!("Processing {} source(s)", sources.len());

        for source in &sources {
            let sequence = source.load(&config)?;
            if sequence.is_empty() {
                log::warn!(
                    "{}: text of {} code points is shorter than window size {}",
                    source.name(),
                    sequence.text_len(),
                    sequence.window_size()
                );
            }
            log::debug!("{}: {} n-grams", source.name(), sequence.len());
            formatter.format_sequence(&source.name(), &sequence)?;
        }

        formatter.finish()
    }

    /// Command-line flags layered over the `[ngram]` config section
    fn resolve_ngram_config(&self, file_config: &CliConfig) -> Result<NgramConfig> {
        let window_size = self.window_size.unwrap_or(file_config.ngram.window_size);
        let mut builder = NgramConfig::builder().window_size(window_size);

        let label = self
            .encoding
            .as_deref()
            .or(file_config.ngram.encoding.as_deref());
        if let Some(label) = label {
            builder = builder.encoding_label(label).map_err(CliError::from)?;
        }

        Ok(builder.build().map_err(CliError::from)?)
    }

    fn sources(&self) -> Result<Vec<Source>> {
        if let Some(text) = &self.text {
            return Ok(vec![Source::Text(text.clone())]);
        }

        let mut sources = Vec::new();
        let patterns: Vec<String> = self
            .input
            .iter()
            .filter(|pattern| pattern.as_str() != STDIN_PATTERN)
            .cloned()
            .collect();

        if patterns.len() < self.input.len() {
            sources.push(Source::Stdin);
        }
        if !patterns.is_empty() {
            sources.extend(resolve_patterns(&patterns)?.into_iter().map(Source::File));
        }

        Ok(sources)
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        let env = env_logger::Env::default().default_filter_or(log_level);
        let _ = env_logger::Builder::from_env(env).try_init();
    }
}
