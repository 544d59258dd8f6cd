//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use textngram_core::NgramSequence;

/// JSON formatter - outputs one object per source as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    sequences: Vec<SequenceData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct SequenceData {
    /// Input file path, or `<text>` / `<stdin>`
    pub source: String,
    /// Code points per n-gram
    pub window_size: usize,
    /// Code points in the source text
    pub text_length: usize,
    /// Number of n-grams
    pub count: usize,
    /// The n-grams in offset order
    pub ngrams: Vec<String>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            sequences: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_sequence(&mut self, source: &str, sequence: &NgramSequence) -> Result<()> {
        self.sequences.push(SequenceData {
            source: source.to_string(),
            window_size: sequence.window_size(),
            text_length: sequence.text_len(),
            count: sequence.len(),
            ngrams: sequence.to_vec(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.sequences)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.sequences)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
