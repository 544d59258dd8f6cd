//! Indexed output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use textngram_core::NgramSequence;

/// Writes `"<offset> : <n-gram>"` per line
pub struct IndexedFormatter<W: Write> {
    writer: W,
}

impl<W: Write> IndexedFormatter<W> {
    /// Create a new indexed formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for IndexedFormatter<W> {
    fn format_sequence(&mut self, _source: &str, sequence: &NgramSequence) -> Result<()> {
        for (offset, ngram) in sequence.iter_indexed() {
            writeln!(self.writer, "{offset} : {ngram}")?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
