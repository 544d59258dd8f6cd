//! Comma-joined output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use textngram_core::NgramSequence;

/// Writes each source's display string on its own line
pub struct JoinedFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JoinedFormatter<W> {
    /// Create a new joined formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JoinedFormatter<W> {
    fn format_sequence(&mut self, _source: &str, sequence: &NgramSequence) -> Result<()> {
        writeln!(self.writer, "{sequence}")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::SharedBuffer;

    #[test]
    fn test_one_line_per_source() {
        let first = NgramSequence::new("こんにちは世界！", 3).unwrap();
        let second = NgramSequence::new("ab", 3).unwrap();
        let buffer = SharedBuffer::default();
        let mut formatter = JoinedFormatter::new(buffer.clone());
        formatter.format_sequence("first", &first).unwrap();
        formatter.format_sequence("second", &second).unwrap();
        formatter.finish().unwrap();
        assert_eq!(
            buffer.contents(),
            "こんに,んにち,にちは,ちは世,は世界,世界！\n\n"
        );
    }
}
