//! Output formatting module

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use textngram_core::NgramSequence;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the n-grams of one source
    fn format_sequence(&mut self, source: &str, sequence: &NgramSequence) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod indexed;
pub mod joined;
pub mod json;
pub mod text;

pub use indexed::IndexedFormatter;
pub use joined::JoinedFormatter;
pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One n-gram per line
    Text,
    /// "<offset> : <n-gram>" per line
    Indexed,
    /// All n-grams of a source on one comma-separated line
    Joined,
    /// JSON array with one object per source
    Json,
}

impl OutputFormat {
    /// All formats, in listing order
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Text,
        OutputFormat::Indexed,
        OutputFormat::Joined,
        OutputFormat::Json,
    ];

    /// Name as accepted on the command line
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Indexed => "indexed",
            OutputFormat::Joined => "joined",
            OutputFormat::Json => "json",
        }
    }

    /// One-line description
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "one n-gram per line",
            OutputFormat::Indexed => "offset and n-gram per line",
            OutputFormat::Joined => "comma-separated n-grams, one line per input",
            OutputFormat::Json => "JSON array of per-input results",
        }
    }
}

/// Create the formatter for `format` writing to `writer`
pub fn create_formatter<W>(
    format: OutputFormat,
    writer: W,
    pretty_json: bool,
) -> Box<dyn OutputFormatter>
where
    W: Write + Send + Sync + 'static,
{
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Indexed => Box::new(IndexedFormatter::new(writer)),
        OutputFormat::Joined => Box::new(JoinedFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    /// Writer whose contents stay readable after the formatter takes it
    #[derive(Clone, Default)]
    pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        pub fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }
}
