//! Input abstraction for n-gram construction
//!
//! Text can come from a string, raw bytes, a file, or any reader. Byte-bearing
//! inputs are decoded under the caller's encoding.

use crate::encoding::TextEncoding;
use crate::error::Result;
use crate::text::Text;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Unified input source
pub enum Input {
    /// Already-decoded text
    Text(String),
    /// Static text reference
    TextRef(&'static str),
    /// Raw bytes in the source encoding
    Bytes(Vec<u8>),
    /// File path to read from
    File(PathBuf),
    /// Reader stream (stdin, pipes, ...)
    Reader(Box<dyn Read + Send>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::TextRef(text) => f.debug_tuple("TextRef").field(text).finish(),
            Input::Bytes(bytes) => f
                .debug_tuple("Bytes")
                .field(&format!("<{} bytes>", bytes.len()))
                .finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<Reader>").finish(),
        }
    }
}

impl Input {
    /// Create input from a text string
    pub fn from_text<S: Into<String>>(text: S) -> Self {
        Input::Text(text.into())
    }

    /// Create input from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a file path
    pub fn from_file<P: Into<PathBuf>>(path: P) -> Self {
        Input::File(path.into())
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + Send + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read and decode the input
    ///
    /// `encoding` applies to bytes, files and readers. String inputs are
    /// already decoded and are only tagged with it.
    pub fn into_text(self, encoding: TextEncoding) -> Result<Text> {
        match self {
            Input::Text(text) => Ok(Text::new(text, encoding)),
            Input::TextRef(text) => Ok(Text::new(text, encoding)),
            Input::Bytes(bytes) => Text::decode(&bytes, encoding),
            Input::File(path) => {
                let bytes = fs::read(&path)?;
                tracing::debug!(path = %path.display(), bytes = bytes.len(), "read input file");
                Text::decode(&bytes, encoding)
            }
            Input::Reader(mut reader) => {
                let mut buffer = Vec::new();
                reader.read_to_end(&mut buffer)?;
                Text::decode(&buffer, encoding)
            }
        }
    }

    /// Read and decode the input into a plain string
    pub fn read_text(self, encoding: TextEncoding) -> Result<String> {
        Ok(self.into_text(encoding)?.as_str().to_owned())
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

impl From<&'static str> for Input {
    fn from(text: &'static str) -> Self {
        Input::TextRef(text)
    }
}

impl From<PathBuf> for Input {
    fn from(path: PathBuf) -> Self {
        Input::File(path)
    }
}

impl From<Vec<u8>> for Input {
    fn from(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }
}
