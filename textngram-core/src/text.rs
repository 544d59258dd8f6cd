//! Decoded source text with code-point addressing
//!
//! The text is decoded once and kept as UTF-8 alongside the byte offset of
//! every code point, so any run of code points can be sliced in O(1).

use crate::encoding::TextEncoding;
use crate::error::Result;

/// Immutable decoded text addressed by code point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    content: String,
    /// Byte offset of each code point, plus a trailing `content.len()`
    boundaries: Vec<usize>,
    encoding: TextEncoding,
}

impl Text {
    /// Wrap already-decoded text, recording `encoding` as its source encoding
    pub fn new(content: impl Into<String>, encoding: TextEncoding) -> Self {
        let content = content.into();
        let mut boundaries: Vec<usize> = content.char_indices().map(|(pos, _)| pos).collect();
        boundaries.push(content.len());

        Self {
            content,
            boundaries,
            encoding,
        }
    }

    /// Decode raw bytes under `encoding`
    pub fn decode(bytes: &[u8], encoding: TextEncoding) -> Result<Self> {
        let content = encoding.decode(bytes)?;
        Ok(Self::new(content, encoding))
    }

    /// Number of code points
    pub fn code_point_count(&self) -> usize {
        self.boundaries.len() - 1
    }

    /// Whether the text has no code points
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// The decoded text
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Encoding the text was decoded from
    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    /// `count` code points starting at code point `start`
    ///
    /// Returns `None` unless the whole run lies inside the text.
    pub fn slice(&self, start: usize, count: usize) -> Option<&str> {
        let end = start.checked_add(count)?;
        let from = *self.boundaries.get(start)?;
        let to = *self.boundaries.get(end)?;
        Some(&self.content[from..to])
    }
}

impl AsRef<str> for Text {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
