//! Fixed-width sliding-window n-gram sequence
//!
//! An [`NgramSequence`] holds a decoded text and a window size `N`. Window
//! `i` is the `N` code points starting at code point `i`, so a text of `T`
//! code points has `max(0, T - (N - 1))` windows. Nothing is precomputed
//! beyond the code-point boundaries of the text; each window is a borrowed
//! slice produced on request.

use crate::config::{NgramConfig, DEFAULT_WINDOW_SIZE};
use crate::cursor::Cursor;
use crate::encoding::{default_encoding, TextEncoding};
use crate::error::{NgramError, Result};
use crate::input::Input;
use crate::iter::Iter;
use crate::text::Text;
use crate::traits::{Countable, Indexable, Iterable};
use std::borrow::Cow;
use std::fmt;
use std::ops::Index;

/// Separator used by the display rendering
pub const DISPLAY_SEPARATOR: &str = ",";

/// Immutable, randomly addressable sequence of character n-grams
///
/// ```
/// use textngram_core::NgramSequence;
///
/// let bigrams = NgramSequence::new("こんにちは世界！", 2).unwrap();
/// assert_eq!(bigrams.len(), 7);
/// assert_eq!(bigrams.get(0).unwrap(), "こん");
/// assert_eq!(bigrams.to_string(), "こん,んに,にち,ちは,は世,世界,界！");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NgramSequence {
    text: Text,
    window_size: usize,
    length: usize,
}

impl NgramSequence {
    /// Build from already-decoded text
    ///
    /// The process-wide default encoding is recorded as the source encoding.
    ///
    /// # Errors
    /// `InvalidArgument` if `window_size` is 0
    pub fn new(text: &str, window_size: usize) -> Result<Self> {
        Self::from_text(Text::new(text, default_encoding()), window_size)
    }

    /// Bigram sequence over `text`
    pub fn bigrams(text: &str) -> Result<Self> {
        Self::new(text, DEFAULT_WINDOW_SIZE)
    }

    /// Decode `bytes` and build a sequence over them
    ///
    /// With `encoding` unset the process-wide default is used.
    pub fn decode(
        bytes: &[u8],
        window_size: usize,
        encoding: Option<TextEncoding>,
    ) -> Result<Self> {
        Self::check_window_size(window_size)?;
        let encoding = encoding.unwrap_or_else(default_encoding);
        Self::from_text(Text::decode(bytes, encoding)?, window_size)
    }

    /// Build from any [`Input`] under `config`
    pub fn from_config(input: impl Into<Input>, config: &NgramConfig) -> Result<Self> {
        config.validate()?;
        let text = input.into().into_text(config.resolved_encoding())?;
        Self::from_text(text, config.window_size)
    }

    /// Build from a decoded [`Text`]
    pub fn from_text(text: Text, window_size: usize) -> Result<Self> {
        Self::check_window_size(window_size)?;

        let length = text.code_point_count().saturating_sub(window_size - 1);
        tracing::debug!(
            window_size,
            text_length = text.code_point_count(),
            length,
            encoding = text.encoding().name(),
            "built n-gram sequence"
        );

        Ok(Self {
            text,
            window_size,
            length,
        })
    }

    fn check_window_size(window_size: usize) -> Result<()> {
        if window_size < 1 {
            return Err(NgramError::InvalidArgument { window_size });
        }
        Ok(())
    }

    /// Number of windows
    pub fn len(&self) -> usize {
        self.length
    }

    /// Whether the text is shorter than one window
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Code points per window
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Code points in the source text
    pub fn text_len(&self) -> usize {
        self.text.code_point_count()
    }

    /// The source text
    pub fn text(&self) -> &Text {
        &self.text
    }

    /// Encoding the source text was decoded from
    pub fn encoding(&self) -> TextEncoding {
        self.text.encoding()
    }

    pub(crate) fn window(&self, offset: usize) -> Option<&str> {
        if offset >= self.length {
            return None;
        }
        self.text.slice(offset, self.window_size)
    }

    /// Window starting at code point `offset`
    ///
    /// # Errors
    /// `OutOfRange` if `offset >= len()`
    pub fn get(&self, offset: usize) -> Result<&str> {
        self.window(offset).ok_or(NgramError::OutOfRange {
            offset,
            length: self.length,
        })
    }

    /// Window at `offset` re-encoded into the source encoding
    ///
    /// See [`TextEncoding::output_encoding`] for the encodings that come back
    /// as UTF-8.
    pub fn get_encoded(&self, offset: usize) -> Result<Cow<'_, [u8]>> {
        let window = self.get(offset)?;
        self.encoding().encode(window)
    }

    /// Whether `offset` addresses a window
    pub fn contains(&self, offset: usize) -> bool {
        offset < self.length
    }

    /// Iterate over all windows in offset order
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Iterate over `(offset, window)` pairs
    pub fn iter_indexed(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.iter().enumerate()
    }

    /// A fresh cursor at offset 0
    pub fn cursor(&self) -> Cursor<'_, Self> {
        Cursor::new(self)
    }

    /// All windows, in offset order
    pub fn to_vec(&self) -> Vec<String> {
        self.iter().map(str::to_owned).collect()
    }

    /// All windows joined with [`DISPLAY_SEPARATOR`]
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }

    /// Replace the window at `offset`
    ///
    /// # Errors
    /// Always `Immutable`
    pub fn set(&self, offset: usize, value: &str) -> Result<()> {
        tracing::debug!(offset, value, "rejected write to n-gram sequence");
        Err(NgramError::Immutable)
    }

    /// Remove the window at `offset`
    ///
    /// # Errors
    /// Always `Immutable`
    pub fn remove(&self, offset: usize) -> Result<()> {
        tracing::debug!(offset, "rejected removal from n-gram sequence");
        Err(NgramError::Immutable)
    }
}

impl Countable for NgramSequence {
    fn len(&self) -> usize {
        NgramSequence::len(self)
    }
}

impl Indexable for NgramSequence {
    fn get(&self, offset: usize) -> Result<&str> {
        NgramSequence::get(self, offset)
    }

    fn contains(&self, offset: usize) -> bool {
        NgramSequence::contains(self, offset)
    }
}

impl Iterable for NgramSequence {}

impl Index<usize> for NgramSequence {
    type Output = str;

    fn index(&self, offset: usize) -> &str {
        match self.get(offset) {
            Ok(window) => window,
            Err(err) => panic!("{err}"),
        }
    }
}

impl fmt::Display for NgramSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (offset, window) in self.iter_indexed() {
            if offset > 0 {
                f.write_str(DISPLAY_SEPARATOR)?;
            }
            f.write_str(window)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a NgramSequence {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for NgramSequence {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}
