//! Encoding-aware character n-gram sequences
//!
//! This crate splits a text into overlapping fixed-width windows of Unicode
//! code points ("n-grams"), the building block for n-gram indexes, fuzzy
//! search and simple tokenizers. The sequence is immutable and lazy: it can
//! report its length, hand out any window by offset, or be walked with
//! iterators and cursors without materialising the whole list.
//!
//! # Example
//!
//! ```rust
//! use textngram_core::{NgramConfig, NgramSequence, TextEncoding};
//!
//! // Already-decoded text
//! let bigrams = NgramSequence::new("こんにちは世界！", 2).unwrap();
//! assert_eq!(bigrams.len(), 7);
//! assert_eq!(bigrams.get(5).unwrap(), "世界");
//!
//! // Raw bytes in a declared encoding
//! let sjis = TextEncoding::for_label("Shift_JIS").unwrap();
//! let bytes = sjis.encode("日本語").unwrap().into_owned();
//! let seq = NgramSequence::decode(&bytes, 2, Some(sjis)).unwrap();
//! assert_eq!(seq.to_vec(), vec!["日本", "本語"]);
//!
//! // Configuration-driven construction
//! let config = NgramConfig::builder().window_size(3).build().unwrap();
//! let trigrams = NgramSequence::from_config("abcd", &config).unwrap();
//! assert_eq!(trigrams.to_string(), "abc,bcd");
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod cursor;
pub mod encoding;
pub mod error;
pub mod input;
pub mod iter;
pub mod sequence;
pub mod text;
pub mod traits;

// Re-export key types
pub use config::{NgramConfig, NgramConfigBuilder, DEFAULT_WINDOW_SIZE};
pub use cursor::Cursor;
pub use encoding::{configure_default, default_encoding, TextEncoding};
pub use error::{NgramError, Result};
pub use input::Input;
pub use iter::Iter;
pub use sequence::{NgramSequence, DISPLAY_SEPARATOR};
pub use text::Text;
pub use traits::{Countable, Indexable, Iterable};

// Convenience functions

/// All `window_size`-grams of `text`
pub fn ngrams(text: &str, window_size: usize) -> Result<Vec<String>> {
    Ok(NgramSequence::new(text, window_size)?.to_vec())
}

/// All bigrams of `text`
pub fn bigrams(text: &str) -> Vec<String> {
    NgramSequence::bigrams(text)
        .map(|seq| seq.to_vec())
        .unwrap_or_default()
}
