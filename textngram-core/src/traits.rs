//! Read-only access capabilities for window sequences
//!
//! A sequence is countable, indexable by offset, and iterable through a
//! cursor. None of these traits expose a write path.

use crate::cursor::Cursor;
use crate::error::{NgramError, Result};

/// A collection with a known number of elements
pub trait Countable {
    /// Number of elements
    fn len(&self) -> usize;

    /// Whether there are no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Random access to string elements by 0-based offset
pub trait Indexable: Countable {
    /// Element at `offset`
    ///
    /// # Errors
    /// [`NgramError::OutOfRange`] if `offset >= len()`
    fn get(&self, offset: usize) -> Result<&str>;

    /// Whether `offset` addresses an element
    fn contains(&self, offset: usize) -> bool {
        offset < self.len()
    }

    /// Out-of-range error for `offset` against this collection
    fn out_of_range(&self, offset: usize) -> NgramError {
        NgramError::OutOfRange {
            offset,
            length: self.len(),
        }
    }
}

/// Cursor-based iteration over an indexable collection
pub trait Iterable: Indexable {
    /// A fresh cursor positioned at the first element
    fn cursor(&self) -> Cursor<'_, Self> {
        Cursor::new(self)
    }
}
