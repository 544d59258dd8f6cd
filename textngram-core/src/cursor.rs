//! Per-session iteration cursor
//!
//! A cursor is a single position over an immutable collection. Positions run
//! from `0` to `len()`, where `len()` is the terminal exhausted state. Each
//! cursor owns its position, so any number of cursors can walk the same
//! collection independently.

use crate::error::Result;
use crate::traits::Indexable;

/// Check-then-use cursor over an [`Indexable`] collection
///
/// ```
/// use textngram_core::NgramSequence;
///
/// let bigrams = NgramSequence::new("abcd", 2).unwrap();
/// let mut cursor = bigrams.cursor();
/// let mut seen = Vec::new();
///
/// cursor.start();
/// while cursor.is_valid() {
///     seen.push(cursor.current().unwrap());
///     cursor.advance();
/// }
/// assert_eq!(seen, vec!["ab", "bc", "cd"]);
/// ```
#[derive(Debug)]
pub struct Cursor<'a, S: Indexable + ?Sized> {
    source: &'a S,
    position: usize,
}

impl<'a, S: Indexable + ?Sized> Cursor<'a, S> {
    /// Create a cursor at position 0
    pub fn new(source: &'a S) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    /// Return to position 0
    pub fn start(&mut self) {
        self.position = 0;
    }

    /// Whether the current position addresses an element
    pub fn is_valid(&self) -> bool {
        self.source.contains(self.position)
    }

    /// Element at the current position
    ///
    /// # Errors
    /// `OutOfRange` when the cursor is exhausted
    pub fn current(&self) -> Result<&'a str> {
        let source: &'a S = self.source;
        source.get(self.position)
    }

    /// Move to the next position
    ///
    /// Validity is not checked; once the cursor reaches the exhausted
    /// position it stays there.
    pub fn advance(&mut self) {
        if self.position < self.source.len() {
            self.position += 1;
        }
    }

    /// Current position
    pub fn position(&self) -> usize {
        self.position
    }

    /// Move to `target`
    ///
    /// # Errors
    /// `OutOfRange` if `target` is not a valid offset. The position is left
    /// unchanged in that case.
    pub fn seek(&mut self, target: usize) -> Result<()> {
        if !self.source.contains(target) {
            return Err(self.source.out_of_range(target));
        }
        tracing::trace!(from = self.position, to = target, "cursor seek");
        self.position = target;
        Ok(())
    }
}

impl<S: Indexable + ?Sized> Clone for Cursor<'_, S> {
    fn clone(&self) -> Self {
        Self {
            source: self.source,
            position: self.position,
        }
    }
}

/// Yields the remaining elements from the current position onward
impl<'a, S: Indexable + ?Sized> Iterator for Cursor<'a, S> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.current().ok()?;
        self.advance();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.source.len() - self.position;
        (remaining, Some(remaining))
    }
}

impl<S: Indexable + ?Sized> ExactSizeIterator for Cursor<'_, S> {}
