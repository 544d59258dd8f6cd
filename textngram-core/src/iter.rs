//! Borrowing iterator over the windows of a sequence

use crate::sequence::NgramSequence;
use std::iter::FusedIterator;

/// Double-ended iterator over the windows of an [`NgramSequence`]
///
/// Windows are sliced on demand; nothing is materialised ahead of the
/// element being returned.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    sequence: &'a NgramSequence,
    front: usize,
    back: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(sequence: &'a NgramSequence) -> Self {
        Self {
            sequence,
            front: 0,
            back: sequence.len(),
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let window = self.sequence.window(self.front)?;
        self.front += 1;
        Some(window)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let window = self.sequence.window(self.back - 1)?;
        self.back -= 1;
        Some(window)
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
