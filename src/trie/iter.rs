use std::iter::{Enumerate, FusedIterator};
use std::slice::Iter as SliceIter;

use super::PatternId;

/// A borrowed iterator over the patterns of a [`Trie`](super::Trie), in id order. See
/// [`Trie::patterns`](super::Trie::patterns).
pub struct Patterns<'a> {
    pub(crate) inner: Enumerate<SliceIter<'a, Box<[u8]>>>,
}

impl<'a> Iterator for Patterns<'a> {
    type Item = (PatternId, &'a [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(id, pattern)| (PatternId(id), &**pattern))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Patterns<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(id, pattern)| (PatternId(id), &**pattern))
    }
}

impl ExactSizeIterator for Patterns<'_> {}

impl FusedIterator for Patterns<'_> {}
