use std::fmt::{self, Display, Formatter};
use std::iter::FusedIterator;
use std::ops::Range;

use super::links::Links;
use crate::trie::{NodeId, PatternId, Trie};

/// An occurrence of a pattern within a searched text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Match {
    pub(crate) pattern: PatternId,
    pub(crate) position: usize,
    pub(crate) len: usize,
}

#[allow(clippy::len_without_is_empty)]
impl Match {
    /// Returns the id of the pattern that matched.
    #[inline]
    pub const fn pattern(&self) -> PatternId {
        self.pattern
    }

    /// Returns the index of the last byte of the match.
    #[inline]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns the index of the first byte of the match.
    #[inline]
    pub const fn start(&self) -> usize {
        self.position + 1 - self.len
    }

    /// Returns the index one past the last byte of the match.
    #[inline]
    pub const fn end(&self) -> usize {
        self.position + 1
    }

    /// Returns the length of the match, which is also the length of the pattern.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the range of the text covered by the match.
    pub const fn span(&self) -> Range<usize> {
        self.start()..self.end()
    }
}

impl Display for Match {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}..{}", self.pattern, self.start(), self.end())
    }
}

/// Returned by the callback of [`Automaton::scan`](super::Automaton::scan) to decide whether the
/// scan goes on.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scan {
    Continue,
    Stop,
}

/// A lazy iterator over every [`Match`] in a text, in the order the matches end. Matches ending
/// at the same position are reported longest first. See
/// [`Automaton::search`](super::Automaton::search).
///
/// Each `Matches` owns its own position in the text and nothing else, dropping it part way
/// through is all it takes to stop searching.
#[derive(Debug, Clone)]
pub struct Matches<'a, 't> {
    pub(crate) trie: &'a Trie,
    pub(crate) links: &'a Links,
    pub(crate) text: &'t [u8],
    pub(crate) pos: usize,
    pub(crate) current: NodeId,
    pub(crate) pending: Option<NodeId>,
}

impl<'a, 't> Matches<'a, 't> {
    pub(crate) const fn new(trie: &'a Trie, links: &'a Links, text: &'t [u8]) -> Matches<'a, 't> {
        Matches {
            trie,
            links,
            text,
            pos: 0,
            current: NodeId::ROOT,
            pending: None,
        }
    }

    /// Returns the number of bytes of the text consumed so far.
    pub const fn consumed(&self) -> usize {
        self.pos
    }

    /// Moves the cursor along the edge for `byte`, falling back along failure links until an
    /// edge is found or the root is reached. Bytes outside of the alphabet send the cursor back to
    /// the root.
    fn advance(&mut self, byte: u8) {
        let Some(symbol) = self.trie.alphabet.index_of(byte) else {
            self.current = NodeId::ROOT;
            return;
        };

        let mut node = self.current;
        while !node.is_root() && self.trie.child(node, symbol).is_none() {
            node = self.links.failure(node);
        }

        self.current = self.trie.child(node, symbol).unwrap_or(NodeId::ROOT);
    }
}

impl Iterator for Matches<'_, '_> {
    type Item = Match;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            // Drain the output chain for the current position before reading more text.
            while let Some(node) = self.pending {
                self.pending = self.links.output(node);

                let terminal = self.trie.node(node);
                if let Some(pattern) = terminal.pattern {
                    return Some(Match {
                        pattern,
                        position: self.pos - 1,
                        len: terminal.depth,
                    });
                }
            }

            let &byte = self.text.get(self.pos)?;
            self.advance(byte);
            self.pos += 1;

            self.pending = if self.trie.node(self.current).is_terminal() {
                Some(self.current)
            } else {
                self.links.output(self.current)
            };
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Every position can complete any number of patterns, so there's no useful upper bound.
        (usize::from(self.pending.is_some()), None)
    }
}

impl FusedIterator for Matches<'_, '_> {}
