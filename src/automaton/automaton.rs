use std::fmt::{self, Debug, Display, Formatter};
use std::ops::Deref;

use super::links::Links;
use super::{AlreadyBuiltError, Match, Matches, NotBuiltError, PatternError, Scan};
use crate::alphabet::{Alphabet, AlphabetError};
use crate::trie::{InsertError, NodeId, PatternId, Trie};
use crate::util::log;

/// A multi-pattern matcher: a [`Trie`] over a dictionary of patterns, augmented with failure and
/// output links so that a text can be searched for every pattern at once in a single pass.
///
/// Patterns are added with [`insert`](Automaton::insert) and the links are computed by
/// [`build`](Automaton::build), which has to happen before the automaton can be searched.
/// Building freezes the dictionary: a built automaton rejects any further insertion with an
/// [`AlreadyBuiltError`], and its links never change again.
///
/// Read-only queries on the underlying trie (such as [`contains`](Trie::contains) and
/// [`starts_with`](Trie::starts_with)) are available through [`Deref`].
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `m`: The length of the pattern being inserted.
/// - `s`: The number of nodes in the trie, at most the total length of all patterns.
/// - `k`: The size of the alphabet.
/// - `n`: The length of the text being searched.
/// - `z`: The number of matches reported.
///
/// | Method | Complexity |
/// |-|-|
/// | `insert` | `O(m)`* |
/// | `build` | `O(s * k)` |
/// | `search` | `O(n + z)` |
/// | `find_first` | `O(n)` |
///
/// \* Each new node allocates a row of `k` child slots.
///
/// The cost of a search doesn't depend on the number of patterns at all, which is the whole point
/// of building the automaton instead of looking for each pattern separately.
pub struct Automaton {
    pub(crate) trie: Trie,
    pub(crate) links: Option<Links>,
}

impl Automaton {
    /// Creates a new, empty Automaton over the default lowercase [`Alphabet`].
    pub fn new() -> Automaton {
        Automaton::with_alphabet(Alphabet::default())
    }

    /// Creates a new, empty Automaton over `alphabet_size` symbols, starting at `a`.
    ///
    /// Only ranges that end within the byte range fit, so at most 159 symbols (`a` through
    /// `0xff`). Alphabets covering every byte, or starting anywhere else, go through
    /// [`with_alphabet`](Automaton::with_alphabet) with [`Alphabet::BYTES`] or [`Alphabet::new`].
    pub fn with_size(alphabet_size: usize) -> Result<Automaton, AlphabetError> {
        Ok(Automaton::with_alphabet(Alphabet::new(b'a', alphabet_size)?))
    }

    /// Creates a new, empty Automaton over the provided `alphabet`.
    pub fn with_alphabet(alphabet: Alphabet) -> Automaton {
        Automaton {
            trie: Trie::with_alphabet(alphabet),
            links: None,
        }
    }

    /// Creates an Automaton over `alphabet` from all of the provided `patterns` and builds it.
    ///
    /// Stops at the first pattern that can't be inserted, returning its error.
    pub fn from_patterns<I, P>(alphabet: Alphabet, patterns: I) -> Result<Automaton, InsertError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[u8]>,
    {
        let mut automaton = Automaton::with_alphabet(alphabet);
        for pattern in patterns {
            automaton.trie.insert(&pattern)?;
        }
        automaton.build();
        Ok(automaton)
    }

    /// Inserts `pattern`, returning the id it will be reported under. See [`Trie::insert`].
    ///
    /// Once the Automaton is built its dictionary is fixed, so this returns an
    /// [`AlreadyBuiltError`] without looking at `pattern`, even if it's already present.
    ///
    /// # Panics
    /// Panics if the Trie would need more than `u32::MAX` nodes to hold the pattern.
    pub fn insert<P: AsRef<[u8]> + ?Sized>(&mut self, pattern: &P) -> Result<PatternId, PatternError> {
        if self.is_built() {
            log::debug!(patterns = self.trie.len(), "rejected insertion into a built automaton");
            return Err(AlreadyBuiltError.into());
        }

        Ok(self.trie.insert(pattern)?)
    }

    /// Computes the failure and output links of every node, allowing the Automaton to be searched.
    ///
    /// Building an Automaton that is already built does nothing.
    pub fn build(&mut self) {
        if self.links.is_some() {
            return;
        }

        self.links = Some(Links::build(&self.trie));
        log::debug!(
            nodes = self.trie.node_count(),
            patterns = self.trie.len(),
            "built automaton"
        );
    }

    /// Returns true if the Automaton has been built. A built Automaton accepts no more patterns.
    pub const fn is_built(&self) -> bool {
        self.links.is_some()
    }

    /// Returns a lazy iterator over every occurrence of every pattern in `text`. Matches are
    /// produced in the order they end. Overlapping and nested matches are all reported.
    ///
    /// Bytes in `text` that aren't part of the alphabet can't be part of a match, but they're
    /// otherwise skipped over without error.
    pub fn search<'a, 't, T: AsRef<[u8]> + ?Sized>(
        &'a self,
        text: &'t T,
    ) -> Result<Matches<'a, 't>, NotBuiltError> {
        Ok(Matches::new(&self.trie, self.links()?, text.as_ref()))
    }

    /// Searches `text`, calling `on_match` for every match in the same order as
    /// [`search`](Automaton::search) produces them, until it returns [`Scan::Stop`].
    pub fn scan<T, F>(&self, text: &T, mut on_match: F) -> Result<(), NotBuiltError>
    where
        T: AsRef<[u8]> + ?Sized,
        F: FnMut(Match) -> Scan,
    {
        for found in self.search(text)? {
            if on_match(found) == Scan::Stop {
                break;
            }
        }

        Ok(())
    }

    /// Returns the first match to end in `text`, if there is one.
    pub fn find_first<T: AsRef<[u8]> + ?Sized>(&self, text: &T) -> Result<Option<Match>, NotBuiltError> {
        Ok(self.search(text)?.next())
    }

    /// Returns true if any pattern occurs in `text`.
    pub fn is_match<T: AsRef<[u8]> + ?Sized>(&self, text: &T) -> Result<bool, NotBuiltError> {
        Ok(self.find_first(text)?.is_some())
    }

    /// Returns the failure link of `node`, or None if the Automaton isn't built.
    ///
    /// # Panics
    /// Panics if `node` doesn't belong to this Automaton.
    pub fn failure_link(&self, node: NodeId) -> Option<NodeId> {
        self.links.as_ref().map(|links| links.failure(node))
    }

    /// Returns the underlying Trie.
    pub const fn trie(&self) -> &Trie {
        &self.trie
    }
}

impl Automaton {
    pub(crate) fn links(&self) -> Result<&Links, NotBuiltError> {
        self.links.as_ref().ok_or(NotBuiltError)
    }
}

impl Deref for Automaton {
    type Target = Trie;

    fn deref(&self) -> &Self::Target {
        &self.trie
    }
}

impl Default for Automaton {
    fn default() -> Self {
        Automaton::new()
    }
}

impl Debug for Automaton {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Automaton")
            .field("trie", &self.trie)
            .field("built", &self.is_built())
            .finish()
    }
}

impl Display for Automaton {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.trie, f)
    }
}
