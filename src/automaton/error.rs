use derive_more::{Display, Error, From, IsVariant, TryInto};

use crate::trie::{EmptyPatternError, InsertError, InvalidSymbolError};

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("automaton must be built before it can be searched")]
pub struct NotBuiltError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("patterns can't be inserted into an automaton once it has been built")]
pub struct AlreadyBuiltError;

/// Returned by [`Automaton::insert`](super::Automaton::insert), which rejects everything
/// [`Trie::insert`](crate::trie::Trie::insert) does, as well as any insertion after the automaton
/// has been built.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, Error, TryInto, IsVariant)]
pub enum PatternError {
    AlreadyBuilt(AlreadyBuiltError),
    InvalidSymbol(InvalidSymbolError),
    EmptyPattern(EmptyPatternError),
}

impl From<InsertError> for PatternError {
    fn from(value: InsertError) -> Self {
        match value {
            InsertError::InvalidSymbol(err) => PatternError::InvalidSymbol(err),
            InsertError::EmptyPattern(err) => PatternError::EmptyPattern(err),
        }
    }
}
