//! A module containing [`Alphabet`], the range of symbols a [`Trie`](crate::trie::Trie) or
//! [`Automaton`](crate::automaton::Automaton) is built over, and its construction errors.
//!
//! [`Alphabet`] is also re-exported at the crate root.

mod alphabet;
mod error;

pub use alphabet::*;
pub use error::*;
