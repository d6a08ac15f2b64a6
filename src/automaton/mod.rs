//! A module containing [`Automaton`], the failure-linked trie, and the types produced by searching
//! with it.
//!
//! An automaton is assembled in two phases. Patterns are [`insert`](Automaton::insert)ed first,
//! then [`build`](Automaton::build) threads failure links through the trie. Only a built automaton
//! can be searched, searching one that isn't built returns a [`NotBuiltError`]. Building also
//! closes the first phase for good: inserting into a built automaton returns an
//! [`AlreadyBuiltError`].
//!
//! Once built, an automaton is never mutated by a search, so it can be shared between threads and
//! searched by all of them at once.
//!
//! [`Automaton`], [`Match`] and [`Scan`] are also re-exported at the crate root.

mod automaton;
mod error;
mod links;
mod search;
mod tests;

pub use automaton::*;
pub use error::*;
pub use search::*;
