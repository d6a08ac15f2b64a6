//! A module containing [`Trie`], the prefix tree that an [`Automaton`](crate::automaton::Automaton)
//! is built on, along with its node model and insertion errors.
//!
//! A Trie on its own answers exact membership and prefix queries over its dictionary. It knows
//! nothing about failure links, those are layered on top by the automaton.
//!
//! [`Trie`] and [`PatternId`] are also re-exported at the crate root.

mod error;
mod iter;
mod node;
mod trie;

pub use error::*;
pub use iter::*;
pub use node::*;
pub use trie::*;
