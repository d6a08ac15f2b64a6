//! This crate is my take on the Aho-Corasick multi-pattern matching automaton.
//!
//! # Purpose
//! Searching a text for one pattern is easy. Searching it for a whole dictionary of patterns at
//! once, without the cost growing with the size of the dictionary, is where things get
//! interesting. The [`Automaton`] here builds a prefix tree over the dictionary, threads failure
//! links through it and then walks any text exactly once, reporting every pattern that ends at
//! every position (overlapping and nested matches included).
//!
//! # Method
//! Nodes live in a single arena and refer to each other with [`NodeId`](trie::NodeId)s rather than
//! pointers, so failure links can point "backwards" towards the root without any ownership
//! cycles. Each node owns a fixed-size row of child ids, one per symbol of the configured
//! [`Alphabet`], which keeps the hot loop of a search to a couple of array lookups.
//!
//! Failure links are computed breadth-first, so every node's link is derived from links of
//! strictly shallower nodes that have already been resolved. The same pass computes output links,
//! which let a search enumerate every pattern ending at a position without walking the whole
//! failure chain.
//!
//! # Error Handling
//! Errors are strongly typed: each condition gets its own struct implementing
//! [`Error`](std::error::Error), and operations that can fail in more than one way return an enum
//! over those structs. Nothing here is fatal. A rejected call leaves the structure exactly as it
//! was.
//!
//! # Dependencies
//! The error types rely on `derive_more` to skip some very repetitive programming. Logging goes
//! through `tracing`, which sits behind the default `tracing` feature and can be switched off.
//!
//! # Example
//! ```
//! use corasick::Automaton;
//!
//! let mut automaton = Automaton::new();
//! for word in ["he", "she", "his", "hers"] {
//!     automaton.insert(word).unwrap();
//! }
//! automaton.build();
//!
//! let found: Vec<_> = automaton.search("ahishers").unwrap()
//!     .map(|m| (m.position(), automaton.pattern(m.pattern()).unwrap()))
//!     .collect();
//!
//! assert_eq!(found, [
//!     (3, &b"his"[..]),
//!     (5, &b"she"[..]),
//!     (5, &b"he"[..]),
//!     (7, &b"hers"[..]),
//! ]);
//! ```

#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod alphabet;
pub mod automaton;
pub mod trie;

pub(crate) mod util;

#[doc(inline)]
pub use alphabet::Alphabet;
#[doc(inline)]
pub use automaton::{Automaton, Match, Scan};
#[doc(inline)]
pub use trie::{PatternId, Trie};
