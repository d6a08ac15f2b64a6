use std::fmt::{self, Formatter};
use std::num::NonZeroU32;

use derive_more::Display;

/// The index of a node within a trie's arena.
///
/// Ids are plain indices rather than pointers, so any number of them can refer to the same node
/// without owning it. The index is stored off by one in a `NonZeroU32`, which keeps an empty
/// transition slot (`Option<NodeId>`) as small as the id itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(NonZeroU32);

impl NodeId {
    /// The root node, representing the empty prefix. It always exists.
    pub const ROOT: NodeId = NodeId(NonZeroU32::MIN);

    /// The largest number of nodes a single trie can hold.
    pub(crate) const LIMIT: usize = u32::MAX as usize;

    /// Returns the id for the node at `index`, or None if the index doesn't fit.
    pub(crate) const fn new(index: usize) -> Option<NodeId> {
        if index >= NodeId::LIMIT {
            return None;
        }

        match NonZeroU32::new(index as u32 + 1) {
            Some(raw) => Some(NodeId(raw)),
            None => None,
        }
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }

    pub const fn as_usize(self) -> usize {
        self.index()
    }

    pub const fn is_root(self) -> bool {
        self.0.get() == NodeId::ROOT.0.get()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.index())
    }
}

/// Identifies a distinct pattern inserted into a [`Trie`](super::Trie). Ids are dense and
/// assigned in insertion order, starting at 0.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display("#{_0}")]
pub struct PatternId(pub(crate) usize);

impl PatternId {
    pub const fn as_usize(self) -> usize {
        self.0
    }
}

/// One state of the trie. Child edges aren't stored here but in the trie's transition table, one
/// row per node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Node {
    /// The length of the prefix this node represents.
    pub depth: usize,
    /// The pattern ending exactly at this node. A node represents a single string, so at most one
    /// distinct pattern can end here.
    pub pattern: Option<PatternId>,
}

impl Node {
    pub const fn new(depth: usize) -> Node {
        Node {
            depth,
            pattern: None,
        }
    }

    pub const fn is_terminal(&self) -> bool {
        self.pattern.is_some()
    }
}
