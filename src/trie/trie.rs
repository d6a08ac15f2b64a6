use std::fmt::{self, Debug, Display, Formatter};

use super::{EmptyPatternError, InsertError, InvalidSymbolError, Node, NodeId, PatternId, Patterns};
use crate::alphabet::Alphabet;
use crate::util::fmt::DebugBytes;
use crate::util::log;

/// A prefix tree over a dictionary of byte patterns drawn from a fixed [`Alphabet`].
///
/// Nodes are stored in an append-only arena and never freed individually. Each node owns a row of
/// `alphabet.size()` optional child ids in a single, flat transition table, so following an edge is
/// a single index operation.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `m`: The length of the pattern or query.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(m)` |
/// | `contains` | `O(m)` |
/// | `find` | `O(m)` |
/// | `starts_with` | `O(m)` |
/// | `pattern` | `O(1)` |
pub struct Trie {
    pub(crate) alphabet: Alphabet,
    pub(crate) nodes: Vec<Node>,
    pub(crate) edges: Vec<Option<NodeId>>,
    pub(crate) patterns: Vec<Box<[u8]>>,
}

impl Trie {
    /// Creates a new, empty Trie over the default lowercase [`Alphabet`].
    pub fn new() -> Trie {
        Trie::with_alphabet(Alphabet::default())
    }

    /// Creates a new, empty Trie over the provided `alphabet`. Only the root node is allocated.
    pub fn with_alphabet(alphabet: Alphabet) -> Trie {
        Trie {
            alphabet,
            nodes: vec![Node::new(0)],
            edges: vec![None; alphabet.size()],
            patterns: Vec::new(),
        }
    }

    /// Returns the number of distinct patterns in the Trie.
    pub const fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Returns true if no patterns have been inserted.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of nodes in the Trie, including the root.
    pub const fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the Alphabet that patterns are drawn from.
    pub const fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Inserts `pattern` into the Trie, returning the id it is recorded under.
    ///
    /// Inserting a pattern that is already present doesn't change the Trie and returns the id from
    /// its first insertion.
    ///
    /// The pattern is checked in full before anything is modified, so if it's empty or contains a
    /// byte outside of the Alphabet, an error is returned and the Trie is left as it was.
    ///
    /// # Panics
    /// Panics if the Trie would need more than `u32::MAX` nodes to hold the pattern.
    pub fn insert<P: AsRef<[u8]> + ?Sized>(&mut self, pattern: &P) -> Result<PatternId, InsertError> {
        let pattern = pattern.as_ref();
        let symbols = self.symbols(pattern)?;

        let mut node = NodeId::ROOT;
        for (depth, symbol) in symbols.into_iter().enumerate() {
            node = match self.child(node, symbol) {
                Some(child) => child,
                None => self.push_child(node, symbol, depth + 1),
            };
        }

        if let Some(existing) = self.nodes[node.index()].pattern {
            log::trace!(pattern = %DebugBytes(pattern), id = %existing, "pattern already present");
            return Ok(existing);
        }

        let id = PatternId(self.patterns.len());
        self.patterns.push(pattern.into());
        self.nodes[node.index()].pattern = Some(id);
        log::trace!(pattern = %DebugBytes(pattern), %id, %node, "inserted pattern");

        Ok(id)
    }

    /// Returns true if `word` was inserted as a pattern.
    pub fn contains<W: AsRef<[u8]> + ?Sized>(&self, word: &W) -> bool {
        self.find(word).is_some()
    }

    /// Returns the id of the pattern equal to `word`, or None if there isn't one.
    pub fn find<W: AsRef<[u8]> + ?Sized>(&self, word: &W) -> Option<PatternId> {
        let node = self.find_node(word)?;
        self.nodes[node.index()].pattern
    }

    /// Returns true if any pattern in the Trie starts with `prefix`. An empty prefix is only
    /// considered present when the Trie isn't empty.
    pub fn starts_with<P: AsRef<[u8]> + ?Sized>(&self, prefix: &P) -> bool {
        // Nodes are only ever created on the way to a terminal node, so reaching any node means
        // some pattern passes through it.
        !self.is_empty() && self.find_node(prefix).is_some()
    }

    /// Returns the pattern recorded under `id`, or None if no such pattern was inserted.
    pub fn pattern(&self, id: PatternId) -> Option<&[u8]> {
        self.patterns.get(id.0).map(|p| &**p)
    }

    /// Follows `path` from the root, returning the node representing it, or None if no pattern
    /// starts with `path`. Bytes outside of the Alphabet have no edges, so they produce None.
    pub fn find_node<P: AsRef<[u8]> + ?Sized>(&self, path: &P) -> Option<NodeId> {
        path.as_ref().iter().try_fold(NodeId::ROOT, |node, &byte| {
            self.child(node, self.alphabet.index_of(byte)?)
        })
    }

    /// Returns the depth of `node`, which is the length of the prefix it represents.
    ///
    /// # Panics
    /// Panics if `node` doesn't belong to this Trie.
    pub fn depth(&self, node: NodeId) -> usize {
        self.nodes[node.index()].depth
    }

    /// Returns an iterator over every pattern in the Trie along with its id, in id order.
    pub fn patterns(&self) -> Patterns<'_> {
        Patterns {
            inner: self.patterns.iter().enumerate(),
        }
    }
}

impl Trie {
    /// Returns the child of `node` along the edge labeled `symbol`, if there is one.
    #[inline]
    pub(crate) fn child(&self, node: NodeId, symbol: usize) -> Option<NodeId> {
        self.edges[node.index() * self.alphabet.size() + symbol]
    }

    /// Returns the children of `node` as a row indexed by symbol.
    pub(crate) fn children(&self, node: NodeId) -> &[Option<NodeId>] {
        let stride = self.alphabet.size();
        &self.edges[node.index() * stride..(node.index() + 1) * stride]
    }

    pub(crate) fn node(&self, node: NodeId) -> &Node {
        &self.nodes[node.index()]
    }

    /// Maps every byte of `pattern` to its symbol, rejecting the pattern if it's empty or if any
    /// byte is outside of the Alphabet.
    fn symbols(&self, pattern: &[u8]) -> Result<Vec<usize>, InsertError> {
        if pattern.is_empty() {
            return Err(EmptyPatternError.into());
        }

        pattern
            .iter()
            .enumerate()
            .map(|(index, &symbol)| {
                self.alphabet
                    .index_of(symbol)
                    .ok_or(InsertError::from(InvalidSymbolError { symbol, index }))
            })
            .collect()
    }

    /// Appends a new node at `depth` and links it as the child of `parent` along `symbol`.
    fn push_child(&mut self, parent: NodeId, symbol: usize, depth: usize) -> NodeId {
        let Some(id) = NodeId::new(self.nodes.len()) else {
            panic!("a trie can't hold more than {} nodes", NodeId::LIMIT);
        };
        self.nodes.push(Node::new(depth));
        self.edges.extend(std::iter::repeat_n(None, self.alphabet.size()));
        self.edges[parent.index() * self.alphabet.size() + symbol] = Some(id);
        id
    }
}

impl Default for Trie {
    fn default() -> Self {
        Trie::new()
    }
}

impl Debug for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trie")
            .field("alphabet", &format_args!("{}", self.alphabet))
            .field("patterns", &self.patterns.iter().map(|p| DebugBytes(p)).collect::<Vec<_>>())
            .field("nodes", &self.node_count())
            .finish()
    }
}

impl Display for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.patterns.iter().map(|p| DebugBytes(p))).finish()
    }
}
