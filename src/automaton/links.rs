use std::collections::VecDeque;

use crate::trie::{NodeId, Trie};

/// Failure and output links for every node of a [`Trie`], indexed by node id.
///
/// A node's failure link points at the node for the longest proper suffix of its prefix that is
/// also a prefix in the trie (or at the root if there's none). Its output link points at the
/// nearest terminal node along its chain of failure links, skipping the non-terminal ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Links {
    pub failure: Vec<NodeId>,
    pub output: Vec<Option<NodeId>>,
}

impl Links {
    /// Computes the links for every node of `trie` in a single breadth-first pass.
    ///
    /// Nodes are visited in order of depth, so by the time a node is reached, the links of every
    /// shallower node (which are the only ones it can depend on) are already final.
    pub fn build(trie: &Trie) -> Links {
        let mut failure = vec![NodeId::ROOT; trie.node_count()];
        let mut output = vec![None; trie.node_count()];
        let mut queue: VecDeque<NodeId> = VecDeque::with_capacity(trie.node_count());

        // Children of the root can only fall back to the root, which is what failure already holds.
        queue.extend(trie.children(NodeId::ROOT).iter().flatten().copied());

        while let Some(node) = queue.pop_front() {
            for (symbol, child) in trie.children(node).iter().enumerate() {
                let Some(child) = *child else { continue };

                let mut fallback = failure[node.index()];
                while !fallback.is_root() && trie.child(fallback, symbol).is_none() {
                    fallback = failure[fallback.index()];
                }

                let link = match trie.child(fallback, symbol) {
                    Some(target) if target != child => target,
                    _ => NodeId::ROOT,
                };

                failure[child.index()] = link;
                output[child.index()] = if trie.node(link).is_terminal() {
                    Some(link)
                } else {
                    output[link.index()]
                };

                queue.push_back(child);
            }
        }

        Links { failure, output }
    }

    #[inline]
    pub fn failure(&self, node: NodeId) -> NodeId {
        self.failure[node.index()]
    }

    #[inline]
    pub fn output(&self, node: NodeId) -> Option<NodeId> {
        self.output[node.index()]
    }
}
