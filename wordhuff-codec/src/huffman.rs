//! Huffman tree construction over n-byte words.
//!
//! Nodes live in an arena owned by [`HuffmanTree`] and refer to their
//! children by [`NodeId`]. Building, walking and dropping a tree therefore
//! never recurses, even for chain-shaped trees produced by skewed
//! frequency distributions.
//!
//! # Tie-breaking
//!
//! The priority key is `(frequency, rank)`, smallest first. Leaves are
//! ranked before all internal nodes, in lexicographic order of their word
//! bytes; internal nodes are ranked in creation order. The resulting tree
//! does not depend on hash-map iteration order, so compressing the same
//! input always produces the same bytes.

use crate::frequency::FrequencyTable;
use crate::word::Word;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use wordhuff_core::{Result, WordHuffError};

/// Index of a node in a [`HuffmanTree`] arena.
pub type NodeId = usize;

/// A node of the prefix tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Terminal node carrying one word.
    Leaf {
        /// The word this leaf encodes.
        word: Word,
        /// Occurrence count (zero in reconstructed trees).
        freq: u64,
    },
    /// Node with exactly two children.
    Internal {
        /// Sum of the children's frequencies.
        freq: u64,
        /// Child reached by a 0-bit.
        left: NodeId,
        /// Child reached by a 1-bit.
        right: NodeId,
    },
}

impl Node {
    /// Frequency of this node.
    pub fn freq(&self) -> u64 {
        match self {
            Node::Leaf { freq, .. } | Node::Internal { freq, .. } => *freq,
        }
    }

    /// Check if this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}

/// An immutable binary prefix tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl HuffmanTree {
    /// Build an optimal prefix tree from word frequencies.
    ///
    /// A table with one entry yields a single leaf and no internal nodes.
    pub fn build(table: &FrequencyTable) -> Result<Self> {
        if table.is_empty() {
            return Err(WordHuffError::EmptyInput);
        }

        let mut leaves: Vec<(&Word, u64)> = table.iter().map(|(w, &f)| (w, f)).collect();
        leaves.sort_unstable_by(|a, b| a.0.cmp(b.0));

        // Arena index doubles as the tie-break rank
        let mut nodes = Vec::with_capacity(leaves.len() * 2 - 1);
        let mut heap = BinaryHeap::with_capacity(leaves.len());
        for (word, freq) in leaves {
            heap.push(Reverse((freq, nodes.len())));
            nodes.push(Node::Leaf {
                word: word.clone(),
                freq,
            });
        }

        let root = loop {
            let Reverse((first_freq, first)) = heap.pop().ok_or(WordHuffError::EmptyInput)?;
            let Some(Reverse((second_freq, second))) = heap.pop() else {
                break first;
            };

            let freq = first_freq + second_freq;
            heap.push(Reverse((freq, nodes.len())));
            nodes.push(Node::Internal {
                freq,
                left: first,
                right: second,
            });
        };

        let tree = Self { nodes, root };
        log::debug!(
            "built tree: {} leaves, {} nodes, depth {}",
            tree.leaf_count(),
            tree.nodes.len(),
            tree.depth()
        );
        Ok(tree)
    }

    /// Assemble a tree from an arena; `root` must index into `nodes`.
    pub(crate) fn from_nodes(nodes: Vec<Node>, root: NodeId) -> Self {
        debug_assert!(root < nodes.len());
        Self { nodes, root }
    }

    /// The root node's id.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Look up a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this tree.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// Follow the edge for `bit` from `id`; `None` at a leaf.
    #[inline]
    pub fn child(&self, id: NodeId, bit: bool) -> Option<NodeId> {
        match self.nodes[id] {
            Node::Internal { left, right, .. } => Some(if bit { right } else { left }),
            Node::Leaf { .. } => None,
        }
    }

    /// Total number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of leaves.
    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    /// Check if the tree is a lone leaf (one distinct word).
    pub fn is_single_leaf(&self) -> bool {
        self.nodes[self.root].is_leaf()
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack = vec![(self.root, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            match self.nodes[id] {
                Node::Leaf { .. } => max_depth = max_depth.max(depth),
                Node::Internal { left, right, .. } => {
                    stack.push((right, depth + 1));
                    stack.push((left, depth + 1));
                }
            }
        }
        max_depth
    }
}
