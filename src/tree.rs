use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
};

use crate::{errors::EncodeError, freq::FrequencyTable};

/// A node of the prefix-code tree.
///
/// The tree is strict: every internal node has exactly two children, and
/// children are exclusively owned. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf {
        symbol: char,
        weight: usize,
    },
    Internal {
        weight: usize,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn weight(&self) -> usize {
        match self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => *weight,
        }
    }

    fn merge(left: Node, right: Node) -> Node {
        Node::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

/// A Huffman tree: the prefix-code tree with minimal weighted leaf depth for
/// a given frequency distribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: Node,
}

impl HuffmanTree {
    /// Build the tree for `table` by repeatedly merging the two lightest
    /// nodes in the queue until one root remains.
    ///
    /// Equal weights tie-break on insertion order: leaves are numbered in
    /// ascending symbol order, merged nodes after that in creation order,
    /// and the lower number wins. The first of the two extracted nodes
    /// becomes the left child. This pins down the code assignment, so
    /// rebuilding from the same table always gives an identical tree.
    pub fn build(table: &FrequencyTable) -> Result<Self, EncodeError> {
        if table.is_empty() {
            return Err(EncodeError::EmptyInput);
        }

        let mut next_seq = 0;
        let mut queue = BinaryHeap::with_capacity(table.len());
        for (&symbol, &weight) in table {
            queue.push(Reverse(QueueEntry {
                weight,
                seq: next_seq,
                node: Node::Leaf { symbol, weight },
            }));
            next_seq += 1;
        }

        // A table with a single entry never enters the loop; the lone leaf
        // is its own root.
        while queue.len() > 1 {
            if let (Some(Reverse(first)), Some(Reverse(second))) = (queue.pop(), queue.pop()) {
                let node = Node::merge(first.node, second.node);
                queue.push(Reverse(QueueEntry {
                    weight: node.weight(),
                    seq: next_seq,
                    node,
                }));
                next_seq += 1;
            }
        }

        match queue.pop() {
            Some(Reverse(entry)) => Ok(Self { root: entry.node }),
            None => Err(EncodeError::EmptyInput),
        }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }
}

/// Queue entry ordered by `(weight, seq)`, wrapped in `Reverse` to turn the
/// std max-heap into a min-heap. `seq` is unique per entry, so the ordering
/// is total and ties on weight are never left to chance.
struct QueueEntry {
    weight: usize,
    seq: usize,
    node: Node,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        (self.weight, self.seq) == (other.weight, other.seq)
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.weight, self.seq).cmp(&(other.weight, other.seq))
    }
}
