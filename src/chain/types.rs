//! Arena-backed linked chain types
//!
//! Nodes live in a flat `Vec` and refer to their successor by handle, so a
//! cycle is just two nodes sharing a successor rather than an ownership loop.

use serde::Serialize;

/// Stable handle of a node inside its [`Chain`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn handle(self) -> usize {
        self.0
    }
}

/// A single list cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub value: i64,
    pub next: Option<NodeId>,
}

/// A singly linked chain, possibly ending in a cycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chain {
    nodes: Vec<Node>,
    head: Option<NodeId>,
}

impl Chain {
    pub(crate) fn from_parts(nodes: Vec<Node>, head: Option<NodeId>) -> Self {
        Self { nodes, head }
    }

    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    /// Successor of `id`, or `None` at the tail of an acyclic chain
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0).and_then(|node| node.next)
    }

    pub fn value(&self, id: NodeId) -> Option<i64> {
        self.nodes.get(id.0).map(|node| node.value)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Build the node-to-position table for this chain
    pub fn index_table(&self) -> IndexTable {
        IndexTable::build(self)
    }
}

/// Maps node handles to their 0-based position in the original value sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexTable {
    positions: Vec<Option<usize>>,
    len: usize,
}

impl IndexTable {
    /// Walk forward from the head exactly `chain.len()` times.
    ///
    /// The walk length is bounded by the node count, so a cycle is never
    /// entered a second time.
    pub fn build(chain: &Chain) -> Self {
        let mut positions = vec![None; chain.len()];
        let mut current = chain.head();

        for index in 0..chain.len() {
            let Some(id) = current else { break };
            positions[id.0] = Some(index);
            current = chain.next(id);
        }

        Self {
            positions,
            len: chain.len(),
        }
    }

    pub fn index_of(&self, id: NodeId) -> Option<usize> {
        self.positions.get(id.0).copied().flatten()
    }

    /// The synthetic index of the null slot after the last real node
    pub fn past_the_end(&self) -> usize {
        self.len
    }

    /// Resolve an optional pointer, mapping null to [`Self::past_the_end`]
    pub fn resolve(&self, pointer: Option<NodeId>) -> Option<usize> {
        match pointer {
            Some(id) => self.index_of(id),
            None => Some(self.past_the_end()),
        }
    }
}
