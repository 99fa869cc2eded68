// the built, read-only argument graph
use std::collections::HashMap;

use thiserror::Error;

use crate::core::diagnostics::Diagnostic;
use crate::core::node::{Node, NodeRef};
use crate::core::types::{NodeId, Partition, RelationKind};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("node in {partition} partition has an empty label")]
    EmptyLabel { partition: Partition },

    #[error("label {label} already used in {existing} partition, duplicate found in {duplicate} partition")]
    DuplicateLabel {
        label: String,
        existing: Partition,
        duplicate: Partition,
    },

    /// Asymmetric link after resolution. Only a resolver defect can produce this.
    #[error("{relation} link {node} -> {other} has no matching back-link")]
    InvariantViolation {
        relation: RelationKind,
        node: String,
        other: String,
    },

    #[error("node {node} is linked to itself through its {relation} links")]
    SelfLoop { relation: RelationKind, node: String },
}

/// Immutable graph of argument nodes. Owns every node; links between nodes are `NodeId`s into
/// the arena, so cycles are harmless.
///
/// Built through `GraphBuilder`; there is no way back to the mutable state.
#[derive(Debug)]
pub struct ArgumentGraph {
    pub(crate) nodes: Vec<Node>,
    pub(crate) partitions: [Vec<NodeId>; 6],
    pub(crate) partition_of: Vec<Partition>,
    pub(crate) label_index: HashMap<String, NodeId>,
    pub(crate) faq_pairs: Vec<(NodeId, NodeId)>,
    pub(crate) diagnostics: Vec<Diagnostic>,
}

impl ArgumentGraph {
    /// Caller guarantees `id` came from this graph.
    pub(crate) fn node_at(&self, id: NodeId) -> &Node {
        &self.nodes[id as usize]
    }

    pub(crate) fn node_ref(&self, id: NodeId) -> NodeRef<'_> {
        NodeRef::new(self, id)
    }

    /// Checked lookup by id.
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_>> {
        ((id as usize) < self.nodes.len()).then(|| self.node_ref(id))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Non-fatal findings of the build, in the order they were raised.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub(crate) fn partition_ids(&self, partition: Partition) -> &[NodeId] {
        &self.partitions[partition.index()]
    }

    /// Ids of every node in collection order (partition order, then insertion order).
    pub(crate) fn all_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.partitions.iter().flat_map(|ids| ids.iter().copied())
    }
}
