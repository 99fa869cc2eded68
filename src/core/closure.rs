// transitive closures over the link sets
use std::collections::HashSet;

use crate::core::graph::ArgumentGraph;
use crate::core::links::LinkSet;
use crate::core::node::{Node, NodeRef};
use crate::core::types::NodeId;

impl ArgumentGraph {
    /// Every node reachable from `start` by repeatedly following `step`, in discovery order.
    ///
    /// Uses a visited set, so it terminates on cycles. `start` itself is included only if it
    /// lies on a cycle.
    pub(crate) fn reachable(&self, start: NodeId, step: fn(&Node) -> &LinkSet) -> Vec<NodeId> {
        let mut visited: HashSet<NodeId> = HashSet::new();
        let mut found = Vec::new();
        let mut stack: Vec<NodeId> = step(self.node_at(start)).iter().collect();
        stack.reverse();

        while let Some(id) = stack.pop() {
            if !visited.insert(id) {
                continue;
            }
            found.push(id);

            let next = step(self.node_at(id));
            stack.extend(next.iter().collect::<Vec<_>>().into_iter().rev());
        }

        found
    }
}

impl<'g> NodeRef<'g> {
    fn closure(&self, step: fn(&Node) -> &LinkSet) -> Vec<NodeRef<'g>> {
        let graph = self.graph();
        graph
            .reachable(self.id(), step)
            .into_iter()
            .map(|id| graph.node_ref(id))
            .collect()
    }

    /// Transitive closure over `parent_nodes`.
    pub fn ancestor_nodes(&self) -> Vec<NodeRef<'g>> {
        self.closure(|n| &n.parent_nodes)
    }

    /// Transitive closure over `child_nodes`.
    pub fn descendant_nodes(&self) -> Vec<NodeRef<'g>> {
        self.closure(|n| &n.child_nodes)
    }

    /// Every group above the node, directly or through other groups.
    pub fn super_group_nodes(&self) -> Vec<NodeRef<'g>> {
        self.closure(|n| &n.group_nodes)
    }

    /// Every member below the node, directly or through nested groups.
    pub fn sub_group_member_nodes(&self) -> Vec<NodeRef<'g>> {
        self.closure(|n| &n.group_member_nodes)
    }
}
