// derived link sets between nodes
use std::collections::HashSet;

use crate::core::types::NodeId;

/// Duplicate-free set of node ids that remembers insertion order.
///
/// Order matters for reproducibility: the resolver inserts links in row/declaration order, and
/// queries such as FAQ pairing pick the first entry.
#[derive(Debug, Clone, Default)]
pub struct LinkSet {
    order: Vec<NodeId>,
    members: HashSet<NodeId>,
}

impl LinkSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if `id` was already present.
    pub(crate) fn insert(&mut self, id: NodeId) -> bool {
        if !self.members.insert(id) {
            return false;
        }
        self.order.push(id);
        true
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.members.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn first(&self) -> Option<NodeId> {
        self.order.first().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.order.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_is_idempotent_and_keeps_first_order() {
        let mut set = LinkSet::new();
        assert!(set.insert(3));
        assert!(set.insert(1));
        assert!(!set.insert(3));

        assert_eq!(set.len(), 2);
        assert_eq!(set.first(), Some(3));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![3, 1]);
        assert!(set.contains(1));
        assert!(!set.contains(2));
    }
}
