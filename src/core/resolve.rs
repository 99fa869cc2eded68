// label -> node reference resolution
use tracing::{debug, trace};

use crate::core::builder::GraphBuilder;
use crate::core::diagnostics::Diagnostic;
use crate::core::types::{NodeId, Partition, RelationKind};

impl GraphBuilder {
    /// Runs the parent, group and similar passes. Returns the number of links created.
    ///
    /// Requires every node to be added and indexed. Each pass only touches the link sets of its
    /// own relation family.
    pub(crate) fn resolve_references(&mut self) -> usize {
        RelationKind::ALL
            .into_iter()
            .map(|relation| self.resolve_relation(relation))
            .sum()
    }

    /// Collection order: partitions in `Partition::ALL` order, rows in insertion order.
    fn ordered_ids(&self) -> Vec<NodeId> {
        Partition::ALL
            .iter()
            .flat_map(|p| self.partitions[p.index()].iter().copied())
            .collect()
    }

    /// One pass over `relation`:
    /// 1) read the node's declared labels
    /// 2) look each one up in the label index, skipping dangling labels
    /// 3) link both sides: node.outgoing += target, target.incoming += node
    ///
    /// For `Similar` outgoing and incoming are the same set, so the link is symmetric no matter
    /// which side declared it.
    pub(crate) fn resolve_relation(&mut self, relation: RelationKind) -> usize {
        let mut created = 0;

        for id in self.ordered_ids() {
            // copy the targets out first; both endpoints get mutated below
            let targets: Vec<NodeId> = {
                let node = &self.nodes[id as usize];
                let mut targets = Vec::with_capacity(node.labels(relation).len());
                for label in node.labels(relation) {
                    match self.label_index.get(label) {
                        Some(&target) if target != id => targets.push(target),
                        Some(_) => {}
                        None => {
                            trace!(node = node.label(), %relation, target = %label, "dangling reference");
                            if self.config.report_dangling_references {
                                self.diagnostics.push(Diagnostic::DanglingReference {
                                    label: node.label().to_string(),
                                    relation,
                                    target: label.clone(),
                                });
                            }
                        }
                    }
                }
                targets
            };

            for target in targets {
                let forward = self.nodes[id as usize].outgoing_mut(relation).insert(target);
                let backward = self.nodes[target as usize].incoming_mut(relation).insert(id);
                if forward || backward {
                    created += 1;
                }
            }
        }

        debug!(%relation, created, "references resolved");
        created
    }
}
