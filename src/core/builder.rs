// two-phase construction: collect nodes, then resolve + check into an ArgumentGraph
use std::collections::HashMap;

use tracing::{debug, info};

use crate::core::check::check_invariants;
use crate::core::config::{BuildConfig, DuplicateLabelPolicy};
use crate::core::diagnostics::{Diagnostic, Diagnostics};
use crate::core::graph::{ArgumentGraph, GraphError};
use crate::core::node::{Node, NodeSpec};
use crate::core::query::pair_faq_nodes;
use crate::core::types::{NodeId, Partition};

/// The graph while it is still under construction. `build` consumes it.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    pub(crate) config: BuildConfig,
    pub(crate) nodes: Vec<Node>,
    pub(crate) partitions: [Vec<NodeId>; 6],
    pub(crate) partition_of: Vec<Partition>,
    pub(crate) label_index: HashMap<String, NodeId>,
    pub(crate) samples: HashMap<String, Vec<String>>,
    pub(crate) diagnostics: Diagnostics,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: BuildConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Adds one node to `partition`.
    ///
    /// Returns `Ok(None)` when the label is already taken and the policy is `KeepFirst`.
    pub fn add_node(&mut self, partition: Partition, spec: NodeSpec) -> Result<Option<NodeId>, GraphError> {
        let node = Node::from_spec(spec, &mut self.diagnostics);
        if node.label().is_empty() {
            return Err(GraphError::EmptyLabel { partition });
        }

        if let Some(&existing) = self.label_index.get(node.label()) {
            let label = node.label().to_string();
            return match self.config.duplicate_labels {
                DuplicateLabelPolicy::Reject => Err(GraphError::DuplicateLabel {
                    label,
                    existing: self.partition_of[existing as usize],
                    duplicate: partition,
                }),
                DuplicateLabelPolicy::KeepFirst => {
                    self.diagnostics.push(Diagnostic::DuplicateLabel { label, partition });
                    Ok(None)
                }
            };
        }

        let id = self.nodes.len() as NodeId;
        self.label_index.insert(node.label().to_string(), id);
        self.partitions[partition.index()].push(id);
        self.partition_of.push(partition);
        self.nodes.push(node);
        Ok(Some(id))
    }

    /// Adds every spec to `partition` in order. Returns how many nodes were kept.
    pub fn add_nodes<I>(&mut self, partition: Partition, specs: I) -> Result<usize, GraphError>
    where
        I: IntoIterator<Item = NodeSpec>,
    {
        let mut added = 0;
        for spec in specs {
            if self.add_node(partition, spec)?.is_some() {
                added += 1;
            }
        }
        debug!(partition = %partition, added, "nodes added");
        Ok(added)
    }

    /// Queues example utterances keyed by node label. Attached during `build`; labels without a
    /// node are ignored.
    pub fn add_samples<I, L, T>(&mut self, samples: I)
    where
        I: IntoIterator<Item = (L, T)>,
        L: Into<String>,
        T: Into<String>,
    {
        for (label, text) in samples {
            let label = label.into().trim().to_string();
            self.samples.entry(label).or_default().push(text.into());
        }
    }

    fn attach_samples(&mut self) {
        for (label, texts) in std::mem::take(&mut self.samples) {
            match self.label_index.get(&label) {
                Some(&id) => self.nodes[id as usize].add_samples(&texts),
                None => debug!(label = %label, count = texts.len(), "samples for unknown label ignored"),
            }
        }
    }

    /// Resolves all references, checks the link invariants and freezes the graph.
    ///
    /// Fails only on an invariant violation, which means the resolver is broken.
    pub fn build(mut self) -> Result<ArgumentGraph, GraphError> {
        self.attach_samples();

        let links = self.resolve_references();
        check_invariants(&self.nodes)?;

        let faq_pairs = pair_faq_nodes(
            &self.nodes,
            &self.partitions[Partition::Faq.index()],
            &mut self.diagnostics,
        );

        info!(
            nodes = self.nodes.len(),
            links,
            faq_pairs = faq_pairs.len(),
            diagnostics = self.diagnostics.len(),
            "argument graph built"
        );

        Ok(ArgumentGraph {
            nodes: self.nodes,
            partitions: self.partitions,
            partition_of: self.partition_of,
            label_index: self.label_index,
            faq_pairs,
            diagnostics: self.diagnostics.into_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::RelationKind;

    #[test]
    fn duplicate_labels_are_rejected_by_default() {
        let mut b = GraphBuilder::new();
        b.add_node(Partition::ZArgument, NodeSpec::new("Z.P1", "a")).unwrap();

        let err = b.add_node(Partition::Faq, NodeSpec::new(" Z.P1 ", "b")).unwrap_err();
        assert_eq!(
            err,
            GraphError::DuplicateLabel {
                label: "Z.P1".into(),
                existing: Partition::ZArgument,
                duplicate: Partition::Faq,
            }
        );
    }

    #[test]
    fn keep_first_drops_later_duplicates_with_a_diagnostic() {
        let config = BuildConfig {
            duplicate_labels: DuplicateLabelPolicy::KeepFirst,
            ..BuildConfig::default()
        };
        let mut b = GraphBuilder::with_config(config);
        let first = b.add_node(Partition::ZArgument, NodeSpec::new("Z.P1", "first")).unwrap();
        let second = b.add_node(Partition::ZArgument, NodeSpec::new("Z.P1", "second")).unwrap();

        assert_eq!(first, Some(0));
        assert_eq!(second, None);

        let g = b.build().unwrap();
        assert_eq!(g.len(), 1);
        assert_eq!(g.get_node_for_label("Z.P1").unwrap().full_text(), "first");
        assert_eq!(
            g.diagnostics(),
            [Diagnostic::DuplicateLabel { label: "Z.P1".into(), partition: Partition::ZArgument }]
        );
    }

    #[test]
    fn blank_label_is_an_error() {
        let mut b = GraphBuilder::new();
        let err = b.add_node(Partition::Group, NodeSpec::new("   ", "text")).unwrap_err();
        assert_eq!(err, GraphError::EmptyLabel { partition: Partition::Group });
    }

    #[test]
    fn samples_attach_by_label_and_unknown_labels_are_ignored() {
        let mut b = GraphBuilder::new();
        b.add_node(Partition::Faq, NodeSpec::new("FAQ.Q1", "question").with_samples(["how?"]))
            .unwrap();
        b.add_samples([("FAQ.Q1", "how?"), ("FAQ.Q1 ", "why?"), ("FAQ.Q9", "lost")]);

        let g = b.build().unwrap();
        let q = g.get_node_for_label("FAQ.Q1").unwrap();
        assert_eq!(q.samples(), ["how?", "why?"]);
        assert!(g.get_node_for_label("FAQ.Q9").is_none());
    }

    #[test]
    fn self_reference_diagnostics_survive_into_the_graph() {
        let mut b = GraphBuilder::new();
        b.add_node(Partition::Group, NodeSpec::new("G.1", "group").with_groups(["G.1"]))
            .unwrap();

        let g = b.build().unwrap();
        assert_eq!(
            g.diagnostics(),
            [Diagnostic::SelfReference { label: "G.1".into(), relation: RelationKind::Group }]
        );
        assert!(g.get_node_for_label("G.1").unwrap().groups().is_empty());
    }
}
