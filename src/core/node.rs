// graph nodes: construction input, stored record, graph-bound handle
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;

use crate::core::diagnostics::{Diagnostic, Diagnostics};
use crate::core::graph::ArgumentGraph;
use crate::core::links::LinkSet;
use crate::core::types::{Category, NodeId, RelationKind, Stance};

/// Everything needed to construct a `Node`. Reference fields hold already split labels.
#[derive(Debug, Clone)]
pub struct NodeSpec {
    pub label: String,
    pub full_text: String,
    pub label_name: String,
    pub paraphrase: String,
    pub summary: String,
    pub rating: i64,
    pub reaction_to_argument: i64,
    pub category: Category,
    pub stance: Stance,
    pub samples: Vec<String>,
    pub parents: Vec<String>,
    pub groups: Vec<String>,
    pub similars: Vec<String>,
}

impl Default for NodeSpec {
    fn default() -> Self {
        Self {
            label: String::new(),
            full_text: String::new(),
            label_name: String::new(),
            paraphrase: String::new(),
            summary: String::new(),
            rating: -1,
            reaction_to_argument: -1,
            category: Category::Other,
            stance: Stance::Other,
            samples: Vec::new(),
            parents: Vec::new(),
            groups: Vec::new(),
            similars: Vec::new(),
        }
    }
}

impl NodeSpec {
    pub fn new(label: impl Into<String>, full_text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            full_text: full_text.into(),
            ..Self::default()
        }
    }

    pub fn with_parents<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parents = labels.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_groups<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups = labels.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_similars<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.similars = labels.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_samples<I, S>(mut self, samples: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.samples = samples.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_label_name(mut self, label_name: impl Into<String>) -> Self {
        self.label_name = label_name.into();
        self
    }

    pub fn with_paraphrase(mut self, paraphrase: impl Into<String>) -> Self {
        self.paraphrase = paraphrase.into();
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn with_rating(mut self, rating: i64) -> Self {
        self.rating = rating;
        self
    }

    pub fn with_reaction_to_argument(mut self, reaction: i64) -> Self {
        self.reaction_to_argument = reaction;
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn with_stance(mut self, stance: Stance) -> Self {
        self.stance = stance;
        self
    }
}

/// A content node. Raw label lists are fixed at construction; the link sets are filled once by
/// the resolver and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Node {
    label: String,
    label_name: String,
    full_text: String,
    paraphrase: String,
    summary: String,
    rating: i64,
    reaction_to_argument: i64,
    category: Category,
    stance: Stance,
    samples: Vec<String>,
    parents: Vec<String>,
    groups: Vec<String>,
    similars: Vec<String>,

    pub(crate) parent_nodes: LinkSet,
    pub(crate) child_nodes: LinkSet,
    pub(crate) group_nodes: LinkSet,
    pub(crate) group_member_nodes: LinkSet,
    pub(crate) similar_nodes: LinkSet,
}

impl Node {
    /// Normalizes `spec` and strips self-references, reporting each one.
    pub(crate) fn from_spec(spec: NodeSpec, diagnostics: &mut Diagnostics) -> Node {
        let label = spec.label.trim().to_string();
        let label_name = match spec.label_name.trim() {
            "" => label.clone(),
            name => name.to_string(),
        };

        let mut node = Node {
            parents: normalize_labels(spec.parents),
            groups: normalize_labels(spec.groups),
            similars: normalize_labels(spec.similars),
            samples: dedup_keep_order(spec.samples),
            label,
            label_name,
            full_text: spec.full_text.trim().to_string(),
            paraphrase: spec.paraphrase.trim().to_string(),
            summary: spec.summary.trim().to_string(),
            rating: spec.rating,
            reaction_to_argument: spec.reaction_to_argument,
            category: spec.category,
            stance: spec.stance,
            parent_nodes: LinkSet::new(),
            child_nodes: LinkSet::new(),
            group_nodes: LinkSet::new(),
            group_member_nodes: LinkSet::new(),
            similar_nodes: LinkSet::new(),
        };

        for relation in RelationKind::ALL {
            let label = node.label.clone();
            let labels = node.labels_mut(relation);
            let before = labels.len();
            labels.retain(|l| *l != label);
            if labels.len() != before {
                diagnostics.push(Diagnostic::SelfReference { label, relation });
            }
        }

        node
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn label_name(&self) -> &str {
        &self.label_name
    }

    pub fn full_text(&self) -> &str {
        &self.full_text
    }

    pub fn paraphrase(&self) -> &str {
        &self.paraphrase
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn rating(&self) -> i64 {
        self.rating
    }

    pub fn reaction_to_argument(&self) -> i64 {
        self.reaction_to_argument
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn stance(&self) -> Stance {
        self.stance
    }

    pub fn samples(&self) -> &[String] {
        &self.samples
    }

    pub fn parents(&self) -> &[String] {
        &self.parents
    }

    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    pub fn similars(&self) -> &[String] {
        &self.similars
    }

    /// Raw labels declared for `relation`.
    pub fn labels(&self, relation: RelationKind) -> &[String] {
        match relation {
            RelationKind::Parent => &self.parents,
            RelationKind::Group => &self.groups,
            RelationKind::Similar => &self.similars,
        }
    }

    fn labels_mut(&mut self, relation: RelationKind) -> &mut Vec<String> {
        match relation {
            RelationKind::Parent => &mut self.parents,
            RelationKind::Group => &mut self.groups,
            RelationKind::Similar => &mut self.similars,
        }
    }

    /// Links pointing up the relation: parents, groups, similars.
    pub fn outgoing(&self, relation: RelationKind) -> &LinkSet {
        match relation {
            RelationKind::Parent => &self.parent_nodes,
            RelationKind::Group => &self.group_nodes,
            RelationKind::Similar => &self.similar_nodes,
        }
    }

    /// Back-links: children, group members, similars.
    pub fn incoming(&self, relation: RelationKind) -> &LinkSet {
        match relation {
            RelationKind::Parent => &self.child_nodes,
            RelationKind::Group => &self.group_member_nodes,
            RelationKind::Similar => &self.similar_nodes,
        }
    }

    pub(crate) fn outgoing_mut(&mut self, relation: RelationKind) -> &mut LinkSet {
        match relation {
            RelationKind::Parent => &mut self.parent_nodes,
            RelationKind::Group => &mut self.group_nodes,
            RelationKind::Similar => &mut self.similar_nodes,
        }
    }

    pub(crate) fn incoming_mut(&mut self, relation: RelationKind) -> &mut LinkSet {
        match relation {
            RelationKind::Parent => &mut self.child_nodes,
            RelationKind::Group => &mut self.group_member_nodes,
            RelationKind::Similar => &mut self.similar_nodes,
        }
    }

    pub(crate) fn add_samples(&mut self, samples: &[String]) {
        for sample in samples {
            if !self.samples.contains(sample) {
                self.samples.push(sample.clone());
            }
        }
    }

    pub fn has_parent_labels(&self) -> bool {
        !self.parents.is_empty()
    }

    pub fn has_group_labels(&self) -> bool {
        !self.groups.is_empty()
    }

    pub fn has_similar_labels(&self) -> bool {
        !self.similars.is_empty()
    }

    pub fn has_parent_nodes(&self) -> bool {
        !self.parent_nodes.is_empty()
    }

    pub fn has_child_nodes(&self) -> bool {
        !self.child_nodes.is_empty()
    }

    /// Children only exist as derived links, so this matches `has_child_nodes`.
    pub fn has_child_labels(&self) -> bool {
        self.has_child_nodes()
    }

    pub fn has_group_nodes(&self) -> bool {
        !self.group_nodes.is_empty()
    }

    pub fn has_group_member_nodes(&self) -> bool {
        !self.group_member_nodes.is_empty()
    }

    pub fn has_group_member_labels(&self) -> bool {
        self.has_group_member_nodes()
    }

    /// A first-level node declares no parent labels.
    pub fn is_first_level(&self) -> bool {
        !self.has_parent_labels()
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.label.hash(state);
    }
}

fn normalize_labels(labels: Vec<String>) -> Vec<String> {
    let trimmed = labels
        .into_iter()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect();
    dedup_keep_order(trimmed)
}

fn dedup_keep_order(values: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        if !out.contains(&value) {
            out.push(value);
        }
    }
    out
}

/// A node borrowed together with the graph that owns it, so links can be followed.
#[derive(Clone, Copy)]
pub struct NodeRef<'g> {
    graph: &'g ArgumentGraph,
    id: NodeId,
}

impl<'g> NodeRef<'g> {
    pub(crate) fn new(graph: &'g ArgumentGraph, id: NodeId) -> Self {
        Self { graph, id }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub(crate) fn graph(&self) -> &'g ArgumentGraph {
        self.graph
    }

    pub fn node(&self) -> &'g Node {
        self.graph.node_at(self.id)
    }

    fn follow(&self, links: &'g LinkSet) -> impl Iterator<Item = NodeRef<'g>> + use<'g> {
        let graph = self.graph;
        links.iter().map(move |id| NodeRef::new(graph, id))
    }

    pub fn parent_nodes(&self) -> impl Iterator<Item = NodeRef<'g>> + use<'g> {
        self.follow(&self.node().parent_nodes)
    }

    pub fn child_nodes(&self) -> impl Iterator<Item = NodeRef<'g>> + use<'g> {
        self.follow(&self.node().child_nodes)
    }

    pub fn group_nodes(&self) -> impl Iterator<Item = NodeRef<'g>> + use<'g> {
        self.follow(&self.node().group_nodes)
    }

    pub fn group_member_nodes(&self) -> impl Iterator<Item = NodeRef<'g>> + use<'g> {
        self.follow(&self.node().group_member_nodes)
    }

    pub fn similar_nodes(&self) -> impl Iterator<Item = NodeRef<'g>> + use<'g> {
        self.follow(&self.node().similar_nodes)
    }

    /// Labels of the resolved children.
    pub fn children(&self) -> Vec<&'g str> {
        self.child_nodes().map(|n| n.node().label()).collect()
    }

    /// Labels of the resolved group members.
    pub fn group_members(&self) -> Vec<&'g str> {
        self.group_member_nodes().map(|n| n.node().label()).collect()
    }
}

impl Deref for NodeRef<'_> {
    type Target = Node;

    fn deref(&self) -> &Node {
        self.node()
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.node().label() == other.node().label()
    }
}

impl Eq for NodeRef<'_> {}

impl Hash for NodeRef<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.node().label().hash(state);
    }
}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("label", &self.node().label())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mk_node(spec: NodeSpec) -> (Node, Vec<Diagnostic>) {
        let mut diagnostics = Diagnostics::default();
        let node = Node::from_spec(spec, &mut diagnostics);
        (node, diagnostics.into_vec())
    }

    #[test]
    fn construction_trims_and_defaults_label_name() {
        let (node, diagnostics) = mk_node(
            NodeSpec::new("  Z.P1 ", " text ").with_parents([" Z.K1", "Z.K1 ", "", "Z.K2"]),
        );

        assert_eq!(node.label(), "Z.P1");
        assert_eq!(node.label_name(), "Z.P1");
        assert_eq!(node.full_text(), "text");
        assert_eq!(node.parents(), ["Z.K1", "Z.K2"]);
        assert_eq!(node.rating(), -1);
        assert_eq!(node.reaction_to_argument(), -1);
        assert_eq!(node.category(), Category::Other);
        assert_eq!(node.stance(), Stance::Other);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn self_references_are_removed_with_a_diagnostic() {
        let (node, diagnostics) = mk_node(
            NodeSpec::new("G.1", "group")
                .with_parents(["G.1", "G.0"])
                .with_groups(["G.1"])
                .with_similars(["G.2"]),
        );

        assert_eq!(node.parents(), ["G.0"]);
        assert!(node.groups().is_empty());
        assert!(!node.has_group_labels());
        assert_eq!(node.similars(), ["G.2"]);
        assert_eq!(
            diagnostics,
            vec![
                Diagnostic::SelfReference { label: "G.1".into(), relation: RelationKind::Parent },
                Diagnostic::SelfReference { label: "G.1".into(), relation: RelationKind::Group },
            ]
        );
    }

    #[test]
    fn equality_is_by_label_only() {
        let (a, _) = mk_node(NodeSpec::new("Z.P1", "one").with_rating(3));
        let (b, _) = mk_node(NodeSpec::new("Z.P1", "two").with_stance(Stance::Con));
        let (c, _) = mk_node(NodeSpec::new("Z.P2", "one"));

        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: std::collections::HashSet<Node> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn first_level_means_no_declared_parent() {
        let (root, _) = mk_node(NodeSpec::new("Z.P1", "root"));
        let (child, _) = mk_node(NodeSpec::new("Z.P1-K1", "child").with_parents(["Z.P1"]));

        assert!(root.is_first_level());
        assert!(!child.is_first_level());
        assert!(child.has_parent_labels());
        assert!(!child.has_parent_nodes());
    }
}
