// read-only views over a built graph
use std::collections::HashSet;

use crate::core::diagnostics::{Diagnostic, Diagnostics};
use crate::core::graph::ArgumentGraph;
use crate::core::node::{Node, NodeRef};
use crate::core::types::{Category, NodeId, Partition, Stance};

/// Pairs every FAQ answer (FAQ node declaring parents) with its question.
///
/// Answers whose parents all failed to resolve are skipped; answers with several resolved
/// parents are paired with the first one in resolution order. Both cases are reported.
pub(crate) fn pair_faq_nodes(
    nodes: &[Node],
    faq_ids: &[NodeId],
    diagnostics: &mut Diagnostics,
) -> Vec<(NodeId, NodeId)> {
    let mut pairs = Vec::new();

    for &answer_id in faq_ids {
        let answer = &nodes[answer_id as usize];
        if !answer.has_parent_labels() {
            continue;
        }

        let Some(question_id) = answer.parent_nodes.first() else {
            diagnostics.push(Diagnostic::FaqAnswerWithoutQuestion {
                label: answer.label().to_string(),
            });
            continue;
        };

        if answer.parent_nodes.len() > 1 {
            diagnostics.push(Diagnostic::FaqAnswerWithMultipleQuestions {
                label: answer.label().to_string(),
                questions: answer
                    .parent_nodes
                    .iter()
                    .map(|id| nodes[id as usize].label().to_string())
                    .collect(),
            });
        }

        pairs.push((question_id, answer_id));
    }

    pairs
}

impl ArgumentGraph {
    /// Looks a label up across all partitions.
    pub fn get_node_for_label(&self, label: &str) -> Option<NodeRef<'_>> {
        self.label_index.get(label).map(|&id| self.node_ref(id))
    }

    pub fn contains_label(&self, label: &str) -> bool {
        self.label_index.contains_key(label)
    }

    pub fn partition_of(&self, label: &str) -> Option<Partition> {
        self.label_index.get(label).map(|&id| self.partition_of[id as usize])
    }

    /// Direct children of the node with `label`.
    ///
    /// `None` both for an unknown label and for a node without children; use
    /// `get_node_for_label` to tell the two apart.
    pub fn get_counter_args(&self, label: &str) -> Option<Vec<NodeRef<'_>>> {
        let node = self.get_node_for_label(label)?;
        if !node.has_child_nodes() {
            return None;
        }
        Some(node.child_nodes().collect())
    }

    fn refs<I>(&self, ids: I) -> impl Iterator<Item = NodeRef<'_>>
    where
        I: IntoIterator<Item = NodeId>,
    {
        ids.into_iter().map(move |id| self.node_ref(id))
    }

    fn select(&self, partition: Partition, keep: impl Fn(&Node) -> bool) -> Vec<NodeRef<'_>> {
        self.refs(self.partition_ids(partition).iter().copied())
            .filter(|n| keep(n.node()))
            .collect()
    }

    fn select_all(&self, keep: impl Fn(&Node) -> bool) -> Vec<NodeRef<'_>> {
        self.refs(self.all_ids()).filter(|n| keep(n.node())).collect()
    }

    pub fn partition(&self, partition: Partition) -> Vec<NodeRef<'_>> {
        self.select(partition, |_| true)
    }

    /// Every node: partitions in collection order, rows in insertion order.
    pub fn all_nodes(&self) -> Vec<NodeRef<'_>> {
        self.select_all(|_| true)
    }

    pub fn introduction_nodes(&self) -> Vec<NodeRef<'_>> {
        self.partition(Partition::Introduction)
    }

    pub fn transition_nodes(&self) -> Vec<NodeRef<'_>> {
        self.partition(Partition::Transition)
    }

    pub fn z_arguments_nodes(&self) -> Vec<NodeRef<'_>> {
        self.partition(Partition::ZArgument)
    }

    pub fn group_nodes(&self) -> Vec<NodeRef<'_>> {
        self.partition(Partition::Group)
    }

    pub fn nz_arguments_nodes(&self) -> Vec<NodeRef<'_>> {
        self.partition(Partition::NzArgument)
    }

    pub fn faq_nodes(&self) -> Vec<NodeRef<'_>> {
        self.partition(Partition::Faq)
    }

    /// z-argument partition followed by nz-argument partition.
    pub fn arguments_nodes(&self) -> Vec<NodeRef<'_>> {
        let mut nodes = self.z_arguments_nodes();
        nodes.extend(self.nz_arguments_nodes());
        nodes
    }

    pub fn nz_arguments_first_level_nodes(&self) -> Vec<NodeRef<'_>> {
        self.select(Partition::NzArgument, Node::is_first_level)
    }

    /// Arguments a user can bring up without context: all z-arguments plus first-level
    /// nz-arguments.
    pub fn user_arguments_nodes(&self) -> Vec<NodeRef<'_>> {
        let mut nodes = self.z_arguments_nodes();
        nodes.extend(self.nz_arguments_first_level_nodes());
        nodes
    }

    /// User arguments plus FAQ questions.
    pub fn user_intent_nodes(&self) -> Vec<NodeRef<'_>> {
        let mut nodes = self.user_arguments_nodes();
        nodes.extend(self.faq_question_nodes());
        nodes
    }

    /// FAQ nodes without declared parents.
    pub fn faq_question_nodes(&self) -> Vec<NodeRef<'_>> {
        self.select(Partition::Faq, Node::is_first_level)
    }

    /// FAQ nodes declaring at least one parent.
    pub fn faq_answer_nodes(&self) -> Vec<NodeRef<'_>> {
        self.select(Partition::Faq, Node::has_parent_labels)
    }

    /// `(question, answer)` pairs, computed once at build time.
    pub fn faq_node_pairs(&self) -> Vec<(NodeRef<'_>, NodeRef<'_>)> {
        self.faq_pairs
            .iter()
            .map(|&(q, a)| (self.node_ref(q), self.node_ref(a)))
            .collect()
    }

    /// `(question text, answer text)` for every FAQ pair.
    pub fn get_faq_list(&self) -> Vec<(&str, &str)> {
        self.faq_pairs
            .iter()
            .map(|&(q, a)| (self.node_at(q).full_text(), self.node_at(a).full_text()))
            .collect()
    }

    /// Introduction nodes assigned to a group whose label mentions "paraphrase".
    pub fn paraphrase_introduction_nodes(&self) -> Vec<NodeRef<'_>> {
        self.select(Partition::Introduction, |n| {
            n.groups().iter().any(|g| g.contains("paraphrase"))
        })
    }

    /// Nodes of any partition with category Z.
    pub fn z_nodes(&self) -> Vec<NodeRef<'_>> {
        self.select_all(|n| n.category() == Category::Z)
    }

    pub fn nz_nodes(&self) -> Vec<NodeRef<'_>> {
        self.select_all(|n| n.category() == Category::Nz)
    }

    pub fn group_nodes_with_category(&self, category: Category) -> Vec<NodeRef<'_>> {
        self.select(Partition::Group, |n| n.category() == category)
    }

    pub fn z_group_nodes(&self) -> Vec<NodeRef<'_>> {
        self.group_nodes_with_category(Category::Z)
    }

    pub fn nz_group_nodes(&self) -> Vec<NodeRef<'_>> {
        self.group_nodes_with_category(Category::Nz)
    }

    pub fn faq_group_nodes(&self) -> Vec<NodeRef<'_>> {
        self.group_nodes_with_category(Category::Faq)
    }

    pub fn first_level_z_nodes(&self) -> Vec<NodeRef<'_>> {
        self.select_all(|n| n.category() == Category::Z && n.is_first_level())
    }

    /// Z nodes with rating >= 0. A positive rating means the node can be uttered by the bot,
    /// zero means only the user can raise it without context.
    pub fn primary_z_nodes(&self) -> Vec<NodeRef<'_>> {
        self.select_all(|n| n.category() == Category::Z && n.rating() >= 0)
    }

    /// Number of first-level z nodes with the given stance.
    pub fn num_arguments(&self, stance: Stance) -> usize {
        self.first_level_z_nodes()
            .iter()
            .filter(|n| n.stance() == stance)
            .count()
    }

    pub fn get_num_arguments_pro(&self) -> usize {
        self.num_arguments(Stance::Pro)
    }

    pub fn get_num_arguments_con(&self) -> usize {
        self.num_arguments(Stance::Con)
    }

    /// Label set of any node listing.
    pub fn labels<'a>(nodes: impl IntoIterator<Item = NodeRef<'a>>) -> HashSet<&'a str> {
        nodes.into_iter().map(|n| n.node().label()).collect()
    }

    pub fn partition_labels(&self, partition: Partition) -> HashSet<&str> {
        Self::labels(self.partition(partition))
    }

    pub fn all_labels(&self) -> HashSet<&str> {
        self.label_index.keys().map(String::as_str).collect()
    }

    pub fn arguments_labels(&self) -> HashSet<&str> {
        Self::labels(self.arguments_nodes())
    }

    pub fn user_arguments_labels(&self) -> HashSet<&str> {
        Self::labels(self.user_arguments_nodes())
    }

    pub fn user_intent_labels(&self) -> HashSet<&str> {
        Self::labels(self.user_intent_nodes())
    }

    pub fn faq_question_labels(&self) -> HashSet<&str> {
        Self::labels(self.faq_question_nodes())
    }

    pub fn z_labels(&self) -> HashSet<&str> {
        Self::labels(self.z_nodes())
    }

    pub fn nz_labels(&self) -> HashSet<&str> {
        Self::labels(self.nz_nodes())
    }

    pub fn z_group_labels(&self) -> HashSet<&str> {
        Self::labels(self.z_group_nodes())
    }

    pub fn nz_group_labels(&self) -> HashSet<&str> {
        Self::labels(self.nz_group_nodes())
    }

    pub fn faq_group_labels(&self) -> HashSet<&str> {
        Self::labels(self.faq_group_nodes())
    }

    pub fn primary_z_labels(&self) -> HashSet<&str> {
        Self::labels(self.primary_z_nodes())
    }
}
