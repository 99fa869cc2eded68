use std::collections::HashSet;

use argument_graph::{
    ArgumentGraph, Category, Diagnostic, GraphBuilder, NodeRef, NodeSpec, Partition, RelationKind, Stance,
};

fn labels(nodes: Vec<NodeRef<'_>>) -> HashSet<String> {
    nodes.iter().map(|n| n.label().to_string()).collect()
}

fn set(items: &[&str]) -> HashSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn parent_cycle_closures_terminate() {
    let mut b = GraphBuilder::new();
    b.add_nodes(
        Partition::NzArgument,
        vec![
            NodeSpec::new("A", "a").with_parents(["B"]),
            NodeSpec::new("B", "b").with_parents(["A"]),
        ],
    )
    .unwrap();
    let g = b.build().unwrap();

    let a = g.get_node_for_label("A").unwrap();
    let b = g.get_node_for_label("B").unwrap();
    assert_eq!(labels(a.ancestor_nodes()), set(&["A", "B"]));
    assert_eq!(labels(b.ancestor_nodes()), set(&["A", "B"]));
}

#[test]
fn self_parent_is_removed_from_raw_and_resolved_sets() {
    let mut b = GraphBuilder::new();
    b.add_node(Partition::ZArgument, NodeSpec::new("Z.P1", "self").with_parents(["Z.P1"]))
        .unwrap();
    let g = b.build().unwrap();

    let node = g.get_node_for_label("Z.P1").unwrap();
    assert!(node.parents().is_empty());
    assert_eq!(node.parent_nodes().count(), 0);
    assert!(node.is_first_level());
    assert_eq!(
        g.diagnostics(),
        [Diagnostic::SelfReference { label: "Z.P1".into(), relation: RelationKind::Parent }]
    );
}

#[test]
fn dangling_parent_resolves_to_nothing() {
    let mut b = GraphBuilder::new();
    b.add_node(
        Partition::ZArgument,
        NodeSpec::new("Z.P1", "x").with_parents(["NO.SUCH.LABEL"]),
    )
    .unwrap();
    let g = b.build().unwrap();

    let node = g.get_node_for_label("Z.P1").unwrap();
    assert_eq!(node.parent_nodes().count(), 0);
    assert!(!node.has_parent_nodes());
    // still declared, so not first-level
    assert!(!node.is_first_level());
    assert!(g.diagnostics().is_empty());
}

#[test]
fn faq_question_answer_pairing() {
    let mut b = GraphBuilder::new();
    b.add_nodes(
        Partition::Faq,
        vec![
            NodeSpec::new("FAQ.Q1", "Q"),
            NodeSpec::new("FAQ.A1", "R").with_parents(["FAQ.Q1"]),
            NodeSpec::new("FAQ.A2", "no parents"),
        ],
    )
    .unwrap();
    let g = b.build().unwrap();

    let pairs: Vec<(String, String)> = g
        .faq_node_pairs()
        .into_iter()
        .map(|(q, r)| (q.label().to_string(), r.label().to_string()))
        .collect();
    assert_eq!(pairs, vec![("FAQ.Q1".to_string(), "FAQ.A1".to_string())]);
}

#[test]
fn stance_counts_over_first_level_z_nodes() {
    let mk = |label: &str, stance| {
        NodeSpec::new(label, "text")
            .with_category(Category::Z)
            .with_stance(stance)
    };

    let mut b = GraphBuilder::new();
    b.add_nodes(
        Partition::ZArgument,
        vec![
            mk("Z.P1", Stance::Pro),
            mk("Z.P2", Stance::Pro),
            mk("Z.K1", Stance::Con),
            mk("Z.K1-P1", Stance::Pro).with_parents(["Z.K1"]),
        ],
    )
    .unwrap();
    let g = b.build().unwrap();

    assert_eq!(g.get_num_arguments_pro(), 2);
    assert_eq!(g.get_num_arguments_con(), 1);
}

#[test]
fn counter_args_equal_child_nodes() {
    let mut b = GraphBuilder::new();
    b.add_nodes(
        Partition::ZArgument,
        vec![
            NodeSpec::new("Z.P1", "claim"),
            NodeSpec::new("Z.P1-K1", "counter one").with_parents(["Z.P1"]),
            NodeSpec::new("Z.P1-K2", "counter two").with_parents(["Z.P1"]),
        ],
    )
    .unwrap();
    let g = b.build().unwrap();

    assert!(g.get_counter_args("UNKNOWN").is_none());
    assert!(g.get_counter_args("Z.P1-K1").is_none());

    let counters = g.get_counter_args("Z.P1").unwrap();
    let children: Vec<NodeRef<'_>> = g.get_node_for_label("Z.P1").unwrap().child_nodes().collect();
    assert_eq!(counters, children);
    assert_eq!(labels(counters), set(&["Z.P1-K1", "Z.P1-K2"]));
}

#[test]
fn graph_can_be_read_from_several_threads() {
    let mut b = GraphBuilder::new();
    b.add_node(Partition::Group, NodeSpec::new("G.1", "group")).unwrap();
    b.add_node(Partition::ZArgument, NodeSpec::new("Z.P1", "arg").with_groups(["G.1"]))
        .unwrap();
    let g: ArgumentGraph = b.build().unwrap();

    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                let group = g.get_node_for_label("G.1").unwrap();
                assert_eq!(group.group_members(), vec!["Z.P1"]);
            });
        }
    });
}
