// post-resolution invariant checks
use tracing::error;

use crate::core::graph::GraphError;
use crate::core::node::Node;
use crate::core::types::{NodeId, RelationKind};

/// Verifies that every link has its back-link and that no node links to itself.
///
/// The resolver establishes both directions at once, so a failure here is a defect in the
/// resolver, not in the input. The build is aborted.
pub(crate) fn check_invariants(nodes: &[Node]) -> Result<(), GraphError> {
    for (idx, node) in nodes.iter().enumerate() {
        let id = idx as NodeId;
        for relation in RelationKind::ALL {
            check_node(nodes, id, node, relation).inspect_err(|err| {
                error!(node = node.label(), %relation, "link invariant violated: {}", err);
            })?;
        }
    }
    Ok(())
}

fn check_node(nodes: &[Node], id: NodeId, node: &Node, relation: RelationKind) -> Result<(), GraphError> {
    let outgoing = node.outgoing(relation);
    let incoming = node.incoming(relation);

    if outgoing.contains(id) || incoming.contains(id) {
        return Err(GraphError::SelfLoop {
            relation,
            node: node.label().to_string(),
        });
    }

    // each parent/group/similar must list this node as child/member/similar
    for target in outgoing.iter() {
        if !nodes[target as usize].incoming(relation).contains(id) {
            return Err(violation(nodes, relation, id, target));
        }
    }

    // each child/member/similar must list this node as parent/group/similar
    for source in incoming.iter() {
        if !nodes[source as usize].outgoing(relation).contains(id) {
            return Err(violation(nodes, relation, source, id));
        }
    }

    Ok(())
}

fn violation(nodes: &[Node], relation: RelationKind, from: NodeId, to: NodeId) -> GraphError {
    GraphError::InvariantViolation {
        relation,
        node: nodes[from as usize].label().to_string(),
        other: nodes[to as usize].label().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::builder::GraphBuilder;
    use crate::core::node::NodeSpec;
    use crate::core::types::Partition;

    fn mk_builder() -> GraphBuilder {
        let mut b = GraphBuilder::new();
        b.add_node(Partition::ZArgument, NodeSpec::new("Z.P1", "root")).unwrap();
        b.add_node(Partition::NzArgument, NodeSpec::new("NZ.K1", "counter").with_parents(["Z.P1"]))
            .unwrap();
        b.add_node(Partition::Group, NodeSpec::new("G.1", "group")).unwrap();
        b
    }

    #[test]
    fn resolved_graph_passes() {
        let mut b = mk_builder();
        b.resolve_references();
        assert_eq!(check_invariants(&b.nodes), Ok(()));
    }

    #[test]
    fn missing_child_back_link_is_detected() {
        let mut b = mk_builder();
        // forward link only
        b.nodes[1].parent_nodes.insert(0);

        let err = check_invariants(&b.nodes).unwrap_err();
        assert_eq!(
            err,
            GraphError::InvariantViolation {
                relation: RelationKind::Parent,
                node: "NZ.K1".into(),
                other: "Z.P1".into(),
            }
        );
    }

    #[test]
    fn missing_group_link_is_detected_from_the_member_side() {
        let mut b = mk_builder();
        // back-link only: G.1 claims Z.P1 as member
        b.nodes[2].group_member_nodes.insert(0);

        let err = check_invariants(&b.nodes).unwrap_err();
        assert_eq!(
            err,
            GraphError::InvariantViolation {
                relation: RelationKind::Group,
                node: "Z.P1".into(),
                other: "G.1".into(),
            }
        );
    }

    #[test]
    fn one_sided_similar_link_is_detected() {
        let mut b = mk_builder();
        b.nodes[0].similar_nodes.insert(2);

        let err = check_invariants(&b.nodes).unwrap_err();
        assert!(matches!(err, GraphError::InvariantViolation { relation: RelationKind::Similar, .. }));
    }

    #[test]
    fn self_loop_is_detected() {
        let mut b = mk_builder();
        b.nodes[2].group_nodes.insert(2);
        b.nodes[2].group_member_nodes.insert(2);

        let err = check_invariants(&b.nodes).unwrap_err();
        assert_eq!(
            err,
            GraphError::SelfLoop {
                relation: RelationKind::Group,
                node: "G.1".into(),
            }
        );
    }

    #[test]
    fn build_aborts_on_violation() {
        let mut b = mk_builder();
        b.nodes[0].child_nodes.insert(2);
        assert!(b.build().is_err());
    }
}
