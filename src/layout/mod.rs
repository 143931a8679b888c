//! Layout engine: convenience API for a full layout pass.
//!
//! Pipeline: RelationGraph → RankAssignment → coordinates.

pub mod fingerprint;
pub mod graph;
pub mod position;
pub mod rank;
pub mod session;
pub mod types;

pub use fingerprint::StructuralFingerprint;
pub use graph::RelationGraph;
pub use rank::RankAssignment;
pub use session::LayoutSession;
pub use types::{Edge, GraphInput, LayoutResult, Node, Point};

use tracing::debug;

use crate::config::LayoutConfig;

/// Run the full layout pipeline.
///
/// Every input node comes back exactly once, in input order. A repeated id
/// shares the position of its first occurrence.
pub fn full_layout(nodes: &[Node], edges: &[Edge], config: &LayoutConfig) -> LayoutResult {
    let graph = RelationGraph::build(nodes, edges);
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        dropped_edges = graph.dropped_edges,
        "relation graph built"
    );

    let assignment = RankAssignment::assign(&graph);
    let positions = position::assign_coordinates(&assignment.layers, config);

    let nodes = nodes
        .iter()
        .map(|n| Node {
            position: positions.get(&n.id).copied().unwrap_or(Point::ORIGIN),
            ..n.clone()
        })
        .collect();

    LayoutResult {
        nodes,
        ranks: assignment.ranks,
        layers: assignment.layers,
    }
}

/// Lay out `nodes` top-down and return them with positions filled in.
pub fn layout_nodes(nodes: &[Node], edges: &[Edge], config: &LayoutConfig) -> Vec<Node> {
    full_layout(nodes, edges, config).nodes
}

/// Lay out with the default card size and spacing.
pub fn layout(nodes: &[Node], edges: &[Edge]) -> Vec<Node> {
    layout_nodes(nodes, edges, &LayoutConfig::default())
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_engine.rs"]
mod tests;
