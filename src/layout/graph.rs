//! RelationGraph: the character/relationship set as a petgraph DiGraph.
//!
//! Only ids present in the node list take part. Edges with a missing
//! endpoint and self-loops are skipped; a repeated node id keeps its first
//! slot.

use std::collections::HashMap;

use petgraph::Direction;
use petgraph::algo::{is_cyclic_directed, tarjan_scc};
use petgraph::graph::{DiGraph, NodeIndex};
use tracing::{trace, warn};

use super::types::{Edge, Node};

/// Directed graph over unique node ids, in first-seen input order.
#[derive(Debug, Clone, Default)]
pub struct RelationGraph {
    pub digraph: DiGraph<String, ()>,
    /// Maps node id → petgraph NodeIndex.
    pub node_index: HashMap<String, NodeIndex>,
    /// Edges skipped because an endpoint was missing or they looped.
    pub dropped_edges: usize,
    /// Node entries skipped because their id was already seen.
    pub duplicate_ids: usize,
}

impl RelationGraph {
    /// Build the graph from the node and edge lists.
    pub fn build(nodes: &[Node], edges: &[Edge]) -> Self {
        let mut g = Self::default();

        for node in nodes {
            if g.node_index.contains_key(&node.id) {
                warn!(id = %node.id, "duplicate node id; first occurrence wins");
                g.duplicate_ids += 1;
                continue;
            }
            let idx = g.digraph.add_node(node.id.clone());
            g.node_index.insert(node.id.clone(), idx);
        }

        for edge in edges {
            let endpoints = (g.node_index.get(&edge.source), g.node_index.get(&edge.target));
            match endpoints {
                (Some(&a), Some(&b)) if a != b => {
                    g.digraph.add_edge(a, b, ());
                }
                _ => {
                    trace!(source = %edge.source, target = %edge.target, "edge skipped");
                    g.dropped_edges += 1;
                }
            }
        }

        g
    }

    pub fn node_count(&self) -> usize {
        self.digraph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.digraph.edge_count()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    /// Unique ids in first-seen input order.
    pub fn ids(&self) -> Vec<&str> {
        self.digraph
            .node_indices()
            .map(|idx| self.digraph[idx].as_str())
            .collect()
    }

    /// Direct successors of `id`, in edge insertion order.
    pub fn children(&self, id: &str) -> Vec<&str> {
        self.neighbors(id, Direction::Outgoing)
    }

    /// Direct predecessors of `id`, in edge insertion order.
    pub fn parents(&self, id: &str) -> Vec<&str> {
        self.neighbors(id, Direction::Incoming)
    }

    /// Nodes with no incoming edges, in input order.
    pub fn roots(&self) -> Vec<NodeIndex> {
        self.digraph
            .node_indices()
            .filter(|&idx| {
                self.digraph
                    .neighbors_directed(idx, Direction::Incoming)
                    .next()
                    .is_none()
            })
            .collect()
    }

    /// Returns true if the graph has no directed cycles.
    pub fn is_dag(&self) -> bool {
        !is_cyclic_directed(&self.digraph)
    }

    /// Strongly connected component id for every node, indexed by
    /// `NodeIndex::index()`.
    pub fn components(&self) -> Vec<usize> {
        let mut component = vec![0; self.node_count()];
        for (c, members) in tarjan_scc(&self.digraph).into_iter().enumerate() {
            for idx in members {
                component[idx.index()] = c;
            }
        }
        component
    }

    fn neighbors(&self, id: &str, dir: Direction) -> Vec<&str> {
        let Some(&idx) = self.node_index.get(id) else {
            return Vec::new();
        };
        // petgraph walks adjacency lists newest-first.
        let mut result: Vec<&str> = self
            .digraph
            .neighbors_directed(idx, dir)
            .map(|n| self.digraph[n].as_str())
            .collect();
        result.reverse();
        result
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_graph.rs"]
mod tests;
