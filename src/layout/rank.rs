//! Rank assignment by longest-path relaxation in BFS order.
//!
//! Roots (nodes without parents) start at rank 0; when every node has a
//! parent, every node starts at rank 0. Each dequeued node pushes its
//! children to at least one rank below itself, re-enqueueing a child
//! whenever its rank grows, so a node reachable along several chains ends
//! up under its deepest ancestor.
//!
//! An edge inside a strongly connected component only lifts the child to
//! the parent's rank. Cycles therefore share a layer, ranks are bounded by
//! the longest path between components, and the queue always drains.

use std::collections::{HashMap, VecDeque};

use tracing::debug;

use super::graph::RelationGraph;

/// Rank per node plus the resulting layers.
#[derive(Debug, Clone, Default)]
pub struct RankAssignment {
    /// node id → rank
    pub ranks: HashMap<String, usize>,
    /// Node ids per rank, each layer in input order.
    pub layers: Vec<Vec<String>>,
    /// Nodes the traversal never reached; they sit at rank 0.
    pub unreached: usize,
}

impl RankAssignment {
    pub fn assign(graph: &RelationGraph) -> Self {
        let digraph = &graph.digraph;
        let component = graph.components();
        let mut rank: Vec<Option<usize>> = vec![None; graph.node_count()];

        let mut frontier = graph.roots();
        if frontier.is_empty() {
            frontier = digraph.node_indices().collect();
        }

        let mut queue = VecDeque::with_capacity(frontier.len());
        for idx in frontier {
            rank[idx.index()] = Some(0);
            queue.push_back(idx);
        }

        let mut relaxations = 0usize;
        while let Some(idx) = queue.pop_front() {
            let parent_rank = rank[idx.index()].unwrap_or(0);
            for child in digraph.neighbors(idx) {
                let wanted = if component[child.index()] == component[idx.index()] {
                    parent_rank
                } else {
                    parent_rank + 1
                };
                if rank[child.index()].is_none_or(|r| r < wanted) {
                    rank[child.index()] = Some(wanted);
                    queue.push_back(child);
                    relaxations += 1;
                }
            }
        }

        let unreached = rank.iter().filter(|r| r.is_none()).count();
        let layer_count = rank.iter().flatten().max().map_or(0, |max| max + 1);

        let mut ranks = HashMap::with_capacity(rank.len());
        let mut layers: Vec<Vec<String>> = vec![Vec::new(); layer_count];
        for idx in digraph.node_indices() {
            let r = rank[idx.index()].unwrap_or(0);
            let id = digraph[idx].clone();
            layers[r].push(id.clone());
            ranks.insert(id, r);
        }

        debug!(
            nodes = graph.node_count(),
            layers = layers.len(),
            relaxations,
            unreached,
            "ranks assigned"
        );

        Self {
            ranks,
            layers,
            unreached,
        }
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_rank.rs"]
mod tests;
