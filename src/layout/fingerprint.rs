//! Structural fingerprint of a node/edge set.
//!
//! Two inputs with equal fingerprints lay out identically, so the caller
//! can skip a relayout and keep whatever the user dragged.

use std::collections::BTreeSet;

use super::types::{Edge, Node};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StructuralFingerprint {
    /// Sorted, deduplicated node ids.
    node_ids: Vec<String>,
    /// Sorted, deduplicated (source, target) keys of edges the engine uses.
    edge_keys: Vec<(String, String)>,
}

impl StructuralFingerprint {
    /// Fingerprint the structure of `nodes` and `edges`.
    ///
    /// Payloads, positions and ordering are ignored, as are edges the
    /// engine would skip (dangling endpoints, self-loops).
    pub fn of(nodes: &[Node], edges: &[Edge]) -> Self {
        let ids: BTreeSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
        let keys: BTreeSet<(&str, &str)> = edges
            .iter()
            .filter(|e| !e.is_self_loop())
            .filter(|e| ids.contains(e.source.as_str()) && ids.contains(e.target.as_str()))
            .map(|e| (e.source.as_str(), e.target.as_str()))
            .collect();

        Self {
            node_ids: ids.into_iter().map(str::to_owned).collect(),
            edge_keys: keys
                .into_iter()
                .map(|(s, t)| (s.to_owned(), t.to_owned()))
                .collect(),
        }
    }

    pub fn node_ids(&self) -> &[String] {
        &self.node_ids
    }

    pub fn edge_keys(&self) -> &[(String, String)] {
        &self.edge_keys
    }

    pub fn is_empty(&self) -> bool {
        self.node_ids.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_fingerprint.rs"]
mod tests;
