//! LayoutSession: proposed positions vs. user-dragged positions.
//!
//! The engine owns the proposed position of every id and replaces them all
//! whenever the structural fingerprint changes. Drags are kept apart as
//! overrides and merged by id on the way out.

use std::collections::HashMap;

use tracing::debug;

use super::fingerprint::StructuralFingerprint;
use super::full_layout;
use super::types::{Edge, Node, Point};
use crate::config::LayoutConfig;
use crate::error::LayoutError;

#[derive(Debug, Clone, Default)]
pub struct LayoutSession {
    config: LayoutConfig,
    fingerprint: Option<StructuralFingerprint>,
    proposed: HashMap<String, Point>,
    overrides: HashMap<String, Point>,
    relayouts: usize,
}

impl LayoutSession {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Feed the current nodes and edges; returns them with merged positions.
    ///
    /// Runs the layout engine only when the structure changed since the
    /// previous call. Payload-only changes keep every position.
    pub fn update(&mut self, nodes: &[Node], edges: &[Edge]) -> Vec<Node> {
        let fingerprint = StructuralFingerprint::of(nodes, edges);
        if self.fingerprint.as_ref() != Some(&fingerprint) {
            let result = full_layout(nodes, edges, &self.config);
            self.proposed = result
                .nodes
                .into_iter()
                .map(|n| (n.id, n.position))
                .collect();

            if self.config.keep_overrides {
                let proposed = &self.proposed;
                self.overrides.retain(|id, _| proposed.contains_key(id));
            } else {
                self.overrides.clear();
            }

            self.fingerprint = Some(fingerprint);
            self.relayouts += 1;
            debug!(
                nodes = self.proposed.len(),
                overrides = self.overrides.len(),
                "structure changed, layout recomputed"
            );
        }

        nodes
            .iter()
            .map(|n| Node {
                position: self.position_of(&n.id).unwrap_or(Point::ORIGIN),
                ..n.clone()
            })
            .collect()
    }

    /// Record a user drag for `id`.
    pub fn move_node(&mut self, id: &str, to: Point) -> Result<(), LayoutError> {
        if !self.proposed.contains_key(id) {
            return Err(LayoutError::UnknownNode(id.to_string()));
        }
        self.overrides.insert(id.to_string(), to);
        Ok(())
    }

    /// Drop every drag; positions fall back to the proposed layout.
    pub fn reset_overrides(&mut self) {
        self.overrides.clear();
    }

    /// Override if dragged, proposed otherwise.
    pub fn position_of(&self, id: &str) -> Option<Point> {
        self.overrides
            .get(id)
            .or_else(|| self.proposed.get(id))
            .copied()
    }

    pub fn proposed(&self, id: &str) -> Option<Point> {
        self.proposed.get(id).copied()
    }

    pub fn is_overridden(&self, id: &str) -> bool {
        self.overrides.contains_key(id)
    }

    pub fn fingerprint(&self) -> Option<&StructuralFingerprint> {
        self.fingerprint.as_ref()
    }

    /// Number of times the engine has run.
    pub fn relayouts(&self) -> usize {
        self.relayouts
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_session.rs"]
mod tests;
