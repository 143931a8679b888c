//! Configuration for the layout pipeline.
//!
//! Defaults match the diagram renderer's node card size.

use serde::{Deserialize, Serialize};

pub const NODE_WIDTH: f64 = 180.0;
pub const NODE_HEIGHT: f64 = 60.0;
pub const NODE_SPACING: f64 = 60.0;
pub const RANK_SPACING: f64 = 80.0;

/// Geometry and session options for a layout pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Width of every node card.
    pub node_width: f64,
    /// Height of every node card.
    pub node_height: f64,
    /// Horizontal gap between neighbouring nodes in a layer.
    pub node_spacing: f64,
    /// Vertical gap between consecutive ranks.
    pub rank_spacing: f64,
    /// Keep user-dragged positions of surviving ids across a relayout.
    pub keep_overrides: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_width: NODE_WIDTH,
            node_height: NODE_HEIGHT,
            node_spacing: NODE_SPACING,
            rank_spacing: RANK_SPACING,
            keep_overrides: false,
        }
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_node_size(mut self, width: f64, height: f64) -> Self {
        self.node_width = width;
        self.node_height = height;
        self
    }

    pub fn with_spacing(mut self, node_spacing: f64, rank_spacing: f64) -> Self {
        self.node_spacing = node_spacing;
        self.rank_spacing = rank_spacing;
        self
    }

    pub fn with_keep_overrides(mut self, keep: bool) -> Self {
        self.keep_overrides = keep;
        self
    }

    /// Horizontal distance between the left edges of neighbouring nodes.
    pub fn column_step(&self) -> f64 {
        self.node_width + self.node_spacing
    }

    /// Vertical distance between consecutive ranks.
    pub fn rank_step(&self) -> f64 {
        self.node_height + self.rank_spacing
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_config.rs"]
mod tests;
