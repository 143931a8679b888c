//! Layout types: Point, Node, Edge, GraphInput, LayoutResult.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ─── Point ───────────────────────────────────────────────────────────────────

/// Top-left corner of a node card in diagram coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };
}

// ─── Node ────────────────────────────────────────────────────────────────────

/// A character card. `data` is carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub data: Value,
    #[serde(default)]
    pub position: Point,
}

impl Node {
    /// A node with no payload at the origin.
    pub fn bare(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            data: Value::Null,
            position: Point::ORIGIN,
        }
    }

    pub fn with_data(id: impl Into<String>, data: Value) -> Self {
        Self {
            data,
            ..Self::bare(id)
        }
    }
}

// ─── Edge ────────────────────────────────────────────────────────────────────

/// A directed relationship between two characters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub data: Value,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            data: Value::Null,
        }
    }

    pub fn with_data(source: impl Into<String>, target: impl Into<String>, data: Value) -> Self {
        Self {
            data,
            ..Self::new(source, target)
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

// ─── GraphInput ──────────────────────────────────────────────────────────────

/// Nodes and edges as handed over by the document store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphInput {
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

// ─── LayoutResult ────────────────────────────────────────────────────────────

/// The full output of a layout pass.
#[derive(Debug, Clone, Default)]
pub struct LayoutResult {
    /// Input nodes in input order, positions replaced.
    pub nodes: Vec<Node>,
    /// node id → rank
    pub ranks: HashMap<String, usize>,
    /// Node ids per rank, each layer in input order.
    pub layers: Vec<Vec<String>>,
}

impl LayoutResult {
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn rank_of(&self, id: &str) -> Option<usize> {
        self.ranks.get(id).copied()
    }

    pub fn position_of(&self, id: &str) -> Option<Point> {
        self.nodes.iter().find(|n| n.id == id).map(|n| n.position)
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_types.rs"]
mod tests;
