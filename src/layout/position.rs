//! Coordinate assignment: one row per rank, each row centred on x = 0.

use std::collections::HashMap;

use super::types::Point;
use crate::config::LayoutConfig;

/// Total width of a row of `count` nodes including the gaps between them.
pub fn layer_width(count: usize, config: &LayoutConfig) -> f64 {
    if count == 0 {
        return 0.0;
    }
    count as f64 * config.node_width + (count - 1) as f64 * config.node_spacing
}

/// Place every id of every layer. Layer `i` lands at `y = i * rank_step`.
pub fn assign_coordinates(layers: &[Vec<String>], config: &LayoutConfig) -> HashMap<String, Point> {
    let mut positions = HashMap::new();
    for (rank, layer) in layers.iter().enumerate() {
        let start = -layer_width(layer.len(), config) / 2.0;
        let y = rank as f64 * config.rank_step();
        for (i, id) in layer.iter().enumerate() {
            let x = start + i as f64 * config.column_step();
            positions.insert(id.clone(), Point::new(x, y));
        }
    }
    positions
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_position.rs"]
mod tests;
