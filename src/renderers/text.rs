//! Tab-separated table: `id  rank  x  y`, one node per line, input order.

use std::fmt::Write;

use super::Renderer;
use crate::error::LayoutError;
use crate::layout::types::LayoutResult;

pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render(&self, result: &LayoutResult) -> Result<String, LayoutError> {
        let mut out = String::new();
        for node in &result.nodes {
            let rank = result.rank_of(&node.id).unwrap_or(0);
            // + 0.0 turns -0 into 0
            let x = node.position.x + 0.0;
            let y = node.position.y + 0.0;
            let _ = writeln!(out, "{}\t{}\t{}\t{}", node.id, rank, x, y);
        }
        Ok(out)
    }
}
