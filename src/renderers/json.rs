use serde::Serialize;

use super::Renderer;
use crate::error::LayoutError;
use crate::layout::types::{LayoutResult, Node};

/// Emits `{"nodes": [...], "layer_count": n}` for the diagram renderer.
pub struct JsonRenderer {
    pub pretty: bool,
}

#[derive(Serialize)]
struct Document<'a> {
    nodes: &'a [Node],
    layer_count: usize,
}

impl Renderer for JsonRenderer {
    fn render(&self, result: &LayoutResult) -> Result<String, LayoutError> {
        let doc = Document {
            nodes: &result.nodes,
            layer_count: result.layer_count(),
        };
        let mut out = if self.pretty {
            serde_json::to_string_pretty(&doc)?
        } else {
            serde_json::to_string(&doc)?
        };
        out.push('\n');
        Ok(out)
    }
}
