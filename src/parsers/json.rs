//! JSON graph documents, as exported by the document store:
//!
//! ```json
//! {"nodes": [{"id": "alice", "data": {"name": "Alice"}}],
//!  "edges": [{"source": "alice", "target": "bob"}]}
//! ```

use super::Parser;
use crate::error::LayoutError;
use crate::layout::types::GraphInput;

pub struct JsonParser;

impl Parser for JsonParser {
    fn parse(&self, src: &str) -> Result<GraphInput, LayoutError> {
        let input: GraphInput = serde_json::from_str(src)?;
        if let Some(pos) = input.nodes.iter().position(|n| n.id.is_empty()) {
            return Err(LayoutError::EmptyId(pos + 1));
        }
        Ok(input)
    }
}
