//! WASM bindings for story-graph-layout.
//!
//! Exposes `layout` and `layoutWithOptions` to JavaScript via wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::config::LayoutConfig;
use crate::renderers::OutputFormat;

/// Lay out a JSON or edge-list graph and return compact JSON.
#[wasm_bindgen]
pub fn layout(src: &str) -> Result<String, JsError> {
    crate::layout_source(src, OutputFormat::Json, false, &LayoutConfig::default())
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Lay out with full control over the output format and geometry.
///
/// - `format`: "json" or "text"; empty string means json
/// - the remaining arguments override the card size and spacing
#[wasm_bindgen(js_name = "layoutWithOptions")]
pub fn layout_with_options(
    src: &str,
    format: &str,
    node_width: f64,
    node_height: f64,
    node_spacing: f64,
    rank_spacing: f64,
) -> Result<String, JsError> {
    let format = if format.is_empty() {
        OutputFormat::Json
    } else {
        format
            .parse::<OutputFormat>()
            .map_err(|e| JsError::new(&e.to_string()))?
    };
    let config = LayoutConfig::new()
        .with_node_size(node_width, node_height)
        .with_spacing(node_spacing, rank_spacing);
    crate::layout_source(src, format, false, &config).map_err(|e| JsError::new(&e.to_string()))
}
