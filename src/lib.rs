//! story-graph-layout: top-down hierarchical layout for character
//! relationship graphs.
//!
//! Public API: `layout_source()` for text in / text out, `layout::layout_nodes()`
//! for callers that already hold nodes and edges, and `layout::LayoutSession`
//! for interactive diagrams that keep user drags between passes.

pub mod config;
pub mod error;
pub mod layout;
pub mod parsers;
pub mod renderers;

#[cfg(feature = "wasm")]
mod wasm;

pub use crate::config::LayoutConfig;
pub use crate::error::LayoutError;
pub use crate::layout::{Edge, LayoutResult, LayoutSession, Node, Point, layout_nodes};
pub use crate::renderers::OutputFormat;

use crate::layout::full_layout;
use crate::parsers::parse;
use crate::renderers::Renderer;

/// Parse a graph document (JSON or edge list), lay it out and render it.
pub fn layout_source(
    src: &str,
    format: OutputFormat,
    pretty: bool,
    config: &LayoutConfig,
) -> Result<String, LayoutError> {
    let input = parse(src)?;
    let result = full_layout(&input.nodes, &input.edges, config);
    format.renderer(pretty).render(&result)
}
