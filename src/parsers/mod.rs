//! Parser registry: detect the input format and dispatch to the right parser.

pub mod edgelist;
pub mod json;

use crate::error::LayoutError;
use crate::layout::types::GraphInput;
use edgelist::EdgeListParser;
use json::JsonParser;

/// Trait for graph input parsers.
pub trait Parser {
    /// Parse the input source string into nodes and edges.
    fn parse(&self, src: &str) -> Result<GraphInput, LayoutError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    EdgeList,
}

/// Detect the input format: a leading `{` means JSON.
pub fn detect_format(src: &str) -> InputFormat {
    if src.trim_start().starts_with('{') {
        InputFormat::Json
    } else {
        InputFormat::EdgeList
    }
}

/// Parse a graph document in either supported format.
pub fn parse(src: &str) -> Result<GraphInput, LayoutError> {
    match detect_format(src) {
        InputFormat::Json => JsonParser.parse(src),
        InputFormat::EdgeList => EdgeListParser.parse(src),
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_parsers.rs"]
mod tests;
