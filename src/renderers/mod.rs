//! Renderer trait and output formats.

pub mod json;
pub mod text;

pub use json::JsonRenderer;
pub use text::TextRenderer;

use std::str::FromStr;

use crate::error::LayoutError;
use crate::layout::types::LayoutResult;

/// Trait for layout output formats.
pub trait Renderer {
    fn render(&self, result: &LayoutResult) -> Result<String, LayoutError>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

impl FromStr for OutputFormat {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" | "tsv" => Ok(Self::Text),
            other => Err(LayoutError::UnknownFormat(other.to_string())),
        }
    }
}

impl OutputFormat {
    pub fn renderer(self, pretty: bool) -> Box<dyn Renderer> {
        match self {
            Self::Json => Box::new(JsonRenderer { pretty }),
            Self::Text => Box::new(TextRenderer),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers.rs"]
mod tests;
