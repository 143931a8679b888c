//! Error type shared by the parsers, renderers and layout session.
//!
//! The layout engine itself is total and never returns one of these.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("invalid JSON graph: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("node #{0} has an empty id")]
    EmptyId(usize),

    #[error("unknown node '{0}'")]
    UnknownNode(String),

    #[error("unknown output format '{0}'; use json or text")]
    UnknownFormat(String),
}

impl LayoutError {
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}
