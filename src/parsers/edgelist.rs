//! Edge-list text format, a small Mermaid-flavoured subset.
//!
//! ```text
//! graph TD
//! %% comments run to end of line
//! alice[Alice Moreau]
//! alice -->|mentors| bob
//! bob --> carol[Carol]
//! ```
//!
//! Edge statements declare their endpoints, so a node line is only needed
//! for isolated characters or to attach a label.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde_json::json;

use super::Parser;
use crate::error::LayoutError;
use crate::layout::types::{Edge, GraphInput, Node};

const ID: &str = r"[A-Za-z0-9_][A-Za-z0-9_.-]*";

static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?i:graph|flowchart)(?:\s+(?i:TD|TB|BT|LR|RL))?$").unwrap());

static NODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"^(?P<id>{ID})(?:\[(?P<label>[^\]]*)\])?$")).unwrap());

static EDGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^(?P<src>{ID})(?:\[(?P<src_label>[^\]]*)\])?\s*-->\s*(?:\|(?P<label>[^|]*)\|\s*)?(?P<dst>{ID})(?:\[(?P<dst_label>[^\]]*)\])?$"
    ))
    .unwrap()
});

pub struct EdgeListParser;

impl Parser for EdgeListParser {
    fn parse(&self, src: &str) -> Result<GraphInput, LayoutError> {
        let mut builder = Builder::default();

        for (i, raw) in src.lines().enumerate() {
            let line_no = i + 1;
            let line = strip_comment(raw).trim();
            if line.is_empty() {
                continue;
            }
            if builder.is_empty() && HEADER_RE.is_match(line) {
                continue;
            }

            if let Some(caps) = EDGE_RE.captures(line) {
                let src_id = builder.declare(&caps["src"], label(&caps, "src_label"));
                let dst_id = builder.declare(&caps["dst"], label(&caps, "dst_label"));
                let edge = match label(&caps, "label") {
                    Some(text) => Edge::with_data(src_id, dst_id, json!({ "label": text })),
                    None => Edge::new(src_id, dst_id),
                };
                builder.edges.push(edge);
            } else if let Some(caps) = NODE_RE.captures(line) {
                builder.declare(&caps["id"], label(&caps, "label"));
            } else {
                return Err(LayoutError::parse(
                    line_no,
                    format!("expected `id`, `id[label]` or `a --> b`, found `{line}`"),
                ));
            }
        }

        Ok(GraphInput {
            nodes: builder.nodes,
            edges: builder.edges,
        })
    }
}

fn strip_comment(line: &str) -> &str {
    match line.find("%%") {
        Some(pos) => &line[..pos],
        None => line,
    }
}

fn label<'a>(caps: &'a Captures, name: &str) -> Option<&'a str> {
    caps.name(name)
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
}

#[derive(Default)]
struct Builder {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    /// Maps node id → index into `nodes`.
    index: HashMap<String, usize>,
}

impl Builder {
    fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Declare `id` if unseen; a later label replaces an earlier one.
    fn declare(&mut self, id: &str, label: Option<&str>) -> String {
        let pos = match self.index.get(id) {
            Some(&pos) => pos,
            None => {
                self.nodes.push(Node::bare(id));
                self.index.insert(id.to_string(), self.nodes.len() - 1);
                self.nodes.len() - 1
            }
        };
        if let Some(text) = label {
            self.nodes[pos].data = json!({ "label": text });
        }
        id.to_string()
    }
}
