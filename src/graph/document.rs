//! The graph document handed to the front-end visualizer

use super::edge::GraphEdge;
use super::node::GraphNode;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Final output artifact: nodes first, then links
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDocument {
    /// Selected nodes in arrival order
    pub nodes: Vec<GraphNode>,
    /// Links between selected nodes in edge-file order
    pub links: Vec<GraphEdge>,
}

impl GraphDocument {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of links
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Serialize as indented JSON, keeping non-ASCII characters as-is
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Write indented JSON to `writer`
    pub fn write_pretty<W: Write>(&self, writer: W) -> serde_json::Result<()> {
        serde_json::to_writer_pretty(writer, self)
    }
}
