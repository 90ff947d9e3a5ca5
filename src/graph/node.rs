//! Node representation in the output graph

use serde::{Deserialize, Serialize};

/// A node in the output graph
///
/// `id` is the composite display label (`"<originalId>: <title>"`), not the
/// numeric product id from the metadata dump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Composite display label
    pub id: String,
    /// Category group of the product
    pub group: String,
}

impl GraphNode {
    /// Create a new node from a display label and group
    pub fn new(id: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            group: group.into(),
        }
    }
}

/// Build the composite display label for a product
pub fn composite_label(id: &str, title: &str) -> String {
    format!("{}: {}", id, title)
}
