//! Edge representation in the output graph

use serde::{Deserialize, Serialize};

/// Weight carried by every co-purchase link
pub const LINK_VALUE: u32 = 1;

/// A directed co-purchase link between two display labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    /// Composite label of the source node
    pub source: String,
    /// Composite label of the target node
    pub target: String,
    /// Link weight (always [`LINK_VALUE`])
    pub value: u32,
}

impl GraphEdge {
    /// Create a new link between two composite labels
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            value: LINK_VALUE,
        }
    }
}
