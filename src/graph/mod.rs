//! Output graph data structures

mod document;
mod edge;
mod node;


pub use document::GraphDocument;
pub use edge::{GraphEdge, LINK_VALUE};
pub use node::{composite_label, GraphNode};
