//! Co-purchase graph builder
//!
//! Turns a flat product-metadata dump and a co-purchase edge list into a
//! single JSON graph document for a force-directed front-end visualizer.
//!
//! # Pipeline
//!
//! - **Selection**: scan metadata records in file order and keep the first
//!   `max_nodes` once the running group distribution is balanced
//! - **Edge filter**: keep edges whose endpoints were both selected
//! - **Assembly**: label nodes `"<id>: <title>"` and write `{nodes, links}`
//!
//! # Example
//!
//! ```
//! use copurchase_graph::{ConvertConfig, Converter, NoProgress};
//! use std::io::Cursor;
//!
//! let meta = "Id: 5\ntitle: Widget\ngroup: Book\n";
//! let edges = "# FromNodeId ToNodeId\n5 5\n";
//!
//! let converter = Converter::new(ConvertConfig::default().with_max_nodes(10)).unwrap();
//! let (document, _) = converter
//!     .convert_readers(Cursor::new(meta), Cursor::new(edges), &mut NoProgress)
//!     .unwrap();
//! assert_eq!(document.nodes[0].id, "5: Widget");
//! ```

pub mod convert;
mod graph;
pub mod progress;
pub mod selection;
pub mod source;

pub use convert::{
    assemble, write_document, ConvertConfig, ConvertError, ConvertResult, ConvertSummary,
    Converter, DEFAULT_MAX_NODES,
};
pub use graph::{composite_label, GraphDocument, GraphEdge, GraphNode, LINK_VALUE};
pub use progress::{LogProgress, NoProgress, ProgressObserver, Stage};
pub use selection::{BalanceThresholds, GroupCounts, GroupShare, NodeSelector, Selection};
pub use source::{filter_edges, parse_edge_line, EdgePair, MetaRecord, MetaRecords};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
