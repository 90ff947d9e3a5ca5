//! Line-oriented readers for the two input files

mod edges;
mod meta;

pub use edges::{filter_edges, parse_edge_line, EdgePair};
pub use meta::{MetaRecord, MetaRecords};
