//! Reader for the co-purchase edge list

use crate::progress::{ProgressObserver, Stage};
use std::collections::HashSet;
use std::io::BufRead;

/// A raw directed edge as read from the edge list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgePair {
    pub source: String,
    pub target: String,
}

impl EdgePair {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Parse one edge-list line
///
/// Returns `None` for `#` comments and for lines that are not exactly two
/// whitespace-separated tokens.
pub fn parse_edge_line(line: &str) -> Option<EdgePair> {
    if line.starts_with('#') {
        return None;
    }
    let mut tokens = line.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(source), Some(target), None) => Some(EdgePair::new(source, target)),
        _ => None,
    }
}

/// Keep the edges whose endpoints are both in `valid_ids`
///
/// Order is preserved; no dedup or direction normalization. Every raw line,
/// skipped or not, is reported to `progress`. The edge list is decoded
/// strictly: invalid UTF-8 surfaces as an `InvalidData` error.
pub fn filter_edges<R: BufRead>(
    reader: R,
    valid_ids: &HashSet<String>,
    progress: &mut dyn ProgressObserver,
) -> std::io::Result<Vec<EdgePair>> {
    let mut kept = Vec::new();
    let mut lines_read = 0;

    for line in reader.lines() {
        let line = line?;
        lines_read += 1;
        progress.edge_line_read(lines_read);

        match parse_edge_line(&line) {
            Some(pair) => {
                if valid_ids.contains(&pair.source) && valid_ids.contains(&pair.target) {
                    kept.push(pair);
                }
            }
            None => tracing::trace!(line = %line, "skipping edge line"),
        }
    }

    tracing::info!(edges = kept.len(), lines = lines_read, "total valid edges");
    progress.stage_finished(Stage::EdgeFilter, kept.len());
    Ok(kept)
}
