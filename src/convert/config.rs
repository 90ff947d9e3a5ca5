//! Conversion settings

use super::error::{ConvertError, ConvertResult};
use crate::selection::BalanceThresholds;
use std::path::PathBuf;

/// Default number of nodes to select
pub const DEFAULT_MAX_NODES: usize = 100;

/// Input and output locations plus selection parameters
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// Product metadata dump
    pub meta_path: PathBuf,
    /// Co-purchase edge list
    pub edges_path: PathBuf,
    /// Where the graph document is written
    pub output_path: PathBuf,
    /// Maximum number of nodes in the document
    pub max_nodes: usize,
    /// Group balance limits used during selection
    pub thresholds: BalanceThresholds,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            meta_path: PathBuf::from("amazon-meta.txt"),
            edges_path: PathBuf::from("amazon0302.txt"),
            output_path: PathBuf::from("amazon.json"),
            max_nodes: DEFAULT_MAX_NODES,
            thresholds: BalanceThresholds::default(),
        }
    }
}

impl ConvertConfig {
    pub fn new(
        meta_path: impl Into<PathBuf>,
        edges_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            meta_path: meta_path.into(),
            edges_path: edges_path.into(),
            output_path: output_path.into(),
            ..Default::default()
        }
    }

    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    pub fn with_thresholds(mut self, thresholds: BalanceThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Reject settings the selector cannot work with
    pub fn validate(&self) -> ConvertResult<()> {
        if self.max_nodes == 0 {
            return Err(ConvertError::InvalidConfig(
                "max_nodes must be a positive integer".to_string(),
            ));
        }
        if !self.thresholds.is_valid() {
            return Err(ConvertError::InvalidConfig(format!(
                "balance thresholds must lie in 0.0..=1.0, got {:?}",
                self.thresholds
            )));
        }
        Ok(())
    }
}
