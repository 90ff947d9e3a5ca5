//! Greedy, balance-aware node selection
//!
//! Records are accepted in arrival order. After each acceptance the running
//! group counts are checked against [`BalanceThresholds`]; scanning stops at
//! the first running total that is at least `max_nodes` and balanced. The
//! returned nodes are always the first `max_nodes` records accepted, even when
//! the balanced cutoff came later in the scan.

use super::balance::{BalanceThresholds, GroupCounts, GroupShare};
use crate::progress::{NoProgress, ProgressObserver, Stage};
use crate::source::MetaRecord;
use std::collections::HashSet;

/// Selects up to `max_nodes` records from a record stream
#[derive(Debug, Clone)]
pub struct NodeSelector {
    max_nodes: usize,
    thresholds: BalanceThresholds,
}

impl NodeSelector {
    pub fn new(max_nodes: usize) -> Self {
        Self {
            max_nodes,
            thresholds: BalanceThresholds::default(),
        }
    }

    pub fn with_thresholds(mut self, thresholds: BalanceThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn max_nodes(&self) -> usize {
        self.max_nodes
    }

    pub fn thresholds(&self) -> &BalanceThresholds {
        &self.thresholds
    }

    /// Run the selection without progress reporting
    pub fn select<I>(&self, records: I) -> std::io::Result<Selection>
    where
        I: IntoIterator<Item = std::io::Result<MetaRecord>>,
    {
        self.select_observed(records, &mut NoProgress)
    }

    /// Run the selection, reporting each scanned record to `progress`
    ///
    /// Only the first `max_nodes` records are retained; later ones are
    /// counted towards the running balance and then dropped.
    pub fn select_observed<I>(
        &self,
        records: I,
        progress: &mut dyn ProgressObserver,
    ) -> std::io::Result<Selection>
    where
        I: IntoIterator<Item = std::io::Result<MetaRecord>>,
    {
        let mut nodes = Vec::with_capacity(self.max_nodes.min(4096));
        let mut running = GroupCounts::new();
        let mut balanced_at = None;

        for record in records {
            let record = record?;
            running.add(&record.group);
            if nodes.len() < self.max_nodes {
                nodes.push(record);
            }
            let total = running.total();
            progress.record_scanned(total);

            if total >= self.max_nodes && self.thresholds.is_satisfied(&running) {
                balanced_at = Some(total);
                break;
            }
        }

        let selection = Selection {
            nodes,
            max_nodes: self.max_nodes,
            scanned: running.total(),
            balanced_at,
        };
        selection.log_outcome();
        progress.stage_finished(Stage::Selection, selection.nodes.len());
        Ok(selection)
    }
}

/// Result of a node selection
#[derive(Debug, Clone)]
pub struct Selection {
    /// Selected records, a prefix of arrival order
    pub nodes: Vec<MetaRecord>,
    /// Requested maximum
    pub max_nodes: usize,
    /// Records consumed from the stream
    pub scanned: usize,
    /// Running total at which the balance check passed, if it ever did
    pub balanced_at: Option<usize>,
}

impl Selection {
    /// Whether a balanced cutoff was found
    pub fn is_balanced(&self) -> bool {
        self.balanced_at.is_some()
    }

    /// Whether fewer than `max_nodes` records were available
    pub fn is_shortfall(&self) -> bool {
        self.nodes.len() < self.max_nodes
    }

    /// Ids of the selected records
    pub fn valid_ids(&self) -> HashSet<String> {
        self.nodes.iter().map(|node| node.id.clone()).collect()
    }

    /// Group distribution over the selected records
    pub fn distribution(&self) -> Vec<GroupShare> {
        self.nodes
            .iter()
            .map(|node| node.group.as_str())
            .collect::<GroupCounts>()
            .distribution()
    }

    fn log_outcome(&self) {
        match self.balanced_at {
            Some(total) => tracing::info!(
                prefix = total,
                taken = self.nodes.len(),
                "found balanced prefix"
            ),
            None => tracing::warn!(
                scanned = self.scanned,
                "no balanced prefix found; using arrival-order prefix"
            ),
        }
        if self.is_shortfall() {
            tracing::warn!(
                selected = self.nodes.len(),
                requested = self.max_nodes,
                "only {} nodes meet criteria, using them",
                self.nodes.len()
            );
        }
        for share in self.distribution() {
            tracing::debug!(
                group = %share.group,
                count = share.count,
                "{:.1}%",
                share.percentage
            );
        }
    }
}
