//! Group frequency counting and the balance thresholds

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Running frequency count of groups, remembering first-seen order
#[derive(Debug, Clone, Default)]
pub struct GroupCounts {
    counts: IndexMap<String, usize>,
    total: usize,
}

impl GroupCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `group`
    pub fn add(&mut self, group: &str) {
        match self.counts.get_mut(group) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(group.to_string(), 1);
            }
        }
        self.total += 1;
    }

    /// Total number of occurrences counted
    pub fn total(&self) -> usize {
        self.total
    }

    /// The `n` most frequent groups, highest count first
    ///
    /// Equal counts keep first-seen order.
    pub fn most_common(&self, n: usize) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self
            .counts
            .iter()
            .map(|(group, count)| (group.as_str(), *count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }

    /// Share of `count` within the running total
    pub fn share(&self, count: usize) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        count as f64 / self.total as f64
    }

    /// Every group with its count and percentage, highest count first
    pub fn distribution(&self) -> Vec<GroupShare> {
        self.most_common(self.counts.len())
            .into_iter()
            .map(|(group, count)| GroupShare {
                group: group.to_string(),
                count,
                percentage: self.share(count) * 100.0,
            })
            .collect()
    }
}

impl<'a> FromIterator<&'a str> for GroupCounts {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut counts = Self::new();
        for group in iter {
            counts.add(group);
        }
        counts
    }
}

/// One line of a group-distribution report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupShare {
    pub group: String,
    pub count: usize,
    /// Percentage of the counted total (0.0 - 100.0)
    pub percentage: f64,
}

/// Maximum shares allowed for the three most frequent groups
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BalanceThresholds {
    /// Most frequent group
    pub top: f64,
    /// Second most frequent group
    pub second: f64,
    /// Third most frequent group
    pub third: f64,
}

impl Default for BalanceThresholds {
    fn default() -> Self {
        Self {
            top: 0.40,
            second: 0.30,
            third: 0.20,
        }
    }
}

impl BalanceThresholds {
    pub fn new(top: f64, second: f64, third: f64) -> Self {
        Self { top, second, third }
    }

    /// Replace the limits that are given, keeping the rest
    pub fn with_overrides(
        self,
        top: Option<f64>,
        second: Option<f64>,
        third: Option<f64>,
    ) -> Self {
        Self {
            top: top.unwrap_or(self.top),
            second: second.unwrap_or(self.second),
            third: third.unwrap_or(self.third),
        }
    }

    /// Whether every threshold lies in `0.0..=1.0`
    pub fn is_valid(&self) -> bool {
        [self.top, self.second, self.third]
            .iter()
            .all(|t| (0.0..=1.0).contains(t))
    }

    /// Check the running counts against all three thresholds at once
    ///
    /// Ranks that do not exist yet (fewer than three groups) pass.
    pub fn is_satisfied(&self, counts: &GroupCounts) -> bool {
        let limits = [self.top, self.second, self.third];
        counts
            .most_common(limits.len())
            .iter()
            .zip(limits)
            .all(|((_, count), limit)| counts.share(*count) <= limit)
    }
}
