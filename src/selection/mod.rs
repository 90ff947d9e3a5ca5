//! Balance-aware node selection

mod balance;
mod selector;

pub use balance::{BalanceThresholds, GroupCounts, GroupShare};
pub use selector::{NodeSelector, Selection};
