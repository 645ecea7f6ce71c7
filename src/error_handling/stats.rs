//! Per-run outcome counters.
//!
//! The parse stage is single-threaded, so the counters are plain integers owned
//! by the assembler and handed back when the run completes.

use std::collections::HashMap;
use strum::IntoEnumIterator;

use super::types::ItemOutcome;

/// Counts of item outcomes for one run.
///
/// Every [`ItemOutcome`] starts at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunStats {
    outcomes: HashMap<ItemOutcome, usize>,
}

impl RunStats {
    pub fn new() -> Self {
        let outcomes = ItemOutcome::iter().map(|o| (o, 0)).collect();
        RunStats { outcomes }
    }

    /// Records one item outcome.
    pub fn record(&mut self, outcome: ItemOutcome) {
        *self.outcomes.entry(outcome).or_insert(0) += 1;
    }

    /// Get the count for an outcome.
    pub fn count(&self, outcome: ItemOutcome) -> usize {
        self.outcomes.get(&outcome).copied().unwrap_or(0)
    }

    /// Items appended to the output.
    pub fn parsed(&self) -> usize {
        self.count(ItemOutcome::Parsed)
    }

    /// Items skipped for a recoverable reason.
    pub fn failed(&self) -> usize {
        ItemOutcome::iter()
            .filter(ItemOutcome::is_failure)
            .map(|o| self.count(o))
            .sum()
    }

    /// Every item seen, whatever the outcome.
    pub fn total(&self) -> usize {
        ItemOutcome::iter().map(|o| self.count(o)).sum()
    }
}

impl Default for RunStats {
    fn default() -> Self {
        Self::new()
    }
}
