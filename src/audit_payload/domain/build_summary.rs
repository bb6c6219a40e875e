use std::ops::AddAssign;

/// Counters describing what one or more builds did with the entries they read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildSummary {
    /// Entries present in the selected dependency table.
    pub entries_seen: usize,
    /// Entries whose version was added to the accumulator.
    pub accepted: usize,
    /// Entries dropped because they are dev dependencies.
    pub skipped_dev: usize,
    /// Entries dropped by the skip policy.
    pub skipped_by_policy: usize,
}

impl BuildSummary {
    pub fn skipped(&self) -> usize {
        self.skipped_dev + self.skipped_by_policy
    }
}

impl AddAssign for BuildSummary {
    fn add_assign(&mut self, other: Self) {
        self.entries_seen += other.entries_seen;
        self.accepted += other.accepted;
        self.skipped_dev += other.skipped_dev;
        self.skipped_by_policy += other.skipped_by_policy;
    }
}
