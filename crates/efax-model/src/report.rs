use std::path::PathBuf;

/// Number of cells or rows touched by each pipeline stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StageCounts {
    pub rows_loaded: usize,
    pub rows_dropped: usize,
    pub tokens_removed: usize,
    pub sentinels_replaced: usize,
    pub defaults_filled: usize,
    pub nulls_normalized: usize,
}

/// Outcome of a completed cleaning run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanReport {
    pub output_path: PathBuf,
    pub records: usize,
    pub counts: StageCounts,
}

impl CleanReport {
    /// Rows that passed the status filter.
    pub fn rows_retained(&self) -> usize {
        self.counts.rows_loaded - self.counts.rows_dropped
    }
}
