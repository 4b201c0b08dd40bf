//! Aggregate outcome of a seed run.

/// Counts for one seed invocation.
///
/// A successful run has `rows_inserted == rows_attempted`. The counts assert
/// that the insert statements completed without error, not that the database
/// durably committed an exact row count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedResult {
    /// Total rows the run set out to insert (sum of all batch sizes).
    pub rows_attempted: usize,
    /// Rows belonging to batches whose insert statement completed.
    pub rows_inserted: usize,
    /// Number of batches dispatched.
    pub batches_attempted: usize,
    /// Number of batches whose insert statement completed.
    pub batches_inserted: usize,
}

impl SeedResult {
    /// True when every dispatched batch completed.
    pub fn is_complete(&self) -> bool {
        self.batches_inserted == self.batches_attempted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_run_is_complete() {
        assert!(SeedResult::default().is_complete());
    }

    #[test]
    fn test_partial_run_is_not_complete() {
        let result = SeedResult {
            rows_attempted: 2500,
            rows_inserted: 1500,
            batches_attempted: 3,
            batches_inserted: 2,
        };
        assert!(!result.is_complete());
    }
}
