//! Error taxonomy for seeding operations.

use thiserror::Error;

use crate::result::SeedResult;

/// Failure of a single batch insert.
///
/// Carries the 0-based batch index and the attempted row count so a caller
/// can tell which slice of the seed run failed and how large it was.
#[derive(Debug, Error)]
#[error("batch {index} ({rows} rows) failed: {source}")]
pub struct BatchError {
    /// 0-based index of the batch within the seed run.
    pub index: usize,
    /// Number of rows the batch attempted to insert.
    pub rows: usize,
    /// Underlying driver error.
    #[source]
    pub source: sqlx::Error,
}

/// Outcome of a seed run in which one or more batch inserts failed.
///
/// Batches that completed before the failure stay inserted; the partial
/// counts in [`result`](Self::result) make that visible to the caller rather
/// than hiding it. Failures are ordered by batch index.
#[derive(Debug)]
pub struct AggregateError {
    /// Partial counts for the run, including batches that did succeed.
    pub result: SeedResult,
    /// Every failed batch, sorted by batch index.
    pub failures: Vec<BatchError>,
}

impl AggregateError {
    /// The lowest-indexed batch failure.
    pub fn first(&self) -> &BatchError {
        // Constructed by the seeder with at least one failure.
        &self.failures[0]
    }
}

impl std::fmt::Display for AggregateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} of {} batches failed ({} of {} rows inserted); first failure: {}",
            self.failures.len(),
            self.result.batches_attempted,
            self.result.rows_inserted,
            self.result.rows_attempted,
            self.first()
        )
    }
}

impl std::error::Error for AggregateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.first())
    }
}

#[derive(Debug, Error)]
pub enum SeedError {
    /// Malformed seed parameters or a row-shape mismatch. Detected before
    /// any statement is issued.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// DDL execution failed during schema initialization.
    #[error("schema setup failed: {0}")]
    Schema(#[source] sqlx::Error),

    /// One or more concurrent batch inserts failed.
    #[error("{0}")]
    Aggregate(AggregateError),

    /// A spawned batch task could not be joined (it panicked or was aborted).
    #[error("batch task failed to run: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_error_display_names_index_and_size() {
        let err = BatchError {
            index: 1,
            rows: 1000,
            source: sqlx::Error::RowNotFound,
        };

        let msg = err.to_string();
        assert!(msg.contains("batch 1"));
        assert!(msg.contains("1000 rows"));
    }

    #[test]
    fn test_aggregate_error_reports_partial_counts() {
        let err = AggregateError {
            result: SeedResult {
                rows_attempted: 2500,
                rows_inserted: 1500,
                batches_attempted: 3,
                batches_inserted: 2,
            },
            failures: vec![BatchError {
                index: 1,
                rows: 1000,
                source: sqlx::Error::RowNotFound,
            }],
        };

        let msg = err.to_string();
        assert!(msg.contains("1 of 3 batches failed"));
        assert!(msg.contains("1500 of 2500 rows"));
        assert!(msg.contains("batch 1"));
        assert_eq!(err.first().index, 1);
    }
}
