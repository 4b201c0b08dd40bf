//! Configuration types for seeding operations.

use serde::{Deserialize, Serialize};

/// Parameters for one seed run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SeedRequest {
    /// Total number of rows to insert.
    pub total_rows: usize,

    /// Maximum rows per insert statement. Must be at least 1.
    pub max_batch_size: usize,
}

impl Default for SeedRequest {
    fn default() -> Self {
        Self {
            total_rows: 1000,
            max_batch_size: 1000,
        }
    }
}
