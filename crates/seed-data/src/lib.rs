//! Batched synthetic-row seeding for scratch PostgreSQL tables.
//!
//! Given a target table, a total row count, and a maximum batch size, the
//! seeder plans bounded-size batches, generates fake rows for each, and runs
//! every batch as one concurrent multi-row insert, gathering all results
//! before returning an aggregate outcome.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seed_data::prelude::*;
//!
//! let seeder = Seeder::new(pool, TargetSchema::Users);
//! seeder.migrate().await?;
//! let result = seeder.seed(2500, 1000).await?;
//! assert_eq!(result.rows_inserted, 2500);
//! ```
//!
//! Partial failure is explicit: if some batches fail, `seed` returns an
//! aggregate error naming each failed batch while the rows from successful
//! batches remain in the table.

pub mod config;
pub mod db;
pub mod error;
pub mod generators;
pub mod plan;
pub mod result;
pub mod schema;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::SeedRequest;
    pub use crate::db::Seeder;
    pub use crate::error::{AggregateError, BatchError, SeedError};
    pub use crate::generators::{AccountGenerator, PersonGenerator};
    pub use crate::plan::BatchPlan;
    pub use crate::result::SeedResult;
    pub use crate::schema::{Row, TargetSchema};
}
