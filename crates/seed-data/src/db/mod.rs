//! Database integration for seeding.
//!
//! The [`Seeder`] ensures the target table exists and inserts generated rows
//! in concurrent bounded-size batches.

mod seeder;

pub use seeder::Seeder;
