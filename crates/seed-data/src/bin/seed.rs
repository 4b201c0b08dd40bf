//! Seed script - fills the scratch tables with synthetic rows
//!
//! Run with:
//! ```
//! DB_HOST=localhost DB_USER=seed DB_PASSWORD=seed DB_NAME=seed_db \
//!     cargo run -p seed-data --bin seed -- 10000 1000
//! ```
//!
//! Arguments (both optional): total rows, then max batch size.

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use tracing_subscriber::EnvFilter;

use seed_data::prelude::*;

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut request = SeedRequest::default();
    let mut args = std::env::args().skip(1);
    if let Some(rows) = args.next() {
        request.total_rows = rows.parse()?;
    }
    if let Some(batch) = args.next() {
        request.max_batch_size = batch.parse()?;
    }

    let options = PgConnectOptions::new()
        .host(&env_or("DB_HOST", "localhost"))
        .port(env_or("DB_PORT", "5432").parse()?)
        .username(&env_or("DB_USER", "seed"))
        .password(&env_or("DB_PASSWORD", "seed"))
        .database(&env_or("DB_NAME", "seed_db"));

    let pool = PgPoolOptions::new()
        .max_connections(8)
        .connect_with(options)
        .await?;

    tracing::info!("Connected to database");

    for target in [TargetSchema::Users, TargetSchema::Accounts] {
        let seeder = Seeder::new(pool.clone(), target);
        seeder.migrate().await?;
        let result = seeder.seed_request(&request).await?;

        tracing::info!(
            "  {}: {} rows in {} batches",
            target.table(),
            result.rows_inserted,
            result.batches_inserted
        );
    }

    tracing::info!("Seed completed!");
    Ok(())
}
