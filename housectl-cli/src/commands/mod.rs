//! Command implementations for housectl CLI

pub mod migrate;
pub mod seed;
pub mod serve;

use anyhow::{Context, Result};
use clap::Args;
use housectl_server::db::{create_pool, SqlitePool, DEFAULT_DATABASE_URL};

pub use migrate::run_migrate;
pub use seed::run_seed;
pub use serve::run_serve;

/// Store location shared by every subcommand
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// Database URL (e.g. sqlite://app.db)
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,
}

impl DatabaseArgs {
    /// Open the pool described by these arguments.
    pub async fn connect(&self) -> Result<SqlitePool> {
        tracing::debug!(url = %self.database_url, "opening database");
        create_pool(&self.database_url)
            .await
            .with_context(|| format!("Failed to open database at {}", self.database_url))
    }
}
