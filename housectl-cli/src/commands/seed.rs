//! Sample data command
//!
//! Replaces all houses, managers and tenants with the built-in data set.

use anyhow::{Context, Result};
use clap::Parser;

use housectl_server::db::run_migrations;
use housectl_server::seed::seed;

use super::DatabaseArgs;

#[derive(Parser, Debug)]
pub struct SeedArgs {
    /// Print the seed report as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub db: DatabaseArgs,
}

pub async fn run_seed(args: SeedArgs) -> Result<()> {
    let pool = args.db.connect().await?;
    run_migrations(&pool)
        .await
        .context("Failed to apply database schema")?;

    let report = seed(&pool).await.context("Failed to seed database")?;
    pool.close().await;

    if args.json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!(
            "Seeded {} houses, {} managers, {} tenants",
            report.houses, report.managers, report.tenants
        );
    }
    Ok(())
}
