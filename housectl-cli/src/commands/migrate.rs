//! Schema creation command

use anyhow::{Context, Result};
use clap::Parser;

use housectl_server::db::run_migrations;

use super::DatabaseArgs;

#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub db: DatabaseArgs,
}

pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let pool = args.db.connect().await?;
    run_migrations(&pool)
        .await
        .context("Failed to apply database schema")?;
    pool.close().await;

    println!("Schema up to date ({})", args.db.database_url);
    Ok(())
}
