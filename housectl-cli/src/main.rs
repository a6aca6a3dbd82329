//! housectl CLI - House Management API
//!
//! Entry point for the `housectl` command-line tool:
//! - `serve`: run the read-only HTTP API
//! - `migrate`: create the houses/managers/tenants schema
//! - `seed`: replace the store contents with sample data

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "housectl",
    author,
    version,
    about = "Read-only JSON API over houses, managers and tenants"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create database tables (idempotent)
    Migrate(commands::migrate::MigrateArgs),
    /// Replace all rows with the sample data set
    Seed(commands::seed::SeedArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; settings fall back to flags and defaults.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Migrate(args) => commands::run_migrate(args).await?,
        Commands::Seed(args) => commands::run_seed(args).await?,
    }
    Ok(())
}
