//! Schema creation
//!
//! Foreign keys follow the `fk_<table>_<column>_<referenced_table>` naming
//! convention. Deleting a house that still has managers or tenants is
//! rejected (ON DELETE RESTRICT); dependents must go first.

use sqlx::SqlitePool;

/// Create all tables and indexes. Safe to run repeatedly.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::info!("Running migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS houses (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            location TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS managers (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            salary REAL NOT NULL,
            house_id INTEGER,
            CONSTRAINT fk_managers_house_id_houses
                FOREIGN KEY (house_id) REFERENCES houses (id) ON DELETE RESTRICT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS tenants (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            rent REAL NOT NULL,
            house_id INTEGER,
            CONSTRAINT fk_tenants_house_id_houses
                FOREIGN KEY (house_id) REFERENCES houses (id) ON DELETE RESTRICT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_managers_house_id ON managers (house_id)")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_tenants_house_id ON tenants (house_id)")
        .execute(pool)
        .await?;

    tracing::info!("database migrations complete");
    Ok(())
}
