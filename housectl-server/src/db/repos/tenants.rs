//! Tenant repository

use sqlx::{SqliteConnection, SqlitePool};

use super::DbError;
use crate::models::{NewTenant, Resource, Tenant};

/// Tenant repository
pub struct TenantRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> TenantRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List every tenant in insertion order.
    pub async fn list(&self) -> Result<Vec<Tenant>, DbError> {
        let tenants = sqlx::query_as::<_, Tenant>(
            "SELECT id, name, rent, house_id FROM tenants ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(tenants)
    }

    /// Get a single tenant by id.
    pub async fn get(&self, id: i64) -> Result<Tenant, DbError> {
        sqlx::query_as::<_, Tenant>("SELECT id, name, rent, house_id FROM tenants WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(DbError::NotFound { resource: Tenant::NAME })
    }

    /// Tenants whose house reference points at `house_id`.
    ///
    /// Does not check that the house exists; see `HouseRepo::get`.
    pub async fn for_house(conn: &mut SqliteConnection, house_id: i64) -> Result<Vec<Tenant>, DbError> {
        let tenants = sqlx::query_as::<_, Tenant>(
            "SELECT id, name, rent, house_id FROM tenants WHERE house_id = ? ORDER BY id",
        )
        .bind(house_id)
        .fetch_all(&mut *conn)
        .await?;

        Ok(tenants)
    }

    /// Insert a tenant, returning the stored row.
    pub async fn insert(conn: &mut SqliteConnection, tenant: &NewTenant) -> Result<Tenant, DbError> {
        let row = sqlx::query_as::<_, Tenant>(
            r#"
            INSERT INTO tenants (name, rent, house_id) VALUES (?, ?, ?)
            RETURNING id, name, rent, house_id
            "#,
        )
        .bind(&tenant.name)
        .bind(tenant.rent)
        .bind(tenant.house_id)
        .fetch_one(&mut *conn)
        .await?;

        Ok(row)
    }

    /// Delete every tenant. Returns the number of rows removed.
    pub async fn delete_all(conn: &mut SqliteConnection) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM tenants").execute(&mut *conn).await?;
        Ok(result.rows_affected())
    }
}
