//! House repository
//!
//! Houses are returned with their managers and tenants attached. Each
//! read runs inside one transaction so the house and its dependents come
//! from the same snapshot:
//! - get: one query per table, filtered on the house id
//! - list: one query per table, grouped in memory (no N+1)

use std::collections::HashMap;

use sqlx::{SqliteConnection, SqlitePool};

use super::{DbError, ManagerRepo, TenantRepo};
use crate::models::{House, HouseView, Manager, NewHouse, Resource, Tenant};

/// House repository
pub struct HouseRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> HouseRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List every house with its dependents.
    pub async fn list(&self) -> Result<Vec<HouseView>, DbError> {
        let mut tx = self.pool.begin().await?;

        let houses = sqlx::query_as::<_, House>("SELECT id, name, location FROM houses ORDER BY id")
            .fetch_all(&mut *tx)
            .await?;

        let managers = sqlx::query_as::<_, Manager>(
            "SELECT id, name, salary, house_id FROM managers WHERE house_id IS NOT NULL ORDER BY id",
        )
        .fetch_all(&mut *tx)
        .await?;

        let tenants = sqlx::query_as::<_, Tenant>(
            "SELECT id, name, rent, house_id FROM tenants WHERE house_id IS NOT NULL ORDER BY id",
        )
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        let mut managers_by_house = group_by_house(managers, |m| m.house_id);
        let mut tenants_by_house = group_by_house(tenants, |t| t.house_id);

        Ok(houses
            .into_iter()
            .map(|house| {
                let managers = managers_by_house.remove(&house.id).unwrap_or_default();
                let tenants = tenants_by_house.remove(&house.id).unwrap_or_default();
                HouseView::assemble(house, managers, tenants)
            })
            .collect())
    }

    /// Get a single house with its dependents.
    pub async fn get(&self, id: i64) -> Result<HouseView, DbError> {
        let mut tx = self.pool.begin().await?;
        let house = Self::find(&mut tx, id).await?;
        let managers = ManagerRepo::for_house(&mut tx, id).await?;
        let tenants = TenantRepo::for_house(&mut tx, id).await?;
        tx.commit().await?;

        Ok(HouseView::assemble(house, managers, tenants))
    }

    /// Managers of an existing house (possibly none).
    pub async fn managers(&self, house_id: i64) -> Result<Vec<Manager>, DbError> {
        let mut tx = self.pool.begin().await?;
        Self::find(&mut tx, house_id).await?;
        let managers = ManagerRepo::for_house(&mut tx, house_id).await?;
        tx.commit().await?;

        Ok(managers)
    }

    async fn find(conn: &mut SqliteConnection, id: i64) -> Result<House, DbError> {
        sqlx::query_as::<_, House>("SELECT id, name, location FROM houses WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?
            .ok_or(DbError::NotFound {
                resource: House::NAME,
            })
    }

    /// Insert a house, returning the stored row.
    pub async fn insert(conn: &mut SqliteConnection, house: &NewHouse) -> Result<House, DbError> {
        let row = sqlx::query_as::<_, House>(
            r#"
            INSERT INTO houses (name, location) VALUES (?, ?)
            RETURNING id, name, location
            "#,
        )
        .bind(&house.name)
        .bind(&house.location)
        .fetch_one(&mut *conn)
        .await?;

        Ok(row)
    }

    /// Delete every house. Fails while any manager or tenant still
    /// references one.
    pub async fn delete_all(conn: &mut SqliteConnection) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM houses").execute(&mut *conn).await?;
        Ok(result.rows_affected())
    }
}

fn group_by_house<T>(rows: Vec<T>, house_id: impl Fn(&T) -> Option<i64>) -> HashMap<i64, Vec<T>> {
    let mut grouped: HashMap<i64, Vec<T>> = HashMap::new();
    for row in rows {
        if let Some(id) = house_id(&row) {
            grouped.entry(id).or_default().push(row);
        }
    }
    grouped
}
