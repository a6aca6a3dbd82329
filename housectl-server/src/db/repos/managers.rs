//! Manager repository

use sqlx::{SqliteConnection, SqlitePool};

use super::DbError;
use crate::models::{Manager, NewManager, Resource};

/// Manager repository
pub struct ManagerRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ManagerRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List every manager in insertion order.
    pub async fn list(&self) -> Result<Vec<Manager>, DbError> {
        let managers = sqlx::query_as::<_, Manager>(
            "SELECT id, name, salary, house_id FROM managers ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(managers)
    }

    /// Get a single manager by id.
    pub async fn get(&self, id: i64) -> Result<Manager, DbError> {
        sqlx::query_as::<_, Manager>(
            "SELECT id, name, salary, house_id FROM managers WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NotFound {
            resource: Manager::NAME,
        })
    }

    /// Managers whose house reference points at `house_id`.
    ///
    /// Does not check that the house exists; see `HouseRepo::managers`.
    pub async fn for_house(conn: &mut SqliteConnection, house_id: i64) -> Result<Vec<Manager>, DbError> {
        let managers = sqlx::query_as::<_, Manager>(
            "SELECT id, name, salary, house_id FROM managers WHERE house_id = ? ORDER BY id",
        )
        .bind(house_id)
        .fetch_all(&mut *conn)
        .await?;

        Ok(managers)
    }

    /// Insert a manager, returning the stored row.
    pub async fn insert(conn: &mut SqliteConnection, manager: &NewManager) -> Result<Manager, DbError> {
        let row = sqlx::query_as::<_, Manager>(
            r#"
            INSERT INTO managers (name, salary, house_id) VALUES (?, ?, ?)
            RETURNING id, name, salary, house_id
            "#,
        )
        .bind(&manager.name)
        .bind(manager.salary)
        .bind(manager.house_id)
        .fetch_one(&mut *conn)
        .await?;

        Ok(row)
    }

    /// Delete every manager. Returns the number of rows removed.
    pub async fn delete_all(conn: &mut SqliteConnection) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM managers").execute(&mut *conn).await?;
        Ok(result.rows_affected())
    }
}
