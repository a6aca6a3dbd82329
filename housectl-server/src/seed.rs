//! Sample data
//!
//! Wipes all three tables and loads a fixed set of houses, managers and
//! tenants. Runs in a single transaction: a failure leaves the previous
//! contents in place.

use serde::Serialize;
use sqlx::SqlitePool;

use crate::db::{DbError, HouseRepo, ManagerRepo, TenantRepo};
use crate::models::{NewHouse, NewManager, NewTenant, ValidationError};

const HOUSES: &[(&str, &str)] = &[
    ("Sunny Apartments", "Uptown"),
    ("Riverside Villas", "Downtown"),
    ("Mountain View Homes", "Suburbia"),
];

/// (name, salary, index into HOUSES)
const MANAGERS: &[(&str, f64, usize)] = &[
    ("Alice Johnson", 60000.0, 0),
    ("Bob Williams", 75000.0, 1),
    ("Charlie Brown", 55000.0, 2),
];

/// (name, rent, index into HOUSES)
const TENANTS: &[(&str, f64, usize)] = &[
    ("David Lee", 1200.0, 0),
    ("Eve Davis", 1500.0, 0),
    ("Frank Miller", 1800.0, 1),
    ("Grace Wilson", 2000.0, 1),
    ("Henry Moore", 1300.0, 2),
];

/// Counts of rows inserted by a seed run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub houses: usize,
    pub managers: usize,
    pub tenants: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error(transparent)]
    Db(#[from] DbError),

    #[error("invalid seed row: {0}")]
    Invalid(#[from] ValidationError),
}

impl From<sqlx::Error> for SeedError {
    fn from(e: sqlx::Error) -> Self {
        Self::Db(DbError::Sqlx(e))
    }
}

/// Replace the store contents with the sample data set.
pub async fn seed(pool: &SqlitePool) -> Result<SeedReport, SeedError> {
    let mut tx = pool.begin().await?;

    // Dependents first: houses are delete-restricted.
    let tenants_removed = TenantRepo::delete_all(&mut tx).await?;
    let managers_removed = ManagerRepo::delete_all(&mut tx).await?;
    let houses_removed = HouseRepo::delete_all(&mut tx).await?;
    tracing::debug!(
        houses = houses_removed,
        managers = managers_removed,
        tenants = tenants_removed,
        "cleared existing rows"
    );

    let mut house_ids = Vec::with_capacity(HOUSES.len());
    for (name, location) in HOUSES {
        let house = HouseRepo::insert(&mut tx, &NewHouse::new(name, location)?).await?;
        house_ids.push(house.id);
    }

    for (name, salary, house) in MANAGERS {
        let new = NewManager::new(name, *salary, Some(house_ids[*house]))?;
        ManagerRepo::insert(&mut tx, &new).await?;
    }

    for (name, rent, house) in TENANTS {
        let new = NewTenant::new(name, *rent, Some(house_ids[*house]))?;
        TenantRepo::insert(&mut tx, &new).await?;
    }

    tx.commit().await?;

    let report = SeedReport {
        houses: HOUSES.len(),
        managers: MANAGERS.len(),
        tenants: TENANTS.len(),
    };
    tracing::info!(
        houses = report.houses,
        managers = report.managers,
        tenants = report.tenants,
        "seeded database"
    );
    Ok(report)
}
