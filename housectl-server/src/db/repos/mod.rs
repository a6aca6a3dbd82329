//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Reads go straight to the store, nothing is cached
//! - List operations use a fixed number of queries (no N+1)
//! - Writes take a connection so callers can wrap them in a transaction

pub mod houses;
pub mod managers;
pub mod tenants;

pub use houses::HouseRepo;
pub use managers::ManagerRepo;
pub use tenants::TenantRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("{resource} not found")]
    NotFound { resource: &'static str },
}
