//! Database layer - connection pool, schema and repositories
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections) passed down explicitly, no global handle
//! - Relationships stored once, as `house_id` on managers and tenants
//! - Rely on DB constraints (foreign keys, restrict on delete)
//! - Transactions for multi-step operations

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{create_memory_pool, create_pool, create_pool_with_options, DEFAULT_DATABASE_URL};
pub use repos::*;
pub use schema::run_migrations;
pub use sqlx::SqlitePool;
