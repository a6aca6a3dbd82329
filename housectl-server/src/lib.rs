//! housectl-server: read-only HTTP API over houses, managers and tenants
//!
//! Houses own managers and tenants through a `house_id` foreign key on
//! the dependent side. Every request reads the store directly; there is
//! no cache and no write route.

pub mod db;
pub mod http;
pub mod models;
pub mod seed;

pub use db::{create_pool, run_migrations, DbError};
pub use http::{run_server, ServerConfig};
pub use seed::{seed, SeedReport};
