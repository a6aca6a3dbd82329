//! Route handlers organized by resource

pub mod health;
pub mod houses;
pub mod index;
pub mod managers;
pub mod tenants;
