//! Tenant rows

use serde::Serialize;
use sqlx::FromRow;

use super::validation::{amount, required_text};
use super::ValidationError;

/// Tenant record from database
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Tenant {
    pub id: i64,
    pub name: String,
    pub rent: f64,
    pub house_id: Option<i64>,
}

/// Validated input for inserting a tenant
#[derive(Debug, Clone, PartialEq)]
pub struct NewTenant {
    pub name: String,
    pub rent: f64,
    pub house_id: Option<i64>,
}

impl NewTenant {
    pub fn new(name: &str, rent: f64, house_id: Option<i64>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: required_text("tenant name", name)?,
            rent: amount("rent", rent)?,
            house_id,
        })
    }
}
