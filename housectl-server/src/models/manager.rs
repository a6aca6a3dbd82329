//! Manager rows
//!
//! Serialized flat: the owning house is referenced by `house_id` only,
//! never nested, so a house's manager list cannot recurse back into it.

use serde::Serialize;
use sqlx::FromRow;

use super::validation::{amount, required_text};
use super::ValidationError;

/// Manager record from database
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Manager {
    pub id: i64,
    pub name: String,
    pub salary: f64,
    pub house_id: Option<i64>,
}

/// Validated input for inserting a manager
#[derive(Debug, Clone, PartialEq)]
pub struct NewManager {
    pub name: String,
    pub salary: f64,
    pub house_id: Option<i64>,
}

impl NewManager {
    pub fn new(name: &str, salary: f64, house_id: Option<i64>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: required_text("manager name", name)?,
            salary: amount("salary", salary)?,
            house_id,
        })
    }
}
