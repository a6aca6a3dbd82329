//! House rows and the nested house view
//!
//! The database stores the relationship once, on the manager/tenant side.
//! A house's collections are derived by filtering dependents on `house_id`
//! and serialized with their flat shape (no back-reference to the house).

use serde::Serialize;
use sqlx::FromRow;

use super::validation::required_text;
use super::{Manager, Tenant, ValidationError};

/// House record from database
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct House {
    pub id: i64,
    pub name: String,
    pub location: String,
}

/// House with its managers and tenants, as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HouseView {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub managers: Vec<Manager>,
    pub tenants: Vec<Tenant>,
}

impl HouseView {
    /// Build the view from a house and candidate dependents.
    ///
    /// Dependents that belong to another house (or to none) are dropped.
    pub fn assemble(house: House, managers: Vec<Manager>, tenants: Vec<Tenant>) -> Self {
        let id = house.id;
        Self {
            id,
            name: house.name,
            location: house.location,
            managers: managers
                .into_iter()
                .filter(|m| m.house_id == Some(id))
                .collect(),
            tenants: tenants
                .into_iter()
                .filter(|t| t.house_id == Some(id))
                .collect(),
        }
    }
}

/// Validated input for inserting a house
#[derive(Debug, Clone, PartialEq)]
pub struct NewHouse {
    pub name: String,
    pub location: String,
}

impl NewHouse {
    pub fn new(name: &str, location: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            name: required_text("house name", name)?,
            location: required_text("location", location)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sunny() -> House {
        House {
            id: 1,
            name: "Sunny Apartments".into(),
            location: "Uptown".into(),
        }
    }

    #[test]
    fn assemble_keeps_only_own_dependents() {
        let managers = vec![
            Manager {
                id: 1,
                name: "Alice Johnson".into(),
                salary: 60000.0,
                house_id: Some(1),
            },
            Manager {
                id: 2,
                name: "Bob Williams".into(),
                salary: 75000.0,
                house_id: Some(2),
            },
            Manager {
                id: 4,
                name: "Nobody".into(),
                salary: 1.0,
                house_id: None,
            },
        ];
        let tenants = vec![Tenant {
            id: 1,
            name: "David Lee".into(),
            rent: 1200.0,
            house_id: Some(1),
        }];

        let view = HouseView::assemble(sunny(), managers, tenants);
        assert_eq!(view.managers.len(), 1);
        assert_eq!(view.managers[0].name, "Alice Johnson");
        assert_eq!(view.tenants.len(), 1);
    }

    #[test]
    fn view_shape() {
        let view = HouseView::assemble(sunny(), vec![], vec![]);
        assert_eq!(
            serde_json::to_value(&view).unwrap(),
            json!({
                "id": 1,
                "name": "Sunny Apartments",
                "location": "Uptown",
                "managers": [],
                "tenants": []
            })
        );
    }

    #[test]
    fn nested_dependents_have_no_house_field() {
        let managers = vec![Manager {
            id: 1,
            name: "Alice Johnson".into(),
            salary: 60000.0,
            house_id: Some(1),
        }];
        let value = serde_json::to_value(HouseView::assemble(sunny(), managers, vec![])).unwrap();
        let manager = value["managers"][0].as_object().unwrap();
        assert!(!manager.contains_key("house"));
        assert_eq!(manager["house_id"], 1);
    }

    #[test]
    fn new_house_requires_location() {
        assert!(NewHouse::new("Riverside Villas", "Downtown").is_ok());
        let err = NewHouse::new("Riverside Villas", " ").unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "location" });
    }
}
