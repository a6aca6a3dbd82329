//! Domain models with validation at construction
//!
//! Row types come straight from the store. `New*` inputs are validated
//! when created; invalid input returns ValidationError, not panic.

pub mod validation;
pub mod house;
pub mod manager;
pub mod tenant;

pub use validation::ValidationError;
pub use house::{House, HouseView, NewHouse};
pub use manager::{Manager, NewManager};
pub use tenant::{NewTenant, Tenant};

/// An entity addressable by primary key.
pub trait Resource {
    /// Name used in "<name> not found" messages.
    const NAME: &'static str;
}

impl Resource for House {
    const NAME: &'static str = "House";
}

impl Resource for Manager {
    const NAME: &'static str = "Manager";
}

impl Resource for Tenant {
    const NAME: &'static str = "Tenant";
}
