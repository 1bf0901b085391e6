mod error;
mod requests;
mod types;

pub use error::EmployeeError;
pub use requests::{EmployeeInput, ErrorDetail, MessageResponse};
pub use types::{Employee, EmployeeId};

/// Entity name used in repository errors and log fields.
pub const ENTITY_TYPE: &str = "Employee";
