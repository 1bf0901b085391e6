use async_trait::async_trait;

use crate::employee::{Employee, EmployeeId, EmployeeInput};

use super::Result;

/// Repository for employee records.
///
/// Implementations perform exactly one statement per call. Callers are
/// expected to validate inputs before handing them over.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Inserts a new employee and returns the id assigned by storage.
    async fn create_employee(&self, input: &EmployeeInput) -> Result<EmployeeId>;

    /// Lists every stored employee.
    async fn list_employees(&self) -> Result<Vec<Employee>>;

    /// Gets an employee by id.
    async fn get_employee(&self, id: EmployeeId) -> Result<Option<Employee>>;

    /// Replaces all fields of an employee.
    ///
    /// Returns `false` when no row matched `id`; that is not an error at this layer.
    async fn update_employee(&self, id: EmployeeId, input: &EmployeeInput) -> Result<bool>;

    /// Deletes an employee. Returns `false` when no row matched `id`.
    async fn delete_employee(&self, id: EmployeeId) -> Result<bool>;

    /// Checks that the backend is reachable.
    async fn ping(&self) -> Result<()>;
}
