//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use roster_core::employee::{Employee, EmployeeId, EmployeeInput};
use roster_core::storage::{EmployeeRepository, Result};

#[derive(Debug, Default)]
struct Tables {
    /// Last id handed out. Ids are never reused, matching `AUTOINCREMENT`.
    last_id: EmployeeId,
    employees: BTreeMap<EmployeeId, Employee>,
}

/// In-memory storage backend for testing.
///
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryRepository {
    async fn create_employee(&self, input: &EmployeeInput) -> Result<EmployeeId> {
        let mut tables = self.tables.write().await;
        tables.last_id += 1;
        let id = tables.last_id;
        tables
            .employees
            .insert(id, Employee::from_input(id, input.clone()));
        Ok(id)
    }

    async fn list_employees(&self) -> Result<Vec<Employee>> {
        let tables = self.tables.read().await;
        Ok(tables.employees.values().cloned().collect())
    }

    async fn get_employee(&self, id: EmployeeId) -> Result<Option<Employee>> {
        let tables = self.tables.read().await;
        Ok(tables.employees.get(&id).cloned())
    }

    async fn update_employee(&self, id: EmployeeId, input: &EmployeeInput) -> Result<bool> {
        let mut tables = self.tables.write().await;
        match tables.employees.get_mut(&id) {
            Some(employee) => {
                employee.replace_with(input.clone());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_employee(&self, id: EmployeeId) -> Result<bool> {
        let mut tables = self.tables.write().await;
        Ok(tables.employees.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> EmployeeInput {
        EmployeeInput::new("Ada", "Engineer", "R&D")
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = InMemoryRepository::new();

        let id = repo.create_employee(&ada()).await.unwrap();

        assert_eq!(
            repo.get_employee(id).await.unwrap(),
            Some(Employee::from_input(id, ada()))
        );
    }

    #[tokio::test]
    async fn test_get_nonexistent() {
        let repo = InMemoryRepository::new();
        assert!(repo.get_employee(1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_ids_are_not_reused() {
        let repo = InMemoryRepository::new();

        let first = repo.create_employee(&ada()).await.unwrap();
        repo.delete_employee(first).await.unwrap();
        let second = repo.create_employee(&ada()).await.unwrap();

        assert_eq!(first, 1);
        assert_eq!(second, 2);
    }

    #[tokio::test]
    async fn test_update_and_delete_report_missing_rows() {
        let repo = InMemoryRepository::new();

        assert!(!repo.update_employee(5, &ada()).await.unwrap());
        assert!(!repo.delete_employee(5).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let repo = InMemoryRepository::new();
        let id = repo.create_employee(&ada()).await.unwrap();
        let replacement = EmployeeInput::new("Grace", "Admiral", "Navy");

        assert!(repo.update_employee(id, &replacement).await.unwrap());

        assert_eq!(
            repo.list_employees().await.unwrap(),
            vec![Employee::from_input(id, replacement)]
        );
    }
}
