//! SQLite repository implementation.
//!
//! Implements [`EmployeeRepository`] from `roster_core::storage` using SQLite.
//! Every call opens its own connection, runs one statement and closes the
//! connection again; nothing is shared between requests except the file path.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use roster_core::employee::{Employee, EmployeeId, EmployeeInput, ENTITY_TYPE};
use roster_core::storage::{EmployeeRepository, RepositoryError, Result};

use super::conversions::row_to_employee;
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based employee repository.
#[derive(Debug, Clone)]
pub struct SqliteRepository {
    path: PathBuf,
    busy_timeout: Duration,
}

impl SqliteRepository {
    /// Creates a repository backed by the database file at `path`.
    ///
    /// The file is created if it doesn't exist and the schema is ensured
    /// before returning, so a repository that constructs successfully is
    /// ready to serve requests.
    pub async fn new(path: impl AsRef<Path>, busy_timeout: Duration) -> Result<Self> {
        let repo = Self {
            path: path.as_ref().to_path_buf(),
            busy_timeout,
        };

        repo.ensure_schema().await?;

        Ok(repo)
    }

    /// Path of the backing database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the employees table if it is missing. Safe to call repeatedly.
    pub async fn ensure_schema(&self) -> Result<()> {
        self.with_connection(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| map_tokio_rusqlite_error(e, ENTITY_TYPE))?;

        tracing::info!(path = %self.path().display(), "Employee schema ready");
        Ok(())
    }

    /// Opens a fresh connection, runs `f` on it and closes the connection.
    async fn with_connection<F, R>(&self, f: F) -> tokio_rusqlite::Result<R>
    where
        F: FnOnce(&mut rusqlite::Connection) -> tokio_rusqlite::Result<R> + Send + 'static,
        R: Send + 'static,
    {
        let conn = Connection::open(&self.path).await?;
        let busy_timeout = self.busy_timeout;

        let result = conn
            .call(move |conn| {
                conn.busy_timeout(busy_timeout).map_err(wrap_err)?;
                f(conn)
            })
            .await;

        if let Err(e) = conn.close().await {
            tracing::warn!(
                error = %e,
                path = %self.path().display(),
                "Failed to close SQLite connection"
            );
        }

        result
    }
}

#[async_trait]
impl EmployeeRepository for SqliteRepository {
    async fn create_employee(&self, input: &EmployeeInput) -> Result<EmployeeId> {
        let name = input.name.clone();
        let position = input.position.clone();
        let department = input.department.clone();

        let id = self
            .with_connection(move |conn| {
                conn.execute(
                    schema::INSERT_EMPLOYEE,
                    rusqlite::params![name, position, department],
                )
                .map_err(wrap_err)?;
                Ok(conn.last_insert_rowid())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ENTITY_TYPE))?;

        tracing::debug!(employee_id = id, "Inserted employee row");
        Ok(id)
    }

    async fn list_employees(&self) -> Result<Vec<Employee>> {
        self.with_connection(|conn| {
            let mut stmt = conn.prepare(schema::SELECT_EMPLOYEES).map_err(wrap_err)?;
            let rows = stmt.query_map([], row_to_employee).map_err(wrap_err)?;

            let mut employees = Vec::new();
            for row_result in rows {
                employees.push(row_result.map_err(wrap_err)?);
            }
            Ok(employees)
        })
        .await
        .map_err(|e| map_tokio_rusqlite_error(e, ENTITY_TYPE))
    }

    async fn get_employee(&self, id: EmployeeId) -> Result<Option<Employee>> {
        self.with_connection(move |conn| {
            let mut stmt = conn
                .prepare(schema::SELECT_EMPLOYEE_BY_ID)
                .map_err(wrap_err)?;
            match stmt.query_row([id], row_to_employee) {
                Ok(employee) => Ok(Some(employee)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(wrap_err(e)),
            }
        })
        .await
        .map_err(|e| map_tokio_rusqlite_error(e, ENTITY_TYPE))
    }

    async fn update_employee(&self, id: EmployeeId, input: &EmployeeInput) -> Result<bool> {
        let name = input.name.clone();
        let position = input.position.clone();
        let department = input.department.clone();

        let rows = self
            .with_connection(move |conn| {
                conn.execute(
                    schema::UPDATE_EMPLOYEE,
                    rusqlite::params![id, name, position, department],
                )
                .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ENTITY_TYPE))?;

        tracing::debug!(employee_id = id, rows, "Updated employee row");
        Ok(rows > 0)
    }

    async fn delete_employee(&self, id: EmployeeId) -> Result<bool> {
        let rows = self
            .with_connection(move |conn| {
                conn.execute(schema::DELETE_EMPLOYEE, [id])
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ENTITY_TYPE))?;

        tracing::debug!(employee_id = id, rows, "Deleted employee row");
        Ok(rows > 0)
    }

    async fn ping(&self) -> Result<()> {
        self.with_connection(|conn| {
            conn.query_row(schema::PING, [], |row| row.get::<_, i64>(0))
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| match e {
            tokio_rusqlite::Error::Rusqlite(err) => RepositoryError::ConnectionFailed(err.to_string()),
            other => map_tokio_rusqlite_error(other, ENTITY_TYPE),
        })
    }
}
