//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. Storage is reached through a repository trait object so
//! tests can swap in the in-memory backend.

use std::sync::Arc;

use roster_core::storage::{EmployeeRepository, Result};

use crate::{config::Config, storage::SqliteRepository};

/// Shared application state.
///
/// This is cloned for each request handler. Nothing in here is mutated after
/// startup.
#[derive(Clone)]
pub struct AppState {
    /// Employee repository.
    pub employee_repo: Arc<dyn EmployeeRepository>,
    /// Runtime configuration.
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates a new AppState with the given repository and configuration.
    pub fn new(employee_repo: Arc<dyn EmployeeRepository>, config: Config) -> Self {
        Self {
            employee_repo,
            config: Arc::new(config),
        }
    }

    /// Opens the SQLite store named by `config` and ensures its schema.
    ///
    /// This is the startup routine: it must complete before the router
    /// accepts traffic, and any error here is fatal.
    pub async fn from_config(config: Config) -> Result<Self> {
        tracing::info!(
            path = %config.sqlite_path,
            busy_timeout_ms = config.sqlite_busy_timeout_ms,
            strict_not_found = config.strict_not_found,
            "Initializing SQLite storage"
        );

        let repo = SqliteRepository::new(&config.sqlite_path, config.busy_timeout()).await?;

        Ok(Self::new(Arc::new(repo), config))
    }
}

#[cfg(test)]
impl Default for AppState {
    /// In-memory state with default configuration.
    fn default() -> Self {
        Self::new(
            Arc::new(crate::storage::inmemory::InMemoryRepository::new()),
            Config::default(),
        )
    }
}
