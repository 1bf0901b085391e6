//! Storage backend implementations.
//!
//! Concrete implementations of [`roster_core::storage::EmployeeRepository`].
//! The server always runs on SQLite; the in-memory backend exists so router
//! tests can run without touching the filesystem.

pub mod sqlite;

#[cfg(test)]
pub mod inmemory;

pub use sqlite::SqliteRepository;
