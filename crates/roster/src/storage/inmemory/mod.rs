//! In-memory storage backend for testing.
//!
//! This module provides an in-memory implementation of the repository trait
//! that stores all data in a `BTreeMap` behind a `tokio::sync::RwLock`.
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryRepository;
