//! Core for the roster employee service.
//!
//! Pure data types, validation and the storage contract. Nothing in this
//! crate performs I/O; the server crate provides the concrete backends.

pub mod employee;
pub mod storage;
