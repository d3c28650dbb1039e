//! # Taskward Shared Library
//!
//! This crate contains the types and persistence layer shared by the
//! Taskward API server and its tests.
//!
//! ## Module Organization
//!
//! - `models`: Canonical entity records and closed enum types
//! - `store`: Persistence layer over PostgreSQL with store-level sentinels
//! - `db`: Connection pool construction and lifecycle

pub mod db;
pub mod models;
pub mod store;

/// Current version of the Taskward shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
