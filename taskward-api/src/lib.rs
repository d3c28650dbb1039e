//! # Taskward API Server Library
//!
//! HTTP backend for hospital/employee/task tracking. Requests flow
//! handler → service → store: handlers validate input and perform
//! cross-entity checks, services remap store sentinels into the typed
//! error taxonomy, and the store runs one parameterized SQL statement per
//! operation.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `config`: Configuration management
//! - `error`: Error taxonomy and HTTP response mapping
//! - `services`: One domain service per entity
//! - `routes`: API route handlers

pub mod app;
pub mod config;
pub mod error;
pub mod routes;
pub mod services;
