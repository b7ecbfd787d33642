//! # Facite Shared Library
//!
//! This crate contains the persistence layer and authentication primitives
//! used by the Facite API server.
//!
//! ## Module Organization
//!
//! - `models`: Database models (users, categories, tasks) and their queries
//! - `db`: Connection pool and embedded migrations
//! - `auth`: Password hashing, JWT tokens, request authentication and ownership checks

pub mod auth;
pub mod db;
pub mod models;

/// Current version of the Facite shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
