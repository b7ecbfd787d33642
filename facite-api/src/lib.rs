//! # Facite API Server Library
//!
//! HTTP surface of the Facite task service.
//!
//! ## Modules
//!
//! - `app`: Application state, router builder and the JWT layer
//! - `config`: Configuration from environment variables
//! - `error`: Error handling and HTTP response mapping
//! - `routes`: Route handlers (auth, categories, tasks, health)

pub mod app;
pub mod config;
pub mod error;
pub mod routes;
