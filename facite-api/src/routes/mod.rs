/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `auth`: Registration and login
/// - `categories`: Category listing, creation and deletion
/// - `tasks`: Task CRUD, listings and status updates

use serde::{Deserialize, Serialize};

pub mod auth;
pub mod categories;
pub mod health;
pub mod tasks;

/// Plain `{message}` body returned by delete and status endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
