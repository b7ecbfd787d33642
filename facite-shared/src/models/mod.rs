/// Database models for Facite
///
/// This module contains the three persisted record types and their queries.
///
/// # Models
///
/// - `user`: User accounts (login by email)
/// - `category`: Colored task lists owned by a user
/// - `task`: Tasks filed under a category
///
/// # Relationships
///
/// ```text
/// users 1 ──< categories 1 ──< tasks
/// ```
///
/// Both foreign keys are `ON DELETE CASCADE`.

pub mod category;
pub mod task;
pub mod user;
