/// Ownership checks
///
/// Every category and task belongs, directly or through its category, to one
/// user. Handlers call these helpers before reading or writing a resource so
/// that path parameters are never trusted on their own.
///
/// # Example
///
/// ```no_run
/// use facite_shared::auth::authorization::{authorize_task, AuthzError};
/// use facite_shared::auth::middleware::AuthContext;
/// use sqlx::PgPool;
///
/// async fn load(pool: &PgPool, auth: &AuthContext, task_id: i32) -> Result<(), AuthzError> {
///     let (task, category) = authorize_task(pool, auth, task_id).await?;
///     assert_eq!(category.user_id, auth.user_id);
///     assert_eq!(task.category_id, category.id);
///     Ok(())
/// }
/// ```

use sqlx::PgPool;

use super::middleware::AuthContext;
use crate::models::{category::Category, task::Task};

/// Error type for authorization checks
#[derive(Debug, thiserror::Error)]
pub enum AuthzError {
    /// The resource doesn't exist
    #[error("{0} not found")]
    NotFound(&'static str),

    /// The resource belongs to someone else
    #[error("Not authorized to access this resource")]
    NotAuthorized,

    /// Database error
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

/// Checks that the caller is the user named by `user_id`
pub fn require_self(auth: &AuthContext, user_id: i32) -> Result<(), AuthzError> {
    require_ownership(auth, user_id)
}

/// Checks that the caller owns a resource whose owner is `resource_owner_id`
pub fn require_ownership(auth: &AuthContext, resource_owner_id: i32) -> Result<(), AuthzError> {
    if auth.user_id != resource_owner_id {
        return Err(AuthzError::NotAuthorized);
    }

    Ok(())
}

/// Loads a category and checks the caller owns it
///
/// # Errors
///
/// - `NotFound("Category")` if it doesn't exist
/// - `NotAuthorized` if it belongs to another user
pub async fn authorize_category(
    pool: &PgPool,
    auth: &AuthContext,
    category_id: i32,
) -> Result<Category, AuthzError> {
    let category = Category::find_by_id(pool, category_id)
        .await?
        .ok_or(AuthzError::NotFound("Category"))?;

    require_ownership(auth, category.user_id)?;

    Ok(category)
}

/// Loads a task plus its category and checks the caller owns the category
///
/// # Errors
///
/// - `NotFound("Task")` if the task doesn't exist
/// - `NotAuthorized` if its category belongs to another user
pub async fn authorize_task(
    pool: &PgPool,
    auth: &AuthContext,
    task_id: i32,
) -> Result<(Task, Category), AuthzError> {
    let task = Task::find_by_id(pool, task_id)
        .await?
        .ok_or(AuthzError::NotFound("Task"))?;

    // The cascade means a task can't outlive its category
    let category = Category::find_by_id(pool, task.category_id)
        .await?
        .ok_or(AuthzError::NotFound("Task"))?;

    require_ownership(auth, category.user_id)?;

    Ok((task, category))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth(user_id: i32) -> AuthContext {
        AuthContext {
            user_id,
            email: "ada@example.com".to_string(),
            username: "ada".to_string(),
        }
    }

    #[test]
    fn test_require_self() {
        assert!(require_self(&auth(4), 4).is_ok());
        assert!(matches!(require_self(&auth(4), 5), Err(AuthzError::NotAuthorized)));
    }

    #[test]
    fn test_require_ownership() {
        assert!(require_ownership(&auth(1), 1).is_ok());
        assert!(require_ownership(&auth(1), 2).is_err());
    }

    #[test]
    fn test_authz_error_display() {
        assert_eq!(AuthzError::NotFound("Task").to_string(), "Task not found");
        assert_eq!(AuthzError::NotFound("Category").to_string(), "Category not found");
        assert!(AuthzError::NotAuthorized.to_string().contains("Not authorized"));
    }
}
