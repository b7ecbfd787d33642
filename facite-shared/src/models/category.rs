/// Category model and database operations
///
/// A category is a named, colored list of tasks owned by one user. Every user
/// gets a "Personal" category at registration.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE categories (
///     id SERIAL PRIMARY KEY,
///     name TEXT NOT NULL,
///     color TEXT NOT NULL,
///     user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE
/// );
/// ```
///
/// Deleting a category deletes its tasks (`tasks.category_id ... ON DELETE CASCADE`).

use serde::{Deserialize, Serialize};
use sqlx::{PgExecutor, PgPool};

/// Name of the category created for every new user
pub const DEFAULT_CATEGORY_NAME: &str = "Personal";

/// Color of the category created for every new user
pub const DEFAULT_CATEGORY_COLOR: &str = "#000000";

/// Category owned by a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: i32,
    pub name: String,

    /// Display hint, usually a hex color
    pub color: String,

    /// Owning user
    pub user_id: i32,
}

/// Input for creating a category
#[derive(Debug, Clone)]
pub struct CreateCategory {
    pub name: String,
    pub color: String,
    pub user_id: i32,
}

impl CreateCategory {
    /// The "Personal" category every user starts with
    pub fn default_for(user_id: i32) -> Self {
        Self {
            name: DEFAULT_CATEGORY_NAME.to_string(),
            color: DEFAULT_CATEGORY_COLOR.to_string(),
            user_id,
        }
    }
}

impl Category {
    /// Inserts a category
    ///
    /// The foreign key rejects unknown `user_id`s.
    pub async fn create<'e, E>(executor: E, data: CreateCategory) -> Result<Self, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (name, color, user_id)
            VALUES ($1, $2, $3)
            RETURNING id, name, color, user_id
            "#,
        )
        .bind(data.name)
        .bind(data.color)
        .bind(data.user_id)
        .fetch_one(executor)
        .await
    }

    /// Finds a category by ID
    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Category>(
            "SELECT id, name, color, user_id FROM categories WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Lists a user's categories, oldest first
    pub async fn list_by_user(pool: &PgPool, user_id: i32) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, color, user_id
            FROM categories
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Deletes a category and, through the cascade, its tasks
    ///
    /// Returns false if no such category existed.
    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
