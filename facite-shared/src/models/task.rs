/// Task model and database operations
///
/// Tasks are filed under a category; ownership of a task is the ownership of
/// its category.
///
/// # Schema
///
/// ```sql
/// CREATE TYPE task_status AS ENUM ('pending', 'completed');
///
/// CREATE TABLE tasks (
///     id SERIAL PRIMARY KEY,
///     name TEXT NOT NULL,
///     description TEXT,
///     category_id INTEGER NOT NULL REFERENCES categories(id) ON DELETE CASCADE,
///     status task_status NOT NULL DEFAULT 'pending',
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     due_date BIGINT NOT NULL
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use facite_shared::models::task::{CreateTask, Task, TaskStatus, UpdateTask};
/// use sqlx::PgPool;
///
/// # async fn example(pool: PgPool, category_id: i32) -> Result<(), sqlx::Error> {
/// let task = Task::create(&pool, CreateTask {
///     name: "Water the plants".to_string(),
///     description: None,
///     category_id,
///     due_date: 1_700_000_000,
///     status: TaskStatus::Pending,
/// }).await?;
///
/// let update = UpdateTask {
///     status: Some(TaskStatus::Completed),
///     ..Default::default()
/// };
/// Task::update(&pool, task.id, update).await?;
/// # Ok(())
/// # }
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::PgPool;
use validator::Validate;

use super::category::Category;

/// Task completion status
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(type_name = "task_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Pending,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Completed => "completed",
        }
    }
}

/// Task record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub category_id: i32,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,

    /// Starts equal to `created_at`; bumped by every update
    pub updated_at: DateTime<Utc>,

    /// Due date as a Unix epoch timestamp
    pub due_date: i64,
}

/// Input for creating a task
#[derive(Debug, Clone)]
pub struct CreateTask {
    pub name: String,
    pub description: Option<String>,
    pub category_id: i32,
    pub due_date: i64,
    pub status: TaskStatus,
}

/// Mutable task fields
///
/// Only these keys are accepted; anything else in the payload is rejected
/// during deserialization. Absent keys leave the column untouched.
/// `description` distinguishes "absent" (`None`) from "set to null"
/// (`Some(None)`); every other field rejects `null`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateTask {
    #[serde(default, deserialize_with = "deserialize_present")]
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_present")]
    pub description: Option<Option<String>>,

    #[serde(default, deserialize_with = "deserialize_present")]
    pub category_id: Option<i32>,

    #[serde(default, deserialize_with = "deserialize_present")]
    pub status: Option<TaskStatus>,

    #[serde(default, deserialize_with = "deserialize_present")]
    pub due_date: Option<i64>,
}

impl UpdateTask {
    /// True if no field would be written
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.category_id.is_none()
            && self.status.is_none()
            && self.due_date.is_none()
    }
}

/// Maps a present key to `Some`, leaving `None` for absent keys
///
/// `null` is only accepted where `T` itself is an `Option`, so the NOT NULL
/// columns reject it.
fn deserialize_present<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// A task with its owning category inlined
#[derive(Debug, Clone, Serialize)]
pub struct TaskWithCategory {
    #[serde(flatten)]
    pub task: Task,

    pub category: Category,
}

impl Task {
    /// Timestamp used for recency ordering
    ///
    /// `updated_at` is never null in storage and starts out equal to
    /// `created_at`, so it already covers never-updated tasks.
    pub fn effective_timestamp(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Inserts a task
    pub async fn create(pool: &PgPool, data: CreateTask) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (name, description, category_id, due_date, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, description, category_id, status,
                      created_at, updated_at, due_date
            "#,
        )
        .bind(data.name)
        .bind(data.description)
        .bind(data.category_id)
        .bind(data.due_date)
        .bind(data.status)
        .fetch_one(pool)
        .await
    }

    /// Finds a task by ID
    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Task>(
            r#"
            SELECT id, name, description, category_id, status,
                   created_at, updated_at, due_date
            FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Lists the tasks in one category, oldest first
    pub async fn list_by_category(
        pool: &PgPool,
        category_id: i32,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Task>(
            r#"
            SELECT id, name, description, category_id, status,
                   created_at, updated_at, due_date
            FROM tasks
            WHERE category_id = $1
            ORDER BY id
            "#,
        )
        .bind(category_id)
        .fetch_all(pool)
        .await
    }

    /// Lists every task across all of a user's categories, most recent first
    ///
    /// See [`sort_by_recency`] for the ordering.
    pub async fn list_by_user(pool: &PgPool, user_id: i32) -> Result<Vec<Self>, sqlx::Error> {
        let mut tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT t.id, t.name, t.description, t.category_id, t.status,
                   t.created_at, t.updated_at, t.due_date
            FROM tasks t
            JOIN categories c ON c.id = t.category_id
            WHERE c.user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        sort_by_recency(&mut tasks);
        Ok(tasks)
    }

    /// Sets the status of a task
    ///
    /// Returns None if the task doesn't exist.
    pub async fn update_status(
        pool: &PgPool,
        id: i32,
        status: TaskStatus,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Task>(
            r#"
            UPDATE tasks
            SET status = $2,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, description, category_id, status,
                      created_at, updated_at, due_date
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_optional(pool)
        .await
    }

    /// Writes the fields present in `data`
    ///
    /// Returns the updated task, or None if it doesn't exist.
    pub async fn update(
        pool: &PgPool,
        id: i32,
        data: UpdateTask,
    ) -> Result<Option<Self>, sqlx::Error> {
        // Build dynamic update query based on which fields are present
        let mut query = String::from("UPDATE tasks SET updated_at = NOW()");
        let mut bind_count = 1;

        if data.name.is_some() {
            bind_count += 1;
            query.push_str(&format!(", name = ${}", bind_count));
        }
        if data.description.is_some() {
            bind_count += 1;
            query.push_str(&format!(", description = ${}", bind_count));
        }
        if data.category_id.is_some() {
            bind_count += 1;
            query.push_str(&format!(", category_id = ${}", bind_count));
        }
        if data.status.is_some() {
            bind_count += 1;
            query.push_str(&format!(", status = ${}", bind_count));
        }
        if data.due_date.is_some() {
            bind_count += 1;
            query.push_str(&format!(", due_date = ${}", bind_count));
        }

        query.push_str(
            " WHERE id = $1 RETURNING id, name, description, category_id, status, created_at, updated_at, due_date",
        );

        let mut q = sqlx::query_as::<_, Task>(&query).bind(id);

        if let Some(name) = data.name {
            q = q.bind(name);
        }
        if let Some(description) = data.description {
            q = q.bind(description);
        }
        if let Some(category_id) = data.category_id {
            q = q.bind(category_id);
        }
        if let Some(status) = data.status {
            q = q.bind(status);
        }
        if let Some(due_date) = data.due_date {
            q = q.bind(due_date);
        }

        q.fetch_optional(pool).await
    }

    /// Deletes a task; returns false if it didn't exist
    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// Orders tasks most recent first
///
/// Descending by [`Task::effective_timestamp`], ties broken by descending id.
pub fn sort_by_recency(tasks: &mut [Task]) {
    tasks.sort_by(|a, b| {
        b.effective_timestamp()
            .cmp(&a.effective_timestamp())
            .then_with(|| b.id.cmp(&a.id))
    });
}
