/// Task endpoints
///
/// Every handler here runs behind the JWT layer. Tasks are owned through
/// their category, so ownership is always checked on the category.
///
/// # Endpoints
///
/// - `POST /api/tasks/AddTask` - Create a task
/// - `GET /api/tasks/:userId` - All of a user's tasks, most recent first
/// - `POST /api/tasks/updateStatus` - Set a task's status
/// - `DELETE /api/tasks/deleteTask/:taskId` - Delete a task
/// - `GET /api/tasks/category/:categoryId` - Tasks in one category
/// - `GET /api/tasks/id/:taskId` - One task with its category
/// - `PUT /api/tasks/id/:taskId` - Update selected task fields

use super::MessageResponse;
use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use facite_shared::{
    auth::{
        authorization::{authorize_category, authorize_task, require_ownership, require_self},
        middleware::AuthContext,
    },
    models::{
        category::Category,
        task::{CreateTask, Task, TaskStatus, TaskWithCategory, UpdateTask},
        user::User,
    },
};
use serde::Deserialize;
use validator::Validate;

/// Create task request
#[derive(Debug, Deserialize, Validate)]
pub struct AddTaskRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    pub description: Option<String>,

    pub category_id: i32,

    /// Unix timestamp
    pub due_date: i64,

    #[serde(default)]
    pub status: TaskStatus,
}

/// Status update request
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    #[serde(rename = "taskId")]
    pub task_id: i32,

    pub status: TaskStatus,
}

/// Creates a task in one of the caller's categories
///
/// # Endpoint
///
/// ```text
/// POST /api/tasks/AddTask
///
/// {
///   "name": "Laundry",
///   "description": "Whites only",
///   "category_id": 1,
///   "due_date": 1735689600
/// }
/// ```
///
/// # Errors
///
/// - `403 Forbidden`: Category belongs to another user
/// - `404 Not Found`: Category doesn't exist
/// - `422 Unprocessable Entity`: Validation failed
pub async fn add_task(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(req): Json<AddTaskRequest>,
) -> ApiResult<(StatusCode, Json<Task>)> {
    req.validate()?;

    authorize_category(&state.db, &auth, req.category_id).await?;

    let task = Task::create(
        &state.db,
        CreateTask {
            name: req.name,
            description: req.description,
            category_id: req.category_id,
            due_date: req.due_date,
            status: req.status,
        },
    )
    .await?;

    tracing::info!(
        user_id = auth.user_id,
        task_id = task.id,
        category_id = task.category_id,
        "Task created"
    );

    Ok((StatusCode::CREATED, Json(task)))
}

/// Lists every task in every category the user owns
///
/// Ordered by `updated_at` descending, then id descending.
pub async fn list_tasks_for_user(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(user_id): Path<i32>,
) -> ApiResult<Json<Vec<Task>>> {
    require_self(&auth, user_id)?;

    if !User::exists(&state.db, user_id).await? {
        return Err(ApiError::NotFound("User not found".to_string()));
    }

    let tasks = Task::list_by_user(&state.db, user_id).await?;

    Ok(Json(tasks))
}

/// Lists the tasks of one category
///
/// An unknown category yields an empty list rather than 404.
pub async fn list_tasks_for_category(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(category_id): Path<i32>,
) -> ApiResult<Json<Vec<Task>>> {
    let Some(category) = Category::find_by_id(&state.db, category_id).await? else {
        return Ok(Json(Vec::new()));
    };
    require_ownership(&auth, category.user_id)?;

    let tasks = Task::list_by_category(&state.db, category_id).await?;

    Ok(Json(tasks))
}

/// Fetches a task with its category under `category`
pub async fn get_task(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(task_id): Path<i32>,
) -> ApiResult<Json<TaskWithCategory>> {
    let (task, category) = authorize_task(&state.db, &auth, task_id).await?;

    Ok(Json(TaskWithCategory { task, category }))
}

/// Sets a task's status
///
/// # Endpoint
///
/// ```text
/// POST /api/tasks/updateStatus
///
/// { "taskId": 7, "status": "completed" }
/// ```
pub async fn update_task_status(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(req): Json<UpdateStatusRequest>,
) -> ApiResult<Json<MessageResponse>> {
    authorize_task(&state.db, &auth, req.task_id).await?;

    Task::update_status(&state.db, req.task_id, req.status)
        .await?
        .ok_or_else(|| ApiError::NotFound("Task not found".to_string()))?;

    tracing::info!(
        user_id = auth.user_id,
        task_id = req.task_id,
        status = req.status.as_str(),
        "Task status updated"
    );

    Ok(Json(MessageResponse::new("Task status updated successfully")))
}

/// Updates the fields present in the body
///
/// Accepted keys: `name`, `description` (may be null), `category_id`,
/// `status`, `due_date`. Any other key is rejected with 422. Moving the task
/// requires owning the target category too.
pub async fn update_task(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(task_id): Path<i32>,
    Json(update): Json<UpdateTask>,
) -> ApiResult<Json<Task>> {
    update.validate()?;

    let (task, _) = authorize_task(&state.db, &auth, task_id).await?;

    if update.is_empty() {
        return Ok(Json(task));
    }

    if let Some(category_id) = update.category_id {
        if category_id != task.category_id {
            authorize_category(&state.db, &auth, category_id).await?;
        }
    }

    let updated = Task::update(&state.db, task_id, update)
        .await?
        .ok_or_else(|| ApiError::NotFound("Task not found".to_string()))?;

    tracing::info!(user_id = auth.user_id, task_id, "Task updated");

    Ok(Json(updated))
}

/// Deletes a task
pub async fn delete_task(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(task_id): Path<i32>,
) -> ApiResult<Json<MessageResponse>> {
    authorize_task(&state.db, &auth, task_id).await?;

    if !Task::delete(&state.db, task_id).await? {
        return Err(ApiError::NotFound("Task not found".to_string()));
    }

    tracing::info!(user_id = auth.user_id, task_id, "Task deleted");

    Ok(Json(MessageResponse::new("Task deleted successfully")))
}
