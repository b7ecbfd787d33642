/// Category endpoints
///
/// # Endpoints
///
/// - `GET /api/categories/:userId` - List the caller's categories
/// - `POST /api/categories/AddCategory` - Create a category
/// - `DELETE /api/categories/DeleteCategory/:categoryId` - Delete a category and its tasks

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
        authorization::{authorize_category, require_self},
        middleware::AuthContext,
    },
    models::{
        category::{Category, CreateCategory},
        user::User,
    },
};
use serde::Deserialize;
use validator::Validate;

/// Create category request
#[derive(Debug, Deserialize, Validate)]
pub struct AddCategoryRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    /// Display colour, e.g. `#ff0000`
    #[validate(length(min = 1, max = 32, message = "Color must be 1-32 characters"))]
    pub color: String,

    /// Owner, defaults to the caller
    #[serde(rename = "userId")]
    pub user_id: Option<i32>,
}

/// Lists a user's categories ordered by id
///
/// # Errors
///
/// - `403 Forbidden`: `userId` is not the caller
/// - `404 Not Found`: User doesn't exist
pub async fn list_categories(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(user_id): Path<i32>,
) -> ApiResult<Json<Vec<Category>>> {
    require_self(&auth, user_id)?;

    // A valid token can outlive its user
    if !User::exists(&state.db, user_id).await? {
        return Err(ApiError::NotFound("User not found".to_string()));
    }

    let categories = Category::list_by_user(&state.db, user_id).await?;

    Ok(Json(categories))
}

/// Creates a category
///
/// # Endpoint
///
/// ```text
/// POST /api/categories/AddCategory
///
/// { "name": "Work", "color": "#ff0000" }
/// ```
///
/// # Errors
///
/// - `403 Forbidden`: `userId` given and not the caller
/// - `404 Not Found`: User doesn't exist
/// - `422 Unprocessable Entity`: Validation failed
pub async fn add_category(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(req): Json<AddCategoryRequest>,
) -> ApiResult<(StatusCode, Json<Category>)> {
    req.validate()?;

    let user_id = req.user_id.unwrap_or(auth.user_id);
    require_self(&auth, user_id)?;

    if !User::exists(&state.db, user_id).await? {
        return Err(ApiError::NotFound("User not found".to_string()));
    }

    let category = Category::create(
        &state.db,
        CreateCategory {
            name: req.name,
            color: req.color,
            user_id,
        },
    )
    .await?;

    tracing::info!(user_id, category_id = category.id, "Category created");

    Ok((StatusCode::CREATED, Json(category)))
}

/// Deletes a category; its tasks go with it
///
/// # Errors
///
/// - `403 Forbidden`: Category belongs to another user
/// - `404 Not Found`: Category doesn't exist
pub async fn delete_category(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(category_id): Path<i32>,
) -> ApiResult<Json<MessageResponse>> {
    authorize_category(&state.db, &auth, category_id).await?;

    if !Category::delete(&state.db, category_id).await? {
        // Deleted concurrently
        return Err(ApiError::NotFound("Category not found".to_string()));
    }

    tracing::info!(user_id = auth.user_id, category_id, "Category deleted");

    Ok(Json(MessageResponse::new("Category deleted successfully")))
}
