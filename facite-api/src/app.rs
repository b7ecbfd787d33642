/// Application state and router builder
///
/// This module defines the shared application state and provides
/// a function to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use facite_api::{app::AppState, config::Config};
/// use sqlx::PgPool;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = PgPool::connect(&config.database.url).await?;
/// let state = AppState::new(pool, config);
/// let app = facite_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::{config::Config, error::ApiError};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
    routing::{delete, get, post},
    Router,
};
use facite_shared::auth::{middleware::authenticate, password::PasswordConfig};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Shared application state
///
/// This is cloned for each request handler via Axum's `State` extractor.
/// Uses Arc internally for cheap cloning.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: PgPool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }

    /// Gets JWT secret for token operations
    pub fn jwt_secret(&self) -> &str {
        &self.config.jwt.secret
    }

    /// Gets the Argon2 cost used for new password hashes
    pub fn password_config(&self) -> &PasswordConfig {
        &self.config.password
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── GET /health                              # Health check (public)
/// └── /api/
///     ├── POST   /register                     # public
///     ├── POST   /login                        # public
///     ├── /categories/                         # bearer token
///     │   ├── GET    /:userId
///     │   ├── POST   /AddCategory
///     │   └── DELETE /DeleteCategory/:categoryId
///     └── /tasks/                              # bearer token
///         ├── POST   /AddTask
///         ├── GET    /:userId
///         ├── POST   /updateStatus
///         ├── DELETE /deleteTask/:taskId
///         ├── GET    /category/:categoryId
///         ├── GET    /id/:taskId
///         └── PUT    /id/:taskId
/// ```
///
/// # Middleware Stack
///
/// 1. Logging (tower-http TraceLayer) on every route
/// 2. Authentication on the category and task routes
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    // Health check (public, no auth)
    let health_routes = Router::new().route("/health", get(routes::health::health_check));

    // Auth routes (public, no auth required)
    let auth_routes = Router::new()
        .route("/register", post(routes::auth::register))
        .route("/login", post(routes::auth::login));

    let category_routes = Router::new()
        .route("/:user_id", get(routes::categories::list_categories))
        .route("/AddCategory", post(routes::categories::add_category))
        .route(
            "/DeleteCategory/:category_id",
            delete(routes::categories::delete_category),
        );

    let task_routes = Router::new()
        .route("/AddTask", post(routes::tasks::add_task))
        .route("/:user_id", get(routes::tasks::list_tasks_for_user))
        .route("/updateStatus", post(routes::tasks::update_task_status))
        .route("/deleteTask/:task_id", delete(routes::tasks::delete_task))
        .route(
            "/category/:category_id",
            get(routes::tasks::list_tasks_for_category),
        )
        .route(
            "/id/:task_id",
            get(routes::tasks::get_task).put(routes::tasks::update_task),
        );

    // Everything under these prefixes needs a bearer token
    let protected_routes = Router::new()
        .nest("/categories", category_routes)
        .nest("/tasks", task_routes)
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            jwt_auth_layer,
        ));

    let api_routes = Router::new().merge(auth_routes).merge(protected_routes);

    Router::new()
        .merge(health_routes)
        .nest("/api", api_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

/// JWT authentication middleware layer
///
/// Validates the bearer token and injects the caller's `AuthContext` into
/// request extensions.
async fn jwt_auth_layer(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_context = authenticate(req.headers(), state.jwt_secret())?;

    tracing::debug!(user_id = auth_context.user_id, "Authenticated request");
    req.extensions_mut().insert(auth_context);

    Ok(next.run(req).await)
}
