/// Application state and router builder
///
/// This module defines the shared application state and provides a function
/// to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use taskboard_api::{app::AppState, config::Config};
/// use taskboard_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = create_pool(DatabaseConfig {
///     url: config.database.url.clone(),
///     max_connections: config.database.max_connections,
///     ..Default::default()
/// })
/// .await?;
/// let state = AppState::new(pool, config);
/// let app = taskboard_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::config::Config;
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::SqlitePool;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// This is cloned for each request handler via Axum's `State` extractor.
/// Uses Arc internally for cheap cloning. The pool is the only shared
/// resource; every handler borrows a connection for the duration of one
/// call.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: SqlitePool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── GET  /                             # Static welcome message
/// ├── GET  /health                       # Health check
/// ├── GET    /user/                      # List users
/// ├── GET    /user/:id                   # Get user
/// ├── GET    /user/:id/tasks             # List a user's tasks
/// ├── POST   /user/create                # Create user
/// ├── PUT    /user/update/:id            # Update user
/// ├── DELETE /user/delete/:id            # Delete user (cascades to tasks)
/// ├── GET    /task/                      # List tasks
/// ├── GET    /task/:id                   # Get task
/// ├── POST   /task/create?user_id=N      # Create task for a user
/// ├── PUT    /task/update/:id            # Update task
/// └── DELETE /task/delete/:id            # Delete task
/// ```
///
/// The list endpoints live at the trailing-slash paths `/user/` and
/// `/task/`. Routes are registered flat rather than via `nest`: a nested
/// router's `"/"` entry only matches the bare prefix, so `GET /user/`
/// would not resolve.
///
/// # Middleware Stack
///
/// 1. Logging (tower-http TraceLayer)
/// 2. CORS (permissive; there is no auth surface to protect)
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    Router::new()
        .route("/", get(routes::root::welcome))
        .route("/health", get(routes::health::health_check))
        .route("/user/", get(routes::user::all_users))
        .route("/user/:user_id", get(routes::user::user_by_id))
        .route("/user/:user_id/tasks", get(routes::user::tasks_by_user_id))
        .route("/user/create", post(routes::user::create_user))
        .route("/user/update/:user_id", put(routes::user::update_user))
        .route("/user/delete/:user_id", delete(routes::user::delete_user))
        .route("/task/", get(routes::task::all_tasks))
        .route("/task/:task_id", get(routes::task::task_by_id))
        .route("/task/create", post(routes::task::create_task))
        .route("/task/update/:task_id", put(routes::task::update_task))
        .route("/task/delete/:task_id", delete(routes::task::delete_task))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
