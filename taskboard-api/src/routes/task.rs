/// Task CRUD endpoints
///
/// # Endpoints
///
/// - `GET /task/` - List all tasks
/// - `GET /task/:id` - Get one task
/// - `POST /task/create?user_id=N` - Create a task owned by user N
/// - `PUT /task/update/:id` - Update a task
/// - `DELETE /task/delete/:id` - Delete a task
///
/// The owning user id travels as a query parameter on create, not as a body
/// field, and cannot be changed afterwards: the update payload carries only
/// content fields.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    routes::Ack,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use taskboard_shared::models::{
    task::{CreateTask, Task, UpdateTask},
    user::User,
};
use validator::Validate;

/// Create/update task request
///
/// The same editable field set is used for both create and update; the
/// owning user is never part of it.
#[derive(Debug, Deserialize, Validate)]
pub struct TaskRequest {
    /// Short title
    #[validate(length(min = 1, max = 256, message = "Title must be 1-256 characters"))]
    pub title: String,

    /// Task body
    #[validate(length(min = 1, max = 4096, message = "Content must be 1-4096 characters"))]
    pub content: String,

    /// Priority, non-negative
    #[validate(range(min = 0, message = "Priority must be non-negative"))]
    pub priority: i64,
}

/// Query parameters for task creation
#[derive(Debug, Deserialize)]
pub struct CreateTaskParams {
    /// ID of the user who will own the task
    pub user_id: i64,
}

/// Lists all tasks
///
/// ```text
/// GET /task/
/// ```
pub async fn all_tasks(State(state): State<AppState>) -> ApiResult<Json<Vec<Task>>> {
    let tasks = Task::list(&state.db).await?;
    Ok(Json(tasks))
}

/// Gets one task by id
///
/// ```text
/// GET /task/:task_id
/// ```
///
/// # Errors
///
/// - `404 Not Found`: no task with that id
pub async fn task_by_id(
    State(state): State<AppState>,
    Path(task_id): Path<i64>,
) -> ApiResult<Json<Task>> {
    let task = Task::find_by_id(&state.db, task_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Task was not found".to_string()))?;

    Ok(Json(task))
}

/// Creates a new task for an existing user
///
/// ```text
/// POST /task/create?user_id=N
/// Content-Type: application/json
///
/// {
///   "title": "Buy milk",
///   "content": "Two liters, whole",
///   "priority": 1
/// }
/// ```
///
/// The owning user must exist at the moment of creation; the check runs
/// before the insert, so a missing user persists nothing.
///
/// # Errors
///
/// - `404 Not Found`: no user with that id
/// - `422 Unprocessable Entity`: validation failed
pub async fn create_task(
    State(state): State<AppState>,
    Query(params): Query<CreateTaskParams>,
    Json(req): Json<TaskRequest>,
) -> ApiResult<(StatusCode, Json<Ack>)> {
    req.validate()?;

    if User::find_by_id(&state.db, params.user_id).await?.is_none() {
        return Err(ApiError::NotFound("User was not found".to_string()));
    }

    let task = Task::create(
        &state.db,
        CreateTask {
            title: req.title,
            content: req.content,
            priority: req.priority,
        },
        params.user_id,
    )
    .await?;

    tracing::info!(task_id = task.id, user_id = task.user_id, "Created task");

    Ok((StatusCode::CREATED, Json(Ack::created())))
}

/// Updates an existing task
///
/// ```text
/// PUT /task/update/:task_id
/// ```
///
/// Full replace of the editable fields; ownership is untouched.
///
/// # Errors
///
/// - `404 Not Found`: no task with that id
/// - `422 Unprocessable Entity`: validation failed
pub async fn update_task(
    State(state): State<AppState>,
    Path(task_id): Path<i64>,
    Json(req): Json<TaskRequest>,
) -> ApiResult<Json<Ack>> {
    req.validate()?;

    let updated = Task::update(
        &state.db,
        task_id,
        UpdateTask {
            title: req.title,
            content: req.content,
            priority: req.priority,
        },
    )
    .await?;

    if updated.is_none() {
        return Err(ApiError::NotFound("Task was not found".to_string()));
    }

    Ok(Json(Ack::ok("Task update is successful!")))
}

/// Deletes a task by id
///
/// ```text
/// DELETE /task/delete/:task_id
/// ```
///
/// # Errors
///
/// - `404 Not Found`: no task with that id
pub async fn delete_task(
    State(state): State<AppState>,
    Path(task_id): Path<i64>,
) -> ApiResult<Json<Ack>> {
    let deleted = Task::delete(&state.db, task_id).await?;

    if !deleted {
        return Err(ApiError::NotFound("Task was not found".to_string()));
    }

    Ok(Json(Ack::ok("Task deletion is successful!")))
}
