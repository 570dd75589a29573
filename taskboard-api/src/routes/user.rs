/// User CRUD endpoints
///
/// # Endpoints
///
/// - `GET /user/` - List all users
/// - `GET /user/:id` - Get one user
/// - `GET /user/:id/tasks` - List a user's tasks
/// - `POST /user/create` - Create a user
/// - `PUT /user/update/:id` - Update a user
/// - `DELETE /user/delete/:id` - Delete a user and all of its tasks
///
/// Mutating endpoints answer with an [`Ack`] body; the created or updated
/// record is re-fetched by id if the caller needs it.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    routes::Ack,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use taskboard_shared::models::{
    task::Task,
    user::{CreateUser, UpdateUser, User},
};
use validator::Validate;

/// Create user request
///
/// The createable field set. The slug is derived server-side and is not
/// accepted from the client.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// Username (must be unique)
    #[validate(length(min = 1, max = 64, message = "Username must be 1-64 characters"))]
    pub username: String,

    /// First name
    #[validate(length(min = 1, max = 64, message = "First name must be 1-64 characters"))]
    pub firstname: String,

    /// Last name
    #[validate(length(min = 1, max = 64, message = "Last name must be 1-64 characters"))]
    pub lastname: String,

    /// Age in years
    #[validate(range(min = 0, max = 150, message = "Age must be between 0 and 150"))]
    pub age: i64,
}

/// Update user request
///
/// The updatable field set: `username` and `slug` are immutable and not
/// accepted here.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    /// New first name
    #[validate(length(min = 1, max = 64, message = "First name must be 1-64 characters"))]
    pub firstname: String,

    /// New last name
    #[validate(length(min = 1, max = 64, message = "Last name must be 1-64 characters"))]
    pub lastname: String,

    /// New age
    #[validate(range(min = 0, max = 150, message = "Age must be between 0 and 150"))]
    pub age: i64,
}

/// Lists all users
///
/// ```text
/// GET /user/
/// ```
pub async fn all_users(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    let users = User::list(&state.db).await?;
    Ok(Json(users))
}

/// Gets one user by id
///
/// ```text
/// GET /user/:user_id
/// ```
///
/// # Errors
///
/// - `404 Not Found`: no user with that id
pub async fn user_by_id(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<Json<User>> {
    let user = User::find_by_id(&state.db, user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User was not found".to_string()))?;

    Ok(Json(user))
}

/// Lists all tasks owned by one user
///
/// ```text
/// GET /user/:user_id/tasks
/// ```
///
/// An existing user with no tasks yields `200 []`; only a missing user is
/// an error.
///
/// # Errors
///
/// - `404 Not Found`: no user with that id
pub async fn tasks_by_user_id(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<Json<Vec<Task>>> {
    if User::find_by_id(&state.db, user_id).await?.is_none() {
        return Err(ApiError::NotFound("User was not found".to_string()));
    }

    let tasks = Task::list_for_user(&state.db, user_id).await?;
    Ok(Json(tasks))
}

/// Creates a new user
///
/// ```text
/// POST /user/create
/// Content-Type: application/json
///
/// {
///   "username": "Jane Doe",
///   "firstname": "Jane",
///   "lastname": "Doe",
///   "age": 34
/// }
/// ```
///
/// # Errors
///
/// - `409 Conflict`: username already exists
/// - `422 Unprocessable Entity`: validation failed
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<Ack>)> {
    req.validate()?;

    let user = User::create(
        &state.db,
        CreateUser {
            username: req.username,
            firstname: req.firstname,
            lastname: req.lastname,
            age: req.age,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, slug = %user.slug, "Created user");

    Ok((StatusCode::CREATED, Json(Ack::created())))
}

/// Updates an existing user
///
/// ```text
/// PUT /user/update/:user_id
/// ```
///
/// Full replace of the updatable fields; the slug is not recomputed.
///
/// # Errors
///
/// - `404 Not Found`: no user with that id
/// - `422 Unprocessable Entity`: validation failed
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Json(req): Json<UpdateUserRequest>,
) -> ApiResult<Json<Ack>> {
    req.validate()?;

    let updated = User::update(
        &state.db,
        user_id,
        UpdateUser {
            firstname: req.firstname,
            lastname: req.lastname,
            age: req.age,
        },
    )
    .await?;

    if updated.is_none() {
        return Err(ApiError::NotFound("User was not found".to_string()));
    }

    Ok(Json(Ack::ok("User update is successful!")))
}

/// Deletes a user, cascading to all of its tasks
///
/// ```text
/// DELETE /user/delete/:user_id
/// ```
///
/// Tasks and the user row are removed in one transaction.
///
/// # Errors
///
/// - `404 Not Found`: no user with that id
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<Json<Ack>> {
    let deleted = User::delete(&state.db, user_id).await?;

    if !deleted {
        return Err(ApiError::NotFound("User was not found".to_string()));
    }

    tracing::info!(user_id, "Deleted user and owned tasks");

    Ok(Json(Ack::ok("User deletion is successful!")))
}
