/// Task model and database operations
///
/// This module provides the Task model and CRUD operations. Every task is
/// owned by exactly one user via `user_id`. Ownership is assigned at
/// creation and immutable afterwards: the update operation replaces only the
/// content fields.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE tasks (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     title TEXT NOT NULL,
///     content TEXT NOT NULL,
///     priority INTEGER NOT NULL,
///     user_id INTEGER NOT NULL
/// );
/// ```
///
/// There is no database-level foreign key on `user_id`. The caller must
/// verify the owning user exists before calling [`Task::create`]; deleting
/// a user removes its tasks in the same transaction (see
/// [`crate::models::user::User::delete`]).

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Task record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// Unique task ID (autoincrement)
    pub id: i64,

    /// Short title
    pub title: String,

    /// Task body
    pub content: String,

    /// Priority, lower is less urgent
    pub priority: i64,

    /// ID of the owning user, immutable after creation
    pub user_id: i64,
}

/// Input for creating a new task
///
/// The owning `user_id` is not part of the payload; it is passed separately
/// to [`Task::create`] after the caller has verified the user exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTask {
    /// Short title
    pub title: String,

    /// Task body
    pub content: String,

    /// Priority
    pub priority: i64,
}

/// Input for updating an existing task
///
/// Full-replace semantics over the editable field set. Ownership cannot be
/// reassigned, so `user_id` is deliberately absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTask {
    /// New title
    pub title: String,

    /// New body
    pub content: String,

    /// New priority
    pub priority: i64,
}

impl Task {
    /// Creates a new task owned by `user_id`
    ///
    /// Does not verify that the user exists; that check belongs to the
    /// caller, before this insert.
    ///
    /// # Returns
    ///
    /// The newly created task with its generated ID
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn create(
        pool: &SqlitePool,
        data: CreateTask,
        user_id: i64,
    ) -> Result<Self, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (title, content, priority, user_id)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id, title, content, priority, user_id
            "#,
        )
        .bind(data.title)
        .bind(data.content)
        .bind(data.priority)
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok(task)
    }

    /// Finds a task by ID
    ///
    /// # Returns
    ///
    /// The task if found, None otherwise
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, content, priority, user_id
            FROM tasks
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(task)
    }

    /// Lists all tasks, unfiltered
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, content, priority, user_id
            FROM tasks
            ORDER BY id
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(tasks)
    }

    /// Lists all tasks owned by one user
    ///
    /// An empty vector is a normal result, not an error: a user with no
    /// tasks simply owns nothing yet.
    pub async fn list_for_user(
        pool: &SqlitePool,
        user_id: i64,
    ) -> Result<Vec<Self>, sqlx::Error> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, content, priority, user_id
            FROM tasks
            WHERE user_id = ?1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(tasks)
    }

    /// Updates an existing task
    ///
    /// Replaces the full editable field set (`title`, `content`,
    /// `priority`). Ownership is untouched.
    ///
    /// # Returns
    ///
    /// The updated task if found, None if the task doesn't exist
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        data: UpdateTask,
    ) -> Result<Option<Self>, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            UPDATE tasks
            SET title = ?2, content = ?3, priority = ?4
            WHERE id = ?1
            RETURNING id, title, content, priority, user_id
            "#,
        )
        .bind(id)
        .bind(data.title)
        .bind(data.content)
        .bind(data.priority)
        .fetch_optional(pool)
        .await?;

        Ok(task)
    }

    /// Deletes a task by ID
    ///
    /// # Returns
    ///
    /// True if the task was deleted, false if the task didn't exist
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
