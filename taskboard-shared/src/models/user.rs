/// User model and database operations
///
/// This module provides the User model and CRUD operations for managing user
/// records. Each user owns zero or more tasks (see `models::task`), linked by
/// `tasks.user_id`.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE users (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     username TEXT NOT NULL UNIQUE,
///     firstname TEXT NOT NULL,
///     lastname TEXT NOT NULL,
///     age INTEGER NOT NULL,
///     slug TEXT NOT NULL
/// );
/// ```
///
/// # Field mapping
///
/// The createable and updatable field sets are distinct by construction:
/// `CreateUser` carries `username`, `firstname`, `lastname`, `age` (the slug
/// is derived from the username at insert time); `UpdateUser` carries only
/// `firstname`, `lastname`, `age`. The `id`, `username`, and `slug` columns
/// are immutable after creation, so a stored slug never goes stale.
///
/// # Example
///
/// ```no_run
/// use taskboard_shared::models::user::{User, CreateUser};
/// use taskboard_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let user = User::create(
///     &pool,
///     CreateUser {
///         username: "Jane Doe".to_string(),
///         firstname: "Jane".to_string(),
///         lastname: "Doe".to_string(),
///         age: 34,
///     },
/// )
/// .await?;
///
/// assert_eq!(user.slug, "jane-doe");
/// # Ok(())
/// # }
/// ```

use crate::slug::slugify;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// User record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (autoincrement)
    pub id: i64,

    /// Username, unique across all users
    pub username: String,

    /// First name
    pub firstname: String,

    /// Last name
    pub lastname: String,

    /// Age in years
    pub age: i64,

    /// URL-safe slug derived from `username` at creation time
    ///
    /// Never recomputed on update.
    pub slug: String,
}

/// Input for creating a new user
///
/// The slug is not part of the input; it is derived from `username` inside
/// [`User::create`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Username (must be unique)
    pub username: String,

    /// First name
    pub firstname: String,

    /// Last name
    pub lastname: String,

    /// Age in years
    pub age: i64,
}

/// Input for updating an existing user
///
/// Full-replace semantics over the updatable field set. `username` and
/// `slug` are immutable and deliberately absent here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUser {
    /// New first name
    pub firstname: String,

    /// New last name
    pub lastname: String,

    /// New age
    pub age: i64,
}

impl User {
    /// Creates a new user in the database
    ///
    /// Derives the slug from `data.username` and inserts the row.
    ///
    /// # Returns
    ///
    /// The newly created user with its generated ID
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The username already exists (unique constraint violation)
    /// - Database connection fails
    pub async fn create(pool: &SqlitePool, data: CreateUser) -> Result<Self, sqlx::Error> {
        let slug = slugify(&data.username);

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, firstname, lastname, age, slug)
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING id, username, firstname, lastname, age, slug
            "#,
        )
        .bind(data.username)
        .bind(data.firstname)
        .bind(data.lastname)
        .bind(data.age)
        .bind(slug)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Finds a user by ID
    ///
    /// # Returns
    ///
    /// The user if found, None otherwise
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, firstname, lastname, age, slug
            FROM users
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Lists all users, unfiltered
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, firstname, lastname, age, slug
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(users)
    }

    /// Updates an existing user
    ///
    /// Replaces the full updatable field set (`firstname`, `lastname`,
    /// `age`). The slug is not recomputed.
    ///
    /// # Returns
    ///
    /// The updated user if found, None if the user doesn't exist
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        data: UpdateUser,
    ) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET firstname = ?2, lastname = ?3, age = ?4
            WHERE id = ?1
            RETURNING id, username, firstname, lastname, age, slug
            "#,
        )
        .bind(id)
        .bind(data.firstname)
        .bind(data.lastname)
        .bind(data.age)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Deletes a user and all tasks the user owns
    ///
    /// Both deletions run inside a single transaction, tasks first: either
    /// the user and every owned task are gone, or nothing changed. No
    /// orphaned task can survive and no task-less ghost user can be left
    /// behind by a partial failure.
    ///
    /// # Returns
    ///
    /// True if the user was deleted, false if the user didn't exist
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails; the transaction is
    /// rolled back in that case
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM tasks WHERE user_id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM users WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }
}
