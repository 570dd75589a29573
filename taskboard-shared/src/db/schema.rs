/// Schema bootstrap
///
/// This module creates the `users` and `tasks` tables if they do not exist.
/// It is run once at process startup, before the server accepts traffic.
/// The statements are idempotent, so restarting against an existing database
/// file is safe.
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
///
/// CREATE TABLE tasks (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     title TEXT NOT NULL,
///     content TEXT NOT NULL,
///     priority INTEGER NOT NULL,
///     user_id INTEGER NOT NULL
/// );
/// ```
///
/// `tasks.user_id` carries no database-level foreign key: referential
/// integrity at creation time is enforced by an explicit existence check in
/// the task service, and user deletion removes owned tasks in the same
/// transaction.

use sqlx::SqlitePool;
use tracing::info;

const CREATE_USERS: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL UNIQUE,
    firstname TEXT NOT NULL,
    lastname TEXT NOT NULL,
    age INTEGER NOT NULL,
    slug TEXT NOT NULL
)
"#;

const CREATE_TASKS: &str = r#"
CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    content TEXT NOT NULL,
    priority INTEGER NOT NULL,
    user_id INTEGER NOT NULL
)
"#;

/// Creates all application tables if they do not already exist
///
/// # Errors
///
/// Returns an error if a DDL statement fails to execute
///
/// # Example
///
/// ```no_run
/// use taskboard_shared::db::{pool::{create_pool, DatabaseConfig}, schema::init_schema};
///
/// # async fn example() -> Result<(), sqlx::Error> {
/// let pool = create_pool(DatabaseConfig {
///     url: "sqlite::memory:".to_string(),
///     ..Default::default()
/// })
/// .await?;
///
/// init_schema(&pool).await?;
/// # Ok(())
/// # }
/// ```
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_USERS).execute(pool).await?;
    sqlx::query(CREATE_TASKS).execute(pool).await?;

    info!("Database schema initialized");
    Ok(())
}
