/// Database layer for Taskboard
///
/// This module provides connection pooling and schema bootstrap.
///
/// # Modules
///
/// - `pool`: SQLite connection pool management with a startup health check
/// - `schema`: Idempotent table creation run once at startup
/// - Models are in the `models` module at crate root level
///
/// # Example
///
/// ```no_run
/// use taskboard_shared::db::{pool::{create_pool, DatabaseConfig}, schema::init_schema};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = DatabaseConfig {
///         url: std::env::var("DATABASE_URL")?,
///         ..Default::default()
///     };
///
///     let pool = create_pool(config).await?;
///     init_schema(&pool).await?;
///     Ok(())
/// }
/// ```

pub mod pool;
pub mod schema;
