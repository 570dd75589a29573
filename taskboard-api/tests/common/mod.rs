/// Common test utilities for integration tests
///
/// This module provides shared infrastructure for integration tests:
/// - A fresh in-memory database per test context
/// - A fully built router
/// - Request/response helpers for driving the router without a socket

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use sqlx::SqlitePool;
use taskboard_api::app::{build_router, AppState};
use taskboard_api::config::{ApiConfig, Config, DatabaseConfig as ApiDatabaseConfig};
use taskboard_shared::db::pool::{create_pool, DatabaseConfig};
use taskboard_shared::db::schema::init_schema;
use tower::ServiceExt as _;

/// Test context containing all necessary resources
pub struct TestContext {
    pub db: SqlitePool,
    pub app: Router,
}

impl TestContext {
    /// Creates a new test context with a fresh in-memory database
    pub async fn new() -> anyhow::Result<Self> {
        // One connection, so every query sees the same in-memory database.
        let db = create_pool(DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            ..Default::default()
        })
        .await?;

        init_schema(&db).await?;

        let config = Config {
            api: ApiConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            database: ApiDatabaseConfig {
                url: "sqlite::memory:".to_string(),
                max_connections: 1,
            },
        };

        let app = build_router(AppState::new(db.clone(), config));

        Ok(Self { db, app })
    }

    /// Sends a request with an optional JSON body and returns status + body
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);

        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let request = builder.body(body).unwrap();
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, json)
    }

    /// Creates a user and returns its id (ids are sequential per context)
    pub async fn create_user(&self, username: &str) -> i64 {
        let (status, _) = self
            .request(
                "POST",
                "/user/create",
                Some(serde_json::json!({
                    "username": username,
                    "firstname": "Test",
                    "lastname": "User",
                    "age": 30,
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);

        let row: (i64,) = sqlx::query_as("SELECT id FROM users WHERE username = ?1")
            .bind(username)
            .fetch_one(&self.db)
            .await
            .unwrap();
        row.0
    }

    /// Creates a task owned by `user_id` and returns its id
    pub async fn create_task(&self, user_id: i64, title: &str) -> i64 {
        let (status, _) = self
            .request(
                "POST",
                &format!("/task/create?user_id={user_id}"),
                Some(serde_json::json!({
                    "title": title,
                    "content": "test content",
                    "priority": 1,
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);

        let row: (i64,) = sqlx::query_as("SELECT id FROM tasks WHERE title = ?1")
            .bind(title)
            .fetch_one(&self.db)
            .await
            .unwrap();
        row.0
    }
}
