/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `root`: Static welcome message
/// - `health`: Health check endpoint
/// - `user`: User CRUD endpoints
/// - `task`: Task CRUD endpoints

pub mod health;
pub mod root;
pub mod task;
pub mod user;

use serde::{Deserialize, Serialize};

/// Acknowledgment returned by every mutating operation
///
/// Intentionally decoupled from the persisted record: callers who want the
/// new or updated record re-fetch it by id.
#[derive(Debug, Serialize, Deserialize)]
pub struct Ack {
    /// HTTP status code, repeated in the body
    pub status_code: u16,

    /// Human-readable transaction outcome
    pub transaction: String,
}

impl Ack {
    /// Acknowledgment for a successful creation (201)
    pub fn created() -> Self {
        Self {
            status_code: 201,
            transaction: "Successful".to_string(),
        }
    }

    /// Acknowledgment for a successful update or deletion (200)
    pub fn ok(transaction: &str) -> Self {
        Self {
            status_code: 200,
            transaction: transaction.to_string(),
        }
    }
}
