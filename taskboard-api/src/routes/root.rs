/// Root endpoint
///
/// # Endpoint
///
/// ```text
/// GET /
/// ```
///
/// # Response
///
/// ```json
/// { "message": "Welcome to Taskmanager" }
/// ```

use axum::Json;
use serde::{Deserialize, Serialize};

/// Welcome response
#[derive(Debug, Serialize, Deserialize)]
pub struct WelcomeResponse {
    /// Static greeting
    pub message: String,
}

/// Static welcome handler
pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to Taskmanager".to_string(),
    })
}
