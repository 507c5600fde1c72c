use axum::{http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use tracing::debug;

use mlboard_core::api_types::HealthResponse;
use mlboard_core::TaskId;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub async fn health_check() -> impl IntoResponse {
    debug!("Health check requested");

    let response = HealthResponse {
        status: "ok".to_string(),
        version: VERSION.to_string(),
        tasks: TaskId::ALL.len(),
        timestamp: Utc::now(),
    };

    (StatusCode::OK, Json(response))
}
