use axum::{extract::Path, http::StatusCode, response::IntoResponse, Json};
use tracing::{info, warn};

use mlboard_core::api_types::{ErrorResponse, TaskListResponse};
use mlboard_core::{task_catalog, task_spec, TaskId};

/// GET /api/tasks — the dashboard's task catalog.
pub async fn list_tasks() -> impl IntoResponse {
    info!("Listing tasks");
    (
        StatusCode::OK,
        Json(TaskListResponse {
            tasks: task_catalog(),
        }),
    )
}

/// GET /api/tasks/{id}
pub async fn get_task(Path(id): Path<String>) -> impl IntoResponse {
    match id.parse::<TaskId>() {
        Ok(task) => (StatusCode::OK, Json(task_spec(task))).into_response(),
        Err(_) => {
            warn!(task = %id, "Task not found");
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new(format!("Task '{id}' not found"))),
            )
                .into_response()
        }
    }
}
