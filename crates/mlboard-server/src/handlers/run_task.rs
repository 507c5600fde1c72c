use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use mlboard_core::api_types::{ErrorResponse, RunTaskRequest, RunTaskResponse};
use mlboard_core::MlboardError;

use crate::state::AppState;

/// POST /api/run-task — run a task script and return its extracted results.
///
/// Blocks until the script exits. The `output` field carries the script's
/// JSON results block re-serialized, or its whole stdout when there is none.
#[instrument(skip_all, fields(run_id = %Uuid::new_v4()))]
pub async fn run_task(
    State(state): State<AppState>,
    payload: Result<Json<RunTaskRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "Rejected run-task body");
            return invalid_task();
        }
    };

    let Some(task) = request.task_str() else {
        warn!(task = ?request.task, "Missing or non-string task id");
        return invalid_task();
    };

    info!(task = %task, "Running task");

    let run = match mlboard_core::run_task(state.runner.as_ref(), task).await {
        Ok(run) => run,
        Err(e) => return error_response(e),
    };

    let message = run.message();
    match run.result.into_output() {
        Ok(output) => (
            StatusCode::OK,
            Json(RunTaskResponse {
                success: true,
                output,
                message,
            }),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

fn invalid_task() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::new("Invalid task specified")),
    )
        .into_response()
}

fn error_response(err: MlboardError) -> Response {
    match err {
        MlboardError::InvalidTask(task) => {
            warn!(task = %task, "Invalid task specified");
            invalid_task()
        }
        MlboardError::ScriptFailed { task, details } => {
            error!(task = %task, "Script execution failed");
            let body = ErrorResponse::with_details("Script execution failed", details);
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
        other => {
            error!(error = %other, "Task run failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::with_details(
                    "Internal server error",
                    other.to_string(),
                )),
            )
                .into_response()
        }
    }
}
