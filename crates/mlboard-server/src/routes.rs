use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::state::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        // Health
        .route("/api/health", get(handlers::health::health_check))
        // Task catalog
        .route("/api/tasks", get(handlers::tasks::list_tasks))
        .route("/api/tasks/{id}", get(handlers::tasks::get_task))
        // Script execution
        .route("/api/run-task", post(handlers::run_task::run_task))
}
