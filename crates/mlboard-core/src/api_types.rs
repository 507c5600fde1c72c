use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::task::TaskSpec;

// --- Health ---

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub tasks: usize,
    pub timestamp: DateTime<Utc>,
}

// --- Tasks ---

#[derive(Debug, Serialize, Deserialize)]
pub struct TaskListResponse {
    pub tasks: Vec<TaskSpec>,
}

/// Body of `POST /api/run-task`. `task` stays a free-form value here so that
/// a missing or non-string id is reported as an invalid task, not a parse
/// failure.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RunTaskRequest {
    #[serde(default)]
    pub task: Option<serde_json::Value>,
}

impl RunTaskRequest {
    pub fn task_str(&self) -> Option<&str> {
        self.task.as_ref().and_then(|v| v.as_str())
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RunTaskResponse {
    pub success: bool,
    pub output: String,
    pub message: String,
}

// --- Errors ---

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}
