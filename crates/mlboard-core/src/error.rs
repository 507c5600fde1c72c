use thiserror::Error;

#[derive(Error, Debug)]
pub enum MlboardError {
    #[error("Invalid task specified: {0}")]
    InvalidTask(String),

    #[error("Script execution failed ({task}): {details}")]
    ScriptFailed { task: String, details: String },

    #[error("Invocation error ({task}): {message}")]
    Invocation { task: String, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, MlboardError>;
