pub mod api_types;
pub mod config;
pub mod error;
pub mod extract;
pub mod runner;
pub mod task;

pub use config::AppConfig;
pub use error::{MlboardError, Result};
pub use extract::{extract, ExtractionResult, JSON_RESULTS_MARKER};
pub use runner::{run_task, ProcessOutput, ScriptRunner, TaskRun, TaskRunner};
pub use task::{task_catalog, task_spec, InvocationSpec, TaskId, TaskSpec};
