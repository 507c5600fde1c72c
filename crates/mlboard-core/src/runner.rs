use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::error::{MlboardError, Result};
use crate::extract::{extract, ExtractionResult};
use crate::task::{InvocationSpec, TaskId};

/// Both channels of one finished external invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Runs the external program registered for a task and returns its output
/// once the process has exited and both channels are drained.
#[async_trait]
pub trait TaskRunner: Send + Sync {
    async fn invoke(&self, task: TaskId) -> Result<ProcessOutput>;
}

/// Runs task scripts with the configured interpreter.
pub struct ScriptRunner {
    config: AppConfig,
}

impl ScriptRunner {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }
}

#[async_trait]
impl TaskRunner for ScriptRunner {
    async fn invoke(&self, task: TaskId) -> Result<ProcessOutput> {
        let spec = InvocationSpec::for_task(&self.config, task);
        debug!(task = %task, program = %spec.program, args = ?spec.args, "Spawning task script");

        let output = Command::new(&spec.program)
            .args(&spec.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| MlboardError::Invocation {
                task: task.to_string(),
                message: format!("failed to run {}: {}", spec.program, e),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        // A crashed script fails the run even when it left stdout behind.
        if !output.status.success() {
            warn!(task = %task, status = %output.status, "Task script exited unsuccessfully");
            let mut message = format!(
                "Command failed: {} {} ({})",
                spec.program,
                spec.args.join(" "),
                output.status
            );
            if !stderr.is_empty() {
                message.push('\n');
                message.push_str(&stderr);
            }
            return Err(MlboardError::Invocation {
                task: task.to_string(),
                message,
            });
        }

        Ok(ProcessOutput { stdout, stderr })
    }
}

/// A successful task run.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskRun {
    pub task: TaskId,
    pub result: ExtractionResult,
}

impl TaskRun {
    pub fn message(&self) -> String {
        format!("{} completed successfully", self.task)
    }
}

/// Validates `task`, runs it and extracts its results.
///
/// Unknown ids are rejected before the runner is touched. Runner errors,
/// including a non-zero exit, propagate as-is. Any stderr output fails the
/// run, whatever stdout contained.
pub async fn run_task(runner: &dyn TaskRunner, task: &str) -> Result<TaskRun> {
    let task: TaskId = task.parse()?;

    let output = runner.invoke(task).await?;

    if !output.stderr.is_empty() {
        warn!(task = %task, stderr = %output.stderr, "Task script wrote to stderr");
        return Err(MlboardError::ScriptFailed {
            task: task.to_string(),
            details: output.stderr,
        });
    }

    let result = extract(&output.stdout);
    info!(
        task = %task,
        structured = result.is_structured(),
        stdout_bytes = output.stdout.len(),
        "Task run completed"
    );

    Ok(TaskRun { task, result })
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use serde_json::json;

    use super::*;

    struct FakeRunner {
        output: std::result::Result<ProcessOutput, String>,
        calls: Mutex<Vec<TaskId>>,
    }

    impl FakeRunner {
        fn new(stdout: &str, stderr: &str) -> Self {
            Self {
                output: Ok(ProcessOutput {
                    stdout: stdout.into(),
                    stderr: stderr.into(),
                }),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<TaskId> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TaskRunner for FakeRunner {
        async fn invoke(&self, task: TaskId) -> Result<ProcessOutput> {
            self.calls.lock().unwrap().push(task);
            match &self.output {
                Ok(out) => Ok(out.clone()),
                Err(message) => Err(MlboardError::Invocation {
                    task: task.to_string(),
                    message: message.clone(),
                }),
            }
        }
    }

    #[tokio::test]
    async fn test_invalid_task_never_invokes_runner() {
        let runner = FakeRunner::new("JSON RESULTS:\n{}\n", "");
        let err = run_task(&runner, "task4").await.unwrap_err();
        assert!(matches!(err, MlboardError::InvalidTask(ref t) if t == "task4"));
        assert!(runner.calls().is_empty());
    }

    #[tokio::test]
    async fn test_empty_output_is_success() {
        let runner = FakeRunner::new("", "");
        let run = run_task(&runner, "task1").await.unwrap();
        assert_eq!(run.task, TaskId::Task1);
        assert_eq!(run.result, ExtractionResult::Raw(String::new()));
        assert_eq!(runner.calls(), vec![TaskId::Task1]);
    }

    #[tokio::test]
    async fn test_stderr_fails_even_with_valid_results() {
        let runner = FakeRunner::new("JSON RESULTS:\n{\"a\":1}\n", "DeprecationWarning: x\n");
        let err = run_task(&runner, "task2").await.unwrap_err();
        match err {
            MlboardError::ScriptFailed { task, details } => {
                assert_eq!(task, "task2");
                assert_eq!(details, "DeprecationWarning: x\n");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_structured_results_are_extracted() {
        let runner = FakeRunner::new(
            "Loading...\nJSON RESULTS:\n{\"accuracy\": 0.967}\n\nDone\n",
            "",
        );
        let run = run_task(&runner, "task3").await.unwrap();
        assert_eq!(
            run.result,
            ExtractionResult::Structured(json!({"accuracy": 0.967}))
        );
        assert_eq!(run.message(), "task3 completed successfully");
    }

    #[tokio::test]
    async fn test_runner_error_propagates() {
        let runner = FakeRunner {
            output: Err("python: not found".into()),
            calls: Mutex::new(Vec::new()),
        };
        let err = run_task(&runner, "task1").await.unwrap_err();
        assert!(matches!(err, MlboardError::Invocation { .. }));
        assert!(err.to_string().contains("python: not found"));
    }
}
