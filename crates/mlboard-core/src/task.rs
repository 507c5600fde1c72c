use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::error::MlboardError;

/// The closed set of demo tasks the dashboard can run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TaskId {
    Task1,
    Task2,
    Task3,
}

impl TaskId {
    pub const ALL: [TaskId; 3] = [TaskId::Task1, TaskId::Task2, TaskId::Task3];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskId::Task1 => "task1",
            TaskId::Task2 => "task2",
            TaskId::Task3 => "task3",
        }
    }

    pub fn script_name(&self) -> &'static str {
        match self {
            TaskId::Task1 => "iris_classification",
            TaskId::Task2 => "mnist_cnn",
            TaskId::Task3 => "nlp_spacy",
        }
    }

    /// File name of the script inside the scripts directory.
    pub fn script_file(&self) -> String {
        format!("{}_{}.py", self.as_str(), self.script_name())
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskId {
    type Err = MlboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskId::ALL
            .into_iter()
            .find(|task| task.as_str() == s)
            .ok_or_else(|| MlboardError::InvalidTask(s.to_string()))
    }
}

/// Dashboard metadata for one task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskSpec {
    pub id: TaskId,
    pub title: String,
    pub summary: String,
    pub dataset: String,
    pub approach: String,
    pub highlights: Vec<String>,
    pub script: String,
}

impl TaskSpec {
    fn new(
        id: TaskId,
        title: &str,
        summary: &str,
        dataset: &str,
        approach: &str,
        highlights: &[&str],
    ) -> Self {
        Self {
            id,
            title: title.to_string(),
            summary: summary.to_string(),
            dataset: dataset.to_string(),
            approach: approach.to_string(),
            highlights: highlights.iter().map(|h| h.to_string()).collect(),
            script: id.script_file(),
        }
    }
}

pub fn task_catalog() -> Vec<TaskSpec> {
    TaskId::ALL.into_iter().map(task_spec).collect()
}

pub fn task_spec(id: TaskId) -> TaskSpec {
    match id {
        TaskId::Task1 => TaskSpec::new(
            id,
            "Classical ML",
            "Iris Species Classification using Scikit-learn",
            "Iris Species (150 samples)",
            "Decision Tree Classifier",
            &["Accuracy", "Precision", "Recall"],
        ),
        TaskId::Task2 => TaskSpec::new(
            id,
            "Deep Learning",
            "MNIST Digit Classification using CNN",
            "MNIST Handwritten Digits",
            "Convolutional Neural Network",
            &["> 95% Accuracy"],
        ),
        TaskId::Task3 => TaskSpec::new(
            id,
            "NLP Analysis",
            "Amazon Reviews NER & Sentiment Analysis",
            "Amazon Product Reviews",
            "spaCy, Rule-based Analysis",
            &["NER", "Sentiment Analysis"],
        ),
    }
}

/// A fully resolved external command for one task. Only ever built from a
/// `TaskId`, so no request text reaches the program path or arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl InvocationSpec {
    pub fn for_task(config: &AppConfig, task: TaskId) -> Self {
        let script: PathBuf = config.scripts_dir.join(task.script_file());
        Self {
            program: config.python_bin.clone(),
            args: vec![script.to_string_lossy().into_owned()],
        }
    }
}
