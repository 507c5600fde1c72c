use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{MlboardError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,
    /// Interpreter used to run the task scripts.
    pub python_bin: String,
    pub scripts_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".into(),
            server_port: 8080,
            python_bin: "python".into(),
            scripts_dir: PathBuf::from("scripts"),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_host: std::env::var("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: std::env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.server_port),
            python_bin: std::env::var("PYTHON_BIN").unwrap_or(defaults.python_bin),
            scripts_dir: std::env::var("SCRIPTS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.scripts_dir),
        }
    }

    /// Checks that the scripts directory exists. A missing directory is not
    /// fatal at startup; every run would then fail at invocation time.
    pub fn validate(&self) -> Result<()> {
        if self.python_bin.trim().is_empty() {
            return Err(MlboardError::Config("PYTHON_BIN must not be empty".into()));
        }
        if !self.scripts_dir.is_dir() {
            return Err(MlboardError::Config(format!(
                "scripts directory {} does not exist",
                self.scripts_dir.display()
            )));
        }
        Ok(())
    }
}
