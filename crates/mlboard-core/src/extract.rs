use serde_json::Value;

use crate::error::Result;

/// Substring that marks the start of an embedded JSON block in script output.
pub const JSON_RESULTS_MARKER: &str = "JSON RESULTS:";

/// Outcome of scanning process output for an embedded JSON block.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractionResult {
    Structured(Value),
    Raw(String),
}

impl ExtractionResult {
    pub fn is_structured(&self) -> bool {
        matches!(self, ExtractionResult::Structured(_))
    }

    pub fn as_structured(&self) -> Option<&Value> {
        match self {
            ExtractionResult::Structured(v) => Some(v),
            ExtractionResult::Raw(_) => None,
        }
    }

    /// Text for the `output` field of a run response: compact JSON for a
    /// structured block, the untouched stdout otherwise.
    pub fn into_output(self) -> Result<String> {
        match self {
            ExtractionResult::Structured(v) => Ok(serde_json::to_string(&v)?),
            ExtractionResult::Raw(text) => Ok(text),
        }
    }
}

/// Best-effort extraction of the JSON block a task script prints after the
/// `JSON RESULTS:` marker line.
///
/// - only the first marker line starts the block; later markers are content
/// - the block ends at the first blank (or whitespace-only) line
/// - anything that does not parse falls back to `Raw` with the full input
///
/// Never fails.
pub fn extract(output: &str) -> ExtractionResult {
    let mut lines = output.split('\n');

    if !lines.by_ref().any(|line| line.contains(JSON_RESULTS_MARKER)) {
        return ExtractionResult::Raw(output.to_string());
    }

    let block: Vec<&str> = lines.take_while(|line| !line.trim().is_empty()).collect();
    if block.is_empty() {
        tracing::debug!("JSON results marker found but no block followed it");
        return ExtractionResult::Raw(output.to_string());
    }

    let candidate = block.join("\n");
    match serde_json::from_str::<Value>(&candidate) {
        Ok(value) => ExtractionResult::Structured(value),
        Err(e) => {
            tracing::warn!(error = %e, lines = block.len(), "Failed to parse JSON results block");
            ExtractionResult::Raw(output.to_string())
        }
    }
}
