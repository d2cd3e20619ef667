//! Configuration structures for the scan pipeline.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ScanError;

/// Main configuration for a scan run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Directory scanned (non-recursively) for PDF statements.
    pub directory: PathBuf,

    /// Path of the CSV summary written on each run.
    pub output: PathBuf,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            output: PathBuf::from("output.csv"),
        }
    }
}

impl ScanConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, ScanError> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| ScanError::Config(format!("invalid config {}: {}", path.display(), e)))
    }
}
