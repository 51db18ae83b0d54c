//! Job-listings file access.

use crate::types::{AppError, Job, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct JobsFile {
    #[serde(default)]
    jobs: Vec<Job>,
}

/// Path-backed job board, read per search.
#[derive(Debug, Clone)]
pub struct JobBoard {
    path: PathBuf,
}

impl JobBoard {
    /// Creates a job board backed by the JSON file at `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Reads and parses the backing file.
    pub async fn jobs(&self) -> Result<Vec<Job>> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| AppError::DataSource(format!("{}: {}", self.path.display(), e)))?;
        let file: JobsFile = serde_json::from_str(&raw)
            .map_err(|e| AppError::DataSource(format!("{}: {}", self.path.display(), e)))?;
        Ok(file.jobs)
    }
}
