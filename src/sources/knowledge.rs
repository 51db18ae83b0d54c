//! Knowledge-base file access.

use crate::types::{AppError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// A single knowledge-base record.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct KbEntry {
    /// Entry name, matched against queries as a substring.
    pub name: String,
    /// Summary text returned as the answer.
    #[serde(default)]
    pub summary: String,
}

#[derive(Debug, Deserialize)]
struct KbFile {
    #[serde(default)]
    entries: Vec<KbEntry>,
}

/// Path-backed knowledge base, read per consultation.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    path: PathBuf,
}

impl KnowledgeBase {
    /// Creates a knowledge base backed by the JSON file at `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Reads and parses the backing file.
    ///
    /// Callers decide how to degrade on failure; this only reports it.
    pub async fn entries(&self) -> Result<Vec<KbEntry>> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| AppError::DataSource(format!("{}: {}", self.path.display(), e)))?;
        let file: KbFile = serde_json::from_str(&raw)
            .map_err(|e| AppError::DataSource(format!("{}: {}", self.path.display(), e)))?;
        Ok(file.entries)
    }
}
