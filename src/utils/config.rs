//! TOML configuration loading.

use crate::types::{AppError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Resolver configuration.
///
/// Every field has a default so the CLI works out of the box; a missing
/// config file is not an error, only unparsable content is.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Path to the knowledge-base JSON file.
    pub kb_path: PathBuf,
    /// Path to the job-listings JSON file.
    pub jobs_path: PathBuf,
    /// City assumed when a weather query names none.
    pub default_city: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            kb_path: PathBuf::from("data/kb.json"),
            jobs_path: PathBuf::from("data/jobs.json"),
            default_city: "paris".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file, falling back to defaults when
    /// the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(raw) => toml::from_str(&raw).map_err(|e| {
                AppError::InvalidInput(format!("invalid config {}: {}", path.display(), e))
            }),
            Err(_) => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
        }
    }
}
