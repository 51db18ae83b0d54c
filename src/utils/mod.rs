//! Configuration utilities.

/// TOML configuration loading.
pub mod config;
