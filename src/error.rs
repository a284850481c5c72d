//! Error types for panel rendering and configuration loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the panel pipeline
#[derive(Debug, Error)]
pub enum PanelError {
    #[error("Could not marshal panel json: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid panel request: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to parse request {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<config::ConfigError> for PanelError {
    fn from(err: config::ConfigError) -> Self {
        PanelError::ConfigError(err.to_string())
    }
}
