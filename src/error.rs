// file: src/error.rs
// version: 1.0.0
// guid: 3fef3858-8436-4b32-91d0-7d93c44ea219

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for the exporter
pub type Result<T> = std::result::Result<T, ExportError>;

/// Error types for cloud-config export
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("SSH directory not found: {}", .0.display())]
    SshDirectoryNotFound(PathBuf),

    #[error("Could not determine the home directory of the current user")]
    HomeDirectoryUnavailable,

    #[error("Config records have already been gathered by this generator")]
    AlreadyGathered,

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ExportError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a new missing SSH directory error
    pub fn ssh_directory_not_found(path: impl Into<PathBuf>) -> Self {
        Self::SshDirectoryNotFound(path.into())
    }
}
