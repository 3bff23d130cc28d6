//! Error types for configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while building or loading a module configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Schema namespace must not be empty")]
    EmptyNamespace,

    #[error(
        "Invalid schema namespace {0:?}: must start with a letter and contain only letters, digits or underscores"
    )]
    InvalidNamespace(String),

    #[error("Unsupported configuration format: {0:?}")]
    UnsupportedFormat(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}
