use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating a [`LandingConfig`](super::LandingConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported configuration format {0:?}; use 'yaml' or 'json'")]
    UnsupportedFormat(String),

    #[error("invalid value for {name}: {reason}")]
    InvalidEnv { name: &'static str, reason: String },

    #[error("invalid configuration: {}", .0.join("; "))]
    Invalid(Vec<String>),
}
