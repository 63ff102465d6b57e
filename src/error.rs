// src/error.rs
use thiserror::Error;

/// Errors raised by the library surface
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Unknown ranking algorithm '{0}' (expected fastest, slowest or passthrough)")]
    UnknownAlgorithm(String),

    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, PatternError>;
