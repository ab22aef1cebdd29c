//! Error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while configuring, loading or running a benchmark
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown candidate '{0}'")]
    UnknownCandidate(String),

    #[error("{name} is unavailable: {reason}")]
    Unavailable { name: String, reason: String },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("{candidate} failed: {message}")]
    Codec { candidate: String, message: String },

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl BenchError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BenchError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn codec(candidate: &str, err: impl std::fmt::Display) -> Self {
        BenchError::Codec {
            candidate: candidate.to_string(),
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BenchError>;
