//! Error types for split planning.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PlanError>;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("invalid pattern in {field}: '{pattern}': {source}")]
    InvalidPattern {
        field: String,
        pattern: String,
        source: regex::Error,
    },

    #[error("chunk '{name}' is declared more than once in the manifest")]
    DuplicateChunk { name: String },

    #[error("module '{module}' references undeclared chunk '{chunk}'")]
    UnknownChunk { module: String, chunk: String },

    #[error("module '{module}' lists chunk '{chunk}' more than once")]
    DuplicateChunkReference { module: String, chunk: String },

    #[error("invalid chunk manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlanError {
    pub(crate) fn pattern(field: impl Into<String>, pattern: &str, source: regex::Error) -> Self {
        PlanError::InvalidPattern {
            field: field.into(),
            pattern: pattern.to_string(),
            source,
        }
    }
}
