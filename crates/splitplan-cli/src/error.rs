//! Error handling for the splitplan CLI.
//!
//! Library errors convert into [`CliError`] through `#[from]`; the binary
//! turns the result into a `miette` report at the very end.

use std::path::PathBuf;
use thiserror::Error;

pub use splitplan::PlanError;
pub use splitplan_config::ConfigError;

mod miette;

pub use self::miette::cli_error_to_miette;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be found, parsed or validated
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Chunk manifest or cache group errors
    #[error("Planning error: {0}")]
    Plan(#[from] PlanError),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;
