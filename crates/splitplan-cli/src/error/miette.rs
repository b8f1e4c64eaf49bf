//! Miette diagnostic conversion for CLI errors.

use ::miette::{miette, Report};

use crate::error::{CliError, ConfigError, PlanError};

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(ConfigError::NotFound) => miette!(
            help = "Create a splitplan.toml in the project root, add a `splitplan` field to package.json, or pass --config <FILE>",
            "No splitplan configuration found"
        ),
        CliError::Config(ConfigError::ProfileNotFound { name }) => miette!(
            help = "Profiles are declared as [profiles.<name>.bundle] tables",
            "Profile '{}' not found in config",
            name
        ),
        CliError::Plan(PlanError::UnknownChunk { module, chunk }) => miette!(
            help = "Every chunk a module lists must also appear in the manifest's `chunks` array",
            "Module '{}' references undeclared chunk '{}'",
            module,
            chunk
        ),
        CliError::Plan(PlanError::InvalidPattern {
            field,
            pattern,
            source,
        }) => miette!(
            help = "Patterns use Rust regex syntax; lookaround and backreferences are not supported",
            "Invalid pattern in {}: '{}'\n{}",
            field,
            pattern,
            source
        ),
        other => miette!("{}", other),
    }
}
