//! Shared utilities for command implementations.

use std::path::{Path, PathBuf};

use splitplan_config::{ConfigDiscovery, ProjectConfig};

use crate::cli::{Command, ConfigArgs};
use crate::error::{CliError, Result};

/// Resolve a path relative to a working directory.
pub fn resolve_path(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Load the project configuration and merge the requested profile.
///
/// An explicit `--config` path is resolved against `--root`; otherwise the
/// config is discovered inside the root.
pub fn load_config(args: &ConfigArgs) -> Result<ProjectConfig> {
    if !args.root.is_dir() {
        return Err(CliError::FileNotFound(args.root.clone()));
    }

    let discovery = ConfigDiscovery::new(&args.root);
    let config = match &args.config {
        Some(path) => discovery.load_file(path)?,
        None => discovery.load()?,
    };

    Ok(config.materialize_profile(args.profile.as_deref())?)
}

/// `settings.log_level` of the command's configuration, if it loads.
///
/// Used before logging is set up, so failures are ignored here and reported
/// again when the command itself loads the config.
pub fn configured_log_level(command: &Command) -> Option<String> {
    let args = match command {
        Command::Shareable(args) => &args.config,
        Command::Check(args) => &args.config,
        Command::Plan(args) => &args.config,
        Command::Emit(args) => &args.config,
    };
    load_config(args).ok()?.settings.log_level
}
