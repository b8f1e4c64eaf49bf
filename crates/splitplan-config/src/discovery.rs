//! File-based config discovery for CLI use
//!
//! Handles finding and loading splitplan configuration files from the filesystem,
//! layering `SPLITPLAN_`-prefixed environment variables on top.

use std::fs;
use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Json, Serialized, Toml};
use figment::Figment;
use serde_json::Value;

use crate::config::ProjectConfig;
use crate::error::{ConfigError, Result};

/// Conventional config file name in the project root
pub const CONFIG_FILE_NAME: &str = "splitplan.toml";

/// Prefix of environment overrides; nested keys are separated by `__`,
/// e.g. `SPLITPLAN_BUNDLE__MODE=production`
pub const ENV_PREFIX: &str = "SPLITPLAN_";

const PACKAGE_JSON_FIELD: &str = "splitplan";

/// File-based configuration discovery
///
/// Searches for splitplan configuration files in conventional locations and loads them.
/// Library users should use `ProjectConfig::from_value()` directly.
///
/// # Example
///
/// ```no_run
/// use splitplan_config::ConfigDiscovery;
///
/// let discovery = ConfigDiscovery::new(".");
/// let config = discovery.load().unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
    env_overrides: bool,
}

impl ConfigDiscovery {
    /// Create a new config discovery with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            env_overrides: true,
        }
    }

    /// Disable `SPLITPLAN_*` environment overrides
    pub fn without_env(mut self) -> Self {
        self.env_overrides = false;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Find a config file in the root directory
    ///
    /// Searches in this order:
    /// 1. TOML config: splitplan.toml
    /// 2. package.json (splitplan field)
    pub fn find(&self) -> Option<PathBuf> {
        let toml_path = self.root.join(CONFIG_FILE_NAME);
        if toml_path.exists() {
            return Some(toml_path);
        }

        let pkg_path = self.root.join("package.json");
        if pkg_path.exists() {
            if let Ok(content) = fs::read_to_string(&pkg_path) {
                if let Ok(parsed) = serde_json::from_str::<Value>(&content) {
                    if parsed
                        .get(PACKAGE_JSON_FIELD)
                        .is_some_and(|field| !field.is_null())
                    {
                        return Some(pkg_path);
                    }
                }
            }
        }

        None
    }

    /// Load config from discovered file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no config file is found.
    pub fn load(&self) -> Result<ProjectConfig> {
        let path = self.find().ok_or(ConfigError::NotFound)?;
        self.load_file(&path)
    }

    /// Load config with profile merging
    pub fn load_with_profile(&self, profile: &str) -> Result<ProjectConfig> {
        self.load()?.materialize_profile(Some(profile))
    }

    /// Load config from a specific file path.
    ///
    /// Relative paths are resolved against the discovery root. Supported
    /// formats: `*.toml`, `*.json`, and `package.json` (reads the
    /// `splitplan` field).
    pub fn load_file(&self, path: &Path) -> Result<ProjectConfig> {
        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        };

        if !path.exists() {
            return Err(ConfigError::NotFound);
        }

        let base = if path.file_name() == Some(std::ffi::OsStr::new("package.json")) {
            Figment::from(Serialized::defaults(self.package_json_section(&path)?))
        } else {
            match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => Figment::from(Toml::file(&path)),
                Some("json") => Figment::from(Json::file(&path)),
                other => {
                    return Err(ConfigError::UnsupportedFormat(
                        other.unwrap_or("<none>").to_string(),
                    ));
                }
            }
        };

        let figment = if self.env_overrides {
            base.merge(Env::prefixed(ENV_PREFIX).split("__"))
        } else {
            base
        };

        let config: ProjectConfig = figment.extract().map_err(|e| ConfigError::InvalidValue {
            field: path.display().to_string(),
            hint: Some(e.to_string()),
        })?;

        tracing::info!(
            path = %path.display(),
            entries = config.bundle.entries.len(),
            "loaded configuration"
        );
        Ok(config)
    }

    fn package_json_section(&self, path: &Path) -> Result<Value> {
        let content = fs::read_to_string(path)?;

        let parsed: Value = serde_json::from_str(&content).map_err(|e| ConfigError::InvalidValue {
            field: "package.json".to_string(),
            hint: Some(format!("Invalid JSON: {}", e)),
        })?;

        match parsed.get(PACKAGE_JSON_FIELD) {
            Some(Value::Null) => Err(ConfigError::InvalidValue {
                field: PACKAGE_JSON_FIELD.to_string(),
                hint: Some("The 'splitplan' field cannot be null".to_string()),
            }),
            Some(section) => Ok(section.clone()),
            None => Err(ConfigError::InvalidValue {
                field: PACKAGE_JSON_FIELD.to_string(),
                hint: Some("Add a 'splitplan' field to your package.json".to_string()),
            }),
        }
    }
}
