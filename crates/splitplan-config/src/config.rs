//! High-level configuration structure for splitplan.
//!
//! This module provides the main `ProjectConfig` struct and profile merging logic.
//! For file discovery, see the `discovery` module.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::bundle::BundleOptions;
use crate::error::{ConfigError, Result as ConfigResult};
use crate::settings::GlobalSettings;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default)]
    pub bundle: BundleOptions,

    #[serde(default)]
    pub profiles: HashMap<String, ProfileConfig>,

    #[serde(default)]
    pub settings: GlobalSettings,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default)]
    pub bundle: Value,

    #[serde(default)]
    pub settings: Value,
}

impl ProjectConfig {
    /// Create from serde_json::Value (for programmatic config)
    ///
    /// # Example
    ///
    /// ```
    /// use splitplan_config::ProjectConfig;
    /// use serde_json::json;
    ///
    /// let value = json!({
    ///     "bundle": {
    ///         "entries": [{ "name": "main", "import": "./main.ts" }],
    ///         "minify": true
    ///     }
    /// });
    ///
    /// let config = ProjectConfig::from_value(value).unwrap();
    /// assert_eq!(config.bundle.entries.len(), 1);
    /// ```
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Parse a TOML document without consulting the environment
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let toml_val: toml::Value = toml::from_str(content).map_err(|e| ConfigError::InvalidValue {
            field: "toml".to_string(),
            hint: Some(format!("Invalid TOML syntax: {}", e)),
        })?;

        let value = serde_json::to_value(toml_val).map_err(|e| ConfigError::InvalidValue {
            field: "toml".to_string(),
            hint: Some(format!("TOML to JSON conversion failed: {}", e)),
        })?;

        Self::from_value(value)
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> ConfigResult<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Names of the declared profiles, sorted
    pub fn profile_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.profiles.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl ProjectConfig {
    /// Deep-merge the named profile over the base configuration.
    ///
    /// Objects merge key by key; arrays and scalars replace. Asking for a
    /// profile that is not declared is an error.
    pub fn materialize_profile(mut self, profile: Option<&str>) -> ConfigResult<Self> {
        let Some(name) = profile else {
            return Ok(self);
        };

        let profile_cfg =
            self.profiles
                .get(name)
                .cloned()
                .ok_or_else(|| ConfigError::ProfileNotFound {
                    name: name.to_string(),
                })?;

        if !profile_cfg.bundle.is_null() {
            self.bundle = merge_section(&self.bundle, &profile_cfg.bundle)?;
        }

        if !profile_cfg.settings.is_null() {
            self.settings = merge_section(&self.settings, &profile_cfg.settings)?;
        }

        tracing::debug!(profile = name, "applied configuration profile");
        Ok(self)
    }
}

fn merge_section<T>(base: &T, update: &Value) -> ConfigResult<T>
where
    T: Serialize + for<'de> Deserialize<'de>,
{
    let mut merged =
        serde_json::to_value(base).map_err(|err| ConfigError::InvalidProfileOverride {
            message: err.to_string(),
        })?;
    merge_values(&mut merged, update);
    serde_json::from_value(merged).map_err(|err| ConfigError::InvalidProfileOverride {
        message: err.to_string(),
    })
}

fn merge_values(target: &mut Value, update: &Value) {
    match (target, update) {
        (Value::Object(target_map), Value::Object(update_map)) => {
            for (key, value) in update_map {
                merge_values(target_map.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
        (target_slot, _) => {
            *target_slot = update.clone();
        }
    }
}
