//! Pluggable config validation strategies
//!
//! Separates filesystem validation (for CLI use) from schema validation (for library use).

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use regex::Regex;

use crate::bundle::BundleOptions;
use crate::error::{ConfigError, Result};

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    /// Validate bundle options
    fn validate(&self, config: &BundleOptions) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use splitplan_config::{BundleOptions, SchemaValidator, ConfigValidator};
///
/// let config = BundleOptions::default().with_entry("main", "./main.ts");
///
/// SchemaValidator.validate(&config).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &BundleOptions) -> Result<()> {
        if config.entries.is_empty() {
            return Err(ConfigError::NoEntries);
        }

        let mut seen = HashSet::with_capacity(config.entries.len());
        for entry in &config.entries {
            if entry.name.trim().is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: "entry names cannot be empty".to_string(),
                    hint: Some("Give every [[bundle.entries]] table a 'name'".to_string()),
                });
            }

            if !seen.insert(entry.name.as_str()) {
                return Err(ConfigError::DuplicateEntry {
                    name: entry.name.clone(),
                });
            }

            if entry.sources().iter().all(|source| source.trim().is_empty()) {
                return Err(ConfigError::EmptyEntry {
                    name: entry.name.clone(),
                });
            }
        }

        if config.exclude_from_common.iter().any(|name| name.trim().is_empty()) {
            return Err(ConfigError::SchemaValidation {
                message: "excluded entry names cannot be empty".to_string(),
                hint: Some("Remove empty strings from 'exclude_from_common'".to_string()),
            });
        }

        if config.entries.len() > 1 && !config.output.filename.contains("[name]") {
            return Err(ConfigError::SchemaValidation {
                message: format!(
                    "output filename '{}' would be shared by {} entries",
                    config.output.filename,
                    config.entries.len()
                ),
                hint: Some("Include the [name] placeholder in output.filename".to_string()),
            });
        }

        let mut group_names = HashSet::new();
        for (index, group) in config.split_chunks.cache_groups.iter().enumerate() {
            if group.name.trim().is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: format!("cache group #{index} has an empty name"),
                    hint: None,
                });
            }

            if !group_names.insert(group.name.as_str()) {
                return Err(ConfigError::SchemaValidation {
                    message: format!("cache group '{}' is declared more than once", group.name),
                    hint: None,
                });
            }

            if group.min_chunks == 0 {
                return Err(ConfigError::SchemaValidation {
                    message: format!("cache group '{}' has min_chunks = 0", group.name),
                    hint: Some("min_chunks must be at least 1".to_string()),
                });
            }

            if let Some(pattern) = &group.test {
                check_pattern(&format!("split_chunks.cache_groups.{}.test", group.name), pattern)?;
            }
        }

        for (index, rule) in config.rules.iter().enumerate() {
            check_pattern(&format!("rules[{index}].test"), &rule.test)?;
            if let Some(pattern) = &rule.include {
                check_pattern(&format!("rules[{index}].include"), pattern)?;
            }
            if let Some(pattern) = &rule.exclude {
                check_pattern(&format!("rules[{index}].exclude"), pattern)?;
            }
        }

        Ok(())
    }
}

fn check_pattern(field: &str, pattern: &str) -> Result<()> {
    Regex::new(pattern)
        .map(|_| ())
        .map_err(|err| ConfigError::InvalidPattern {
            field: field.to_string(),
            pattern: pattern.to_string(),
            message: err.to_string(),
        })
}

/// Filesystem validator (for CLI use)
///
/// Validates that entry sources exist on disk. Relative sources (`./`, `../`)
/// resolve against the root; bare package specifiers resolve under
/// `node_modules`.
pub struct FsValidator {
    root: PathBuf,
}

impl FsValidator {
    /// Create a new filesystem validator with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn resolve(&self, source: &str) -> PathBuf {
        let path = Path::new(source);
        if path.is_absolute() {
            path.to_path_buf()
        } else if source.starts_with("./") || source.starts_with("../") {
            self.root.join(path)
        } else {
            self.root.join("node_modules").join(path)
        }
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &BundleOptions) -> Result<()> {
        // First run schema validation
        SchemaValidator.validate(config)?;

        for entry in &config.entries {
            for source in entry.sources() {
                let path = self.resolve(source);
                if !path.exists() {
                    return Err(ConfigError::EntryNotFound { path });
                }
            }
        }

        Ok(())
    }
}

/// Convenience function for schema-only validation
pub fn validate_schema(config: &BundleOptions) -> Result<()> {
    SchemaValidator.validate(config)
}

/// Convenience function for filesystem validation
pub fn validate_fs(config: &BundleOptions, root: impl AsRef<Path>) -> Result<()> {
    FsValidator::new(root).validate(config)
}
