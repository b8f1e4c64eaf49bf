//! Core bundle configuration types.

mod entry;
mod helpers;
mod rules;
mod split_chunks;
mod types;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use entry::{EntryImport, EntryPoint};
pub use rules::ModuleRule;
pub use split_chunks::{CacheGroupOptions, ChunkScope, SplitChunksOptions};
pub use types::{BuildMode, LibraryTarget, OutputOptions};

/// Main bundle configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BundleOptions {
    /// Build mode; the CLI derives it from `NODE_ENV` when not configured
    #[serde(default)]
    pub mode: BuildMode,

    /// Named entry points, in declaration order
    #[serde(default)]
    pub entries: Vec<EntryPoint>,

    /// Entry names that never take part in common-chunk extraction.
    ///
    /// Names that match no entry are ignored.
    #[serde(default)]
    pub exclude_from_common: Vec<String>,

    #[serde(default)]
    pub output: OutputOptions,

    /// Module rules selecting loader chains
    #[serde(default)]
    pub rules: Vec<ModuleRule>,

    #[serde(default)]
    pub split_chunks: SplitChunksOptions,

    /// Compile-time constants, expression -> replacement source text
    #[serde(default)]
    pub define: IndexMap<String, String>,

    /// Minify output; defaults to `true` in production mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minify: Option<bool>,
}

impl BundleOptions {
    /// Create from serde_json::Value (for programmatic config)
    ///
    /// # Example
    ///
    /// ```
    /// use splitplan_config::BundleOptions;
    /// use serde_json::json;
    ///
    /// let value = json!({
    ///     "entries": [{ "name": "main", "import": "./main.ts" }],
    ///     "exclude_from_common": ["main"]
    /// });
    ///
    /// let options = BundleOptions::from_value(value).unwrap();
    /// assert_eq!(options.entry_names().collect::<Vec<_>>(), vec!["main"]);
    /// ```
    pub fn from_value(value: Value) -> Result<Self, crate::error::ConfigError> {
        serde_json::from_value(value).map_err(|e| crate::error::ConfigError::InvalidValue {
            field: "bundle".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> Result<Value, crate::error::ConfigError> {
        serde_json::to_value(self).map_err(|e| crate::error::ConfigError::InvalidValue {
            field: "bundle".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Entry names in declaration order
    pub fn entry_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    pub fn entry(&self, name: &str) -> Option<&EntryPoint> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Effective minification flag
    pub fn minify(&self) -> bool {
        self.minify.unwrap_or_else(|| self.mode.is_production())
    }

    pub fn with_entry(mut self, name: impl Into<String>, import: impl Into<EntryImport>) -> Self {
        self.entries.push(EntryPoint::new(name, import));
        self
    }

    pub fn with_excluded(mut self, name: impl Into<String>) -> Self {
        self.exclude_from_common.push(name.into());
        self
    }
}
