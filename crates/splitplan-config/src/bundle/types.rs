use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::helpers::{default_css_filename, default_filename, default_output_dir};

/// Build mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    /// Unminified output, styles injected at runtime (default)
    #[default]
    Development,
    /// Minified output, styles extracted to files
    Production,
}

impl BuildMode {
    /// Interpret a `NODE_ENV` value: anything other than exactly `production` is development.
    pub fn from_node_env(value: &str) -> Self {
        if value == "production" {
            BuildMode::Production
        } else {
            BuildMode::Development
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BuildMode::Development => "development",
            BuildMode::Production => "production",
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, BuildMode::Production)
    }
}

impl std::fmt::Display for BuildMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Module format the emitted entry bundles expose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LibraryTarget {
    /// Universal module definition (default)
    #[default]
    Umd,
    /// Assign to a global variable
    Var,
    /// CommonJS `module.exports`
    Commonjs,
    /// ECMAScript module
    Module,
}

/// Output layout handed to the bundler pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputOptions {
    /// Output directory for entry bundles
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    /// Filename template for entry bundles
    #[serde(default = "default_filename")]
    pub filename: String,

    /// Filename template for extracted stylesheets
    #[serde(default = "default_css_filename")]
    pub css_filename: String,

    /// Library namespace path, e.g. `["Froide", "components", "[name]"]`
    #[serde(default)]
    pub library: Vec<String>,

    #[serde(default)]
    pub library_target: LibraryTarget,

    /// Emit source maps
    #[serde(default = "crate::bundle::helpers::default_true")]
    pub source_maps: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            filename: default_filename(),
            css_filename: default_css_filename(),
            library: Vec::new(),
            library_target: LibraryTarget::default(),
            source_maps: true,
        }
    }
}
