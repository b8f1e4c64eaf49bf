use serde::{Deserialize, Serialize};

/// A module rule: which loader chain handles modules whose id matches `test`.
///
/// Loaders are listed in the order the bundler applies them to a module's
/// source, last to first, mirroring a webpack `use` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRule {
    /// Regex matched against the module id
    pub test: String,

    /// When set, the module id must also match this regex
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<String>,

    /// When set, modules matching this regex are skipped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,

    #[serde(default)]
    pub loaders: Vec<String>,
}

impl ModuleRule {
    pub fn new<I, S>(test: impl Into<String>, loaders: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            test: test.into(),
            include: None,
            exclude: None,
            loaders: loaders.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_include(mut self, pattern: impl Into<String>) -> Self {
        self.include = Some(pattern.into());
        self
    }

    pub fn with_exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude = Some(pattern.into());
        self
    }
}
