//! Global configuration settings shared across profiles.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalSettings {
    /// Default log filter when neither `--verbose`, `--quiet` nor `RUST_LOG` is given
    #[serde(default)]
    pub log_level: Option<String>,

    /// Separator used when the shareable target list is rendered as a string
    #[serde(default)]
    pub separator: Option<String>,
}

impl GlobalSettings {
    pub const DEFAULT_SEPARATOR: &'static str = "|";

    pub fn separator(&self) -> &str {
        self.separator.as_deref().unwrap_or(Self::DEFAULT_SEPARATOR)
    }
}
