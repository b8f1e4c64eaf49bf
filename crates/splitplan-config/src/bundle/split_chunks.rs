use serde::{Deserialize, Serialize};

use super::helpers::{
    default_common_min_chunks, default_common_name, default_min_chunks, default_vendor_test,
};

/// Which chunks a cache group may pull modules out of
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkScope {
    /// Every chunk (default)
    #[default]
    All,
    /// Entry chunks only
    Initial,
    /// Chunks created by dynamic imports only
    Async,
    /// Entry chunks that are not listed in `exclude_from_common`
    Shareable,
}

/// Shared-chunk extraction settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitChunksOptions {
    #[serde(default = "default_cache_groups")]
    pub cache_groups: Vec<CacheGroupOptions>,
}

impl Default for SplitChunksOptions {
    fn default() -> Self {
        Self {
            cache_groups: default_cache_groups(),
        }
    }
}

fn default_cache_groups() -> Vec<CacheGroupOptions> {
    vec![CacheGroupOptions::common()]
}

/// A cache group: a rule for hoisting modules into one named shared chunk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheGroupOptions {
    /// Name of the group and of the emitted shared chunk
    pub name: String,

    /// Regex matched against module ids; `None` matches every module
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test: Option<String>,

    #[serde(default)]
    pub chunks: ChunkScope,

    /// Minimum number of selected chunks that must contain a module
    #[serde(default = "default_min_chunks")]
    pub min_chunks: usize,

    /// Minimum total size in bytes of the resulting shared chunk
    #[serde(default)]
    pub min_size: u64,

    /// Groups with a higher priority claim modules first
    #[serde(default)]
    pub priority: i32,

    /// Ignore `min_chunks` and `min_size`
    #[serde(default)]
    pub enforce: bool,
}

impl CacheGroupOptions {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            test: None,
            chunks: ChunkScope::All,
            min_chunks: default_min_chunks(),
            min_size: 0,
            priority: 0,
            enforce: false,
        }
    }

    /// Vendor code shared by at least two shareable entries.
    pub fn common() -> Self {
        Self {
            name: default_common_name(),
            test: Some(default_vendor_test()),
            chunks: ChunkScope::Shareable,
            min_chunks: default_common_min_chunks(),
            min_size: 0,
            priority: 0,
            enforce: false,
        }
    }

    pub fn with_test(mut self, pattern: impl Into<String>) -> Self {
        self.test = Some(pattern.into());
        self
    }

    pub fn with_min_size(mut self, min_size: u64) -> Self {
        self.min_size = min_size;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_has_common_group() {
        let options = SplitChunksOptions::default();
        assert_eq!(options.cache_groups.len(), 1);

        let common = &options.cache_groups[0];
        assert_eq!(common.name, "common");
        assert_eq!(common.chunks, ChunkScope::Shareable);
        assert_eq!(common.min_chunks, 2);
        assert_eq!(common.min_size, 0);
    }

    #[test]
    fn group_fields_default_when_omitted() {
        let group: CacheGroupOptions = serde_json::from_value(json!({
            "name": "pdfjs",
            "test": "pdf\\.js$"
        }))
        .unwrap();

        assert_eq!(group.chunks, ChunkScope::All);
        assert_eq!(group.min_chunks, 1);
        assert_eq!(group.priority, 0);
        assert!(!group.enforce);
    }

    #[test]
    fn explicit_groups_replace_default() {
        let options: SplitChunksOptions = serde_json::from_value(json!({
            "cache_groups": [{ "name": "vendors", "chunks": "initial" }]
        }))
        .unwrap();

        assert_eq!(options.cache_groups.len(), 1);
        assert_eq!(options.cache_groups[0].name, "vendors");
        assert_eq!(options.cache_groups[0].chunks, ChunkScope::Initial);
    }
}
