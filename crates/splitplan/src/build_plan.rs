//! Declarative build plan handed to the bundler pipeline.

use indexmap::IndexMap;
use serde::Serialize;
use splitplan_config::{
    BuildMode, BundleOptions, CacheGroupOptions, GlobalSettings, ModuleRule, OutputOptions,
    ProjectConfig,
};

use crate::classifier::ShareableTargets;
use crate::error::Result;

pub const NODE_ENV_KEY: &str = "process.env.NODE_ENV";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedEntry {
    pub name: String,
    pub sources: Vec<String>,
    /// Whether the entry takes part in common-chunk extraction
    pub shareable: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct BuildPlan {
    pub mode: BuildMode,
    pub minify: bool,
    pub entries: Vec<PlannedEntry>,
    pub excluded: Vec<String>,
    pub shareable: ShareableTargets,
    /// Shareable names joined by the configured separator
    pub shareable_list: String,
    pub output: OutputOptions,
    pub cache_groups: Vec<CacheGroupOptions>,
    pub rules: Vec<ModuleRule>,
    pub define: IndexMap<String, String>,
}

impl BuildPlan {
    /// Assemble a plan using the default `|` separator.
    pub fn from_config(options: &BundleOptions) -> Self {
        Self::with_separator(options, GlobalSettings::DEFAULT_SEPARATOR)
    }

    pub fn from_project(config: &ProjectConfig) -> Self {
        Self::with_separator(&config.bundle, config.settings.separator())
    }

    pub fn with_separator(options: &BundleOptions, separator: &str) -> Self {
        let shareable = ShareableTargets::from_options(options);

        let entries = options
            .entries
            .iter()
            .map(|entry| PlannedEntry {
                name: entry.name.clone(),
                sources: entry.sources().to_vec(),
                shareable: shareable.contains(&entry.name),
            })
            .collect();

        let mut define = IndexMap::with_capacity(options.define.len() + 1);
        if !options.define.contains_key(NODE_ENV_KEY) {
            define.insert(NODE_ENV_KEY.to_string(), format!("\"{}\"", options.mode));
        }
        define.extend(options.define.iter().map(|(k, v)| (k.clone(), v.clone())));

        tracing::debug!(
            mode = %options.mode,
            entries = options.entries.len(),
            shareable = shareable.len(),
            "assembled build plan"
        );

        Self {
            mode: options.mode,
            minify: options.minify(),
            entries,
            excluded: options.exclude_from_common.clone(),
            shareable_list: shareable.joined(separator),
            shareable,
            output: options.output.clone(),
            cache_groups: options.split_chunks.cache_groups.clone(),
            rules: options.rules.clone(),
            define,
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
