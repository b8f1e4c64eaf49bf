//! The grouping stage: hoists modules out of their source chunks into shared chunks.
//!
//! Groups are tried by descending priority (declaration order breaks ties).
//! Every manifest module is offered to each group in turn and the first group
//! that accepts it keeps it. A group accepts a module when its test matches the
//! module id and its chunk filter selects enough of the chunks containing the
//! module. Groups that end up too small, or empty, are reported as skipped and
//! their modules stay where they were.

use std::collections::HashMap;

use serde::Serialize;
use splitplan_config::BundleOptions;

use crate::cache_group::CompiledCacheGroup;
use crate::classifier::ShareableTargets;
use crate::error::Result;
use crate::manifest::ChunkManifest;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedChunk {
    pub name: String,
    /// Module ids, in manifest order
    pub modules: Vec<String>,
    /// Chunks the modules were taken from, in manifest chunk order
    pub source_chunks: Vec<String>,
    pub size: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    NoMatchingModules,
    BelowMinSize { size: u64, min_size: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedGroup {
    pub name: String,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SplitPlan {
    pub chunks: Vec<PlannedChunk>,
    pub skipped: Vec<SkippedGroup>,
}

impl SplitPlan {
    pub fn chunk(&self, name: &str) -> Option<&PlannedChunk> {
        self.chunks.iter().find(|chunk| chunk.name == name)
    }

    /// Name of the shared chunk that received `module_id`, if any.
    pub fn group_of(&self, module_id: &str) -> Option<&str> {
        self.chunks
            .iter()
            .find(|chunk| chunk.modules.iter().any(|id| id == module_id))
            .map(|chunk| chunk.name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct SplitPlanner {
    groups: Vec<CompiledCacheGroup>,
}

impl SplitPlanner {
    pub fn new(mut groups: Vec<CompiledCacheGroup>) -> Self {
        // stable: equal priorities keep declaration order
        groups.sort_by(|a, b| b.priority.cmp(&a.priority));
        Self { groups }
    }

    /// Compile the configured cache groups against the bundle's shareable targets.
    pub fn from_options(options: &BundleOptions) -> Result<Self> {
        let shareable = ShareableTargets::from_options(options);
        let groups = options
            .split_chunks
            .cache_groups
            .iter()
            .map(|group| CompiledCacheGroup::compile(group, &shareable))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(groups))
    }

    /// Groups in evaluation order.
    pub fn groups(&self) -> &[CompiledCacheGroup] {
        &self.groups
    }

    pub fn plan(&self, manifest: &ChunkManifest) -> Result<SplitPlan> {
        manifest.validate()?;

        let chunk_order: HashMap<&str, usize> = manifest
            .chunks
            .iter()
            .enumerate()
            .map(|(index, chunk)| (chunk.name.as_str(), index))
            .collect();

        let mut claimed: Vec<Vec<usize>> = vec![Vec::new(); self.groups.len()];
        for (module_index, module) in manifest.modules.iter().enumerate() {
            let owner = self.groups.iter().position(|group| {
                if !group.matches_module(&module.id) {
                    return false;
                }
                let selected = module
                    .chunks
                    .iter()
                    .filter_map(|name| manifest.chunk(name))
                    .filter(|chunk| group.filter.selects(chunk))
                    .count();
                selected >= group.required_chunks()
            });
            if let Some(group_index) = owner {
                claimed[group_index].push(module_index);
            }
        }

        let mut plan = SplitPlan::default();
        for (group, modules) in self.groups.iter().zip(claimed) {
            if modules.is_empty() {
                tracing::debug!(group = %group.name, "cache group matched no modules");
                plan.skipped.push(SkippedGroup {
                    name: group.name.clone(),
                    reason: SkipReason::NoMatchingModules,
                });
                continue;
            }

            let size: u64 = modules.iter().map(|&i| manifest.modules[i].size).sum();
            let min_size = group.required_size();
            if size < min_size {
                tracing::debug!(group = %group.name, size, min_size, "cache group below minimum size");
                plan.skipped.push(SkippedGroup {
                    name: group.name.clone(),
                    reason: SkipReason::BelowMinSize { size, min_size },
                });
                continue;
            }

            let mut sources: Vec<usize> = modules
                .iter()
                .flat_map(|&i| manifest.modules[i].chunks.iter())
                .filter_map(|name| chunk_order.get(name.as_str()).copied())
                .collect();
            sources.sort_unstable();
            sources.dedup();

            plan.chunks.push(PlannedChunk {
                name: group.name.clone(),
                modules: modules
                    .iter()
                    .map(|&i| manifest.modules[i].id.clone())
                    .collect(),
                source_chunks: sources
                    .into_iter()
                    .map(|i| manifest.chunks[i].name.clone())
                    .collect(),
                size,
            });
        }

        tracing::debug!(
            chunks = plan.chunks.len(),
            skipped = plan.skipped.len(),
            "split plan computed"
        );
        Ok(plan)
    }
}
