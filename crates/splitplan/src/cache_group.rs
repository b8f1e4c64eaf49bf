//! Runtime form of configured cache groups.

use std::fmt;

use regex::Regex;
use splitplan_config::{CacheGroupOptions, ChunkScope};

use crate::classifier::{ChunkPredicate, ShareableTargets};
use crate::error::{PlanError, Result};
use crate::manifest::{ChunkInfo, ChunkKind};

/// Decides whether a chunk may give up modules to a cache group.
#[derive(Clone)]
pub enum ChunkFilter {
    All,
    Initial,
    Async,
    /// Injected chunk-name predicate, e.g. [`ShareableTargets::into_predicate`]
    Predicate(ChunkPredicate),
}

impl ChunkFilter {
    pub fn from_scope(scope: ChunkScope, shareable: &ShareableTargets) -> Self {
        match scope {
            ChunkScope::All => ChunkFilter::All,
            ChunkScope::Initial => ChunkFilter::Initial,
            ChunkScope::Async => ChunkFilter::Async,
            ChunkScope::Shareable => ChunkFilter::Predicate(shareable.clone().into_predicate()),
        }
    }

    pub fn selects(&self, chunk: &ChunkInfo) -> bool {
        match self {
            ChunkFilter::All => true,
            ChunkFilter::Initial => chunk.kind == ChunkKind::Initial,
            ChunkFilter::Async => chunk.kind == ChunkKind::Async,
            ChunkFilter::Predicate(predicate) => predicate(chunk.name.as_str()),
        }
    }
}

impl fmt::Debug for ChunkFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChunkFilter::All => f.write_str("All"),
            ChunkFilter::Initial => f.write_str("Initial"),
            ChunkFilter::Async => f.write_str("Async"),
            ChunkFilter::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CompiledCacheGroup {
    pub name: String,
    test: Option<Regex>,
    pub filter: ChunkFilter,
    pub min_chunks: usize,
    pub min_size: u64,
    pub priority: i32,
    pub enforce: bool,
}

impl CompiledCacheGroup {
    pub fn compile(options: &CacheGroupOptions, shareable: &ShareableTargets) -> Result<Self> {
        let test = options
            .test
            .as_deref()
            .map(|pattern| {
                Regex::new(pattern).map_err(|err| {
                    PlanError::pattern(
                        format!("split_chunks.cache_groups.{}.test", options.name),
                        pattern,
                        err,
                    )
                })
            })
            .transpose()?;

        Ok(Self {
            name: options.name.clone(),
            test,
            filter: ChunkFilter::from_scope(options.chunks, shareable),
            min_chunks: options.min_chunks.max(1),
            min_size: options.min_size,
            priority: options.priority,
            enforce: options.enforce,
        })
    }

    /// Build a group directly from a filter, bypassing configuration.
    pub fn with_filter(name: impl Into<String>, test: Option<Regex>, filter: ChunkFilter) -> Self {
        Self {
            name: name.into(),
            test,
            filter,
            min_chunks: 1,
            min_size: 0,
            priority: 0,
            enforce: false,
        }
    }

    pub fn matches_module(&self, module_id: &str) -> bool {
        self.test
            .as_ref()
            .is_none_or(|pattern| pattern.is_match(module_id))
    }

    /// Minimum number of selected chunks a module needs to be claimed
    pub fn required_chunks(&self) -> usize {
        if self.enforce { 1 } else { self.min_chunks }
    }

    /// Minimum total size for the group to be emitted
    pub fn required_size(&self) -> u64 {
        if self.enforce { 0 } else { self.min_size }
    }
}
