//! splitplan - decides which entry points share a common vendor chunk.
//!
//! The crate is organised around one small piece of logic and the stages that
//! consume it:
//!
//! - [`classifier`] computes the ordered list of *shareable* entry points
//!   (declared entries minus an exclusion list) and exposes membership as a
//!   typed predicate.
//! - [`cache_group`] compiles configured cache groups, wiring the predicate in
//!   as a chunk filter.
//! - [`planner`] runs the grouping stage over a bundler's chunk manifest and
//!   reports which modules are hoisted into which shared chunk.
//! - [`rules`] resolves the loader chain for a module id.
//! - [`build_plan`] assembles the declarative result handed to a bundler.
//!
//! Everything here is synchronous and side-effect free; values are immutable
//! once built and can be shared across threads.
//!
//! # Example
//!
//! ```
//! use splitplan::{is_shareable, shareable_target_list};
//!
//! let targets = ["main", "document", "request", "tagautocomplete"];
//! let shareable = shareable_target_list(targets, ["main", "tagautocomplete"]);
//!
//! assert_eq!(shareable.to_vec(), vec!["document", "request"]);
//! assert!(is_shareable("document", &shareable));
//! assert!(!is_shareable("main", &shareable));
//! ```

pub mod build_plan;
pub mod cache_group;
pub mod classifier;
pub mod error;
pub mod manifest;
pub mod planner;
pub mod rules;

pub use build_plan::{BuildPlan, PlannedEntry};
pub use cache_group::{ChunkFilter, CompiledCacheGroup};
pub use classifier::{is_shareable, shareable_target_list, ChunkPredicate, ShareableTargets};
pub use error::{PlanError, Result};
pub use manifest::{ChunkInfo, ChunkKind, ChunkManifest, ManifestModule};
pub use planner::{PlannedChunk, SkipReason, SkippedGroup, SplitPlan, SplitPlanner};
pub use rules::{CompiledRule, RuleSet};

pub use splitplan_config as config;
