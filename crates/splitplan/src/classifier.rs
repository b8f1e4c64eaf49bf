//! Build-target chunk classification.
//!
//! Entry points are either *shareable* (they may have vendor code hoisted
//! into a common chunk) or excluded (they stay self-contained because they
//! are loaded independently). The shareable list is computed once per build
//! from explicit inputs and never mutated afterwards.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexSet;
use serde::Serialize;
use splitplan_config::BundleOptions;

/// Chunk-name predicate handed to the grouping stage.
///
/// Shared, immutable, and safe to call from any number of worker threads.
pub type ChunkPredicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Ordered, duplicate-free list of entry names eligible for common-chunk extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ShareableTargets {
    targets: IndexSet<String>,
}

/// Every name in `all_targets` that is not in `exclusion_set`, in declaration order.
///
/// Exclusions naming no declared target are ignored. When `all_targets`
/// repeats a name, the first occurrence keeps its position and later
/// duplicates are dropped.
pub fn shareable_target_list<T, E>(all_targets: T, exclusion_set: E) -> ShareableTargets
where
    T: IntoIterator,
    T::Item: AsRef<str>,
    E: IntoIterator,
    E::Item: AsRef<str>,
{
    let excluded: HashSet<String> = exclusion_set
        .into_iter()
        .map(|name| name.as_ref().to_string())
        .collect();

    let mut declared = HashSet::new();
    let mut targets = IndexSet::new();
    for name in all_targets {
        let name = name.as_ref();
        declared.insert(name.to_string());
        if !excluded.contains(name) {
            targets.insert(name.to_string());
        }
    }

    let mut unknown: Vec<&str> = excluded
        .iter()
        .filter(|name| !declared.contains(*name))
        .map(String::as_str)
        .collect();
    if !unknown.is_empty() {
        unknown.sort_unstable();
        tracing::debug!(?unknown, "ignoring exclusions that match no entry");
    }

    ShareableTargets { targets }
}

/// True iff `chunk_name` is one of the shareable targets.
pub fn is_shareable(chunk_name: &str, shareable: &ShareableTargets) -> bool {
    shareable.contains(chunk_name)
}

impl ShareableTargets {
    /// Shareable targets of a bundle configuration.
    pub fn from_options(options: &BundleOptions) -> Self {
        shareable_target_list(options.entry_names(), &options.exclude_from_common)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.targets.contains(name)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.targets.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.targets.iter().cloned().collect()
    }

    /// Names joined with `separator`, e.g. `document|request`
    pub fn joined(&self, separator: &str) -> String {
        self.iter().collect::<Vec<_>>().join(separator)
    }

    /// Borrowing predicate for single-threaded use.
    pub fn predicate(&self) -> impl Fn(&str) -> bool + '_ {
        move |name| self.contains(name)
    }

    /// Owning predicate for injection into the grouping stage.
    pub fn into_predicate(self) -> ChunkPredicate {
        Arc::new(move |name: &str| self.contains(name))
    }
}

impl fmt::Display for ShareableTargets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined("|"))
    }
}

impl<'a> IntoIterator for &'a ShareableTargets {
    type Item = &'a String;
    type IntoIter = indexmap::set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.targets.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TARGETS: [&str; 4] = ["main", "document", "request", "tagautocomplete"];

    #[test]
    fn excludes_names_and_keeps_order() {
        let shareable = shareable_target_list(TARGETS, ["main", "tagautocomplete"]);
        assert_eq!(shareable.to_vec(), vec!["document", "request"]);
        assert!(is_shareable("document", &shareable));
        assert!(!is_shareable("main", &shareable));
    }

    #[test]
    fn unknown_exclusion_is_ignored() {
        let with_ghost = shareable_target_list(TARGETS, ["main", "tagautocomplete", "ghost"]);
        let without = shareable_target_list(TARGETS, ["main", "tagautocomplete"]);
        assert_eq!(with_ghost, without);
    }

    #[test]
    fn membership_is_exact() {
        let shareable = shareable_target_list(["request-alpha", "document"], Vec::<String>::new());
        assert!(!is_shareable("request", &shareable));
        assert!(!is_shareable("alpha", &shareable));
        assert!(is_shareable("request-alpha", &shareable));
    }

    #[test]
    fn exclusion_is_exact() {
        // "request" must not knock out "request-alpha"
        let shareable = shareable_target_list(["request", "request-alpha"], ["request"]);
        assert_eq!(shareable.to_vec(), vec!["request-alpha"]);
    }

    #[test]
    fn duplicates_keep_first_position() {
        let shareable = shareable_target_list(["a", "b", "a", "c"], Vec::<&str>::new());
        assert_eq!(shareable.to_vec(), vec!["a", "b", "c"]);
    }

    #[test]
    fn empty_inputs() {
        let shareable = shareable_target_list(Vec::<&str>::new(), ["main"]);
        assert!(shareable.is_empty());
        assert_eq!(shareable.joined("|"), "");
    }

    #[test]
    fn joined_and_display() {
        let shareable = shareable_target_list(TARGETS, ["main"]);
        assert_eq!(shareable.joined(","), "document,request,tagautocomplete");
        assert_eq!(shareable.to_string(), "document|request|tagautocomplete");
    }

    #[test]
    fn predicates_agree_with_membership() {
        let shareable = shareable_target_list(TARGETS, ["main"]);
        let borrowed = shareable.predicate();
        assert!(borrowed("request"));
        assert!(!borrowed("main"));

        let owned = shareable.clone().into_predicate();
        for name in TARGETS {
            assert_eq!(owned(name), shareable.contains(name));
        }
    }

    #[test]
    fn predicate_is_shareable_across_threads() {
        let predicate = shareable_target_list(TARGETS, ["main", "tagautocomplete"]).into_predicate();

        std::thread::scope(|scope| {
            let handles: Vec<_> = TARGETS
                .iter()
                .map(|&name| {
                    let predicate = Arc::clone(&predicate);
                    scope.spawn(move || (name, predicate(name)))
                })
                .collect();

            for handle in handles {
                let (name, result) = handle.join().unwrap();
                assert_eq!(result, name == "document" || name == "request");
            }
        });
    }

    #[test]
    fn from_options_uses_declared_entries() {
        let options = BundleOptions::default()
            .with_entry("main", "./main.ts")
            .with_entry("document", "./document.js")
            .with_excluded("main");

        let shareable = ShareableTargets::from_options(&options);
        assert_eq!(shareable.to_vec(), vec!["document"]);
    }

    #[test]
    fn serializes_as_sequence() {
        let shareable = shareable_target_list(TARGETS, ["main", "tagautocomplete"]);
        let json = serde_json::to_string(&shareable).unwrap();
        assert_eq!(json, r#"["document","request"]"#);
    }
}
