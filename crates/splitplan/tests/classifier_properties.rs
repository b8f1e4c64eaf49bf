//! Property-based tests for shareable target classification.

use std::collections::HashSet;

use proptest::prelude::*;
use splitplan::{is_shareable, shareable_target_list};

/// Distinct target names, in a random declaration order.
fn targets_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::hash_set("[a-z]{1,6}(-[a-z]{1,4})?", 0..=12)
        .prop_map(|names| names.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

/// Exclusions drawn partly from the targets and partly from unrelated names.
fn inputs_strategy() -> impl Strategy<Value = (Vec<String>, Vec<String>)> {
    targets_strategy().prop_flat_map(|targets| {
        let picked = if targets.is_empty() {
            Just(Vec::new()).boxed()
        } else {
            prop::sample::subsequence(targets.clone(), 0..=targets.len()).boxed()
        };
        let ghosts = prop::collection::vec("[A-Z]{1,4}", 0..=3);
        (Just(targets), picked, ghosts).prop_map(|(targets, mut picked, ghosts)| {
            picked.extend(ghosts);
            (targets, picked)
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_no_duplicates_and_order_preserved((targets, excluded) in inputs_strategy()) {
        let shareable = shareable_target_list(&targets, &excluded);
        let result = shareable.to_vec();

        let unique: HashSet<_> = result.iter().collect();
        prop_assert_eq!(unique.len(), result.len());

        let positions: Vec<usize> = result
            .iter()
            .map(|name| targets.iter().position(|t| t == name).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn prop_membership_iff_not_excluded((targets, excluded) in inputs_strategy()) {
        let shareable = shareable_target_list(&targets, &excluded);
        for name in &targets {
            prop_assert_eq!(shareable.contains(name), !excluded.contains(name));
        }
    }

    #[test]
    fn prop_is_shareable_iff_declared_and_not_excluded(
        (targets, excluded) in inputs_strategy(),
        candidate in "[a-zA-Z]{1,6}",
    ) {
        let shareable = shareable_target_list(&targets, &excluded);
        for name in targets.iter().chain(excluded.iter()).chain(std::iter::once(&candidate)) {
            let expected = targets.contains(name) && !excluded.contains(name);
            prop_assert_eq!(is_shareable(name, &shareable), expected);
        }
    }

    #[test]
    fn prop_idempotent((targets, excluded) in inputs_strategy()) {
        let first = shareable_target_list(&targets, &excluded);
        let second = shareable_target_list(&targets, &excluded);
        prop_assert_eq!(&first, &second);

        // Reclassifying the output changes nothing.
        let again = shareable_target_list(first.iter(), &excluded);
        prop_assert_eq!(again, first);
    }

    #[test]
    fn prop_unknown_exclusions_are_ignored(
        (targets, excluded) in inputs_strategy(),
        ghost in "[0-9]{1,4}",
    ) {
        let mut with_ghost = excluded.clone();
        with_ghost.push(ghost);
        prop_assert_eq!(
            shareable_target_list(&targets, &with_ghost),
            shareable_target_list(&targets, &excluded)
        );
    }
}

#[test]
fn froide_entries() {
    let targets = ["main", "document", "request", "tagautocomplete"];
    let shareable = shareable_target_list(targets, ["main", "tagautocomplete"]);

    assert_eq!(shareable.to_vec(), vec!["document", "request"]);
    assert_eq!(shareable.joined("|"), "document|request");
}

#[test]
fn prefix_names_are_not_members() {
    let shareable = shareable_target_list(["request-alpha"], Vec::<&str>::new());
    assert!(!is_shareable("request", &shareable));
}
