//! Property-based tests for the suggestion engine and selection cursor.

use autosuggest_core::{compute_suggestions, find_ignore_case, MAX_SUGGESTIONS};
use proptest::prelude::*;

/// Candidate display strings: mixed case letters plus a few separators.
fn candidate_strategy() -> impl Strategy<Value = String> {
    "[abcxABCX ._-]{0,16}".prop_map(|s| s.to_string())
}

fn candidates_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(candidate_strategy(), 0..24)
}

/// Queries drawn from a small alphabet so matches are common.
fn query_strategy() -> impl Strategy<Value = String> {
    "[abAB]{0,4}".prop_map(|s| s.to_string())
}

proptest! {
    /// Property: queries shorter than two characters never produce suggestions.
    #[test]
    fn prop_short_query_is_empty(
        candidates in candidates_strategy(),
        query in "[a-zA-Z]{0,1}",
    ) {
        prop_assert!(compute_suggestions(&query, &candidates).is_empty());
    }

    /// Property: the set is bounded by six and by the number of matches.
    #[test]
    fn prop_set_is_bounded(
        candidates in candidates_strategy(),
        query in "[abAB]{2,4}",
    ) {
        let set = compute_suggestions(&query, &candidates);
        let matches = candidates
            .iter()
            .filter(|c| c.to_lowercase().contains(&query.to_lowercase()))
            .count();

        prop_assert!(set.len() <= MAX_SUGGESTIONS);
        prop_assert!(set.len() <= matches);
        prop_assert_eq!(set.len(), matches.min(MAX_SUGGESTIONS));
    }

    /// Property: suggestions keep candidate order.
    #[test]
    fn prop_candidate_order_preserved(
        candidates in candidates_strategy(),
        query in query_strategy(),
    ) {
        let set = compute_suggestions(&query, &candidates);
        let expected: Vec<&String> = candidates
            .iter()
            .filter(|c| find_ignore_case(c, &query).is_some())
            .take(set.len())
            .collect();
        let actual: Vec<&String> = set.iter().map(|s| &s.item).collect();
        prop_assert_eq!(actual, expected);
    }

    /// Property: exactly the first suggestion is selected after computation.
    #[test]
    fn prop_first_selected(
        candidates in candidates_strategy(),
        query in query_strategy(),
    ) {
        let set = compute_suggestions(&query, &candidates);
        let selected: Vec<usize> = set
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_selected())
            .map(|(i, _)| i)
            .collect();

        if set.is_empty() {
            prop_assert!(selected.is_empty());
        } else {
            prop_assert_eq!(selected, vec![0]);
        }
    }

    /// Property: the three parts reassemble the display string and the
    /// middle part matches the query ignoring case.
    #[test]
    fn prop_split_reassembles(
        candidates in candidates_strategy(),
        query in query_strategy(),
    ) {
        for s in &compute_suggestions(&query, &candidates) {
            prop_assert_eq!(format!("{}{}{}", s.before, s.matched, s.after), s.item.clone());
            prop_assert_eq!(s.matched.to_lowercase(), query.to_lowercase());
            prop_assert!(!s.before.to_lowercase().contains(&query.to_lowercase()));
        }
    }

    /// Property: next followed by previous (and vice versa) restores the index.
    #[test]
    fn prop_next_previous_inverse(
        prefixes in prop::collection::vec("[a-zA-Z]{0,5}", 1..10),
        query in "[a-z]{2,4}",
        steps in 0usize..8,
    ) {
        let candidates: Vec<String> = prefixes.iter().map(|p| format!("{p}{query}")).collect();
        let mut set = compute_suggestions(&query, &candidates);
        prop_assert!(!set.is_empty());
        for _ in 0..steps {
            set.select_next();
        }
        let start = set.selected_index();

        prop_assert!(set.select_next());
        prop_assert!(set.select_previous());
        prop_assert_eq!(set.selected_index(), start);

        prop_assert!(set.select_previous());
        prop_assert!(set.select_next());
        prop_assert_eq!(set.selected_index(), start);
    }

    /// Property: `len` calls to select_next come back to the start.
    #[test]
    fn prop_next_cycles(
        candidates in candidates_strategy(),
        query in query_strategy(),
    ) {
        let mut set = compute_suggestions(&query, &candidates);
        let start = set.selected_index();
        for _ in 0..set.len() {
            set.select_next();
        }
        prop_assert_eq!(set.selected_index(), start);
    }
}
