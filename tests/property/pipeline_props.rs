//! Query, filter, sort and duplicate-finder properties.

use super::common::today;
use super::strategies::{corpus, filter_spec, phrase, sort_spec};
use chemdex::{apply_filters_at, apply_sort, find_similar, Engine, FilterSpec, Query, Record, SimilarOptions};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// A record always matches its own name in exact mode.
    #[test]
    fn prop_exact_self_match(records in corpus()) {
        for record in &records {
            prop_assert!(Query::new(record.name.clone()).exact(true).matches(record).unwrap());
        }
    }

    /// Filtering twice with the same spec changes nothing.
    #[test]
    fn prop_filter_idempotent(records in corpus(), spec in filter_spec()) {
        let once = apply_filters_at(records, &spec, today());
        let twice = apply_filters_at(once.clone(), &spec, today());
        prop_assert_eq!(once, twice);
    }

    /// Filters compose as set intersection: order of application is irrelevant
    /// and equals testing both predicates per record.
    #[test]
    fn prop_filter_composition(records in corpus(), a in filter_spec(), b in filter_spec()) {
        let ab = apply_filters_at(apply_filters_at(records.clone(), &a, today()), &b, today());
        let ba = apply_filters_at(apply_filters_at(records.clone(), &b, today()), &a, today());
        prop_assert_eq!(&ab, &ba);

        let (plan_a, plan_b) = (a.compile(today()), b.compile(today()));
        let both: Vec<Record> = records
            .iter()
            .filter(|r| plan_a.matches(r) && plan_b.matches(r))
            .cloned()
            .collect();
        prop_assert_eq!(ab, both);
    }

    /// One spec with two predicates equals two specs with one predicate each.
    #[test]
    fn prop_spec_is_conjunction(records in corpus(), a in filter_spec(), b in filter_spec()) {
        let status_only = FilterSpec { status: a.status.clone(), ..FilterSpec::default() };
        let range_only = FilterSpec { concentration: b.concentration.clone(), ..FilterSpec::default() };
        let combined = FilterSpec {
            status: a.status.clone(),
            concentration: b.concentration.clone(),
            ..FilterSpec::default()
        };

        let sequential = apply_filters_at(
            apply_filters_at(records.clone(), &status_only, today()),
            &range_only,
            today(),
        );
        prop_assert_eq!(apply_filters_at(records, &combined, today()), sequential);
    }

    /// Sorting permutes the input and is idempotent.
    #[test]
    fn prop_sort_permutation_and_idempotent(records in corpus(), spec in sort_spec()) {
        let sorted = apply_sort(records.clone(), &spec);
        prop_assert_eq!(sorted.len(), records.len());
        let mut before: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        let mut after: Vec<&str> = sorted.iter().map(|r| r.id.as_str()).collect();
        before.sort_unstable();
        after.sort_unstable();
        prop_assert_eq!(before, after);

        let again = apply_sort(sorted.clone(), &spec);
        prop_assert_eq!(again, sorted);
    }

    /// Search results are a subset of the corpus and never exceed it.
    #[test]
    fn prop_search_subset(records in corpus(), text in phrase(), spec in filter_spec()) {
        let engine = Engine::with_corpus(records.clone());
        let result = engine.search_at(&Query::new(text), &spec, None, today()).unwrap();
        prop_assert!(result.len() <= result.matched);
        prop_assert!(result.matched <= records.len());
        for record in &result.records {
            prop_assert!(records.contains(record));
        }
    }

    /// find_similar: bounded, above threshold, best first.
    #[test]
    fn prop_find_similar_bounds(
        records in corpus(),
        name in phrase(),
        threshold in 0.0f64..=1.0,
        max_results in 0usize..8,
    ) {
        let options = SimilarOptions::default().threshold(threshold).max_results(max_results);
        let hits = find_similar(&name, &records, options).unwrap();
        prop_assert!(hits.len() <= max_results);
        for hit in &hits {
            prop_assert!(hit.score >= threshold && hit.score <= 1.0);
        }
        prop_assert!(hits.windows(2).all(|w| w[0].score >= w[1].score));
    }

    /// Every suggestion is the name of some record.
    #[test]
    fn prop_suggestions_are_names(records in corpus(), prefix in "[a-e]{1,3}", limit in 0usize..6) {
        let engine = Engine::with_corpus(records.clone());
        let suggestions = engine.suggest(&prefix, limit);
        prop_assert!(suggestions.len() <= limit);
        for s in &suggestions {
            prop_assert!(records.iter().any(|r: &Record| &r.name == s));
        }
    }
}
