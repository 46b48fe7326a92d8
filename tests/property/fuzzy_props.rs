//! Levenshtein and similarity properties, with `strsim` as the oracle.

use chemdex::fuzzy::{levenshtein_within, similar_enough};
use chemdex::{distance, similarity};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Differential test: distance matches strsim.
    #[test]
    fn prop_distance_matches_oracle(a in "\\PC{0,12}", b in "\\PC{0,12}") {
        prop_assert_eq!(distance(&a, &b), strsim::levenshtein(&a, &b));
    }

    #[test]
    fn prop_similarity_reflexive(a in "\\PC{0,16}") {
        prop_assert_eq!(similarity(&a, &a), 1.0);
    }

    #[test]
    fn prop_similarity_symmetric_and_bounded(a in "[a-z ]{0,12}", b in "[a-z ]{0,12}") {
        let s = similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&s));
        prop_assert_eq!(s, similarity(&b, &a));
    }

    #[test]
    fn prop_within_iff_distance(a in "[a-d]{0,10}", b in "[a-d]{0,10}", max in 0usize..12) {
        prop_assert_eq!(levenshtein_within(&a, &b, max), distance(&a, &b) <= max);
    }

    #[test]
    fn prop_similar_enough_iff_similarity(
        a in "[a-d]{0,10}",
        b in "[a-d]{0,10}",
        threshold in 0.0f64..=1.0,
    ) {
        prop_assert_eq!(similar_enough(&a, &b, threshold), similarity(&a, &b) >= threshold);
    }
}
