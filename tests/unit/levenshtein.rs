//! Edit distance and similarity, checked against `strsim`.

use chemdex::fuzzy::{levenshtein_within, similar_enough};
use chemdex::{distance, similarity};

const PAIRS: &[(&str, &str)] = &[
    ("", ""),
    ("glucose", "glucse"),
    ("kitten", "sitting"),
    ("sodium chloride", "sodium chlorite"),
    ("ethanol", "methanol"),
    ("naïve", "naive"),
    ("ab", "ba"),
    ("protein standard", "glucose standard"),
    ("abc", ""),
];

#[test]
fn test_distance_matches_strsim() {
    for &(a, b) in PAIRS {
        assert_eq!(distance(a, b), strsim::levenshtein(a, b), "{:?} vs {:?}", a, b);
    }
}

#[test]
fn test_similarity_matches_strsim() {
    for &(a, b) in PAIRS {
        let expected = strsim::normalized_levenshtein(a, b);
        assert!(
            (similarity(a, b) - expected).abs() < 1e-12,
            "{:?} vs {:?}: {} != {}",
            a,
            b,
            similarity(a, b),
            expected
        );
    }
}

#[test]
fn test_similarity_examples() {
    assert_eq!(similarity("glucose", "glucose"), 1.0);
    assert!((similarity("glucse", "glucose") - 6.0 / 7.0).abs() < 1e-12);
    assert_eq!(similarity("abc", "xyz"), 0.0);
}

#[test]
fn test_within_agrees_with_distance() {
    for &(a, b) in PAIRS {
        let d = distance(a, b);
        assert!(levenshtein_within(a, b, d), "{:?} vs {:?} at {}", a, b, d);
        if d > 0 {
            assert!(!levenshtein_within(a, b, d - 1), "{:?} vs {:?} at {}", a, b, d - 1);
        }
    }
}

#[test]
fn test_similar_enough_agrees_with_similarity() {
    for &(a, b) in PAIRS {
        for threshold in [0.0, 0.25, 0.5, 0.8, 6.0 / 7.0, 0.9, 1.0] {
            assert_eq!(
                similar_enough(a, b, threshold),
                similarity(a, b) >= threshold,
                "{:?} vs {:?} at {}",
                a,
                b,
                threshold
            );
        }
    }
}
