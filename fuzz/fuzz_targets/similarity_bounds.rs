// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for edit distance and similarity.
//!
//! Checks the metric properties the matcher relies on: bounded similarity,
//! symmetry, identity, and agreement between the bounded and full DP.

#![no_main]

use arbitrary::Arbitrary;
use chemdex::fuzzy::{levenshtein_within, similar_enough};
use chemdex::{distance, similarity};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct PairInput {
    a: String,
    b: String,
    /// Mapped onto [0, 1].
    threshold: u16,
}

fuzz_target!(|input: PairInput| {
    // Cap lengths to avoid timeouts on the quadratic DP
    let a: String = input.a.chars().take(64).collect();
    let b: String = input.b.chars().take(64).collect();
    let threshold = f64::from(input.threshold) / f64::from(u16::MAX);

    let d = distance(&a, &b);
    assert_eq!(d, distance(&b, &a));
    assert!(d <= a.chars().count().max(b.chars().count()));
    assert_eq!(distance(&a, &a), 0);

    let s = similarity(&a, &b);
    assert!((0.0..=1.0).contains(&s));
    assert_eq!(s == 1.0, a == b);

    assert!(levenshtein_within(&a, &b, d));
    if d > 0 {
        assert!(!levenshtein_within(&a, &b, d - 1));
    }

    assert_eq!(similar_enough(&a, &b, threshold), s >= threshold);
});
