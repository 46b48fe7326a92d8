// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Arbitrary queries and prefixes against a fixed inventory.
//!
//! Whatever the user types, search, suggest and find_similar must return
//! without panicking and within their documented bounds.

#![no_main]

use std::sync::OnceLock;

use arbitrary::Arbitrary;
use chemdex::testing::sample_inventory;
use chemdex::{Engine, FilterSpec, Query, SimilarOptions};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct SearchInput {
    text: String,
    exact: bool,
    case_sensitive: bool,
    limit: u8,
}

static ENGINE: OnceLock<Engine> = OnceLock::new();

fuzz_target!(|input: SearchInput| {
    let engine = ENGINE.get_or_init(|| Engine::with_corpus(sample_inventory()));
    let text: String = input.text.chars().take(80).collect();

    let query = Query::new(text.clone())
        .exact(input.exact)
        .case_sensitive(input.case_sensitive);
    let Ok(result) = engine.search(&query, &FilterSpec::new(), None) else {
        panic!("valid query rejected");
    };
    assert!(result.len() <= result.total);

    let limit = usize::from(input.limit);
    assert!(engine.suggest(&text, limit).len() <= limit);

    let Ok(hits) = engine.find_similar(&text, SimilarOptions::default()) else {
        panic!("default options rejected");
    };
    assert!(hits.len() <= SimilarOptions::default().max_results);
});
