//! Shared test utilities and fixtures.

#![allow(dead_code)]

use chemdex::{Engine, InvertedIndex, Quantity, Record, Status};
use chrono::NaiveDate;

// Re-export canonical test utilities from chemdex::testing
pub use chemdex::testing::{date, make_corpus, make_record, sample_inventory};

/// Fixed "today" for expiry-dependent assertions.
pub fn today() -> NaiveDate {
    date("2026-10-19")
}

/// Engine loaded with [`sample_inventory`].
pub fn sample_engine() -> Engine {
    Engine::with_corpus(sample_inventory())
}

/// Ids of `records`, in order.
pub fn ids(records: &[Record]) -> Vec<String> {
    records.iter().map(|r| r.id.clone()).collect()
}

/// A larger, deterministic inventory for ordering and concurrency tests.
///
/// `n` records cycling through a handful of names, statuses and amounts so
/// that every sort field has plenty of ties.
pub fn synthetic_inventory(n: usize) -> Vec<Record> {
    const NAMES: [&str; 6] = [
        "Glucose Standard",
        "Sodium Chloride",
        "Ethanol Absolute",
        "Protein Standard",
        "Lead Nitrate",
        "Copper Sulfate",
    ];
    (0..n)
        .map(|i| {
            let mut r = make_record(&format!("S{:04}", i), NAMES[i % NAMES.len()]);
            r.status = Status::ALL[i % Status::ALL.len()];
            r.concentration = Quantity::new(((i * 37) % 11) as f64 * 100.0, "mg/L");
            r.date_received = date("2025-01-01") + chrono::Days::new((i % 17) as u64);
            if i % 4 != 0 {
                r.lab_expiry = Some(date("2026-10-01") + chrono::Days::new((i % 13) as u64 * 10));
            }
            r
        })
        .collect()
}

/// Assert that an index is well formed for a corpus of `corpus_len` records.
pub fn assert_index_well_formed(index: &InvertedIndex, corpus_len: usize) {
    assert_eq!(index.doc_count(), corpus_len);
    for (term, postings) in index.iter() {
        assert!(term.chars().count() >= 2, "term '{}' too short", term);
        assert!(!postings.is_empty(), "term '{}' has no postings", term);
        assert!(
            postings.windows(2).all(|w| w[0] < w[1]),
            "postings for '{}' not strictly ascending: {:?}",
            term,
            postings
        );
        assert!(
            postings.iter().all(|&p| p < corpus_len),
            "postings for '{}' out of bounds: {:?}",
            term,
            postings
        );
    }
}
