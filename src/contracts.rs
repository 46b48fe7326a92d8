// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the engine's invariants.
//!
//! Debug-mode assertions that verify what the rest of the crate promises:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function              | Invariant                                        |
//! |--------------------------------|--------------------------------------------------|
//! | `check_index_well_formed`      | postings ascending, in bounds, non-empty         |
//! | `check_sorted_stable`          | output ordered, ties keep input order            |
//! | `check_candidates_well_formed` | scores ≥ threshold, descending, within `max`     |
//!
//! # Usage
//!
//! ```ignore
//! // In debug builds, this panics if invariant is violated
//! check_index_well_formed(&index, records.len());
//!
//! // In release builds, this is a no-op
//! ```

use std::cmp::Ordering;

use crate::inverted::InvertedIndex;
use crate::types::SimilarityCandidate;
use crate::utils::MIN_TOKEN_CHARS;

// ============================================================================
// INDEX CONTRACTS
// ============================================================================

/// Check that an inverted index is well-formed for a corpus of `corpus_len` records.
///
/// # Panics (debug builds only)
/// Panics if any posting list is empty, unsorted, duplicated or out of bounds,
/// or if a term is shorter than `MIN_TOKEN_CHARS`.
#[inline]
pub fn check_index_well_formed(index: &InvertedIndex, corpus_len: usize) {
    debug_assert_eq!(
        index.doc_count(),
        corpus_len,
        "Contract violation: index built from {} records, corpus has {}",
        index.doc_count(),
        corpus_len
    );

    for (term, postings) in index.iter() {
        debug_assert!(
            term.chars().count() >= MIN_TOKEN_CHARS,
            "Contract violation: term '{}' shorter than {} chars",
            term,
            MIN_TOKEN_CHARS
        );
        debug_assert!(
            !postings.is_empty(),
            "Contract violation: NON_EMPTY - term '{}' has no postings",
            term
        );
        for i in 1..postings.len() {
            debug_assert!(
                postings[i - 1] < postings[i],
                "Contract violation: POSTING_LIST_SORTED - '{}' postings[{}] = {} >= postings[{}] = {}",
                term,
                i - 1,
                postings[i - 1],
                i,
                postings[i]
            );
        }
        if let Some(&last) = postings.last() {
            debug_assert!(
                last < corpus_len,
                "Contract violation: POSTING_IN_BOUNDS - '{}' posts {} but corpus has {} records",
                term,
                last,
                corpus_len
            );
        }
    }
}

// ============================================================================
// SORT CONTRACTS
// ============================================================================

/// Check that `items` (tagged with their input position) are ordered by `cmp`
/// and that equal items kept their input order.
///
/// # Panics (debug builds only)
/// Panics if any adjacent pair is out of order, or if an equal pair was swapped.
#[inline]
pub fn check_sorted_stable<T>(items: &[(usize, T)], cmp: impl Fn(&T, &T) -> Ordering) {
    for i in 1..items.len() {
        let (prev_pos, prev) = &items[i - 1];
        let (curr_pos, curr) = &items[i];
        let ord = cmp(prev, curr);
        debug_assert!(
            ord != Ordering::Greater,
            "Contract violation: sort order - item at {} sorts after item at {}",
            i - 1,
            i
        );
        debug_assert!(
            ord != Ordering::Equal || prev_pos < curr_pos,
            "Contract violation: sort stability - equal items from input {} and {} swapped",
            prev_pos,
            curr_pos
        );
    }
}

// ============================================================================
// SIMILARITY CONTRACTS
// ============================================================================

/// Check duplicate-finder output: bounded length, scores in `[threshold, 1]`,
/// non-increasing scores.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_candidates_well_formed(
    candidates: &[SimilarityCandidate],
    threshold: f64,
    max_results: usize,
) {
    debug_assert!(
        candidates.len() <= max_results,
        "Contract violation: {} candidates exceed max_results {}",
        candidates.len(),
        max_results
    );
    for (i, c) in candidates.iter().enumerate() {
        debug_assert!(
            c.score >= threshold && c.score <= 1.0,
            "Contract violation: candidate {} score {} outside [{}, 1]",
            i,
            c.score,
            threshold
        );
        if i > 0 {
            debug_assert!(
                candidates[i - 1].score >= c.score,
                "Contract violation: candidates not descending at {}",
                i
            );
        }
    }
}
