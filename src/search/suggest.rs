// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Autocomplete from the inverted index.

use std::collections::HashSet;

use crate::inverted::InvertedIndex;
use crate::types::Record;
use crate::utils::normalize;

/// Default number of suggestions.
pub const DEFAULT_SUGGEST_LIMIT: usize = 5;

/// Names of records holding a token that extends `prefix`.
///
/// Terms are visited in lexicographic order and their postings in corpus
/// order; a term equal to the prefix is skipped (the user already typed it).
/// Names are deduplicated and returned in first-seen order, at most `limit`.
///
/// `index` must have been built from `records`.
pub fn suggest(index: &InvertedIndex, records: &[Record], prefix: &str, limit: usize) -> Vec<String> {
    let prefix = normalize(prefix);
    if prefix.is_empty() || limit == 0 {
        return Vec::new();
    }

    let mut seen: HashSet<&str> = HashSet::new();
    let mut names = Vec::new();

    for (term, postings) in index.prefixed(&prefix) {
        if term == prefix {
            continue;
        }
        for &pos in postings {
            let Some(record) = records.get(pos) else {
                continue;
            };
            if seen.insert(record.name.as_str()) {
                names.push(record.name.clone());
                if names.len() == limit {
                    return names;
                }
            }
        }
    }

    names
}
