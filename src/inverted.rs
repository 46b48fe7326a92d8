// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inverted index construction.
//!
//! Maps every normalized token of a record's indexable fields to the corpus
//! positions that contain it. Terms live in a `BTreeMap`, so a prefix is a
//! contiguous key range and iteration order is deterministic.
//!
//! The index is derived data: it is rebuilt from scratch whenever the corpus
//! changes and never patched in place.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **POSTING_LIST_SORTED**: Each posting list is strictly ascending (sorted, no duplicates)
//! 2. **POSTING_IN_BOUNDS**: Every position is `< corpus.len()`
//! 3. **NON_EMPTY**: Every term has at least one posting
//! 4. **TOKEN_LENGTH**: Every term has at least `MIN_TOKEN_CHARS` characters

use std::collections::BTreeMap;
use std::ops::Bound;

use serde::Serialize;

use crate::types::{Record, SearchField};
use crate::utils::{normalize, tokens};

/// Token → ascending corpus positions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InvertedIndex {
    terms: BTreeMap<String, Vec<usize>>,
    /// Number of records the index was built from.
    doc_count: usize,
}

impl InvertedIndex {
    /// Build an index over every indexable field of every record.
    ///
    /// A record is posted once per token, however many of its fields contain it.
    pub fn build(records: &[Record]) -> Self {
        let mut terms: BTreeMap<String, Vec<usize>> = BTreeMap::new();

        for (pos, record) in records.iter().enumerate() {
            for field in SearchField::ALL {
                let Some(text) = record.text(field) else {
                    continue;
                };
                let normalized = normalize(text);
                for token in tokens(&normalized) {
                    let postings = terms.entry(token.to_string()).or_default();
                    // Positions arrive in ascending order, so checking the tail
                    // is enough to keep POSTING_LIST_SORTED.
                    if postings.last() != Some(&pos) {
                        postings.push(pos);
                    }
                }
            }
        }

        Self {
            terms,
            doc_count: records.len(),
        }
    }

    /// Positions of records containing exactly `token` (already normalized).
    pub fn postings(&self, token: &str) -> Option<&[usize]> {
        self.terms.get(token).map(Vec::as_slice)
    }

    /// Terms starting with `prefix`, in lexicographic order.
    pub fn prefixed<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a [usize])> + 'a {
        self.terms
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(move |(term, _)| term.starts_with(prefix))
            .map(|(term, postings)| (term.as_str(), postings.as_slice()))
    }

    /// All terms with their postings, in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[usize])> {
        self.terms
            .iter()
            .map(|(term, postings)| (term.as_str(), postings.as_slice()))
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Total number of (term, position) pairs.
    pub fn posting_count(&self) -> usize {
        self.terms.values().map(Vec::len).sum()
    }

    /// Number of records the index was built from.
    pub fn doc_count(&self) -> usize {
        self.doc_count
    }

    /// Was this index built from a corpus of `corpus_len` records, with every
    /// posting in bounds? A `false` here means the index is stale.
    pub fn is_consistent_with(&self, corpus_len: usize) -> bool {
        self.doc_count == corpus_len
            && self
                .terms
                .values()
                .all(|postings| postings.iter().all(|&pos| pos < corpus_len))
    }
}
