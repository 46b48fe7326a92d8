// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search pipeline: match, then filter, then sort.
//!
//! ```text
//! corpus ──▶ query.rs ──▶ filter.rs ──▶ sort.rs ──▶ SearchResult
//!            (fuzzy /     (status,      (stable,
//!             exact)       ranges,       missing
//!                          expiry)       last)
//! ```
//!
//! The duplicate finder (`similar.rs`) and autocomplete (`suggest.rs`) sit
//! beside the pipeline as independent entry points.

pub mod filter;
pub mod query;
pub mod similar;
pub mod sort;
pub mod suggest;

pub use filter::*;
pub use query::*;
pub use similar::*;
pub use sort::*;
pub use suggest::*;

use std::time::Instant;

use chrono::NaiveDate;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::types::Record;

/// Outcome of one search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Matching records, in result order. Owned copies: mutating them does
    /// not affect the engine.
    pub records: Vec<Record>,
    /// Corpus size at the time of the search.
    pub total: usize,
    /// Records that passed the text query, before filters.
    pub matched: usize,
    /// Records that also passed the filters; equals `records.len()`.
    pub filtered: usize,
    pub query: Query,
    pub filters: FilterSpec,
    pub sort: Option<SortSpec>,
}

impl SearchResult {
    /// Records left after filtering, same as [`filtered`](Self::filtered).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// A window of the result; clamps to the available records.
    pub fn page(&self, offset: usize, limit: usize) -> &[Record] {
        let start = offset.min(self.records.len());
        let end = start.saturating_add(limit).min(self.records.len());
        &self.records[start..end]
    }
}

/// Run the full pipeline over `records`, evaluating expiry presets against `today`.
pub fn run_search(
    records: &[Record],
    query: &Query,
    filters: &FilterSpec,
    sort: Option<&SortSpec>,
    today: NaiveDate,
) -> Result<SearchResult> {
    let started = Instant::now();
    let matcher = query.compile()?;

    #[cfg(feature = "parallel")]
    let hits: Vec<&Record> = records.par_iter().filter(|r| matcher.matches(r)).collect();
    #[cfg(not(feature = "parallel"))]
    let hits: Vec<&Record> = records.iter().filter(|r| matcher.matches(r)).collect();

    let matched = hits.len();
    let filtered = apply_filters_at(hits, filters, today);
    let ordered = match sort {
        Some(spec) => apply_sort(filtered, spec),
        None => filtered,
    };

    let result = SearchResult {
        filtered: ordered.len(),
        records: ordered.into_iter().cloned().collect(),
        total: records.len(),
        matched,
        query: query.clone(),
        filters: filters.clone(),
        sort: sort.copied(),
    };

    debug!(
        query = %query.text,
        total = result.total,
        matched,
        filtered = result.filtered,
        elapsed_us = started.elapsed().as_micros() as u64,
        "search complete"
    );

    Ok(result)
}
