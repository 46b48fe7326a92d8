// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search engine: one corpus, its index, and the operations over them.
//!
//! # Snapshots
//!
//! The corpus and its inverted index live together in an immutable
//! [`Snapshot`]. [`Engine::set_corpus`] builds the next snapshot off to the
//! side and then publishes it with a single pointer swap, so a reader holds
//! either the old pair or the new pair, never a corpus with a stale index.
//!
//! ```text
//!   set_corpus(records)
//!        │ build Snapshot { records, index }    (no lock held)
//!        ▼
//!   RwLock<Arc<Snapshot>>  ── write: swap Arc ──▶ new snapshot
//!        │
//!        └── read: clone Arc ──▶ search / suggest / find_similar
//! ```
//!
//! Every read clones the `Arc` and releases the lock before doing any work,
//! so a long search never blocks a rebuild and vice versa.
//!
//! There is no global instance: each `Engine` owns its own corpus.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use tracing::{info, warn};

use crate::contracts::check_index_well_formed;
use crate::error::Result;
use crate::inverted::InvertedIndex;
use crate::registry;
use crate::search::{
    find_similar, run_search, suggest, FilterOptions, FilterSpec, Query, SearchResult,
    SimilarOptions, SortSpec,
};
use crate::types::{IndexStats, Record, SimilarityCandidate};

#[cfg(feature = "parallel")]
use parking_lot::RwLock;
#[cfg(not(feature = "parallel"))]
use std::sync::RwLock;

/// A corpus and the index built from it.
#[derive(Debug, Default)]
pub struct Snapshot {
    records: Vec<Record>,
    index: InvertedIndex,
}

impl Snapshot {
    /// Index `records`. Duplicate ids are logged, not rejected.
    pub fn new(records: Vec<Record>) -> Self {
        let mut ids = HashSet::with_capacity(records.len());
        for record in &records {
            if !ids.insert(record.id.as_str()) {
                warn!(id = %record.id, "duplicate record id in corpus");
            }
        }

        let index = InvertedIndex::build(&records);
        check_index_well_formed(&index, records.len());

        info!(
            records = records.len(),
            tokens = index.len(),
            postings = index.posting_count(),
            "corpus indexed"
        );

        Self { records, index }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            records: self.records.len(),
            tokens: self.index.len(),
            postings: self.index.posting_count(),
        }
    }
}

/// Search, filter, sort, autocomplete and duplicate detection over a corpus
/// of inventory records.
///
/// `Engine` is `Send + Sync`; share it behind an `Arc` to search from several
/// threads while another replaces the corpus.
#[derive(Debug, Default)]
pub struct Engine {
    current: RwLock<Arc<Snapshot>>,
}

impl Engine {
    /// An engine with an empty corpus.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_corpus(records: Vec<Record>) -> Self {
        Self {
            current: RwLock::new(Arc::new(Snapshot::new(records))),
        }
    }

    /// Replace the corpus and rebuild the index.
    ///
    /// Searches already running finish against the snapshot they started with.
    pub fn set_corpus(&self, records: Vec<Record>) {
        let next = Arc::new(Snapshot::new(records));
        #[cfg(feature = "parallel")]
        {
            *self.current.write() = next;
        }
        #[cfg(not(feature = "parallel"))]
        {
            *self
                .current
                .write()
                .unwrap_or_else(std::sync::PoisonError::into_inner) = next;
        }
    }

    /// The snapshot current at the time of the call.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        #[cfg(feature = "parallel")]
        let guard = self.current.read();
        #[cfg(not(feature = "parallel"))]
        let guard = self
            .current
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Match, filter and sort. Expiry presets use today's local date.
    pub fn search(
        &self,
        query: &Query,
        filters: &FilterSpec,
        sort: Option<&SortSpec>,
    ) -> Result<SearchResult> {
        self.search_at(query, filters, sort, Local::now().date_naive())
    }

    /// [`Engine::search`] with expiry presets evaluated against `today`.
    pub fn search_at(
        &self,
        query: &Query,
        filters: &FilterSpec,
        sort: Option<&SortSpec>,
        today: NaiveDate,
    ) -> Result<SearchResult> {
        let snapshot = self.snapshot();
        run_search(snapshot.records(), query, filters, sort, today)
    }

    /// Up to `limit` record names with a token extending `prefix`.
    pub fn suggest(&self, prefix: &str, limit: usize) -> Vec<String> {
        let snapshot = self.snapshot();
        suggest(snapshot.index(), snapshot.records(), prefix, limit)
    }

    /// Existing records whose name is close to `name`.
    pub fn find_similar(
        &self,
        name: &str,
        options: SimilarOptions,
    ) -> Result<Vec<SimilarityCandidate>> {
        let snapshot = self.snapshot();
        find_similar(name, snapshot.records(), options)
    }

    pub fn validate_registry_id(&self, id: &str) -> bool {
        registry::validate_registry_id(id)
    }

    /// Distinct status and category values in the current corpus.
    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions::from_records(self.snapshot().records())
    }

    pub fn stats(&self) -> IndexStats {
        self.snapshot().stats()
    }
}
