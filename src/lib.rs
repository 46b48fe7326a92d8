// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search, filtering and fuzzy matching for a lab's chemical-standards inventory.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────────┐
//! │  types.rs   │────▶│ inverted.rs  │────▶│      engine.rs       │
//! │  (Record,   │     │ (token →     │     │ (Snapshot swap,      │
//! │   fields)   │     │  positions)  │     │  public operations)  │
//! └─────────────┘     └──────────────┘     └──────────────────────┘
//!        │                                            │
//!        ▼                                            ▼
//! ┌─────────────┐     ┌──────────────────────────────────────────┐
//! │  fuzzy/     │────▶│ search/  query → filter → sort           │
//! │ (Levenshtein│     │          similar, suggest                │
//! └─────────────┘     └──────────────────────────────────────────┘
//! ```
//!
//! `registry.rs` validates registry ids (check-digit scheme) and
//! `contracts.rs` holds the debug assertions the other modules run.
//!
//! # Usage
//!
//! ```
//! use chemdex::{Engine, FilterSpec, Query, SortField, SortSpec};
//! use chemdex::testing::sample_inventory;
//!
//! let engine = Engine::with_corpus(sample_inventory());
//! let result = engine
//!     .search(
//!         &Query::new("glucse"),
//!         &FilterSpec::new(),
//!         Some(&SortSpec::ascending(SortField::Name)),
//!     )
//!     .unwrap();
//! assert_eq!(result.records[0].name, "Glucose Solution");
//! assert!(engine.validate_registry_id("7732-18-5"));
//! ```

pub mod contracts;
pub mod engine;
pub mod error;
pub mod fuzzy;
pub mod inverted;
pub mod registry;
pub mod search;
pub mod testing;
pub mod types;
pub mod utils;

pub use engine::{Engine, Snapshot};
pub use error::{EngineError, Result};
pub use fuzzy::{distance, similarity};
pub use inverted::InvertedIndex;
pub use registry::{validate_registry_id, RegistryId};
pub use search::{
    apply_filters, apply_filters_at, apply_sort, find_similar, suggest, DateRange, ExpiryFilter,
    ExpiryPreset, ExpiryState, FilterOptions, FilterSpec, NumericRange, Query, SearchResult,
    SimilarOptions, SortDirection, SortSpec,
};
pub use types::{
    CategoryField, ExpiryField, IndexStats, Quantity, Record, SearchField, SimilarityCandidate,
    SortField, SortKind, Status,
};
pub use utils::normalize;
