// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Duplicate detection before registration.
//!
//! Scores a candidate name against every record name and reports the closest
//! ones. Advisory only: the registration workflow shows the list, the operator
//! decides.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::contracts::check_candidates_well_formed;
use crate::error::{check_threshold, Result};
use crate::fuzzy::{similar_enough, similarity};
use crate::types::{Record, SimilarityCandidate};
use crate::utils::normalize;

/// Default minimum name similarity for a probable duplicate.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.82;

/// Default number of candidates reported.
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Tuning for [`find_similar`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimilarOptions {
    pub threshold: f64,
    pub max_results: usize,
}

impl Default for SimilarOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SIMILARITY_THRESHOLD,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl SimilarOptions {
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }
}

/// Record names similar to `name`, best first.
///
/// Every returned score is `>= threshold`; ties keep corpus order; at most
/// `max_results` entries. A blank `name` has nothing to compare and yields
/// an empty list.
pub fn find_similar(
    name: &str,
    records: &[Record],
    options: SimilarOptions,
) -> Result<Vec<SimilarityCandidate>> {
    let threshold = check_threshold(options.threshold)?;
    let needle = normalize(name);
    if needle.is_empty() || options.max_results == 0 {
        return Ok(Vec::new());
    }

    let score = |record: &Record| -> Option<SimilarityCandidate> {
        let hay = normalize(&record.name);
        if !similar_enough(&needle, &hay, threshold) {
            return None;
        }
        Some(SimilarityCandidate {
            name: record.name.clone(),
            record_id: record.id.clone(),
            score: similarity(&needle, &hay),
        })
    };

    #[cfg(feature = "parallel")]
    let mut candidates: Vec<SimilarityCandidate> = records.par_iter().filter_map(score).collect();
    #[cfg(not(feature = "parallel"))]
    let mut candidates: Vec<SimilarityCandidate> = records.iter().filter_map(score).collect();

    // Stable: equal scores stay in corpus order.
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
    candidates.truncate(options.max_results);

    check_candidates_well_formed(&candidates, threshold, options.max_results);
    Ok(candidates)
}
