// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via edit distance.
//!
//! Full Levenshtein distance for scoring, and a bounded variant with early
//! exits for the yes/no "is this close enough" question the matcher asks.

mod levenshtein;

pub use levenshtein::*;
