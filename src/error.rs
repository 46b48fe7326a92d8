// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Caller configuration errors.
//!
//! Bad user data never lands here. A malformed registry id is `false`, an
//! inverted range is an empty result. These variants are for callers that hand
//! the engine a configuration it cannot honour.

use thiserror::Error;

/// Errors raised for invalid engine configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Similarity threshold outside `[0, 1]` (or NaN).
    #[error("similarity threshold {0} is outside [0, 1]")]
    InvalidThreshold(f64),

    /// Sort field name that does not correspond to a sortable record field.
    #[error("unknown sort field '{0}'")]
    UnknownSortField(String),

    /// Search field name that does not correspond to a searchable record field.
    #[error("unknown search field '{0}'")]
    UnknownSearchField(String),

    /// Filter field name that does not correspond to a categorical record field.
    #[error("unknown filter field '{0}'")]
    UnknownFilterField(String),

    /// Unrecognised sort direction.
    #[error("unknown sort direction '{0}' (expected 'asc' or 'desc')")]
    UnknownSortDirection(String),

    /// Unrecognised expiry preset name.
    #[error("unknown expiry preset '{0}'")]
    UnknownExpiryPreset(String),

    /// Unrecognised record status.
    #[error("unknown status '{0}'")]
    UnknownStatus(String),
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Reject thresholds outside `[0, 1]`. NaN fails both comparisons and is rejected too.
pub(crate) fn check_threshold(threshold: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&threshold) {
        Ok(threshold)
    } else {
        Err(EngineError::InvalidThreshold(threshold))
    }
}
