// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ordering.
//!
//! Sort order:
//! 1. **Present before missing** - a record without a value for the field
//!    (no registry id, no expiry date, NaN amount) always goes last, in both
//!    directions
//! 2. **Field value** - compared by the field's [`SortKind`]: chronologically,
//!    numerically, or as normalized text; `Descending` reverses this step only
//! 3. **Input position** - equal keys keep their input order
//!
//! Step 3 is what makes two identical searches return identical pages. It is
//! guaranteed by a stable sort and checked by `contracts::check_sorted_stable`
//! in debug builds.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::contracts::check_sorted_stable;
use crate::error::EngineError;
use crate::types::{ExpiryField, Record, SearchField, SortField, SortKind};
use crate::utils::normalize;

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl FromStr for SortDirection {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(EngineError::UnknownSortDirection(s.to_string())),
        }
    }
}

/// Field and direction to order results by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn ascending(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Descending,
        }
    }

    /// Resolve a field name and direction from text (`"dateReceived"`, `"desc"`).
    pub fn parse(field: &str, direction: &str) -> Result<Self, EngineError> {
        Ok(Self {
            field: field.parse()?,
            direction: direction.parse()?,
        })
    }

    /// Ascending comparison of two records on this spec's field, then direction applied.
    /// Missing values sort last either way.
    pub fn compare(&self, a: &Record, b: &Record) -> Ordering {
        compare_keys(&sort_key(a, self.field), &sort_key(b, self.field), self.direction)
    }
}

/// A record's value for one sort field, ready to compare.
#[derive(Debug, Clone, PartialEq)]
enum SortKey {
    Text(String),
    Number(f64),
    Date(NaiveDate),
    Missing,
}

fn sort_key(record: &Record, field: SortField) -> SortKey {
    match field.kind() {
        SortKind::Numeric => {
            let value = match field {
                SortField::Concentration => record.concentration.value,
                _ => record.packing_size.value,
            };
            if value.is_nan() {
                SortKey::Missing
            } else {
                SortKey::Number(value)
            }
        }
        SortKind::Date => {
            let date = match field {
                SortField::DateReceived => Some(record.date_received),
                SortField::CertificateExpiry => record.expiry(ExpiryField::Certificate),
                SortField::LabExpiry => record.expiry(ExpiryField::Lab),
                _ => record.expiry(ExpiryField::Earliest),
            };
            date.map_or(SortKey::Missing, SortKey::Date)
        }
        SortKind::Text => {
            let text = match field {
                SortField::Id => Some(record.id.as_str()),
                SortField::Status => Some(record.status.label()),
                SortField::Manufacturer => record.text(SearchField::Manufacturer),
                SortField::Supplier => record.text(SearchField::Supplier),
                SortField::RegistryId => record.text(SearchField::RegistryId),
                SortField::Lot => record.text(SearchField::Lot),
                SortField::TestGroup => record.text(SearchField::TestGroup),
                SortField::MaterialType => record.text(SearchField::MaterialType),
                SortField::StorageCondition => record.text(SearchField::StorageCondition),
                _ => record.text(SearchField::Name),
            };
            text.map_or(SortKey::Missing, |t| SortKey::Text(normalize(t)))
        }
    }
}

fn compare_keys(a: &SortKey, b: &SortKey, direction: SortDirection) -> Ordering {
    let ord = match (a, b) {
        (SortKey::Missing, SortKey::Missing) => return Ordering::Equal,
        (SortKey::Missing, _) => return Ordering::Greater,
        (_, SortKey::Missing) => return Ordering::Less,
        (SortKey::Text(x), SortKey::Text(y)) => x.cmp(y),
        (SortKey::Number(x), SortKey::Number(y)) => x.total_cmp(y),
        (SortKey::Date(x), SortKey::Date(y)) => x.cmp(y),
        // One field always yields one kind of key.
        _ => Ordering::Equal,
    };
    match direction {
        SortDirection::Ascending => ord,
        SortDirection::Descending => ord.reverse(),
    }
}

/// Stable sort of `records` by `sort`.
///
/// Keys are computed once per record, not once per comparison.
pub fn apply_sort<R: Borrow<Record>>(records: Vec<R>, sort: &SortSpec) -> Vec<R> {
    let mut keyed: Vec<(usize, (SortKey, R))> = records
        .into_iter()
        .map(|r| (sort_key(r.borrow(), sort.field), r))
        .enumerate()
        .collect();

    // `sort_by` is stable: ties keep their input position.
    keyed.sort_by(|(_, (a, _)), (_, (b, _))| compare_keys(a, b, sort.direction));
    check_sorted_stable(&keyed, |(a, _), (b, _)| compare_keys(a, b, sort.direction));

    keyed.into_iter().map(|(_, (_, r))| r).collect()
}
