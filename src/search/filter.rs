// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Compound record filters.
//!
//! A [`FilterSpec`] is a conjunction: every configured predicate must pass, and
//! an unconfigured one (empty set, `None` range) imposes nothing. Ranges are
//! inclusive on both ends. An inverted range (`min > max`) is not an error; it
//! simply matches nothing.
//!
//! Expiry presets are relative to "today", which callers can pin with
//! [`apply_filters_at`] for reproducible results.

use std::borrow::Borrow;
use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

use chrono::{Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::types::{squash, CategoryField, ExpiryField, Quantity, Record, Status};
use crate::utils::normalize;

/// Inclusive date range; either bound may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.map_or(true, |start| start <= date) && self.end.map_or(true, |end| date <= end)
    }
}

/// Inclusive numeric range over a [`Quantity`]'s value; either bound may be open.
///
/// With `unit` set, quantities in any other unit fail (compared case-insensitively).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NumericRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
}

impl NumericRange {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self {
            min,
            max,
            unit: None,
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn contains(&self, quantity: &Quantity) -> bool {
        if let Some(unit) = &self.unit {
            if !unit.trim().eq_ignore_ascii_case(quantity.unit.trim()) {
                return false;
            }
        }
        let value = quantity.value;
        if value.is_nan() {
            return false;
        }
        self.min.map_or(true, |min| min <= value) && self.max.map_or(true, |max| value <= max)
    }
}

/// Named expiry windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryPreset {
    /// Expiry strictly before today.
    Expired,
    /// Expiry between today and today + 30 days, inclusive.
    #[serde(rename = "expiring_30")]
    Expiring30,
    #[serde(rename = "expiring_60")]
    Expiring60,
    #[serde(rename = "expiring_90")]
    Expiring90,
    /// Explicit inclusive range.
    Custom(DateRange),
}

impl ExpiryPreset {
    /// Look-ahead window in days for the `expiring_*` presets.
    pub fn window_days(&self) -> Option<u64> {
        match self {
            ExpiryPreset::Expiring30 => Some(30),
            ExpiryPreset::Expiring60 => Some(60),
            ExpiryPreset::Expiring90 => Some(90),
            ExpiryPreset::Expired | ExpiryPreset::Custom(_) => None,
        }
    }

    /// Does an item expiring on `expiry` fall in this window, seen from `today`?
    pub fn contains(&self, expiry: NaiveDate, today: NaiveDate) -> bool {
        match self {
            ExpiryPreset::Expired => expiry < today,
            ExpiryPreset::Custom(range) => range.contains(expiry),
            preset => {
                let days = preset.window_days().unwrap_or(0);
                let horizon = today.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX);
                today <= expiry && expiry <= horizon
            }
        }
    }
}

impl FromStr for ExpiryPreset {
    type Err = EngineError;

    /// Parses the named presets. `custom` yields an unbounded range, which
    /// matches every record that has an expiry date.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match squash(s).as_str() {
            "expired" => ExpiryPreset::Expired,
            "expiring30" => ExpiryPreset::Expiring30,
            "expiring60" => ExpiryPreset::Expiring60,
            "expiring90" => ExpiryPreset::Expiring90,
            "custom" => ExpiryPreset::Custom(DateRange::default()),
            _ => return Err(EngineError::UnknownExpiryPreset(s.to_string())),
        })
    }
}

/// An expiry preset and the date it looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpiryFilter {
    pub preset: ExpiryPreset,
    #[serde(default)]
    pub basis: ExpiryField,
}

impl ExpiryFilter {
    /// Preset applied to the earliest expiry date.
    pub fn new(preset: ExpiryPreset) -> Self {
        Self {
            preset,
            basis: ExpiryField::default(),
        }
    }

    pub fn on(mut self, basis: ExpiryField) -> Self {
        self.basis = basis;
        self
    }

    /// Records without the relevant expiry date never match.
    pub fn matches(&self, record: &Record, today: NaiveDate) -> bool {
        record
            .expiry(self.basis)
            .is_some_and(|expiry| self.preset.contains(expiry, today))
    }
}

/// Days ahead within which a record counts as [`ExpiryState::Expiring`].
pub const EXPIRY_WARNING_DAYS: i64 = 30;

/// Where a record stands relative to its expiry date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "state", content = "daysLeft")]
pub enum ExpiryState {
    Expired,
    /// Expires within [`EXPIRY_WARNING_DAYS`]; `0` means today.
    Expiring(i64),
    Valid,
    /// No expiry date on the chosen basis.
    Unknown,
}

impl ExpiryState {
    pub fn classify(record: &Record, basis: ExpiryField, today: NaiveDate) -> Self {
        let Some(expiry) = record.expiry(basis) else {
            return ExpiryState::Unknown;
        };
        let days_left = expiry.signed_duration_since(today).num_days();
        if days_left < 0 {
            ExpiryState::Expired
        } else if days_left <= EXPIRY_WARNING_DAYS {
            ExpiryState::Expiring(days_left)
        } else {
            ExpiryState::Valid
        }
    }
}

/// Conjunction of optional record predicates.
///
/// Empty sets and `None` ranges are unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSpec {
    pub status: BTreeSet<Status>,
    /// Allowed values per categorical field, compared after normalization.
    pub categories: BTreeMap<CategoryField, BTreeSet<String>>,
    pub received: Option<DateRange>,
    pub expiry: Option<ExpiryFilter>,
    pub concentration: Option<NumericRange>,
    pub packing_size: Option<NumericRange>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, statuses: impl IntoIterator<Item = Status>) -> Self {
        self.status.extend(statuses);
        self
    }

    /// Allow `values` for `field`, in addition to any already allowed.
    pub fn category<S: Into<String>>(
        mut self,
        field: CategoryField,
        values: impl IntoIterator<Item = S>,
    ) -> Self {
        self.categories
            .entry(field)
            .or_default()
            .extend(values.into_iter().map(Into::into));
        self
    }

    pub fn received(mut self, range: DateRange) -> Self {
        self.received = Some(range);
        self
    }

    pub fn expiry(mut self, filter: ExpiryFilter) -> Self {
        self.expiry = Some(filter);
        self
    }

    pub fn concentration(mut self, range: NumericRange) -> Self {
        self.concentration = Some(range);
        self
    }

    pub fn packing_size(mut self, range: NumericRange) -> Self {
        self.packing_size = Some(range);
        self
    }

    /// No predicate configured.
    pub fn is_empty(&self) -> bool {
        self.status.is_empty()
            && self.categories.values().all(BTreeSet::is_empty)
            && self.received.is_none()
            && self.expiry.is_none()
            && self.concentration.is_none()
            && self.packing_size.is_none()
    }

    /// Precompute normalized category sets and pin "today".
    pub fn compile(&self, today: NaiveDate) -> FilterPlan<'_> {
        let categories = self
            .categories
            .iter()
            .filter(|(_, values)| !values.is_empty())
            .map(|(&field, values)| (field, values.iter().map(|v| normalize(v)).collect()))
            .collect();

        FilterPlan {
            spec: self,
            categories,
            today,
        }
    }
}

/// A [`FilterSpec`] ready to test records against a fixed date.
#[derive(Debug, Clone)]
pub struct FilterPlan<'a> {
    spec: &'a FilterSpec,
    categories: Vec<(CategoryField, BTreeSet<String>)>,
    today: NaiveDate,
}

impl FilterPlan<'_> {
    pub fn matches(&self, record: &Record) -> bool {
        let spec = self.spec;

        if !spec.status.is_empty() && !spec.status.contains(&record.status) {
            return false;
        }

        let categories_ok = self
            .categories
            .iter()
            .all(|(field, allowed)| allowed.contains(&normalize(record.category(*field))));
        if !categories_ok {
            return false;
        }

        if let Some(range) = &spec.received {
            if !range.contains(record.date_received) {
                return false;
            }
        }

        if let Some(expiry) = &spec.expiry {
            if !expiry.matches(record, self.today) {
                return false;
            }
        }

        if let Some(range) = &spec.concentration {
            if !range.contains(&record.concentration) {
                return false;
            }
        }

        if let Some(range) = &spec.packing_size {
            if !range.contains(&record.packing_size) {
                return false;
            }
        }

        true
    }
}

/// Keep the records that pass every configured predicate, in input order.
///
/// Expiry presets are evaluated against the local date at call time.
pub fn apply_filters<R: Borrow<Record>>(records: Vec<R>, filters: &FilterSpec) -> Vec<R> {
    apply_filters_at(records, filters, Local::now().date_naive())
}

/// [`apply_filters`] with an explicit "today".
pub fn apply_filters_at<R: Borrow<Record>>(
    records: Vec<R>,
    filters: &FilterSpec,
    today: NaiveDate,
) -> Vec<R> {
    if filters.is_empty() {
        return records;
    }
    let plan = filters.compile(today);
    records
        .into_iter()
        .filter(|r| plan.matches(r.borrow()))
        .collect()
}

/// Distinct values present in a corpus, for building filter controls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Statuses that occur, in lifecycle order.
    pub status: Vec<Status>,
    /// Sorted distinct non-blank values per categorical field.
    pub categories: BTreeMap<CategoryField, Vec<String>>,
}

impl FilterOptions {
    pub fn from_records(records: &[Record]) -> Self {
        let present: BTreeSet<Status> = records.iter().map(|r| r.status).collect();
        let status = Status::ALL
            .into_iter()
            .filter(|s| present.contains(s))
            .collect();

        let categories = CategoryField::ALL
            .into_iter()
            .map(|field| {
                let values: BTreeSet<&str> = records
                    .iter()
                    .map(|r| r.category(field).trim())
                    .filter(|v| !v.is_empty())
                    .collect();
                (field, values.into_iter().map(str::to_string).collect())
            })
            .collect();

        Self { status, categories }
    }
}
