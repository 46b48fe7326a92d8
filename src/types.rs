// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of an inventory snapshot.
//!
//! A [`Record`] is one chemical standard as the record provider hands it over.
//! The field enums ([`SearchField`], [`CategoryField`], [`SortField`],
//! [`ExpiryField`]) are the only way to address record fields by name, so a
//! misspelled field is a parse error at the edge instead of a silent `None`
//! deep inside a comparator.
//!
//! # Invariants
//!
//! - **Record**: `id` is unique within one snapshot. The engine warns on
//!   duplicates but does not reject them.
//! - **SimilarityCandidate**: `0.0 <= score <= 1.0`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

// =============================================================================
// RECORD
// =============================================================================

/// Lifecycle status of a standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Status {
    #[serde(alias = "unopened")]
    Unopened,
    #[serde(alias = "In Use", alias = "in_use", alias = "in use")]
    InUse,
    #[serde(alias = "disposed")]
    Disposed,
}

impl Status {
    /// All statuses, in lifecycle order.
    pub const ALL: [Status; 3] = [Status::Unopened, Status::InUse, Status::Disposed];

    /// Human-readable label, also used as the text sort key.
    pub fn label(self) -> &'static str {
        match self {
            Status::Unopened => "Unopened",
            Status::InUse => "In Use",
            Status::Disposed => "Disposed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Status {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match squash(s).as_str() {
            "unopened" => Ok(Status::Unopened),
            "inuse" => Ok(Status::InUse),
            "disposed" => Ok(Status::Disposed),
            _ => Err(EngineError::UnknownStatus(s.to_string())),
        }
    }
}

/// A numeric amount with its unit, e.g. `1000 µg/mL` or `100 mL`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    pub value: f64,
    #[serde(default)]
    pub unit: String,
}

impl Quantity {
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit.is_empty() {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{} {}", self.value, self.unit)
        }
    }
}

/// One chemical standard in the inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Unique within a snapshot.
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default)]
    pub supplier: String,
    /// CAS number as entered. Not guaranteed to pass the checksum.
    #[serde(default)]
    pub registry_id: Option<String>,
    #[serde(default)]
    pub lot: String,
    #[serde(default)]
    pub test_group: String,
    #[serde(default)]
    pub material_type: String,
    #[serde(default)]
    pub storage_condition: String,
    pub status: Status,
    pub concentration: Quantity,
    pub packing_size: Quantity,
    pub date_received: NaiveDate,
    #[serde(default)]
    pub certificate_expiry: Option<NaiveDate>,
    #[serde(default)]
    pub lab_expiry: Option<NaiveDate>,
}

impl Record {
    /// Text value of a searchable field. `None` only for an absent registry id.
    pub fn text(&self, field: SearchField) -> Option<&str> {
        match field {
            SearchField::Name => Some(&self.name),
            SearchField::Manufacturer => Some(&self.manufacturer),
            SearchField::Supplier => Some(&self.supplier),
            SearchField::RegistryId => self.registry_id.as_deref(),
            SearchField::Lot => Some(&self.lot),
            SearchField::TestGroup => Some(&self.test_group),
            SearchField::MaterialType => Some(&self.material_type),
            SearchField::StorageCondition => Some(&self.storage_condition),
        }
    }

    /// Value of a categorical (free-text enumeration) field.
    pub fn category(&self, field: CategoryField) -> &str {
        match field {
            CategoryField::Manufacturer => &self.manufacturer,
            CategoryField::Supplier => &self.supplier,
            CategoryField::TestGroup => &self.test_group,
            CategoryField::MaterialType => &self.material_type,
            CategoryField::StorageCondition => &self.storage_condition,
        }
    }

    /// Expiry date under the given basis.
    pub fn expiry(&self, basis: ExpiryField) -> Option<NaiveDate> {
        match basis {
            ExpiryField::Certificate => self.certificate_expiry,
            ExpiryField::Lab => self.lab_expiry,
            ExpiryField::Earliest => match (self.certificate_expiry, self.lab_expiry) {
                (Some(a), Some(b)) => Some(a.min(b)),
                (a, b) => a.or(b),
            },
        }
    }
}

// =============================================================================
// FIELD ENUMS
// =============================================================================

/// Lowercase and drop separators so `test_group`, `testGroup` and
/// `Test Group` all resolve to the same name.
pub(crate) fn squash(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Text fields that are indexed and searchable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchField {
    Name,
    Manufacturer,
    Supplier,
    RegistryId,
    Lot,
    TestGroup,
    MaterialType,
    StorageCondition,
}

impl SearchField {
    /// Every searchable field. Also the default field set for queries.
    pub const ALL: [SearchField; 8] = [
        SearchField::Name,
        SearchField::Manufacturer,
        SearchField::Supplier,
        SearchField::RegistryId,
        SearchField::Lot,
        SearchField::TestGroup,
        SearchField::MaterialType,
        SearchField::StorageCondition,
    ];
}

impl FromStr for SearchField {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match squash(s).as_str() {
            "name" => SearchField::Name,
            "manufacturer" => SearchField::Manufacturer,
            "supplier" => SearchField::Supplier,
            "registryid" | "cas" | "casnumber" => SearchField::RegistryId,
            "lot" | "lotnumber" => SearchField::Lot,
            "testgroup" => SearchField::TestGroup,
            "materialtype" => SearchField::MaterialType,
            "storagecondition" => SearchField::StorageCondition,
            _ => return Err(EngineError::UnknownSearchField(s.to_string())),
        })
    }
}

/// Free-text fields that behave like enumerations in filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryField {
    Manufacturer,
    Supplier,
    TestGroup,
    MaterialType,
    StorageCondition,
}

impl CategoryField {
    pub const ALL: [CategoryField; 5] = [
        CategoryField::Manufacturer,
        CategoryField::Supplier,
        CategoryField::TestGroup,
        CategoryField::MaterialType,
        CategoryField::StorageCondition,
    ];
}

impl fmt::Display for CategoryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CategoryField::Manufacturer => "manufacturer",
            CategoryField::Supplier => "supplier",
            CategoryField::TestGroup => "test_group",
            CategoryField::MaterialType => "material_type",
            CategoryField::StorageCondition => "storage_condition",
        })
    }
}

impl FromStr for CategoryField {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match squash(s).as_str() {
            "manufacturer" => CategoryField::Manufacturer,
            "supplier" => CategoryField::Supplier,
            "testgroup" => CategoryField::TestGroup,
            "materialtype" => CategoryField::MaterialType,
            "storagecondition" => CategoryField::StorageCondition,
            _ => return Err(EngineError::UnknownFilterField(s.to_string())),
        })
    }
}

/// Which expiry date an expiry filter or sort looks at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryField {
    Certificate,
    Lab,
    /// Earlier of the two dates that are present.
    #[default]
    Earliest,
}

impl FromStr for ExpiryField {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match squash(s).as_str() {
            "certificate" | "certificateexpiry" => ExpiryField::Certificate,
            "lab" | "labexpiry" => ExpiryField::Lab,
            "earliest" | "expiry" => ExpiryField::Earliest,
            _ => return Err(EngineError::UnknownFilterField(s.to_string())),
        })
    }
}

/// How a sort field's values compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKind {
    /// Case-insensitive comparison of normalized text.
    Text,
    /// Numeric comparison.
    Numeric,
    /// Chronological comparison.
    Date,
}

/// Fields a result set can be ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Id,
    #[default]
    Name,
    Manufacturer,
    Supplier,
    RegistryId,
    Lot,
    TestGroup,
    MaterialType,
    StorageCondition,
    Status,
    Concentration,
    PackingSize,
    DateReceived,
    CertificateExpiry,
    LabExpiry,
    /// Earliest of certificate and lab expiry.
    Expiry,
}

impl SortField {
    /// Declared comparison type of the field.
    pub fn kind(self) -> SortKind {
        match self {
            SortField::Concentration | SortField::PackingSize => SortKind::Numeric,
            SortField::DateReceived
            | SortField::CertificateExpiry
            | SortField::LabExpiry
            | SortField::Expiry => SortKind::Date,
            _ => SortKind::Text,
        }
    }
}

impl FromStr for SortField {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match squash(s).as_str() {
            "id" => SortField::Id,
            "name" => SortField::Name,
            "manufacturer" => SortField::Manufacturer,
            "supplier" => SortField::Supplier,
            "registryid" | "cas" | "casnumber" => SortField::RegistryId,
            "lot" | "lotnumber" => SortField::Lot,
            "testgroup" => SortField::TestGroup,
            "materialtype" => SortField::MaterialType,
            "storagecondition" => SortField::StorageCondition,
            "status" => SortField::Status,
            "concentration" => SortField::Concentration,
            "packingsize" => SortField::PackingSize,
            "datereceived" | "received" => SortField::DateReceived,
            "certificateexpiry" => SortField::CertificateExpiry,
            "labexpiry" => SortField::LabExpiry,
            "expiry" => SortField::Expiry,
            _ => return Err(EngineError::UnknownSortField(s.to_string())),
        })
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// A probable duplicate of a name about to be registered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityCandidate {
    pub name: String,
    /// Id of the record the name came from.
    pub record_id: String,
    /// In `[0, 1]`; `1.0` means identical after normalization.
    pub score: f64,
}

/// Size of the current snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexStats {
    pub records: usize,
    pub tokens: usize,
    pub postings: usize,
}
