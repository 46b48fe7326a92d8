// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Chemical registry identifiers (CAS numbers).
//!
//! A registry id looks like `7732-18-5`: two to seven digits, two digits, and a
//! single check digit. The check digit is a weighted sum of the other digits,
//! read right to left with weights 1, 2, 3, ... taken modulo 10.
//!
//! ```text
//!   7  7  3  2  1  8  - 5
//!   ×6 ×5 ×4 ×3 ×2 ×1
//!   42+35+12+ 6+ 2+ 8 = 105  →  105 mod 10 = 5  ✓
//! ```
//!
//! Validation fails closed: anything that does not parse is simply invalid.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A registry id that passed both the format and the checksum test.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RegistryId {
    head: String,
    middle: String,
    check: u8,
}

impl RegistryId {
    /// Parse and verify a registry id. Returns `None` on any format or checksum failure.
    pub fn parse(value: &str) -> Option<Self> {
        let mut parts = value.split('-');
        let head = parts.next()?;
        let middle = parts.next()?;
        let check = parts.next()?;
        if parts.next().is_some() {
            return None;
        }

        if !is_digit_group(head, 2, 7) || !is_digit_group(middle, 2, 2) || !is_digit_group(check, 1, 1) {
            return None;
        }

        let check = check.as_bytes()[0] - b'0';
        if checksum(head, middle) != check {
            return None;
        }

        Some(Self {
            head: head.to_string(),
            middle: middle.to_string(),
            check,
        })
    }

    /// The leading two-to-seven digit group.
    pub fn head(&self) -> &str {
        &self.head
    }

    /// The two digit middle group.
    pub fn middle(&self) -> &str {
        &self.middle
    }

    /// The trailing check digit.
    pub fn check_digit(&self) -> u8 {
        self.check
    }
}

impl fmt::Display for RegistryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.head, self.middle, self.check)
    }
}

impl TryFrom<String> for RegistryId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("invalid registry id '{}'", value))
    }
}

impl From<RegistryId> for String {
    fn from(id: RegistryId) -> Self {
        id.to_string()
    }
}

/// Is `id` a well-formed registry id with a correct check digit?
///
/// Never panics; malformed input is `false`.
pub fn validate_registry_id(id: &str) -> bool {
    RegistryId::parse(id).is_some()
}

/// ASCII digits only, with a length in `min..=max`.
fn is_digit_group(group: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&group.len()) && group.bytes().all(|b| b.is_ascii_digit())
}

/// Weighted digit sum of `head` followed by `middle`, modulo 10.
///
/// The rightmost digit has weight 1; weights increase moving left.
fn checksum(head: &str, middle: &str) -> u8 {
    let sum: u32 = head
        .bytes()
        .chain(middle.bytes())
        .rev()
        .enumerate()
        .map(|(i, b)| u32::from(b - b'0') * (i as u32 + 1))
        .sum();
    (sum % 10) as u8
}
