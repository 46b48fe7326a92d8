// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Registry id validation under arbitrary input.
//!
//! Validation must never panic, and anything it accepts must print back to
//! the exact input and carry a correct check digit.

#![no_main]

use chemdex::{validate_registry_id, RegistryId};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let input = String::from_utf8_lossy(data);

    let valid = validate_registry_id(&input);
    let parsed = RegistryId::parse(&input);
    assert_eq!(valid, parsed.is_some());

    if let Some(id) = parsed {
        assert_eq!(id.to_string(), input);

        let digits: Vec<u32> = format!("{}{}", id.head(), id.middle())
            .chars()
            .filter_map(|c| c.to_digit(10))
            .collect();
        let sum: u32 = digits
            .iter()
            .rev()
            .enumerate()
            .map(|(i, d)| (i as u32 + 1) * d)
            .sum();
        assert_eq!(sum % 10, u32::from(id.check_digit()));
    }
});
