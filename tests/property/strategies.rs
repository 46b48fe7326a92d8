//! Generators for records, corpora and filters.

#![allow(dead_code)]

use chemdex::{
    testing::make_record, DateRange, ExpiryFilter, ExpiryPreset, FilterSpec, NumericRange,
    Quantity, Record, SortDirection, SortField, SortSpec, Status,
};
use chrono::{Days, NaiveDate};
use proptest::prelude::*;

/// Word-like strings drawn from a small alphabet so collisions and near-misses are common.
pub fn word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-e]{1,6}").unwrap()
}

/// One to four words joined by spaces.
pub fn phrase() -> impl Strategy<Value = String> {
    prop::collection::vec(word(), 1..4).prop_map(|words| words.join(" "))
}

pub fn status() -> impl Strategy<Value = Status> {
    prop::sample::select(Status::ALL.to_vec())
}

fn day() -> impl Strategy<Value = NaiveDate> {
    (0u64..730).prop_map(|d| NaiveDate::from_ymd_opt(2025, 1, 1).unwrap() + Days::new(d))
}

pub fn record() -> impl Strategy<Value = Record> {
    (
        phrase(),
        phrase(),
        status(),
        0u32..2000,
        day(),
        prop::option::of(day()),
        prop::option::of(day()),
    )
        .prop_map(|(name, manufacturer, status, amount, received, cert, lab)| {
            let mut r = make_record("", &name);
            r.manufacturer = manufacturer;
            r.status = status;
            r.concentration = Quantity::new(f64::from(amount), "mg/L");
            r.date_received = received;
            r.certificate_expiry = cert;
            r.lab_expiry = lab;
            r
        })
}

/// Corpus with unique, corpus-ordered ids.
pub fn corpus() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(record(), 0..25).prop_map(|mut records| {
        for (i, r) in records.iter_mut().enumerate() {
            r.id = format!("R{:03}", i);
        }
        records
    })
}

pub fn filter_spec() -> impl Strategy<Value = FilterSpec> {
    (
        prop::collection::vec(status(), 0..3),
        prop::option::of((0u32..2000, 0u32..2000)),
        prop::option::of(prop::sample::select(vec![
            ExpiryPreset::Expired,
            ExpiryPreset::Expiring30,
            ExpiryPreset::Expiring60,
            ExpiryPreset::Expiring90,
        ])),
        prop::option::of((day(), day())),
    )
        .prop_map(|(statuses, amounts, preset, received)| {
            let mut spec = FilterSpec::new().status(statuses);
            if let Some((min, max)) = amounts {
                spec = spec.concentration(NumericRange::new(Some(f64::from(min)), Some(f64::from(max))));
            }
            if let Some(preset) = preset {
                spec = spec.expiry(ExpiryFilter::new(preset));
            }
            if let Some((start, end)) = received {
                spec = spec.received(DateRange::new(Some(start), Some(end)));
            }
            spec
        })
}

pub fn sort_spec() -> impl Strategy<Value = SortSpec> {
    (
        prop::sample::select(vec![
            SortField::Name,
            SortField::Manufacturer,
            SortField::Status,
            SortField::Concentration,
            SortField::DateReceived,
            SortField::CertificateExpiry,
            SortField::Expiry,
        ]),
        prop::bool::ANY,
    )
        .prop_map(|(field, desc)| SortSpec {
            field,
            direction: if desc {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            },
        })
}
