//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical record fixtures to avoid duplication.

#![doc(hidden)]

use chrono::NaiveDate;

use crate::types::{Quantity, Record, Status};

/// Parse a `YYYY-MM-DD` date. Panics on bad input; fixtures only.
pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("fixture date must be YYYY-MM-DD")
}

/// Create a simple test record with default fields.
///
/// This is the canonical implementation used across all tests.
pub fn make_record(id: &str, name: &str) -> Record {
    Record {
        id: id.to_string(),
        name: name.to_string(),
        manufacturer: "Sigma-Aldrich".to_string(),
        supplier: "Merck".to_string(),
        registry_id: None,
        lot: format!("LOT{}", id),
        test_group: "Chemistry".to_string(),
        material_type: "Reference Standard".to_string(),
        storage_condition: "2-8 C".to_string(),
        status: Status::Unopened,
        concentration: Quantity::new(1000.0, "mg/L"),
        packing_size: Quantity::new(100.0, "mL"),
        date_received: date("2026-01-01"),
        certificate_expiry: None,
        lab_expiry: None,
    }
}

/// Records named by `names`, with ids "0", "1", ...
pub fn make_corpus(names: &[&str]) -> Vec<Record> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| make_record(&i.to_string(), name))
        .collect()
}

/// A small but varied inventory used by search, filter and sort tests.
///
/// | id | name                  | manufacturer  | status   | conc   | earliest exp |
/// |----|-----------------------|---------------|----------|--------|--------------|
/// | A1 | Glucose Standard      | Sigma-Aldrich | Unopened | 1000   | 2026-11-01   |
/// | A2 | Glucose Solution      | Merck         | InUse    | 500    | 2026-09-30   |
/// | A3 | Protein Standard      | Thermo Fisher | InUse    | 2000   | 2027-01-01   |
/// | A4 | Sodium Chloride       | Sigma-Aldrich | Disposed | 9      | none         |
/// | A5 | Ethanol Absolute      | Merck         | Unopened | 999    | 2026-12-15   |
pub fn sample_inventory() -> Vec<Record> {
    let mut glucose = make_record("A1", "Glucose Standard");
    glucose.registry_id = Some("50-99-7".to_string());
    glucose.lab_expiry = Some(date("2026-11-01"));
    glucose.date_received = date("2026-01-10");

    let mut solution = make_record("A2", "Glucose Solution");
    solution.manufacturer = "Merck".to_string();
    solution.supplier = "VWR".to_string();
    solution.status = Status::InUse;
    solution.concentration = Quantity::new(500.0, "mg/L");
    solution.lab_expiry = Some(date("2026-09-30"));
    solution.date_received = date("2025-11-02");

    let mut protein = make_record("A3", "Protein Standard");
    protein.manufacturer = "Thermo Fisher".to_string();
    protein.test_group = "Biochemistry".to_string();
    protein.status = Status::InUse;
    protein.concentration = Quantity::new(2000.0, "mg/L");
    protein.lab_expiry = Some(date("2027-06-01"));
    protein.certificate_expiry = Some(date("2027-01-01"));
    protein.storage_condition = "-20 C".to_string();
    protein.date_received = date("2026-03-05");

    let mut nacl = make_record("A4", "Sodium Chloride");
    nacl.registry_id = Some("7647-14-5".to_string());
    nacl.status = Status::Disposed;
    nacl.concentration = Quantity::new(9.0, "g/L");
    nacl.material_type = "Reagent".to_string();
    nacl.storage_condition = "Room Temperature".to_string();
    nacl.date_received = date("2024-06-20");

    let mut ethanol = make_record("A5", "Ethanol Absolute");
    ethanol.registry_id = Some("64-17-5".to_string());
    ethanol.manufacturer = "Merck".to_string();
    ethanol.concentration = Quantity::new(999.0, "mL/L");
    ethanol.packing_size = Quantity::new(2.5, "L");
    ethanol.material_type = "Reagent".to_string();
    ethanol.storage_condition = "Room Temperature".to_string();
    ethanol.lab_expiry = Some(date("2026-12-15"));
    ethanol.date_received = date("2026-02-14");

    vec![glucose, solution, protein, nacl, ethanol]
}
