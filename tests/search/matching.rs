//! Query matching through the engine.

use super::common::{ids, make_record, sample_engine, today};
use chemdex::{Engine, EngineError, FilterSpec, Query, SearchField};

fn search(engine: &Engine, query: &Query) -> Vec<String> {
    let result = engine
        .search_at(query, &FilterSpec::new(), None, today())
        .unwrap();
    ids(&result.records)
}

#[test]
fn test_typo_finds_glucose() {
    let engine = sample_engine();
    assert_eq!(search(&engine, &Query::new("glucse")), vec!["A1", "A2"]);
}

#[test]
fn test_word_order_irrelevant() {
    let engine = sample_engine();
    assert_eq!(
        search(&engine, &Query::new("chloride sodium")),
        search(&engine, &Query::new("sodium chloride"))
    );
}

#[test]
fn test_words_across_fields() {
    let engine = sample_engine();
    // "thermo" is A3's manufacturer, "protein" its name
    assert_eq!(search(&engine, &Query::new("protein thermo")), vec!["A3"]);
}

#[test]
fn test_registry_id_search() {
    let engine = sample_engine();
    assert_eq!(search(&engine, &Query::new("7647-14-5")), vec!["A4"]);
    assert_eq!(search(&engine, &Query::new("7647-14-5").exact(true)), vec!["A4"]);
}

#[test]
fn test_exact_self_match() {
    let engine = sample_engine();
    for record in engine.snapshot().records() {
        let hits = search(&engine, &Query::new(record.name.clone()).exact(true));
        assert!(hits.contains(&record.id), "{} not found by its own name", record.name);
    }
}

#[test]
fn test_exact_requires_whole_field() {
    let engine = sample_engine();
    assert!(search(&engine, &Query::new("glucose").exact(true)).is_empty());
}

#[test]
fn test_field_restriction() {
    let engine = sample_engine();
    // "merck" is a manufacturer for A2/A5 and the supplier of A1, A3, A4, A5
    let by_manufacturer = Query::new("merck").fields([SearchField::Manufacturer]);
    assert_eq!(search(&engine, &by_manufacturer), vec!["A2", "A5"]);
    let by_supplier = Query::new("merck").fields([SearchField::Supplier]);
    assert_eq!(search(&engine, &by_supplier), vec!["A1", "A3", "A4", "A5"]);
}

#[test]
fn test_case_sensitive_search() {
    let mut upper = make_record("U", "NaCl Solution");
    upper.manufacturer = "Acme".into();
    let mut lower = make_record("L", "nacl solution");
    lower.manufacturer = "Acme".into();
    let engine = Engine::with_corpus(vec![upper, lower]);

    let sensitive = Query::new("NaCl").case_sensitive(true).fields([SearchField::Name]);
    assert_eq!(search(&engine, &sensitive), vec!["U"]);
    let insensitive = Query::new("NaCl").fields([SearchField::Name]);
    assert_eq!(search(&engine, &insensitive), vec!["U", "L"]);
}

#[test]
fn test_invalid_threshold_rejected() {
    let engine = sample_engine();
    for bad in [-0.01, 1.01, f64::NAN] {
        let err = engine
            .search_at(&Query::new("glucose").threshold(bad), &FilterSpec::new(), None, today())
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidThreshold(_)));
    }
}
