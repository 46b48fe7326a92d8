//! Identical inputs give identical outputs.

use super::common::{synthetic_inventory, today};
use chemdex::{Engine, ExpiryFilter, ExpiryPreset, FilterSpec, Query, SortField, SortSpec, Status};

#[test]
fn test_repeated_search_identical() {
    let engine = Engine::with_corpus(synthetic_inventory(300));
    let query = Query::new("standrd");
    let filters = FilterSpec::new()
        .status([Status::Unopened, Status::InUse])
        .expiry(ExpiryFilter::new(ExpiryPreset::Expiring90));
    let sort = SortSpec::descending(SortField::Concentration);

    let first = engine.search_at(&query, &filters, Some(&sort), today()).unwrap();
    for _ in 0..5 {
        let again = engine.search_at(&query, &filters, Some(&sort), today()).unwrap();
        assert_eq!(again, first);
    }
    assert!(!first.is_empty());
}

#[test]
fn test_rebuild_from_same_corpus_identical() {
    let a = Engine::with_corpus(synthetic_inventory(100));
    let b = Engine::new();
    b.set_corpus(synthetic_inventory(100));

    let sort = SortSpec::ascending(SortField::Name);
    let ra = a.search_at(&Query::new("sodium"), &FilterSpec::new(), Some(&sort), today()).unwrap();
    let rb = b.search_at(&Query::new("sodium"), &FilterSpec::new(), Some(&sort), today()).unwrap();
    assert_eq!(ra, rb);
    assert_eq!(a.suggest("so", 5), b.suggest("so", 5));
    assert_eq!(a.stats(), b.stats());
}

#[test]
fn test_results_are_owned_copies() {
    let engine = Engine::with_corpus(synthetic_inventory(10));
    let mut result = engine.search_at(&Query::all(), &FilterSpec::new(), None, today()).unwrap();
    result.records[0].name = "Changed".into();

    let again = engine.search_at(&Query::all(), &FilterSpec::new(), None, today()).unwrap();
    assert_ne!(again.records[0].name, "Changed");
}
