//! Edge cases: empty corpus, empty queries, odd inputs.

use super::common::{make_record, sample_engine, today};
use chemdex::{Engine, FilterSpec, Query, SimilarOptions, SortField, SortSpec};

#[test]
fn test_empty_corpus_everything_empty() {
    let engine = Engine::with_corpus(Vec::new());
    let result = engine
        .search_at(
            &Query::new("glucose"),
            &FilterSpec::new(),
            Some(&SortSpec::ascending(SortField::Name)),
            today(),
        )
        .unwrap();
    assert!(result.is_empty());
    assert_eq!(result.total, 0);
    assert!(engine.suggest("gl", 5).is_empty());
    assert!(engine.find_similar("glucose", SimilarOptions::default()).unwrap().is_empty());
    assert!(engine.filter_options().status.is_empty());
}

#[test]
fn test_empty_query_returns_all() {
    let result = sample_engine()
        .search_at(&Query::all(), &FilterSpec::new(), None, today())
        .unwrap();
    assert_eq!(result.len(), 5);
}

#[test]
fn test_whitespace_only_query_returns_all() {
    let result = sample_engine()
        .search_at(&Query::new(" \t "), &FilterSpec::new(), None, today())
        .unwrap();
    assert_eq!(result.len(), 5);
}

#[test]
fn test_single_character_words_ignored() {
    let result = sample_engine()
        .search_at(&Query::new("a b c"), &FilterSpec::new(), None, today())
        .unwrap();
    assert_eq!(result.len(), 5);
}

#[test]
fn test_unicode_names() {
    let engine = Engine::with_corpus(vec![
        make_record("1", "Éthanol absolu"),
        make_record("2", "Natriumchlorid-Lösung"),
    ]);
    let hits = engine
        .search_at(&Query::new("ethanol"), &FilterSpec::new(), None, today())
        .unwrap();
    // "éthanol" is one edit from "ethanol" whether or not accents are folded
    assert_eq!(hits.len(), 1);
    assert_eq!(engine.suggest("nat", 5), vec!["Natriumchlorid-Lösung"]);
}

#[cfg(not(feature = "unicode-normalization"))]
#[test]
fn test_exact_search_respects_accents() {
    let engine = Engine::with_corpus(vec![make_record("1", "Mérck Buffer")]);
    let exact = |text: &str| {
        engine
            .search_at(&Query::new(text).exact(true), &FilterSpec::new(), None, today())
            .unwrap()
            .len()
    };
    assert_eq!(exact("merck buffer"), 0);
    assert_eq!(exact("MÉRCK  buffer"), 1);
}

#[test]
fn test_page_past_end() {
    let result = sample_engine()
        .search_at(&Query::all(), &FilterSpec::new(), None, today())
        .unwrap();
    assert!(result.page(100, 10).is_empty());
    assert_eq!(result.page(3, usize::MAX).len(), 2);
}
