// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text queries: exact and fuzzy matching against record fields.
//!
//! Exact mode compares the whole normalized query against each whole
//! normalized field. Fuzzy mode splits the query into words and requires every
//! word to land on some field (AND across words, OR across fields), where a
//! word lands if its similarity to the field value, or to one of the field's
//! tokens, reaches the threshold.
//!
//! The matcher scans records directly instead of consulting postings: a typo
//! like "glucse" has no posting list to look up.

use serde::{Deserialize, Serialize};

use crate::error::{check_threshold, Result};
use crate::fuzzy::similar_enough;
use crate::types::{Record, SearchField};
use crate::utils::{collapse_whitespace, normalize, tokens};

/// Default minimum similarity for a fuzzy word match.
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.8;

/// A text query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Query {
    pub text: String,
    /// Fields to search. `None` searches every [`SearchField`].
    pub fields: Option<Vec<SearchField>>,
    pub case_sensitive: bool,
    /// Whole-text equality instead of per-word fuzzy matching.
    pub exact: bool,
    /// Minimum similarity in `[0, 1]` for fuzzy matches.
    pub threshold: f64,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            text: String::new(),
            fields: None,
            case_sensitive: false,
            exact: false,
            threshold: DEFAULT_FUZZY_THRESHOLD,
        }
    }
}

impl Query {
    /// Fuzzy query over every field with the default threshold.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// The empty query: matches every record.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn exact(mut self, exact: bool) -> Self {
        self.exact = exact;
        self
    }

    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Set the fuzzy threshold. Checked when the query is compiled.
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Restrict the query to `fields`.
    pub fn fields(mut self, fields: impl IntoIterator<Item = SearchField>) -> Self {
        self.fields = Some(fields.into_iter().collect());
        self
    }

    /// Validate and precompute everything that does not depend on the record.
    pub fn compile(&self) -> Result<QueryMatcher> {
        let threshold = check_threshold(self.threshold)?;
        let prepared = prepare(&self.text, self.case_sensitive);
        let words = tokens(&prepared).map(str::to_string).collect();
        let fields = match &self.fields {
            Some(fields) => fields.clone(),
            None => SearchField::ALL.to_vec(),
        };

        Ok(QueryMatcher {
            text: prepared,
            words,
            fields,
            case_sensitive: self.case_sensitive,
            exact: self.exact,
            threshold,
        })
    }

    /// Does `record` match this query?
    ///
    /// Compiles the query on every call; use [`Query::compile`] when matching
    /// many records.
    pub fn matches(&self, record: &Record) -> Result<bool> {
        Ok(self.compile()?.matches(record))
    }
}

/// Normalize, or only collapse whitespace when case matters.
fn prepare(text: &str, case_sensitive: bool) -> String {
    if case_sensitive {
        collapse_whitespace(text)
    } else {
        normalize(text)
    }
}

/// A compiled [`Query`], ready to test records.
#[derive(Debug, Clone)]
pub struct QueryMatcher {
    text: String,
    words: Vec<String>,
    fields: Vec<SearchField>,
    case_sensitive: bool,
    exact: bool,
    threshold: f64,
}

impl QueryMatcher {
    /// Does `record` match?
    pub fn matches(&self, record: &Record) -> bool {
        if self.text.is_empty() {
            return true;
        }

        if self.exact {
            return self.field_values(record).any(|value| value == self.text);
        }

        // Only one-character words: nothing left to constrain on.
        if self.words.is_empty() {
            return true;
        }

        let values: Vec<String> = self.field_values(record).collect();
        self.words
            .iter()
            .all(|word| values.iter().any(|value| self.word_hits(word, value)))
    }

    /// Prepared values of the searched fields that are present on `record`.
    fn field_values<'a>(&'a self, record: &'a Record) -> impl Iterator<Item = String> + 'a {
        self.fields
            .iter()
            .filter_map(move |&field| record.text(field))
            .map(move |text| prepare(text, self.case_sensitive))
    }

    fn word_hits(&self, word: &str, value: &str) -> bool {
        similar_enough(word, value, self.threshold)
            || tokens(value).any(|token| similar_enough(word, token, self.threshold))
    }
}
