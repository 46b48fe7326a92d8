// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the chemdex command-line interface.
//!
//! Every corpus-backed subcommand reads a JSON array of records, loads it into
//! an [`chemdex::Engine`] and runs one operation. `validate` needs no corpus.

pub mod display;

use std::path::PathBuf;

use chemdex::{CategoryField, ExpiryField, ExpiryPreset, SearchField, SortDirection, SortField, Status};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "chemdex",
    about = "Search, filter and deduplicate a chemical-standards inventory",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search records with a fuzzy or exact query, filters and sorting
    Search {
        /// JSON file with an array of records
        corpus: PathBuf,

        /// Query text (omit to list every record)
        #[arg(default_value = "")]
        query: String,

        /// Match whole field values instead of fuzzy per-word matching
        #[arg(long)]
        exact: bool,

        /// Compare with case preserved
        #[arg(long)]
        case_sensitive: bool,

        /// Minimum word similarity for fuzzy matches, in [0, 1]
        #[arg(short, long, default_value_t = chemdex::search::DEFAULT_FUZZY_THRESHOLD)]
        threshold: f64,

        /// Restrict the query to these fields (repeatable)
        #[arg(short, long = "field")]
        fields: Vec<SearchField>,

        /// Keep records with these statuses (repeatable)
        #[arg(long)]
        status: Vec<Status>,

        /// Keep records whose category equals a value, as FIELD=VALUE (repeatable)
        #[arg(short, long = "category", value_parser = parse_category)]
        categories: Vec<(CategoryField, String)>,

        /// Expiry window: expired, expiring_30, expiring_60, expiring_90
        #[arg(long)]
        expiry: Option<ExpiryPreset>,

        /// Expiry date the window looks at: certificate, lab, earliest
        #[arg(long, default_value = "earliest")]
        expiry_basis: ExpiryField,

        /// Received on or after this date (YYYY-MM-DD)
        #[arg(long)]
        received_from: Option<NaiveDate>,

        /// Received on or before this date (YYYY-MM-DD)
        #[arg(long)]
        received_to: Option<NaiveDate>,

        /// Minimum concentration value
        #[arg(long)]
        min_concentration: Option<f64>,

        /// Maximum concentration value
        #[arg(long)]
        max_concentration: Option<f64>,

        /// Sort field (name, concentration, dateReceived, expiry, ...)
        #[arg(short, long)]
        sort: Option<SortField>,

        /// Sort direction
        #[arg(long, default_value = "asc")]
        direction: SortDirection,

        /// Evaluate expiry windows as of this date instead of today
        #[arg(long)]
        today: Option<NaiveDate>,

        /// Skip this many results
        #[arg(long, default_value = "0")]
        offset: usize,

        /// Maximum number of results to show
        #[arg(short, long, default_value = "20")]
        limit: usize,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List records whose name is close to NAME (duplicate check)
    Similar {
        /// JSON file with an array of records
        corpus: PathBuf,

        /// Name about to be registered
        name: String,

        /// Minimum name similarity, in [0, 1]
        #[arg(short, long, default_value_t = chemdex::search::DEFAULT_SIMILARITY_THRESHOLD)]
        threshold: f64,

        /// Maximum number of candidates
        #[arg(short, long, default_value_t = chemdex::search::DEFAULT_MAX_RESULTS)]
        max: usize,

        /// Print candidates as JSON
        #[arg(long)]
        json: bool,
    },

    /// Autocomplete record names from a prefix
    Suggest {
        /// JSON file with an array of records
        corpus: PathBuf,

        /// Prefix typed so far
        prefix: String,

        /// Maximum number of suggestions
        #[arg(short, long, default_value_t = chemdex::search::DEFAULT_SUGGEST_LIMIT)]
        limit: usize,
    },

    /// Check registry ids (exit status 1 if any is invalid)
    Validate {
        /// Ids to check, e.g. 7732-18-5
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Print the distinct status and category values in a corpus
    Options {
        /// JSON file with an array of records
        corpus: PathBuf,
    },

    /// Print index statistics for a corpus
    Stats {
        /// JSON file with an array of records
        corpus: PathBuf,
    },
}

/// `FIELD=VALUE` for `--category`.
fn parse_category(arg: &str) -> Result<(CategoryField, String), String> {
    let (field, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got '{}'", arg))?;
    let field = field.parse::<CategoryField>().map_err(|e| e.to_string())?;
    Ok((field, value.to_string()))
}
