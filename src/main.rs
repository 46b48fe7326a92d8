// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chemdex::{
    DateRange, Engine, ExpiryField, ExpiryFilter, ExpiryState, FilterSpec, NumericRange, Query,
    Record, RegistryId, SearchResult, SimilarOptions, SimilarityCandidate, SortSpec,
};
use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::display::{self, BOLD, CYAN, GRAY, RED};
use cli::{Cli, Commands};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", display::themed(RED, &[BOLD], "error:"), e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<ExitCode> {
    match command {
        Commands::Search {
            corpus,
            query,
            exact,
            case_sensitive,
            threshold,
            fields,
            status,
            categories,
            expiry,
            expiry_basis,
            received_from,
            received_to,
            min_concentration,
            max_concentration,
            sort,
            direction,
            today,
            offset,
            limit,
            json,
        } => {
            let engine = load_engine(&corpus)?;

            let mut q = Query::new(query)
                .exact(exact)
                .case_sensitive(case_sensitive)
                .threshold(threshold);
            if !fields.is_empty() {
                q = q.fields(fields);
            }

            let mut filters = FilterSpec::new().status(status);
            for (field, value) in categories {
                filters = filters.category(field, [value]);
            }
            if let Some(preset) = expiry {
                filters = filters.expiry(ExpiryFilter::new(preset).on(expiry_basis));
            }
            if received_from.is_some() || received_to.is_some() {
                filters = filters.received(DateRange::new(received_from, received_to));
            }
            if min_concentration.is_some() || max_concentration.is_some() {
                filters = filters.concentration(NumericRange::new(min_concentration, max_concentration));
            }

            let sort = sort.map(|field| SortSpec { field, direction });
            let today = today.unwrap_or_else(|| Local::now().date_naive());
            let result = engine.search_at(&q, &filters, sort.as_ref(), today)?;

            if json {
                let page = result.page(offset, limit);
                println!("{}", serde_json::to_string_pretty(page)?);
            } else {
                print_search(&result, offset, limit, today);
            }
            Ok(ExitCode::SUCCESS)
        }

        Commands::Similar {
            corpus,
            name,
            threshold,
            max,
            json,
        } => {
            let engine = load_engine(&corpus)?;
            let options = SimilarOptions::default().threshold(threshold).max_results(max);
            let candidates = engine.find_similar(&name, options)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&candidates)?);
            } else {
                print_similar(&name, &candidates);
            }
            Ok(ExitCode::SUCCESS)
        }

        Commands::Suggest {
            corpus,
            prefix,
            limit,
        } => {
            let engine = load_engine(&corpus)?;
            for name in engine.suggest(&prefix, limit) {
                println!("{}", name);
            }
            Ok(ExitCode::SUCCESS)
        }

        Commands::Validate { ids } => {
            let mut all_valid = true;
            for id in &ids {
                match RegistryId::parse(id) {
                    Some(parsed) => println!(
                        "{}  {}",
                        display::themed(display::GREEN, &[BOLD], "valid  "),
                        parsed
                    ),
                    None => {
                        all_valid = false;
                        println!("{}  {}", display::themed(RED, &[BOLD], "invalid"), id);
                    }
                }
            }
            Ok(if all_valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }

        Commands::Options { corpus } => {
            let engine = load_engine(&corpus)?;
            let options = engine.filter_options();
            display::section_top("FILTER OPTIONS");
            let statuses: Vec<&str> = options.status.iter().map(|s| s.label()).collect();
            display::row(&format!(
                "{} {}",
                display::pad_right(&display::themed(CYAN, &[], "status"), 18),
                statuses.join(", ")
            ));
            for (field, values) in &options.categories {
                display::row(&format!(
                    "{} {}",
                    display::pad_right(&display::themed(CYAN, &[], &field.to_string()), 18),
                    display::truncate(&values.join(", "), display::BOX_WIDTH - 21)
                ));
            }
            display::section_bot();
            Ok(ExitCode::SUCCESS)
        }

        Commands::Stats { corpus } => {
            let engine = load_engine(&corpus)?;
            let stats = engine.stats();
            display::section_top("INDEX");
            display::row(&format!("records   {:>10}", stats.records));
            display::row(&format!("tokens    {:>10}", stats.tokens));
            display::row(&format!("postings  {:>10}", stats.postings));
            display::section_bot();
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Read a JSON array of records into a fresh engine.
fn load_engine(path: &Path) -> Result<Engine> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read corpus {}", path.display()))?;
    let records: Vec<Record> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse records from {}", path.display()))?;
    Ok(Engine::with_corpus(records))
}

fn print_search(result: &SearchResult, offset: usize, limit: usize, today: chrono::NaiveDate) {
    let page = result.page(offset, limit);
    display::section_top(&format!(
        "{} OF {} RECORDS ({} MATCHED QUERY)",
        result.len(),
        result.total,
        result.matched
    ));
    if page.is_empty() {
        display::row(&display::themed(GRAY, &[], "no records"));
    }
    for record in page {
        let state = ExpiryState::classify(record, ExpiryField::Earliest, today);
        display::row(&format!(
            "{} {} {} {}",
            display::pad_right(&display::truncate(&record.id, 10), 10),
            display::pad_right(&display::truncate(&record.name, 32), 32),
            display::status_badge(record.status),
            display::expiry_label(state)
        ));
        display::row(&display::themed(
            GRAY,
            &[],
            &format!(
                "           {} · {} · {}",
                display::truncate(&record.manufacturer, 20),
                record.concentration,
                record.registry_id.as_deref().unwrap_or("no registry id")
            ),
        ));
    }
    if result.len() > offset + page.len() {
        display::row(&display::themed(
            GRAY,
            &[],
            &format!("… {} more (use --offset)", result.len() - offset - page.len()),
        ));
    }
    display::section_bot();
}

fn print_similar(name: &str, candidates: &[SimilarityCandidate]) {
    display::section_top(&format!("SIMILAR TO \"{}\"", display::truncate(name, 40)));
    if candidates.is_empty() {
        display::row(&display::themed(GRAY, &[], "no likely duplicates"));
    }
    for candidate in candidates {
        display::row(&format!(
            "{}  {} {}",
            display::score_value(candidate.score),
            display::pad_right(&display::truncate(&candidate.record_id, 12), 12),
            display::truncate(&candidate.name, 50)
        ));
    }
    display::section_bot();
}
