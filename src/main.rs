// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use pivot::{Answer, Outcome, Query};

mod cli;
use cli::display::{self, field, row, section_bot, section_top};
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Batch { file, stats } => run_batch(file, *stats),
        command => run_single(command, cli.json),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", display::error_line(&e));
        std::process::exit(1);
    }
}

fn run_single(command: &Commands, json: bool) -> Result<(), String> {
    let query = command
        .to_query()?
        .ok_or_else(|| "batch has no single query".to_string())?;
    let outcome = query.evaluate(command.wants_stats());

    if json {
        print_json(&outcome)?;
    } else {
        print_outcome(&query, &outcome);
    }

    match outcome.error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

#[cfg(feature = "serde_json")]
fn print_json<T: serde::Serialize>(value: &T) -> Result<(), String> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize output: {}", e))?;
    println!("{}", text);
    Ok(())
}

#[cfg(not(feature = "serde_json"))]
fn print_json<T: serde::Serialize>(_value: &T) -> Result<(), String> {
    Err("JSON output requires the serde_json feature".to_string())
}

#[cfg(feature = "serde_json")]
fn run_batch(file: &str, stats: bool) -> Result<(), String> {
    let queries = pivot::query::load_batch(std::path::Path::new(file))?;
    let outcomes = evaluate_with_progress(&queries, stats);

    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
    print_json(&outcomes)?;

    if failed > 0 {
        eprintln!(
            "⚠️  {} of {} queries failed",
            display::accent(&failed.to_string()),
            outcomes.len()
        );
    }
    Ok(())
}

#[cfg(not(feature = "serde_json"))]
fn run_batch(_file: &str, _stats: bool) -> Result<(), String> {
    Err("batch mode requires the serde_json feature".to_string())
}

/// Progress goes to stderr so stdout stays valid JSON.
#[cfg(all(feature = "serde_json", feature = "parallel"))]
fn evaluate_with_progress(queries: &[Query], stats: bool) -> Vec<Outcome> {
    use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

    // Small batches finish before a bar is worth drawing
    if queries.len() < 1000 {
        return pivot::query::evaluate_batch(queries, stats);
    }

    let progress = ProgressBar::with_draw_target(
        Some(queries.len() as u64),
        ProgressDrawTarget::stderr(),
    );
    if let Ok(style) = ProgressStyle::with_template(
        "{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
    ) {
        progress.set_style(style.progress_chars("━━╸"));
    }
    progress.set_prefix("Evaluating");

    let outcomes = pivot::query::evaluate_batch_with_progress(queries, stats, &progress);
    progress.finish_and_clear();
    outcomes
}

#[cfg(all(feature = "serde_json", not(feature = "parallel")))]
fn evaluate_with_progress(queries: &[Query], stats: bool) -> Vec<Outcome> {
    pivot::query::evaluate_batch(queries, stats)
}

// ═══════════════════════════════════════════════════════════════════════════
// TERMINAL VIEW
// ═══════════════════════════════════════════════════════════════════════════

fn print_outcome(query: &Query, outcome: &Outcome) {
    section_top(&title(query));
    print_input(query);
    row("");

    match (&outcome.ok, &outcome.error) {
        (Some(answer), _) => print_answer(answer),
        (None, Some(e)) => field("error", &display::error_line(e)),
        (None, None) => {}
    }

    if let Some(stats) = &outcome.stats {
        field("stack", &display::stats_value(stats, input_len(query)));
    }
    section_bot();
}

fn title(query: &Query) -> String {
    match query {
        Query::Median { .. } => "MEDIAN OF TWO SORTED".to_string(),
        Query::Kth { k, .. } => format!("K-TH SMALLEST (k = {})", k),
        Query::Rotated { target, .. } => format!("ROTATED SEARCH (target = {})", target),
        Query::Range { target, .. } => format!("OCCURRENCE RANGE (target = {})", target),
        Query::NextGreater { circular: true, .. } => "NEXT GREATER (circular)".to_string(),
        Query::NextGreater { circular: false, .. } => "NEXT GREATER (linear)".to_string(),
        Query::Digits { k, min: false, .. } => format!("MAX AFTER REMOVING {}", k),
        Query::Digits { k, min: true, .. } => format!("MIN AFTER REMOVING {}", k),
    }
}

fn print_input(query: &Query) {
    match query {
        Query::Median { a, b } | Query::Kth { a, b, .. } => {
            field("a", &display::sequence(a, false));
            field("b", &display::sequence(b, false));
        }
        Query::Rotated { seq, .. } | Query::Range { seq, .. } | Query::NextGreater { seq, .. } => {
            field("input", &display::sequence(seq, false));
        }
        Query::Digits { digits, .. } => field("input", digits),
    }
}

fn print_answer(answer: &Answer) {
    match answer {
        Answer::Median(Some(m)) => field("median", &display::answer_value(&m.to_string())),
        Answer::Median(None) => field("median", &display::index_value(-1)),
        Answer::Element(Some(v)) => field("element", &display::answer_value(&v.to_string())),
        Answer::Element(None) => field("element", &display::index_value(-1)),
        Answer::Rotated { index, offset } => {
            field("index", &display::index_value(*index));
            field("offset", &offset.to_string());
        }
        Answer::Range([first, last]) => {
            field("first", &display::index_value(*first));
            field("last", &display::index_value(*last));
        }
        Answer::Values(values) => field("result", &display::sequence(values, true)),
        Answer::Digits(kept) => {
            let shown = if kept.is_empty() { "(empty)" } else { kept };
            field("result", &display::answer_value(shown));
        }
    }
}

fn input_len(query: &Query) -> usize {
    match query {
        Query::Median { a, b } | Query::Kth { a, b, .. } => a.len() + b.len(),
        Query::Rotated { seq, .. } | Query::Range { seq, .. } | Query::NextGreater { seq, .. } => {
            seq.len()
        }
        Query::Digits { digits, .. } => digits.chars().count(),
    }
}
