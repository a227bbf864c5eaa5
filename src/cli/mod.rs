// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the pivot command-line interface.
//!
//! One subcommand per algorithm plus `batch` for JSON files of queries.
//! Sequences are passed as comma-separated integers (`"2,5,-3"`); an empty
//! string is an empty sequence. Every command converts into a [`Query`], so
//! the terminal view, `--json` output, and batch mode share one code path.

pub mod display;

use clap::{Parser, Subcommand};
use pivot::Query;

#[derive(Parser)]
#[command(
    name = "pivot",
    about = "Binary-search-over-answer and monotonic-stack algorithms",
    version
)]
pub struct Cli {
    /// Print results as JSON instead of the boxed terminal view
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Median of two sorted sequences (partition search)
    Median {
        /// First sorted sequence, e.g. "1,3"
        #[arg(allow_hyphen_values = true)]
        a: String,

        /// Second sorted sequence, e.g. "2"
        #[arg(allow_hyphen_values = true)]
        b: String,
    },

    /// K-th smallest element (1-based) of two sorted sequences
    Kth {
        #[arg(allow_hyphen_values = true)]
        a: String,

        #[arg(allow_hyphen_values = true)]
        b: String,

        k: usize,
    },

    /// Search a rotated sorted sequence of distinct values
    Rotated {
        /// Rotated sequence, e.g. "4,5,6,7,0,1,2"
        #[arg(allow_hyphen_values = true)]
        seq: String,

        #[arg(allow_hyphen_values = true)]
        target: i64,
    },

    /// First and last position of a target in a sorted sequence
    Range {
        #[arg(allow_hyphen_values = true)]
        seq: String,

        #[arg(allow_hyphen_values = true)]
        target: i64,
    },

    /// Next greater element for every position (circular by default)
    NextGreater {
        #[arg(allow_hyphen_values = true)]
        seq: String,

        /// Don't wrap around past the end
        #[arg(long)]
        linear: bool,

        /// Report stack push/pop counts
        #[arg(long)]
        stats: bool,
    },

    /// Largest (or smallest) number left after removing K digits
    Digits {
        digits: String,

        k: usize,

        /// Produce the smallest number instead (leading zeros stripped)
        #[arg(long)]
        min: bool,

        /// Report stack push/pop counts
        #[arg(long)]
        stats: bool,
    },

    /// Evaluate a JSON array of queries and print a JSON array of outcomes
    Batch {
        /// Path to the batch file
        file: String,

        /// Include stack push/pop counts for stack queries
        #[arg(long)]
        stats: bool,
    },
}

impl Commands {
    /// Convert a single-query command into a [`Query`].
    ///
    /// `Ok(None)` for `batch`, which carries many queries.
    pub fn to_query(&self) -> Result<Option<Query>, String> {
        let query = match self {
            Commands::Median { a, b } => Query::Median {
                a: parse_sequence(a)?,
                b: parse_sequence(b)?,
            },
            Commands::Kth { a, b, k } => Query::Kth {
                a: parse_sequence(a)?,
                b: parse_sequence(b)?,
                k: *k,
            },
            Commands::Rotated { seq, target } => Query::Rotated {
                seq: parse_sequence(seq)?,
                target: *target,
            },
            Commands::Range { seq, target } => Query::Range {
                seq: parse_sequence(seq)?,
                target: *target,
            },
            Commands::NextGreater { seq, linear, .. } => Query::NextGreater {
                seq: parse_sequence(seq)?,
                circular: !linear,
            },
            Commands::Digits { digits, k, min, .. } => Query::Digits {
                digits: digits.clone(),
                k: *k,
                min: *min,
            },
            Commands::Batch { .. } => return Ok(None),
        };
        Ok(Some(query))
    }

    pub fn wants_stats(&self) -> bool {
        match self {
            Commands::NextGreater { stats, .. }
            | Commands::Digits { stats, .. }
            | Commands::Batch { stats, .. } => *stats,
            _ => false,
        }
    }
}

/// Parse `"1, 2,-3"` (optionally wrapped in brackets) into integers.
pub fn parse_sequence(raw: &str) -> Result<Vec<i64>, String> {
    let trimmed = raw.trim();
    let inner = trimmed
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(trimmed);

    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }

    inner
        .split(',')
        .enumerate()
        .map(|(i, part)| {
            part.trim()
                .parse::<i64>()
                .map_err(|e| format!("Invalid number {:?} at position {}: {}", part.trim(), i, e))
        })
        .collect()
}
