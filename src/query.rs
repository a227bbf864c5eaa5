// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Queries from the outside world: CLI arguments and JSON batch files.
//!
//! The library functions trust their input. Anything arriving here doesn't
//! get that courtesy: every query goes through a checked wrapper from
//! `verify` before it reaches an algorithm, and a precondition violation
//! becomes an error string in the [`Outcome`] instead of a wrong answer.
//!
//! Results use the `-1` not-found convention on the way out, so JSON
//! consumers never see `null` for "absent".
//!
//! # Batch format
//!
//! ```json
//! [
//!   {"op": "median", "a": [1, 3], "b": [2]},
//!   {"op": "rotated", "seq": [4, 5, 6, 7, 0, 1, 2], "target": 0},
//!   {"op": "next_greater", "seq": [2, 5, -3, -4, 6, 7, 2]},
//!   {"op": "digits", "digits": "462839", "k": 2}
//! ]
//! ```

use crate::stack::{next_greater_circular_with_stats, next_greater_with_stats, StackStats};
use crate::verify::{DigitString, InvariantError, RotatedSlice, SortedSlice};
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use indicatif::ProgressBar;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// One algorithm invocation with its raw (unchecked) input.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Query {
    Median {
        a: Vec<i64>,
        b: Vec<i64>,
    },
    Kth {
        a: Vec<i64>,
        b: Vec<i64>,
        k: usize,
    },
    Rotated {
        seq: Vec<i64>,
        target: i64,
    },
    Range {
        seq: Vec<i64>,
        target: i64,
    },
    NextGreater {
        seq: Vec<i64>,
        #[serde(default = "default_circular")]
        circular: bool,
    },
    Digits {
        digits: String,
        k: usize,
        #[serde(default)]
        min: bool,
    },
}

fn default_circular() -> bool {
    true
}

/// A successful result, in the `-1` sentinel convention.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Answer {
    /// Median of two sorted sequences; `None` (JSON `null`) when both are empty.
    Median(Option<f64>),
    /// K-th smallest element; `None` when k is out of range.
    Element(Option<i64>),
    /// Rotated search: index of the target and rotation offset, `-1` when absent.
    Rotated { index: i64, offset: i64 },
    /// First and last index, `[-1, -1]` when absent.
    Range([i64; 2]),
    /// Next greater values, `-1` where none exists.
    Values(Vec<i64>),
    /// Digit string after removal.
    Digits(String),
}

/// What came back for one query: an answer or an error, never both.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    pub op: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ok: Option<Answer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<StackStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Outcome {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// `Option<usize>` index to the `-1` convention.
fn sentinel(index: Option<usize>) -> i64 {
    index.map_or(-1, |i| i as i64)
}

impl Query {
    /// Operation name as it appears in batch files.
    pub fn op(&self) -> &'static str {
        match self {
            Query::Median { .. } => "median",
            Query::Kth { .. } => "kth",
            Query::Rotated { .. } => "rotated",
            Query::Range { .. } => "range",
            Query::NextGreater { .. } => "next_greater",
            Query::Digits { .. } => "digits",
        }
    }

    /// Whether the query runs a stack algorithm (and can report stats).
    pub fn uses_stack(&self) -> bool {
        matches!(self, Query::NextGreater { .. } | Query::Digits { .. })
    }

    /// Validate the input and run the algorithm.
    pub fn evaluate(&self, with_stats: bool) -> Outcome {
        match self.answer() {
            Ok((answer, stats)) => Outcome {
                op: self.op(),
                ok: Some(answer),
                stats: stats.filter(|_| with_stats),
                error: None,
            },
            Err(e) => Outcome {
                op: self.op(),
                ok: None,
                stats: None,
                error: Some(e.to_string()),
            },
        }
    }

    fn answer(&self) -> Result<(Answer, Option<StackStats>), InvariantError> {
        let result = match self {
            Query::Median { a, b } => {
                let (a, b) = (SortedSlice::new(a)?, SortedSlice::new(b)?);
                (Answer::Median(a.median_with(&b)), None)
            }
            Query::Kth { a, b, k } => {
                let (a, b) = (SortedSlice::new(a)?, SortedSlice::new(b)?);
                (Answer::Element(a.kth_with(&b, *k)), None)
            }
            Query::Rotated { seq, target } => {
                let seq = RotatedSlice::new(seq)?;
                let answer = Answer::Rotated {
                    index: sentinel(seq.search(*target)),
                    offset: sentinel(seq.offset()),
                };
                (answer, None)
            }
            Query::Range { seq, target } => {
                let seq = SortedSlice::new(seq)?;
                let range = match seq.occurrence_range(*target) {
                    Some((first, last)) => [first as i64, last as i64],
                    None => [-1, -1],
                };
                (Answer::Range(range), None)
            }
            Query::NextGreater { seq, circular } => {
                let (values, stats) = if *circular {
                    next_greater_circular_with_stats(seq)
                } else {
                    next_greater_with_stats(seq)
                };
                let values = values.into_iter().map(|v| v.unwrap_or(-1)).collect();
                (Answer::Values(values), Some(stats))
            }
            Query::Digits { digits, k, min } => {
                let digits = DigitString::new(digits)?;
                let (kept, stats) = if *min {
                    digits.min_after_removal_with_stats(*k)
                } else {
                    digits.max_after_removal_with_stats(*k)
                };
                (Answer::Digits(kept), Some(stats))
            }
        };
        Ok(result)
    }
}

/// Evaluate a batch, keeping input order.
///
/// Queries are independent, so with the `parallel` feature they run on the
/// rayon pool.
#[cfg(feature = "parallel")]
pub fn evaluate_batch(queries: &[Query], with_stats: bool) -> Vec<Outcome> {
    queries.par_iter().map(|q| q.evaluate(with_stats)).collect()
}

/// Evaluate a batch, keeping input order.
#[cfg(not(feature = "parallel"))]
pub fn evaluate_batch(queries: &[Query], with_stats: bool) -> Vec<Outcome> {
    queries.iter().map(|q| q.evaluate(with_stats)).collect()
}

/// [`evaluate_batch`] ticking a progress bar once per query.
#[cfg(feature = "parallel")]
pub fn evaluate_batch_with_progress(
    queries: &[Query],
    with_stats: bool,
    progress: &ProgressBar,
) -> Vec<Outcome> {
    queries
        .par_iter()
        .map(|q| {
            let outcome = q.evaluate(with_stats);
            progress.inc(1);
            outcome
        })
        .collect()
}

/// Parse a JSON array of queries.
#[cfg(feature = "serde_json")]
pub fn parse_batch(json: &str) -> Result<Vec<Query>, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid batch JSON: {}", e))
}

/// Read and parse a batch file.
#[cfg(feature = "serde_json")]
pub fn load_batch(path: &std::path::Path) -> Result<Vec<Query>, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    parse_batch(&content)
}
