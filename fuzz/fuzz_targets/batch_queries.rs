// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for batch JSON parsing and evaluation.
//!
//! Batch files come from outside, so neither parsing nor evaluation may
//! panic: bad JSON is an Err, bad input inside a query is an error outcome.

#![no_main]

use libfuzzer_sys::fuzz_target;
use pivot::query::{evaluate_batch, parse_batch};

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(queries) = parse_batch(json) else {
        return;
    };

    let outcomes = evaluate_batch(&queries, true);
    assert_eq!(outcomes.len(), queries.len());

    for (query, outcome) in queries.iter().zip(&outcomes) {
        assert_eq!(outcome.op, query.op());
        // Exactly one of answer and error
        assert_ne!(outcome.ok.is_some(), outcome.error.is_some());
        if outcome.stats.is_some() {
            assert!(query.uses_stack());
        }
    }
});
