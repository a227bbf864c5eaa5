// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for next greater element.
//!
//! The circular walk indexes with `i % n` over `2n` steps. Any slip in the
//! push condition either double-pushes (blowing the 2n bound) or misses an
//! answer that only appears after wrapping.

#![no_main]

use libfuzzer_sys::fuzz_target;
use pivot::{next_greater_circular_with_stats, next_greater_with_stats};

fuzz_target!(|seq: Vec<i64>| {
    let seq = &seq[..seq.len().min(256)];
    let n = seq.len();

    for circular in [false, true] {
        let (values, stats) = if circular {
            next_greater_circular_with_stats(seq)
        } else {
            next_greater_with_stats(seq)
        };

        // Property 1: one answer per element
        assert_eq!(values.len(), n);

        // Property 2: agrees with a quadratic forward scan
        for i in 0..n {
            let end = if circular { i + n } else { n };
            let expected = (i + 1..end).map(|j| seq[j % n]).find(|&v| v > seq[i]);
            assert_eq!(values[i], expected, "index {} circular {}", i, circular);
        }

        // Property 3: amortized bound
        assert_eq!(stats.pushes, n);
        assert!(stats.within_bound(n), "{:?} exceeds 2 * {}", stats, n);
    }
});
