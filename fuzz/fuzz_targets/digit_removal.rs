// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for digit removal.
//!
//! Arbitrary strings go through `DigitString::new` first. Whatever survives
//! must come back with the right length, as a subsequence of the input, and
//! within the stack operation bound.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pivot::DigitString;

#[derive(Debug, Arbitrary)]
struct RemovalInput {
    digits: String,
    k: u16,
}

fn is_subsequence(kept: &str, source: &str) -> bool {
    let mut source = source.chars();
    kept.chars().all(|c| source.any(|d| d == c))
}

fuzz_target!(|input: RemovalInput| {
    let Ok(digits) = DigitString::new(&input.digits) else {
        return;
    };
    let k = input.k as usize;
    let len = digits.len();

    let (max, max_stats) = digits.max_after_removal_with_stats(k);
    let (min, min_stats) = digits.min_after_removal_with_stats(k);

    // Property 1: max keeps exactly len - k digits, in order
    assert_eq!(max.len(), len.saturating_sub(k));
    assert!(is_subsequence(&max, digits.as_str()));

    // Property 2: min is a number: no leading zeros, never empty
    assert!(!min.is_empty());
    assert!(min == "0" || !min.starts_with('0'), "leading zero in {:?}", min);
    assert!(min.len() <= len.saturating_sub(k).max(1));

    // Property 3: amortized bound
    assert!(max_stats.within_bound(len));
    assert!(min_stats.within_bound(len));
});
