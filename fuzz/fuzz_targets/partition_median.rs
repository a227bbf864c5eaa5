// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for partition search (median and k-th smallest).
//!
//! The cut search has four boundary cases (either cut at either end) and
//! an index computation that can underflow if the search range is wrong.
//! Arbitrary lengths and values, including i64 extremes, hit all of them.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pivot::testing::merge_sorted;
use pivot::{find_median, kth_smallest};

#[derive(Debug, Arbitrary)]
struct PartitionInput {
    a: Vec<i64>,
    b: Vec<i64>,
    k: u16,
}

fuzz_target!(|input: PartitionInput| {
    let mut a = input.a;
    let mut b = input.b;
    a.truncate(256);
    b.truncate(256);
    a.sort_unstable();
    b.sort_unstable();

    let merged = merge_sorted(&a, &b);
    let n = merged.len();

    // Property 1: median matches the merged sequence
    let expected = match n {
        0 => None,
        _ if n % 2 == 1 => Some(merged[n / 2] as f64),
        _ => Some((merged[n / 2 - 1] as f64 + merged[n / 2] as f64) / 2.0),
    };
    assert_eq!(find_median(&a, &b), expected, "median of {:?} and {:?}", a, b);

    // Property 2: argument order doesn't matter
    assert_eq!(find_median(&a, &b), find_median(&b, &a));

    // Property 3: k-th smallest matches, None outside 1..=n
    let k = input.k as usize % (n + 2);
    let expected_kth = k.checked_sub(1).and_then(|i| merged.get(i).copied());
    assert_eq!(kth_smallest(&a, &b, k), expected_kth, "k = {}", k);
});
