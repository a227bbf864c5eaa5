// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the search and stack invariants.
//!
//! Debug-mode assertions that check each algorithm's invariant while it runs.
//! These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development and fuzzing
//! 3. State the invariant each algorithm's correctness argument relies on
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function             | Invariant                                         |
//! |-------------------------------|---------------------------------------------------|
//! | `check_sorted`                | input is non-decreasing                           |
//! | `check_partition_valid`       | every left element ≤ every right element          |
//! | `check_partition_found`       | a valid cut exists for sorted input               |
//! | `check_index_result`          | returned index is in bounds and holds the target  |
//! | `check_occurrence_range`      | first ≤ last, both ends hold the target           |
//! | `check_stack_monotonic`       | stack values stay ordered bottom to top           |
//! | `check_amortized_bound`       | pushes + pops ≤ 2n                                |
//!
//! Every panic message starts with `Contract violation` so tests can match on it.

use crate::stack::{StackOrder, StackStats};
use std::fmt::Debug;

// ============================================================================
// ORDERING CONTRACTS
// ============================================================================

/// Check that a slice is sorted in non-decreasing order.
///
/// O(n), so callers only run it in debug builds where the cost is accepted.
#[inline]
pub fn check_sorted(seq: &[i64], name: &str) {
    if cfg!(debug_assertions) {
        for i in 1..seq.len() {
            debug_assert!(
                seq[i - 1] <= seq[i],
                "Contract violation: {} not sorted - seq[{}] = {} > seq[{}] = {}",
                name,
                i - 1,
                seq[i - 1],
                i,
                seq[i]
            );
        }
    }
}

// ============================================================================
// PARTITION CONTRACTS
// ============================================================================

/// Check that a pair of cuts is a valid partition.
///
/// `None` on the left means "no element" (−∞); `None` on the right means +∞.
#[inline]
pub fn check_partition_valid(
    short_left: Option<i64>,
    short_right: Option<i64>,
    long_left: Option<i64>,
    long_right: Option<i64>,
) {
    let fits = |left: Option<i64>, right: Option<i64>| match (left, right) {
        (Some(l), Some(r)) => l <= r,
        _ => true,
    };
    debug_assert!(
        fits(short_left, long_right) && fits(long_left, short_right),
        "Contract violation: partition invalid - \
         short ({:?} | {:?}), long ({:?} | {:?})",
        short_left,
        short_right,
        long_left,
        long_right
    );
}

/// Check that partition search found a cut.
///
/// For sorted input the search space always contains a valid cut, so reaching
/// the end of the loop without one means the precondition was broken.
#[inline]
pub fn check_partition_found(found: bool, short_len: usize, long_len: usize) {
    debug_assert!(
        found,
        "Contract violation: no valid partition for lengths ({}, {}) - input not sorted",
        short_len,
        long_len
    );
}

// ============================================================================
// SEARCH RESULT CONTRACTS
// ============================================================================

/// Check that a returned index is in bounds and points at the target.
#[inline]
pub fn check_index_result(seq: &[i64], target: i64, result: Option<usize>) {
    if let Some(index) = result {
        debug_assert!(
            index < seq.len(),
            "Contract violation: index {} >= len {}",
            index,
            seq.len()
        );
        debug_assert!(
            seq.get(index) == Some(&target),
            "Contract violation: seq[{}] = {:?} != target {}",
            index,
            seq.get(index),
            target
        );
    }
}

/// Check a first/last occurrence pair.
#[inline]
pub fn check_occurrence_range(seq: &[i64], target: i64, range: Option<(usize, usize)>) {
    if let Some((first, last)) = range {
        debug_assert!(
            first <= last,
            "Contract violation: occurrence range ({}, {}) inverted",
            first,
            last
        );
        check_index_result(seq, target, Some(first));
        check_index_result(seq, target, Some(last));
        debug_assert!(
            first == 0 || seq[first - 1] != target,
            "Contract violation: earlier occurrence of {} before index {}",
            target,
            first
        );
        debug_assert!(
            last + 1 >= seq.len() || seq[last + 1] != target,
            "Contract violation: later occurrence of {} after index {}",
            target,
            last
        );
    }
}

// ============================================================================
// MONOTONIC STACK CONTRACTS
// ============================================================================

/// Check that pushing `pushed` on top of `below` keeps the stack ordered.
#[inline]
pub fn check_stack_monotonic<T: PartialOrd + Debug>(below: Option<T>, pushed: T, order: StackOrder) {
    if let Some(below) = below {
        let ordered = match order {
            StackOrder::NonIncreasing => below >= pushed,
            StackOrder::NonDecreasing => below <= pushed,
        };
        debug_assert!(
            ordered,
            "Contract violation: {:?} stack - pushing {:?} onto {:?}",
            order,
            pushed,
            below
        );
    }
}

/// Check the amortized bound: each element is pushed once and popped at most once.
#[inline]
pub fn check_amortized_bound(stats: StackStats, n: usize) {
    debug_assert!(
        stats.within_bound(n),
        "Contract violation: {} pushes + {} pops > 2 * {}",
        stats.pushes,
        stats.pops,
        n
    );
}
