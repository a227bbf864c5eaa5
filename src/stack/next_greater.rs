// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Next greater element, linear and circular.
//!
//! The stack holds indices still waiting for an answer. Their values are
//! non-increasing from bottom to top: anything smaller than a newcomer would
//! already have been popped and answered by it. So when a new value arrives,
//! it answers a contiguous run at the top of the stack and nothing below.
//!
//! The circular variant walks the slice twice (`i mod n`) but only pushes on
//! the first pass. The second pass exists purely to let elements near the end
//! find their answer near the start.

use super::{CountingStack, StackOrder, StackStats};
use crate::verify::contracts::{check_amortized_bound, check_stack_monotonic};

fn resolve(seq: &[i64], circular: bool) -> (Vec<Option<i64>>, StackStats) {
    let n = seq.len();
    let steps = if circular { 2 * n } else { n };
    let mut answers = vec![None; n];
    let mut pending: CountingStack<usize> = CountingStack::with_capacity(n);

    for step in 0..steps {
        let i = step % n;
        let current = seq[i];

        while let Some(top) = pending.peek() {
            if seq[top] >= current {
                break;
            }
            pending.pop();
            answers[top] = Some(current);
        }

        if step < n {
            let below = pending.peek().map(|top| seq[top]);
            check_stack_monotonic(below, current, StackOrder::NonIncreasing);
            pending.push(i);
        }
    }

    let stats = pending.stats();
    check_amortized_bound(stats, n);
    (answers, stats)
}

/// For each index, the first strictly greater value to its right, or `None`.
///
/// ```
/// use pivot::next_greater;
///
/// assert_eq!(next_greater(&[2, 1, 3]), vec![Some(3), Some(3), None]);
/// ```
pub fn next_greater(seq: &[i64]) -> Vec<Option<i64>> {
    resolve(seq, false).0
}

/// [`next_greater`] plus the stack operation counts.
pub fn next_greater_with_stats(seq: &[i64]) -> (Vec<Option<i64>>, StackStats) {
    resolve(seq, false)
}

/// For each index, the first strictly greater value going forward and
/// wrapping around once, or `None`.
///
/// Only the maximum value(s) can end up `None`.
///
/// # Complexity
///
/// O(n) amortized: each index is pushed once and popped at most once.
///
/// # Example
///
/// ```
/// use pivot::next_greater_circular;
///
/// assert_eq!(
///     next_greater_circular(&[2, 5, -3, -4, 6, 7, 2]),
///     vec![Some(5), Some(6), Some(6), Some(6), Some(7), None, Some(5)]
/// );
/// ```
pub fn next_greater_circular(seq: &[i64]) -> Vec<Option<i64>> {
    resolve(seq, true).0
}

/// [`next_greater_circular`] plus the stack operation counts.
pub fn next_greater_circular_with_stats(seq: &[i64]) -> (Vec<Option<i64>>, StackStats) {
    resolve(seq, true)
}
