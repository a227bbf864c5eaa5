// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Largest and smallest number left after removing k digits.
//!
//! Among strings of equal length the leftmost differing digit decides the
//! order. So when a larger digit arrives and a smaller one sits just before
//! it, dropping the smaller one moves the larger into a more significant
//! position, which always wins. The kept digits form a non-increasing stack;
//! leftover removals come off the top, where the smallest trailing digits are.
//!
//! The smallest-number variant mirrors this with a non-decreasing stack, then
//! strips leading zeros because its result is read as a number.
//!
//! # Removing everything
//!
//! `k >= len` leaves no digits. [`max_after_removal`] returns `""` (there is
//! no largest empty string to argue about); [`min_after_removal`] returns
//! `"0"` because its output is a number.

use super::{CountingStack, StackOrder, StackStats};
use crate::verify::contracts::{check_amortized_bound, check_stack_monotonic};

/// Greedy removal shared by both variants. Returns kept digits, left to right.
fn remove_digits(digits: &str, k: usize, order: StackOrder) -> (Vec<char>, StackStats) {
    let len = digits.chars().count();
    let mut remaining = k.min(len);
    let mut kept: CountingStack<char> = CountingStack::with_capacity(len);

    // Pop while the top loses to the incoming digit under `order`
    let beats = |incoming: char, top: char| match order {
        StackOrder::NonIncreasing => incoming > top,
        StackOrder::NonDecreasing => incoming < top,
    };

    for digit in digits.chars() {
        while remaining > 0 {
            match kept.peek() {
                Some(top) if beats(digit, top) => {
                    kept.pop();
                    remaining -= 1;
                }
                _ => break,
            }
        }
        // Once the removal budget is spent the stack stops being monotonic
        if remaining > 0 {
            check_stack_monotonic(kept.peek(), digit, order);
        }
        kept.push(digit);
    }

    for _ in 0..remaining {
        kept.pop();
    }

    let stats = kept.stats();
    check_amortized_bound(stats, len);
    (kept.into_items(), stats)
}

/// The lexicographically largest string left after removing `k` digits,
/// keeping the order of the rest.
///
/// Works on any characters (compared by code point); for decimal digits
/// that is numeric order. Returns `""` when `k >= digits.len()`.
///
/// # Complexity
///
/// O(n): each digit is pushed once and popped at most once.
///
/// # Example
///
/// ```
/// use pivot::max_after_removal;
///
/// assert_eq!(max_after_removal("462839", 2), "6839");
/// assert_eq!(max_after_removal("1111", 2), "11");
/// assert_eq!(max_after_removal("12", 5), "");
/// ```
pub fn max_after_removal(digits: &str, k: usize) -> String {
    max_after_removal_with_stats(digits, k).0
}

/// [`max_after_removal`] plus the stack operation counts.
pub fn max_after_removal_with_stats(digits: &str, k: usize) -> (String, StackStats) {
    let (kept, stats) = remove_digits(digits, k, StackOrder::NonIncreasing);
    (kept.into_iter().collect(), stats)
}

/// The smallest number left after removing `k` digits, without leading zeros.
///
/// Returns `"0"` when nothing (or only zeros) remain.
///
/// ```
/// use pivot::min_after_removal;
///
/// assert_eq!(min_after_removal("1432219", 3), "1219");
/// assert_eq!(min_after_removal("10200", 1), "200");
/// assert_eq!(min_after_removal("10", 2), "0");
/// ```
pub fn min_after_removal(digits: &str, k: usize) -> String {
    min_after_removal_with_stats(digits, k).0
}

/// [`min_after_removal`] plus the stack operation counts.
pub fn min_after_removal_with_stats(digits: &str, k: usize) -> (String, StackStats) {
    let (kept, stats) = remove_digits(digits, k, StackOrder::NonDecreasing);
    let number: String = kept.into_iter().skip_while(|&c| c == '0').collect();
    if number.is_empty() {
        return ("0".to_string(), stats);
    }
    (number, stats)
}
