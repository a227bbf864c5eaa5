// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Partition search over two sorted slices.
//!
//! Finding the median of two sorted slices doesn't need a merge. Pick a cut
//! `i` in the shorter slice; the cut `j` in the longer one is then forced by
//! how many elements must sit on the left. The cut is valid when nothing on
//! the left exceeds anything on the right, which only needs the four elements
//! touching the cuts. Binary search on `i` finds it in O(log(min(m, n))).
//!
//! ```text
//!   short:  s[0] .. s[i-1]  |  s[i] .. s[m-1]
//!   long:   l[0] .. l[j-1]  |  l[j] .. l[n-1]
//!                     left  |  right           i + j = left_count
//! ```
//!
//! A missing neighbour (cut at either end) is `None`: −∞ on the left, +∞ on
//! the right.
//!
//! # Precondition
//!
//! Both slices must be sorted ascending. This is not checked in release
//! builds: unsorted input gives an unspecified answer (or `None`). Use
//! [`SortedSlice`](crate::SortedSlice) for untrusted input.

use crate::verify::contracts::{check_partition_found, check_partition_valid, check_sorted};

/// The four elements adjacent to a pair of cuts.
#[derive(Debug, Clone, Copy)]
struct Cut {
    short_left: Option<i64>,
    short_right: Option<i64>,
    long_left: Option<i64>,
    long_right: Option<i64>,
}

impl Cut {
    fn at(short: &[i64], long: &[i64], i: usize, j: usize) -> Self {
        Self {
            short_left: i.checked_sub(1).map(|p| short[p]),
            short_right: short.get(i).copied(),
            long_left: j.checked_sub(1).map(|p| long[p]),
            long_right: long.get(j).copied(),
        }
    }

    /// Largest element left of the cuts. `Option`'s ordering puts `None`
    /// below every `Some`, which is exactly −∞.
    fn max_left(&self) -> Option<i64> {
        self.short_left.max(self.long_left)
    }

    /// Smallest element right of the cuts, treating `None` as +∞.
    fn min_right(&self) -> Option<i64> {
        self.short_right.into_iter().chain(self.long_right).min()
    }
}

/// `left <= right` with open ends always fitting.
fn fits(left: Option<i64>, right: Option<i64>) -> bool {
    match (left, right) {
        (Some(l), Some(r)) => l <= r,
        _ => true,
    }
}

/// Find cuts placing exactly `left_count` elements on the left.
///
/// Requires `left_count <= a.len() + b.len()`.
fn partition(a: &[i64], b: &[i64], left_count: usize) -> Option<Cut> {
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let (m, n) = (short.len(), long.len());

    // i must leave 0 <= j <= n
    let mut low = left_count.saturating_sub(n);
    let mut high = left_count.min(m);

    while low <= high {
        let i = low + (high - low) / 2;
        let j = left_count - i;
        let cut = Cut::at(short, long, i, j);

        if !fits(cut.short_left, cut.long_right) {
            // short_left is Some, so i >= 1
            high = i - 1;
        } else if !fits(cut.long_left, cut.short_right) {
            low = i + 1;
        } else {
            check_partition_valid(cut.short_left, cut.short_right, cut.long_left, cut.long_right);
            return Some(cut);
        }
    }

    check_partition_found(false, m, n);
    None
}

/// Median of the virtual merge of two sorted slices.
///
/// With an odd combined length the median is the largest element left of the
/// cut; with an even one it is the mean of that and the smallest element
/// right of the cut. Returns `None` only when both slices are empty.
///
/// # Complexity
///
/// O(log(min(m, n))) time, O(1) space.
///
/// # Example
///
/// ```
/// use pivot::find_median;
///
/// assert_eq!(find_median(&[1, 3], &[2]), Some(2.0));
/// assert_eq!(find_median(&[1, 2], &[3, 4]), Some(2.5));
/// assert_eq!(find_median(&[], &[]), None);
/// ```
pub fn find_median(a: &[i64], b: &[i64]) -> Option<f64> {
    check_sorted(a, "a");
    check_sorted(b, "b");

    let total = a.len() + b.len();
    if total == 0 {
        return None;
    }

    let cut = partition(a, b, total.div_ceil(2))?;
    let left = cut.max_left()? as f64;
    if total % 2 == 1 {
        return Some(left);
    }
    let right = cut.min_right()? as f64;
    Some((left + right) / 2.0)
}

/// The `k`-th smallest element (1-based) of the virtual merge of two sorted
/// slices.
///
/// Same cut search as [`find_median`], with the left side holding exactly
/// `k` elements; the answer is the largest of them. Returns `None` when `k`
/// is 0 or exceeds the combined length.
///
/// ```
/// use pivot::kth_smallest;
///
/// assert_eq!(kth_smallest(&[2, 3, 6, 7, 9], &[1, 4, 8, 10], 5), Some(6));
/// assert_eq!(kth_smallest(&[1], &[2], 3), None);
/// ```
pub fn kth_smallest(a: &[i64], b: &[i64], k: usize) -> Option<i64> {
    check_sorted(a, "a");
    check_sorted(b, "b");

    if k == 0 || k > a.len() + b.len() {
        return None;
    }
    partition(a, b, k)?.max_left()
}
