// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search in a sorted slice rotated at an unknown pivot.
//!
//! `[4, 5, 6, 7, 0, 1, 2]` isn't sorted, but any midpoint splits it into two
//! halves of which at least one is. Compare the low boundary to the midpoint:
//! if `seq[low] <= seq[mid]` the left half is sorted, otherwise the right
//! half is. A sorted half answers "could the target be here?" with two
//! comparisons, so one half is always discarded.
//!
//! Values must be distinct. With duplicates (`[1, 1, 1, 0, 1]`) the boundary
//! comparison can't tell which half is sorted and the search degrades to O(n);
//! that variant is out of scope.

use crate::verify::contracts::check_index_result;

/// Index of `target` in a rotated sorted slice of distinct values.
///
/// Returns `None` if absent, including for an empty slice.
///
/// # Complexity
///
/// O(log n) comparisons.
///
/// # Example
///
/// ```
/// use pivot::search_rotated;
///
/// let seq = [4, 5, 6, 7, 0, 1, 2];
/// assert_eq!(search_rotated(&seq, 0), Some(4));
/// assert_eq!(search_rotated(&seq, 3), None);
/// ```
pub fn search_rotated(seq: &[i64], target: i64) -> Option<usize> {
    if seq.is_empty() {
        return None;
    }

    let mut low = 0usize;
    let mut high = seq.len() - 1;
    let mut found = None;

    while low <= high {
        let mid = low + (high - low) / 2;
        if seq[mid] == target {
            found = Some(mid);
            break;
        }

        if seq[low] <= seq[mid] {
            // Left half sorted. seq[low] <= target < seq[mid] forces mid > low.
            if seq[low] <= target && target < seq[mid] {
                high = mid - 1;
            } else {
                low = mid + 1;
            }
        } else if seq[mid] < target && target <= seq[high] {
            // Right half sorted
            low = mid + 1;
        } else {
            // seq[low] > seq[mid] forces mid > low
            high = mid - 1;
        }
    }

    check_index_result(seq, target, found);
    found
}

/// Index of the minimum element of a rotated sorted slice of distinct values.
///
/// This is how far the sorted slice was rotated: `0` when it wasn't rotated
/// at all. `None` for an empty slice.
///
/// ```
/// use pivot::rotation_offset;
///
/// assert_eq!(rotation_offset(&[4, 5, 6, 7, 0, 1, 2]), Some(4));
/// assert_eq!(rotation_offset(&[1, 2, 3]), Some(0));
/// ```
pub fn rotation_offset(seq: &[i64]) -> Option<usize> {
    if seq.is_empty() {
        return None;
    }

    let mut low = 0usize;
    let mut high = seq.len() - 1;

    // Invariant: the minimum lies in seq[low..=high]
    while low < high {
        let mid = low + (high - low) / 2;
        if seq[mid] > seq[high] {
            low = mid + 1;
        } else {
            high = mid;
        }
    }

    Some(low)
}
