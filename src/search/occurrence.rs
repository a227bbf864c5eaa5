// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! First and last occurrence of a target in a sorted slice with duplicates.
//!
//! A plain binary search stops at whichever copy it hits first. These record
//! the hit and keep going: left for the first occurrence, right for the last.
//! Two independent O(log n) searches, so the pair is still O(log n).

use crate::verify::contracts::{check_index_result, check_occurrence_range};
use std::cmp::Ordering;

/// Which end of a run of equal values to look for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    First,
    Last,
}

/// Half-open binary search over `seq[low..high]` that keeps searching past a match.
fn search_edge(seq: &[i64], target: i64, edge: Edge) -> Option<usize> {
    let mut low = 0usize;
    let mut high = seq.len();
    let mut found = None;

    while low < high {
        let mid = low + (high - low) / 2;
        match seq[mid].cmp(&target) {
            Ordering::Equal => {
                found = Some(mid);
                match edge {
                    Edge::First => high = mid,
                    Edge::Last => low = mid + 1,
                }
            }
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }

    check_index_result(seq, target, found);
    found
}

/// Index of the first occurrence of `target` in a non-decreasing slice.
pub fn first_occurrence(seq: &[i64], target: i64) -> Option<usize> {
    search_edge(seq, target, Edge::First)
}

/// Index of the last occurrence of `target` in a non-decreasing slice.
pub fn last_occurrence(seq: &[i64], target: i64) -> Option<usize> {
    search_edge(seq, target, Edge::Last)
}

/// First and last index of `target` in a non-decreasing slice.
///
/// Returns `None` when the target is absent or the slice is empty.
///
/// # Example
///
/// ```
/// use pivot::first_last_occurrence;
///
/// assert_eq!(first_last_occurrence(&[5, 7, 7, 8, 8, 10], 8), Some((3, 4)));
/// assert_eq!(first_last_occurrence(&[5, 7, 7, 8, 8, 10], 6), None);
/// assert_eq!(first_last_occurrence(&[], 0), None);
/// ```
pub fn first_last_occurrence(seq: &[i64], target: i64) -> Option<(usize, usize)> {
    let range = first_occurrence(seq, target).zip(last_occurrence(seq, target));
    check_occurrence_range(seq, target, range);
    range
}

/// Number of times `target` occurs in a non-decreasing slice.
pub fn count_occurrences(seq: &[i64], target: i64) -> usize {
    first_last_occurrence(seq, target).map_or(0, |(first, last)| last - first + 1)
}
