// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Input wrappers that make precondition violations unrepresentable.
//!
//! Binary search on an unsorted slice doesn't fail loudly. It returns a wrong
//! answer. So instead of trusting the caller, wrap the input in one of these
//! types. The check is paid once at construction (O(n)), then every query
//! through the wrapper runs in its advertised O(log n) without re-checking.
//!
//! | Type           | Precondition                                  | Algorithms                 |
//! |----------------|-----------------------------------------------|----------------------------|
//! | `SortedSlice`  | non-decreasing                                | median, k-th, occurrences  |
//! | `RotatedSlice` | distinct, ascending after one rotation        | rotated search, offset     |
//! | `DigitString`  | ASCII decimal digits only                     | digit removal              |
//!
//! # Example
//!
//! ```
//! use pivot::{SortedSlice, InvariantError};
//!
//! let a = SortedSlice::new(&[1, 3, 5])?;
//! let b = SortedSlice::new(&[2, 4])?;
//! assert_eq!(a.median_with(&b), Some(3.0));
//!
//! assert_eq!(
//!     SortedSlice::new(&[3, 1]).unwrap_err(),
//!     InvariantError::Unsorted { position: 1 }
//! );
//! # Ok::<(), InvariantError>(())
//! ```

use crate::search::{
    count_occurrences, find_median, first_last_occurrence, kth_smallest, rotation_offset,
    search_rotated,
};
use crate::stack::{
    max_after_removal, max_after_removal_with_stats, min_after_removal,
    min_after_removal_with_stats, StackStats,
};
use std::fmt;

/// Error type for precondition violations found at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// `seq[position] < seq[position - 1]` in a slice that must be non-decreasing.
    Unsorted { position: usize },
    /// `seq[position]` repeats its predecessor in a slice that must be distinct.
    Duplicate { position: usize, value: i64 },
    /// A second descent at `position`: no single rotation sorts the slice.
    NotRotatedSorted { position: usize },
    /// A non-digit character in a digit string.
    NonDigit { position: usize, found: char },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::Unsorted { position } => {
                write!(f, "sequence not sorted at position {}", position)
            }
            InvariantError::Duplicate { position, value } => {
                write!(f, "duplicate value {} at position {}", value, position)
            }
            InvariantError::NotRotatedSorted { position } => {
                write!(
                    f,
                    "sequence is not a rotated sorted sequence (second descent at position {})",
                    position
                )
            }
            InvariantError::NonDigit { position, found } => {
                write!(f, "non-digit character {:?} at position {}", found, position)
            }
        }
    }
}

impl std::error::Error for InvariantError {}

/// A slice known to be sorted in non-decreasing order.
///
/// # Invariants (enforced at construction)
/// - `inner[i - 1] <= inner[i]` for every `i` in `1..len`
#[derive(Debug, Clone, Copy)]
pub struct SortedSlice<'a> {
    inner: &'a [i64],
}

impl<'a> SortedSlice<'a> {
    /// Validate that `seq` is non-decreasing.
    ///
    /// Returns `Err(Unsorted)` pointing at the first element smaller than its
    /// predecessor.
    pub fn new(seq: &'a [i64]) -> Result<Self, InvariantError> {
        if let Some(position) = (1..seq.len()).find(|&i| seq[i] < seq[i - 1]) {
            return Err(InvariantError::Unsorted { position });
        }
        Ok(Self { inner: seq })
    }

    pub fn as_slice(&self) -> &'a [i64] {
        self.inner
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Median of this slice merged with `other`. `None` when both are empty.
    pub fn median_with(&self, other: &SortedSlice<'_>) -> Option<f64> {
        find_median(self.inner, other.inner)
    }

    /// The k-th smallest (1-based) element of this slice merged with `other`.
    pub fn kth_with(&self, other: &SortedSlice<'_>, k: usize) -> Option<i64> {
        kth_smallest(self.inner, other.inner, k)
    }

    /// First and last index of `target`.
    pub fn occurrence_range(&self, target: i64) -> Option<(usize, usize)> {
        first_last_occurrence(self.inner, target)
    }

    pub fn count(&self, target: i64) -> usize {
        count_occurrences(self.inner, target)
    }
}

/// A slice of distinct values that is sorted ascending after one rotation.
///
/// # Invariants (enforced at construction)
/// - no two adjacent values are equal
/// - walking the slice circularly, values descend at most once
///
/// Together these imply every value is distinct: starting from the minimum,
/// a circular walk is strictly increasing.
#[derive(Debug, Clone, Copy)]
pub struct RotatedSlice<'a> {
    inner: &'a [i64],
}

impl<'a> RotatedSlice<'a> {
    pub fn new(seq: &'a [i64]) -> Result<Self, InvariantError> {
        let n = seq.len();
        if n < 2 {
            return Ok(Self { inner: seq });
        }

        let mut descents = 0usize;
        for i in 0..n {
            let next = (i + 1) % n;
            if seq[i] == seq[next] {
                return Err(InvariantError::Duplicate {
                    position: next,
                    value: seq[next],
                });
            }
            if seq[i] > seq[next] {
                descents += 1;
                if descents > 1 {
                    return Err(InvariantError::NotRotatedSorted { position: next });
                }
            }
        }

        Ok(Self { inner: seq })
    }

    pub fn as_slice(&self) -> &'a [i64] {
        self.inner
    }

    /// Index of `target`, or `None` if absent.
    pub fn search(&self, target: i64) -> Option<usize> {
        search_rotated(self.inner, target)
    }

    /// Index of the minimum value (how far the sorted slice was rotated).
    pub fn offset(&self) -> Option<usize> {
        rotation_offset(self.inner)
    }
}

/// A string made only of ASCII decimal digits.
///
/// The empty string is a valid (if uninteresting) digit string.
#[derive(Debug, Clone, Copy)]
pub struct DigitString<'a> {
    inner: &'a str,
}

impl<'a> DigitString<'a> {
    pub fn new(digits: &'a str) -> Result<Self, InvariantError> {
        let bad = digits.chars().enumerate().find(|(_, c)| !c.is_ascii_digit());
        if let Some((position, found)) = bad {
            return Err(InvariantError::NonDigit { position, found });
        }
        Ok(Self { inner: digits })
    }

    pub fn as_str(&self) -> &'a str {
        self.inner
    }

    /// Number of digits (bytes and chars coincide for ASCII).
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn max_after_removal(&self, k: usize) -> String {
        max_after_removal(self.inner, k)
    }

    pub fn max_after_removal_with_stats(&self, k: usize) -> (String, StackStats) {
        max_after_removal_with_stats(self.inner, k)
    }

    pub fn min_after_removal(&self, k: usize) -> String {
        min_after_removal(self.inner, k)
    }

    pub fn min_after_removal_with_stats(&self, k: usize) -> (String, StackStats) {
        min_after_removal_with_stats(self.inner, k)
    }
}
