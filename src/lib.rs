// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search-space pruning algorithms with runtime contracts.
//!
//! Two families of algorithms whose correctness rests on a maintained invariant
//! rather than on template application:
//!
//! - **Binary search over an answer space** (`search`): partition search over
//!   two sorted slices (median, k-th smallest), search in a rotated sorted
//!   slice, and first/last occurrence of a target.
//! - **Monotonic stacks** (`stack`): circular next greater element and the
//!   largest (or smallest) number left after removing k digits.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐     ┌──────────────────┐     ┌──────────────┐
//! │     search/      │     │      stack/      │     │   query.rs   │
//! │ partition,       │     │ CountingStack,   │────▶│ (Query,      │
//! │ rotated,         │────▶│ next_greater,    │     │  Answer,     │
//! │ occurrence       │     │ digits           │     │  batch)      │
//! └──────────────────┘     └──────────────────┘     └──────────────┘
//!          │                        │                       │
//!          ▼                        ▼                       ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                           verify/                               │
//! │  (SortedSlice, RotatedSlice, DigitString - checked inputs;      │
//! │   contracts - debug-build invariant assertions)                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every algorithm is a pure function over borrowed input. Not-found results
//! are `None`; the CLI renders them as `-1`.
//!
//! # Usage
//!
//! ```
//! use pivot::{find_median, next_greater_circular, search_rotated};
//!
//! assert_eq!(find_median(&[1, 3], &[2]), Some(2.0));
//! assert_eq!(search_rotated(&[4, 5, 6, 7, 0, 1, 2], 0), Some(4));
//! assert_eq!(
//!     next_greater_circular(&[1, 2, 1]),
//!     vec![Some(2), None, Some(2)]
//! );
//! ```

pub mod query;
pub mod search;
pub mod stack;
pub mod testing;
pub mod verify;

// Re-exports for public API
pub use query::{Answer, Outcome, Query};
pub use search::{
    count_occurrences, find_median, first_last_occurrence, first_occurrence, kth_smallest,
    last_occurrence, rotation_offset, search_rotated,
};
pub use stack::{
    max_after_removal, max_after_removal_with_stats, min_after_removal,
    min_after_removal_with_stats, next_greater, next_greater_circular,
    next_greater_circular_with_stats, next_greater_with_stats, StackStats,
};
pub use verify::{DigitString, InvariantError, RotatedSlice, SortedSlice};
