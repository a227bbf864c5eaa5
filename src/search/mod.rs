// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Binary search over an answer space.
//!
//! Classic binary search looks for a value. These look for something else:
//! a cut position (partition search), the sorted half of a rotated slice, or
//! the edge of a run of duplicates. In each case the loop keeps an invariant
//! about where the answer can still be, and halves that region every step.

mod occurrence;
mod partition;
mod rotated;

pub use occurrence::{count_occurrences, first_last_occurrence, first_occurrence, last_occurrence};
pub use partition::{find_median, kth_smallest};
pub use rotated::{rotation_offset, search_rotated};
