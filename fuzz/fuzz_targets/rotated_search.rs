// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for rotated sorted search.
//!
//! Two paths: a valid rotation built from the input (search must agree with
//! a linear scan), and the raw input through `RotatedSlice::new` (must return
//! Ok or Err, never panic).

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pivot::testing::rotate_left;
use pivot::{rotation_offset, search_rotated, RotatedSlice};

#[derive(Debug, Arbitrary)]
struct RotatedInput {
    values: Vec<i64>,
    rotation: u16,
    target: i64,
}

fuzz_target!(|input: RotatedInput| {
    // Raw input: the checked constructor decides, it never panics
    if let Ok(checked) = RotatedSlice::new(&input.values) {
        let found = checked.search(input.target);
        assert_eq!(found.is_some(), input.values.contains(&input.target));
    }

    let mut sorted = input.values;
    sorted.truncate(512);
    sorted.sort_unstable();
    sorted.dedup();
    if sorted.is_empty() {
        assert_eq!(search_rotated(&sorted, input.target), None);
        return;
    }

    let r = input.rotation as usize % sorted.len();
    let seq = rotate_left(&sorted, r);

    // Property 1: agrees with linear scan
    let expected = seq.iter().position(|&x| x == input.target);
    assert_eq!(search_rotated(&seq, input.target), expected);

    // Property 2: every element is found where it is
    for (i, &value) in seq.iter().enumerate() {
        assert_eq!(search_rotated(&seq, value), Some(i));
    }

    // Property 3: offset is the index of the minimum
    assert_eq!(rotation_offset(&seq), Some((sorted.len() - r) % sorted.len()));
});
