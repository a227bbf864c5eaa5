// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit tests, integration tests, benches and fuzz targets.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical input builders to avoid duplication.

#![doc(hidden)]

/// Rotate `seq` left by `r` positions (`r` taken modulo the length).
///
/// `rotate_left(&[0, 1, 2, 3], 1)` is `[1, 2, 3, 0]`.
pub fn rotate_left(seq: &[i64], r: usize) -> Vec<i64> {
    let mut rotated = seq.to_vec();
    if !rotated.is_empty() {
        let r = r % rotated.len();
        rotated.rotate_left(r);
    }
    rotated
}

/// Merge two sorted slices into one sorted vector.
pub fn merge_sorted(a: &[i64], b: &[i64]) -> Vec<i64> {
    let mut merged = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        if a[i] <= b[j] {
            merged.push(a[i]);
            i += 1;
        } else {
            merged.push(b[j]);
            j += 1;
        }
    }
    merged.extend_from_slice(&a[i..]);
    merged.extend_from_slice(&b[j..]);
    merged
}

/// Evenly spaced sorted values: `start, start + step, ...` (`len` of them).
pub fn arithmetic(start: i64, step: i64, len: usize) -> Vec<i64> {
    (0..len as i64).map(|i| start + i * step).collect()
}

/// Deterministic digit string of length `len` that mixes rises and falls.
///
/// Modular arithmetic on the position and a seed, so inputs are reproducible.
pub fn digit_string(len: usize, seed: usize) -> String {
    (0..len)
        .map(|i| char::from(b'0' + ((seed * 7 + i * 3 + i * i / 5) % 10) as u8))
        .collect()
}
