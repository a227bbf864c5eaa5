//! Reference oracles for differential testing.
//!
//! Simple implementations with no cleverness to get wrong. They serve as
//! ground truth for the logarithmic and amortized-linear versions.

use super::common::merge_sorted;

/// Median by merging. O(m + n).
pub fn oracle_median(a: &[i64], b: &[i64]) -> Option<f64> {
    let merged = merge_sorted(a, b);
    let n = merged.len();
    if n == 0 {
        return None;
    }
    if n % 2 == 1 {
        Some(merged[n / 2] as f64)
    } else {
        Some((merged[n / 2 - 1] as f64 + merged[n / 2] as f64) / 2.0)
    }
}

/// K-th smallest (1-based) by merging.
pub fn oracle_kth(a: &[i64], b: &[i64], k: usize) -> Option<i64> {
    let merged = merge_sorted(a, b);
    k.checked_sub(1).and_then(|i| merged.get(i).copied())
}

/// Linear scan for a target.
pub fn oracle_find(seq: &[i64], target: i64) -> Option<usize> {
    seq.iter().position(|&x| x == target)
}

/// First and last index of a target by linear scan.
pub fn oracle_range(seq: &[i64], target: i64) -> Option<(usize, usize)> {
    let first = seq.iter().position(|&x| x == target)?;
    let last = seq.iter().rposition(|&x| x == target)?;
    Some((first, last))
}

/// Next greater by scanning forward from every index. O(n²).
pub fn oracle_next_greater(seq: &[i64], circular: bool) -> Vec<Option<i64>> {
    let n = seq.len();
    (0..n)
        .map(|i| {
            let end = if circular { i + n } else { n };
            (i + 1..end).map(|j| seq[j % n]).find(|&v| v > seq[i])
        })
        .collect()
}

/// Best string after removing `k` characters, by trying every subset. O(2^n).
///
/// Candidates all have the same length, so string order is numeric order.
pub fn oracle_removal(digits: &str, k: usize, pick_max: bool) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let n = chars.len();
    if k >= n {
        return String::new();
    }
    let keep = n - k;

    let candidates = (0u32..(1 << n))
        .filter(|mask| mask.count_ones() as usize == keep)
        .map(|mask| {
            (0..n)
                .filter(|&i| mask & (1 << i) != 0)
                .map(|i| chars[i])
                .collect::<String>()
        });

    let best = if pick_max {
        candidates.max()
    } else {
        candidates.min()
    };
    best.unwrap_or_default()
}

/// Strip leading zeros the way a number is printed.
pub fn as_number(digits: &str) -> String {
    let stripped = digits.trim_start_matches('0');
    if stripped.is_empty() {
        "0".to_string()
    } else {
        stripped.to_string()
    }
}
