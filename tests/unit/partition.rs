//! Tests for partition search: median and k-th smallest of two sorted slices.

use super::common::{arithmetic, merge_sorted};
use pivot::{find_median, kth_smallest};

// ============================================================================
// MEDIAN
// ============================================================================

#[test]
fn test_median_odd_total() {
    assert_eq!(find_median(&[1, 3], &[2]), Some(2.0));
}

#[test]
fn test_median_even_total() {
    assert_eq!(find_median(&[1, 2], &[3, 4]), Some(2.5));
}

#[test]
fn test_median_argument_order_irrelevant() {
    let a = [1, 5, 9, 13];
    let b = [2, 3];
    assert_eq!(find_median(&a, &b), find_median(&b, &a));
}

#[test]
fn test_median_one_side_empty() {
    assert_eq!(find_median(&[], &[1]), Some(1.0));
    assert_eq!(find_median(&[2, 4], &[]), Some(3.0));
}

#[test]
fn test_median_both_empty() {
    assert_eq!(find_median(&[], &[]), None);
}

#[test]
fn test_median_all_equal() {
    assert_eq!(find_median(&[7, 7, 7], &[7, 7]), Some(7.0));
}

#[test]
fn test_median_disjoint_ranges() {
    // Every element of a is below every element of b
    assert_eq!(find_median(&[1, 2, 3], &[10, 11, 12]), Some(6.5));
    assert_eq!(find_median(&[10, 11, 12], &[1, 2, 3]), Some(6.5));
}

#[test]
fn test_median_negative_values() {
    assert_eq!(find_median(&[-5, -3], &[-4]), Some(-4.0));
    assert_eq!(find_median(&[-2], &[-1]), Some(-1.5));
}

#[test]
fn test_median_extreme_values_do_not_overflow() {
    assert_eq!(find_median(&[i64::MAX], &[i64::MAX]), Some(i64::MAX as f64));
    assert_eq!(find_median(&[i64::MIN], &[i64::MIN]), Some(i64::MIN as f64));
}

#[test]
fn test_median_matches_merge_on_larger_inputs() {
    let a = arithmetic(0, 3, 50);
    let b = arithmetic(1, 5, 33);
    let merged = merge_sorted(&a, &b);
    let n = merged.len();
    let expected = if n % 2 == 1 {
        merged[n / 2] as f64
    } else {
        (merged[n / 2 - 1] as f64 + merged[n / 2] as f64) / 2.0
    };
    assert_eq!(find_median(&a, &b), Some(expected));
}

// ============================================================================
// K-TH SMALLEST
// ============================================================================

#[test]
fn test_kth_every_rank() {
    let a = [2, 3, 6, 7, 9];
    let b = [1, 4, 8, 10];
    let merged = merge_sorted(&a, &b);
    for k in 1..=merged.len() {
        assert_eq!(kth_smallest(&a, &b, k), Some(merged[k - 1]), "k = {}", k);
    }
}

#[test]
fn test_kth_out_of_range() {
    assert_eq!(kth_smallest(&[1, 2], &[3], 0), None);
    assert_eq!(kth_smallest(&[1, 2], &[3], 4), None);
    assert_eq!(kth_smallest(&[], &[], 1), None);
}

#[test]
fn test_kth_with_duplicates_across_slices() {
    let a = [1, 2, 2, 2];
    let b = [2, 2, 3];
    assert_eq!(kth_smallest(&a, &b, 1), Some(1));
    assert_eq!(kth_smallest(&a, &b, 6), Some(2));
    assert_eq!(kth_smallest(&a, &b, 7), Some(3));
}

#[test]
fn test_kth_single_side() {
    assert_eq!(kth_smallest(&[], &[4, 5, 6], 2), Some(5));
    assert_eq!(kth_smallest(&[4, 5, 6], &[], 3), Some(6));
}
