//! Tests for digit removal with a monotonic stack.

use super::common::digit_string;
use pivot::{max_after_removal, max_after_removal_with_stats, min_after_removal};

#[test]
fn test_max_examples() {
    assert_eq!(max_after_removal("462839", 2), "6839");
    assert_eq!(max_after_removal("1111", 2), "11");
}

#[test]
fn test_max_k_zero_is_identity() {
    assert_eq!(max_after_removal("9081726354", 0), "9081726354");
}

#[test]
fn test_max_k_at_least_len() {
    assert_eq!(max_after_removal("462839", 6), "");
    assert_eq!(max_after_removal("462839", 7), "");
}

#[test]
fn test_max_increasing_keeps_the_tail() {
    assert_eq!(max_after_removal("123456", 3), "456");
}

#[test]
fn test_min_examples() {
    assert_eq!(min_after_removal("1432219", 3), "1219");
    assert_eq!(min_after_removal("10200", 1), "200");
    assert_eq!(min_after_removal("10", 2), "0");
}

#[test]
fn test_min_decreasing_keeps_the_tail() {
    assert_eq!(min_after_removal("987654", 3), "654");
}

#[test]
fn test_result_length() {
    let digits = digit_string(64, 3);
    for k in 0..=digits.len() {
        assert_eq!(max_after_removal(&digits, k).len(), digits.len() - k, "k = {}", k);
    }
}

#[test]
fn test_stats_bound() {
    let digits = digit_string(500, 11);
    let (_, stats) = max_after_removal_with_stats(&digits, 250);
    assert_eq!(stats.pushes, 500);
    assert!(stats.within_bound(500));
}
