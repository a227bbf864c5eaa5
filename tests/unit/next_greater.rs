//! Tests for next greater element, linear and circular.

use super::common::NEXT_GREATER_INPUT;
use pivot::{next_greater, next_greater_circular, next_greater_circular_with_stats};

#[test]
fn test_circular_example() {
    assert_eq!(
        next_greater_circular(&NEXT_GREATER_INPUT),
        vec![Some(5), Some(6), Some(6), Some(6), Some(7), None, Some(5)]
    );
}

#[test]
fn test_linear_example() {
    assert_eq!(
        next_greater(&NEXT_GREATER_INPUT),
        vec![Some(5), Some(6), Some(6), Some(6), Some(7), None, None]
    );
}

#[test]
fn test_empty_and_single() {
    assert!(next_greater_circular(&[]).is_empty());
    assert_eq!(next_greater_circular(&[42]), vec![None]);
    assert_eq!(next_greater(&[42]), vec![None]);
}

#[test]
fn test_all_equal_has_no_greater() {
    assert_eq!(next_greater_circular(&[3, 3, 3]), vec![None, None, None]);
}

#[test]
fn test_strictly_decreasing() {
    let seq = [5, 4, 3, 2, 1];
    assert_eq!(next_greater(&seq), vec![None; 5]);
    // Wrapping around reaches the leading maximum
    assert_eq!(
        next_greater_circular(&seq),
        vec![None, Some(5), Some(5), Some(5), Some(5)]
    );
}

#[test]
fn test_strictly_increasing() {
    assert_eq!(
        next_greater_circular(&[1, 2, 3]),
        vec![Some(2), Some(3), None]
    );
}

#[test]
fn test_stack_operations_bounded() {
    let seq: Vec<i64> = (0..200).map(|i| (i * 37) % 101).collect();
    let (_, stats) = next_greater_circular_with_stats(&seq);
    assert_eq!(stats.pushes, seq.len());
    assert!(stats.within_bound(seq.len()));
}
