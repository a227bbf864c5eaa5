//! Tests for search in a rotated sorted slice.

use super::common::{arithmetic, rotate_left, ROTATED_INPUT};
use pivot::{rotation_offset, search_rotated};

#[test]
fn test_found_and_missing() {
    assert_eq!(search_rotated(&ROTATED_INPUT, 0), Some(4));
    assert_eq!(search_rotated(&ROTATED_INPUT, 3), None);
}

#[test]
fn test_empty_and_single() {
    assert_eq!(search_rotated(&[], 1), None);
    assert_eq!(search_rotated(&[1], 1), Some(0));
    assert_eq!(search_rotated(&[1], 0), None);
    assert_eq!(rotation_offset(&[]), None);
    assert_eq!(rotation_offset(&[1]), Some(0));
}

#[test]
fn test_two_elements_both_orders() {
    assert_eq!(search_rotated(&[1, 3], 3), Some(1));
    assert_eq!(search_rotated(&[3, 1], 1), Some(1));
    assert_eq!(search_rotated(&[3, 1], 3), Some(0));
    assert_eq!(search_rotated(&[3, 1], 2), None);
    assert_eq!(rotation_offset(&[3, 1]), Some(1));
}

#[test]
fn test_every_rotation_every_target() {
    let sorted = arithmetic(-20, 3, 17);
    for r in 0..sorted.len() {
        let seq = rotate_left(&sorted, r);
        for (i, &value) in seq.iter().enumerate() {
            assert_eq!(search_rotated(&seq, value), Some(i), "rotation {}", r);
            assert_eq!(search_rotated(&seq, value + 1), None, "rotation {}", r);
        }
        assert_eq!(rotation_offset(&seq), Some((sorted.len() - r) % sorted.len()));
    }
}

#[test]
fn test_targets_outside_value_range() {
    assert_eq!(search_rotated(&ROTATED_INPUT, i64::MIN), None);
    assert_eq!(search_rotated(&ROTATED_INPUT, i64::MAX), None);
}
