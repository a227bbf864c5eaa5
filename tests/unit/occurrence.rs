//! Tests for first/last occurrence in a sorted slice.

use super::common::RUNS_INPUT;
use pivot::{count_occurrences, first_last_occurrence, first_occurrence, last_occurrence};

#[test]
fn test_run_of_duplicates() {
    assert_eq!(first_last_occurrence(&RUNS_INPUT, 8), Some((3, 4)));
    assert_eq!(first_last_occurrence(&RUNS_INPUT, 7), Some((1, 2)));
}

#[test]
fn test_absent_target() {
    assert_eq!(first_last_occurrence(&RUNS_INPUT, 6), None);
    assert_eq!(first_last_occurrence(&RUNS_INPUT, 4), None);
    assert_eq!(first_last_occurrence(&RUNS_INPUT, 11), None);
    assert_eq!(count_occurrences(&RUNS_INPUT, 6), 0);
}

#[test]
fn test_empty_slice() {
    assert_eq!(first_occurrence(&[], 0), None);
    assert_eq!(last_occurrence(&[], 0), None);
    assert_eq!(first_last_occurrence(&[], 0), None);
}

#[test]
fn test_whole_slice_is_one_run() {
    let seq = [3; 9];
    assert_eq!(first_last_occurrence(&seq, 3), Some((0, 8)));
    assert_eq!(count_occurrences(&seq, 3), 9);
}

#[test]
fn test_single_occurrence_at_the_ends() {
    assert_eq!(first_last_occurrence(&RUNS_INPUT, 5), Some((0, 0)));
    assert_eq!(first_last_occurrence(&RUNS_INPUT, 10), Some((5, 5)));
}

#[test]
fn test_count_matches_run_length() {
    assert_eq!(count_occurrences(&RUNS_INPUT, 7), 2);
    assert_eq!(count_occurrences(&RUNS_INPUT, 10), 1);
}
