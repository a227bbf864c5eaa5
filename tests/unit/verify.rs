//! Tests for checked input wrappers and debug-build contracts.

use pivot::{DigitString, InvariantError, RotatedSlice, SortedSlice};

// ============================================================================
// CHECKED WRAPPERS
// ============================================================================

#[test]
fn test_sorted_slice_queries() {
    let seq = [5, 7, 7, 8, 8, 10];
    let sorted = SortedSlice::new(&seq).unwrap();
    assert_eq!(sorted.occurrence_range(8), Some((3, 4)));
    assert_eq!(sorted.count(7), 2);
    assert_eq!(sorted.len(), 6);
    assert_eq!(sorted.as_slice(), &seq);
}

#[test]
fn test_sorted_slice_pairs() {
    let a = SortedSlice::new(&[1, 3]).unwrap();
    let b = SortedSlice::new(&[2]).unwrap();
    assert_eq!(a.median_with(&b), Some(2.0));
    assert_eq!(a.kth_with(&b, 3), Some(3));
}

#[test]
fn test_sorted_slice_rejects_descent() {
    assert_eq!(
        SortedSlice::new(&[1, 2, 3, 2]).unwrap_err(),
        InvariantError::Unsorted { position: 3 }
    );
}

#[test]
fn test_rotated_slice_queries() {
    let seq = [4, 5, 6, 7, 0, 1, 2];
    let rotated = RotatedSlice::new(&seq).unwrap();
    assert_eq!(rotated.search(0), Some(4));
    assert_eq!(rotated.search(3), None);
    assert_eq!(rotated.offset(), Some(4));
}

#[test]
fn test_rotated_slice_rejects_duplicates_anywhere() {
    assert!(matches!(
        RotatedSlice::new(&[2, 2]),
        Err(InvariantError::Duplicate { value: 2, .. })
    ));
}

#[test]
fn test_rotated_slice_rejects_unsorted() {
    assert!(matches!(
        RotatedSlice::new(&[1, 3, 2, 4]),
        Err(InvariantError::NotRotatedSorted { .. })
    ));
}

#[test]
fn test_digit_string_queries() {
    let digits = DigitString::new("1432219").unwrap();
    assert_eq!(digits.min_after_removal(3), "1219");
    assert_eq!(digits.max_after_removal(3), "4329");
    assert_eq!(digits.len(), 7);
}

#[test]
fn test_digit_string_rejects_sign() {
    assert_eq!(
        DigitString::new("-12").unwrap_err(),
        InvariantError::NonDigit {
            position: 0,
            found: '-'
        }
    );
}

#[test]
fn test_errors_are_std_errors() {
    let err: Box<dyn std::error::Error> = Box::new(InvariantError::Duplicate {
        position: 1,
        value: 9,
    });
    assert_eq!(err.to_string(), "duplicate value 9 at position 1");
}

// ============================================================================
// CONTRACTS (debug builds only)
// ============================================================================

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "Contract violation")]
fn test_unsorted_median_input_trips_contract() {
    pivot::find_median(&[3, 1], &[2]);
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "Contract violation")]
fn test_unsorted_kth_input_trips_contract() {
    pivot::kth_smallest(&[1, 2], &[5, 4], 1);
}
