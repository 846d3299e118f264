#![cfg(feature = "full")]
//! Property tests for the sequence utilities: copies are faithful, sorting
//! permutes into order, doubling is element-wise, search is exact, and
//! intersection yields exactly the strictly ascending common values.

use std::collections::BTreeSet;

use proptest::prelude::*;
use seqkit::SequenceError;
use seqkit::sequence::{
    contains, double_in_place, duplicate, intersect_sorted, is_sorted_ascending,
    merge_intersection, sort_ascending, try_double_in_place,
};

/// Values small enough that doubling never overflows `i32`.
fn doublable() -> impl Strategy<Value = i32> {
    (i32::MIN / 2)..=(i32::MAX / 2)
}

proptest! {
    /// duplicate returns an equal, independent sequence.
    #[test]
    fn prop_duplicate_is_faithful(elements in prop::collection::vec(any::<i32>(), 0..100)) {
        let snapshot = elements.clone();
        let copy = duplicate(&elements);

        prop_assert_eq!(&copy, &elements);
        prop_assert_eq!(&elements, &snapshot, "source must be unchanged");
    }

    /// sort_ascending yields a non-decreasing permutation of its input.
    #[test]
    fn prop_sort_is_ordered_permutation(elements in prop::collection::vec(-1000i32..1000, 0..200)) {
        let mut sorted = elements.clone();
        sort_ascending(&mut sorted);

        prop_assert!(is_sorted_ascending(&sorted));
        prop_assert_eq!(sorted.len(), elements.len());

        let mut expected = elements;
        expected.sort();
        prop_assert_eq!(sorted, expected);
    }

    /// double_in_place multiplies every element by two at its own index.
    #[test]
    fn prop_double_is_elementwise(elements in prop::collection::vec(doublable(), 0..100)) {
        let mut doubled = elements.clone();
        double_in_place(&mut doubled);

        prop_assert_eq!(doubled.len(), elements.len());
        for (index, original) in elements.iter().enumerate() {
            prop_assert_eq!(doubled[index], original * 2, "index {}", index);
        }
    }

    /// The checked and unchecked doublings agree whenever nothing overflows.
    #[test]
    fn prop_try_double_agrees_with_double(elements in prop::collection::vec(doublable(), 0..100)) {
        let mut checked = elements.clone();
        let mut unchecked = elements;

        prop_assert_eq!(try_double_in_place(&mut checked), Ok(()));
        double_in_place(&mut unchecked);
        prop_assert_eq!(checked, unchecked);
    }

    /// An overflowing element is reported at its index and nothing is written.
    #[test]
    fn prop_try_double_is_all_or_nothing(
        prefix in prop::collection::vec(doublable(), 0..20),
        suffix in prop::collection::vec(any::<i32>(), 0..20),
        overflowing in prop_oneof![(i32::MAX / 2 + 1)..=i32::MAX, i32::MIN..(i32::MIN / 2)]
    ) {
        let mut elements = prefix.clone();
        elements.push(overflowing);
        elements.extend(suffix);
        let snapshot = elements.clone();

        let result = try_double_in_place(&mut elements);

        prop_assert_eq!(result, Err(SequenceError::DoublingOverflow { index: prefix.len() }));
        prop_assert_eq!(elements, snapshot);
    }

    /// contains agrees with a literal scan.
    #[test]
    fn prop_contains_is_exact(
        elements in prop::collection::vec("[a-e]{0,3}", 0..20),
        item in "[a-e]{0,3}"
    ) {
        let expected = elements.iter().any(|element| *element == item);
        prop_assert_eq!(contains(&elements, item.as_str()), expected);
    }

    /// Nothing is contained in the empty sequence.
    #[test]
    fn prop_contains_empty_is_false(item in ".*") {
        let empty: Vec<String> = Vec::new();
        prop_assert!(!contains(&empty, item.as_str()));
    }

    /// intersect_sorted equals the ordered set intersection.
    #[test]
    fn prop_intersection_matches_set_model(
        left in prop::collection::vec(-50i32..50, 0..60),
        right in prop::collection::vec(-50i32..50, 0..60)
    ) {
        let result = intersect_sorted(&left, &right);

        let left_set: BTreeSet<i32> = left.iter().copied().collect();
        let right_set: BTreeSet<i32> = right.iter().copied().collect();
        let expected: Vec<i32> = left_set.intersection(&right_set).copied().collect();

        prop_assert_eq!(&result, &expected);
        prop_assert!(result.windows(2).all(|window| window[0] < window[1]));
    }

    /// Intersection is symmetric and does not observe input order.
    #[test]
    fn prop_intersection_is_symmetric(
        left in prop::collection::vec(-20i32..20, 0..40),
        right in prop::collection::vec(-20i32..20, 0..40)
    ) {
        prop_assert_eq!(intersect_sorted(&left, &right), intersect_sorted(&right, &left));
    }

    /// Intersecting a sequence with itself sorts and deduplicates it.
    #[test]
    fn prop_self_intersection_is_sorted_dedup(elements in prop::collection::vec(-30i32..30, 0..60)) {
        let mut expected = elements.clone();
        expected.sort_unstable();
        expected.dedup();

        prop_assert_eq!(intersect_sorted(&elements, &elements), expected);
    }

    /// merge_intersection on pre-sorted input agrees with intersect_sorted.
    #[test]
    fn prop_merge_agrees_on_sorted_input(
        mut left in prop::collection::vec(-30i32..30, 0..60),
        mut right in prop::collection::vec(-30i32..30, 0..60)
    ) {
        left.sort_unstable();
        right.sort_unstable();

        prop_assert_eq!(merge_intersection(&left, &right), intersect_sorted(&left, &right));
    }
}
