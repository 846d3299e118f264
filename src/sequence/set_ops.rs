//! Sorted set intersection over unsorted sequences.
//!
//! [`intersect_sorted`] sorts working copies of both inputs and hands them to
//! [`merge_intersection`], a two-cursor merge scan. Duplicates on either side
//! collapse to a single output element, so the result is always strictly
//! ascending.
//!
//! # Time Complexity
//!
//! | Operation              | Cost                           |
//! |------------------------|--------------------------------|
//! | `intersect_sorted`     | O(n log n + m log m)           |
//! | `merge_intersection`   | O(n + m)                       |

use std::cmp::Ordering;

use super::copy::duplicate;
use super::sort::{is_sorted_ascending, sort_ascending};

/// Returns the distinct values present in both `left` and `right`, ascending.
///
/// Neither input needs to be sorted and neither is modified; the function
/// sorts owned copies. The output is strictly ascending and contains a value
/// exactly when it appears at least once on each side.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::intersect_sorted;
///
/// let left = vec![10, 9, 8, 7, 6, 5, 5, 4, 3, 2, 1, 0];
/// let right = vec![10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 0];
///
/// let common = intersect_sorted(&left, &right);
/// assert_eq!(common, (0..=10).collect::<Vec<_>>());
///
/// assert!(intersect_sorted(&[], &right).is_empty());
/// ```
#[tracing::instrument(
    level = "trace",
    skip_all,
    fields(left_length = left.len(), right_length = right.len())
)]
pub fn intersect_sorted<T: Ord + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    if left.is_empty() || right.is_empty() {
        return Vec::new();
    }

    let mut left_sorted = duplicate(left);
    let mut right_sorted = duplicate(right);
    sort_ascending(&mut left_sorted);
    sort_ascending(&mut right_sorted);

    merge_intersection(&left_sorted, &right_sorted)
}

/// Merges two ascending sequences into their strictly ascending intersection.
///
/// Both inputs must already be sorted ascending; duplicates are allowed. When
/// the cursors meet equal values the value is emitted once and both cursors
/// skip every remaining occurrence of it. Otherwise the cursor at the smaller
/// value advances. The scan ends when either side is exhausted.
///
/// Unsorted input is a caller bug: debug builds assert on it, release builds
/// return an unspecified subset of the common values.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::merge_intersection;
///
/// let left = [1, 2, 2, 2, 3, 5];
/// let right = [2, 2, 3, 4, 5, 5];
/// assert_eq!(merge_intersection(&left, &right), vec![2, 3, 5]);
/// ```
pub fn merge_intersection<T: Ord + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    debug_assert!(is_sorted_ascending(left), "{UNSORTED_INPUT_MESSAGE}");
    debug_assert!(is_sorted_ascending(right), "{UNSORTED_INPUT_MESSAGE}");

    let (Some(left_first), Some(left_last), Some(right_first), Some(right_last)) =
        (left.first(), left.last(), right.first(), right.last())
    else {
        return Vec::new();
    };

    // Value ranges do not overlap.
    if left_last < right_first || right_last < left_first {
        tracing::trace!("disjoint value ranges");
        return Vec::new();
    }

    let mut result = Vec::with_capacity(left.len().min(right.len()));
    let mut left_index = 0;
    let mut right_index = 0;

    while left_index < left.len() && right_index < right.len() {
        let left_value = &left[left_index];
        let right_value = &right[right_index];

        match left_value.cmp(right_value) {
            Ordering::Less => {
                left_index += 1;
            }
            Ordering::Greater => {
                right_index += 1;
            }
            Ordering::Equal => {
                result.push(left_value.clone());
                left_index = skip_run(left, left_index);
                right_index = skip_run(right, right_index);
            }
        }
    }

    tracing::trace!(output_length = result.len(), "merged intersection");
    result
}

/// Returns the index just past the run of elements equal to `sorted[start]`.
#[inline]
fn skip_run<T: Ord>(sorted: &[T], start: usize) -> usize {
    let value = &sorted[start];
    start + sorted[start..].partition_point(|element| element == value)
}

const UNSORTED_INPUT_MESSAGE: &str = "merge_intersection requires inputs sorted ascending";
