//! In-place ascending sort.

/// Sorts `sequence` into non-decreasing order in place.
///
/// Uses the standard unstable sort, so equal elements may be reordered
/// relative to each other. No second buffer is allocated and the length is
/// unchanged.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::sort_ascending;
///
/// let mut values = vec![10, -9, 8, -7, 0];
/// sort_ascending(&mut values);
/// assert_eq!(values, vec![-9, -7, 0, 8, 10]);
/// ```
#[inline]
pub fn sort_ascending<T: Ord>(sequence: &mut [T]) {
    sequence.sort_unstable();
}

/// Returns `true` if every element is less than or equal to its successor.
///
/// Empty and single-element sequences are sorted.
///
/// ```rust
/// use seqkit::sequence::is_sorted_ascending;
///
/// assert!(is_sorted_ascending(&[1, 1, 2]));
/// assert!(!is_sorted_ascending(&[2, 1]));
/// ```
#[inline]
pub fn is_sorted_ascending<T: Ord>(sequence: &[T]) -> bool {
    sequence.is_sorted()
}
