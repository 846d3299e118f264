//! Sequence duplication.

/// Returns a new `Vec` holding the same elements as `source`, in the same order.
///
/// `source` is only borrowed, so it is observably unchanged. An empty input
/// yields an empty vector.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::duplicate;
///
/// let original = vec![1, 4, -6, 3];
/// let copy = duplicate(&original);
///
/// assert_eq!(copy, original);
/// assert_eq!(copy.len(), 4);
/// ```
#[inline]
pub fn duplicate<T: Clone>(source: &[T]) -> Vec<T> {
    source.to_vec()
}
