//! Linear membership search.

use std::borrow::Borrow;

/// Returns `true` if some element of `sequence` equals `item`.
///
/// Scans front to back and stops at the first match. No ordering is assumed,
/// so this is O(n) even for sorted input. An empty sequence contains nothing.
///
/// `item` may be a borrowed form of the element type, so a `Vec<String>` can
/// be searched with a `&str`.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::contains;
///
/// let names = vec![String::from("One"), String::from("Three"), String::from("Four")];
///
/// assert!(contains(&names, "One"));
/// assert!(!contains(&names, "Two"));
/// assert!(!contains::<String, str>(&[], "one"));
/// ```
#[inline]
pub fn contains<T, Q>(sequence: &[T], item: &Q) -> bool
where
    T: Borrow<Q>,
    Q: PartialEq + ?Sized,
{
    sequence.iter().any(|element| element.borrow() == item)
}
