//! In-place element transforms.
//!
//! [`for_each_in_place`] is the general form; [`double_in_place`] and
//! [`try_double_in_place`] are the doubling transform built on top of it.

use crate::error::SequenceError;

/// Integer types whose values can be doubled.
///
/// Implemented for every primitive signed and unsigned integer type.
pub trait Doubling: Copy {
    /// Returns `self * 2` with the ordinary arithmetic overflow behaviour of
    /// the type (panics in debug builds, wraps in release builds).
    fn doubled(self) -> Self;

    /// Returns `self * 2`, or `None` if the result does not fit in `Self`.
    fn checked_doubled(self) -> Option<Self>;
}

macro_rules! impl_doubling {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Doubling for $integer {
                #[inline]
                fn doubled(self) -> Self {
                    self * 2
                }

                #[inline]
                fn checked_doubled(self) -> Option<Self> {
                    self.checked_mul(2)
                }
            }
        )*
    };
}

impl_doubling!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Applies `function` to every element of `sequence`, front to back.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::for_each_in_place;
///
/// let mut values = vec![1, 2, 3];
/// for_each_in_place(&mut values, |value| *value += 10);
/// assert_eq!(values, vec![11, 12, 13]);
/// ```
#[inline]
pub fn for_each_in_place<T, F>(sequence: &mut [T], function: F)
where
    F: FnMut(&mut T),
{
    sequence.iter_mut().for_each(function);
}

/// Doubles every element of `sequence` in place.
///
/// Order and length are preserved; zero stays zero and negative values stay
/// negative.
///
/// # Panics
///
/// In debug builds, panics if doubling an element overflows its type, like
/// the `*` operator. Use [`try_double_in_place`] to detect overflow instead.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::double_in_place;
///
/// let mut values = vec![0, -3, 21];
/// double_in_place(&mut values);
/// assert_eq!(values, vec![0, -6, 42]);
/// ```
#[inline]
pub fn double_in_place<T: Doubling>(sequence: &mut [T]) {
    for_each_in_place(sequence, |value| *value = value.doubled());
}

/// Doubles every element of `sequence` in place, or reports overflow.
///
/// All elements are checked before any is written. On overflow the sequence
/// is left exactly as it was.
///
/// # Errors
///
/// Returns [`SequenceError::DoublingOverflow`] with the index of the first
/// element whose doubled value does not fit in `T`.
///
/// # Examples
///
/// ```rust
/// use seqkit::SequenceError;
/// use seqkit::sequence::try_double_in_place;
///
/// let mut values = vec![1_i8, 100, 2];
/// assert_eq!(
///     try_double_in_place(&mut values),
///     Err(SequenceError::DoublingOverflow { index: 1 })
/// );
/// assert_eq!(values, vec![1, 100, 2]);
/// ```
pub fn try_double_in_place<T: Doubling>(sequence: &mut [T]) -> Result<(), SequenceError> {
    if let Some(index) = sequence
        .iter()
        .position(|value| value.checked_doubled().is_none())
    {
        tracing::debug!(index, length = sequence.len(), "rejected doubling: overflow");
        return Err(SequenceError::DoublingOverflow { index });
    }

    double_in_place(sequence);
    Ok(())
}
