//! Error types for sequence operations.
//!
//! The plain operations in [`crate::sequence`] are infallible for every
//! well-typed input. Only the checked variants report failures, through
//! [`SequenceError`].

use thiserror::Error;

/// Errors reported by the checked sequence operations.
///
/// # Examples
///
/// ```rust
/// use seqkit::SequenceError;
///
/// let error = SequenceError::DoublingOverflow { index: 3 };
/// assert_eq!(
///     format!("{error}"),
///     "doubling the element at index 3 overflows its integer type"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// Doubling the element at `index` does not fit in the element type.
    #[error("doubling the element at index {index} overflows its integer type")]
    DoublingOverflow {
        /// Position of the first element whose doubled value overflows.
        index: usize,
    },
}

static_assertions::assert_impl_all!(SequenceError: Send, Sync, Clone, std::error::Error);
