//! Stateless utilities over in-memory sequences.
//!
//! Every operation here is either a pure function returning a new `Vec` or a
//! single-pass mutator over a caller-owned slice. Nothing allocates behind the
//! caller's back except the returned vectors and the working copies
//! [`intersect_sorted`] sorts.
//!
//! # Overview
//!
//! | Operation               | Input             | Effect                         | Complexity   |
//! |-------------------------|-------------------|--------------------------------|--------------|
//! | [`duplicate`]           | `&[T]`            | returns a new `Vec<T>`         | O(n)         |
//! | [`sort_ascending`]      | `&mut [T]`        | sorts in place                 | O(n log n)   |
//! | [`double_in_place`]     | `&mut [T]`        | `x ↦ x * 2` in place           | O(n)         |
//! | [`contains`]            | `&[T]`, `&Q`      | linear membership test         | O(n)         |
//! | [`intersect_sorted`]    | `&[T]`, `&[T]`    | returns sorted distinct common | O(n log n)   |
//!
//! # Examples
//!
//! ```rust
//! use seqkit::sequence::{contains, double_in_place, duplicate, sort_ascending};
//!
//! let original = vec![3, -1, 2];
//! let mut working = duplicate(&original);
//!
//! sort_ascending(&mut working);
//! double_in_place(&mut working);
//!
//! assert_eq!(working, vec![-2, 4, 6]);
//! assert_eq!(original, vec![3, -1, 2]);
//!
//! let names = vec![String::from("One"), String::from("Three")];
//! assert!(contains(&names, "Three"));
//! assert!(!contains(&names, "Two"));
//! ```
//!
//! # Concurrency
//!
//! No operation holds state between calls. The in-place operations take
//! `&mut [T]`, so the borrow checker already rules out concurrent readers of a
//! sequence while it is being mutated.

#[cfg(feature = "copy")]
mod copy;
#[cfg(feature = "search")]
mod search;
#[cfg(feature = "set-ops")]
mod set_ops;
#[cfg(feature = "sort")]
mod sort;
#[cfg(feature = "transform")]
mod transform;

#[cfg(feature = "copy")]
pub use copy::duplicate;
#[cfg(feature = "search")]
pub use search::contains;
#[cfg(feature = "set-ops")]
pub use set_ops::{intersect_sorted, merge_intersection};
#[cfg(feature = "sort")]
pub use sort::{is_sorted_ascending, sort_ascending};
#[cfg(feature = "transform")]
pub use transform::{Doubling, double_in_place, for_each_in_place, try_double_in_place};
