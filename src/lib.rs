//! # seqkit
//!
//! Generic sequence utilities built on the standard slice and iterator
//! primitives.
//!
//! ## Overview
//!
//! The crate is a thin, stateless layer over `Vec`/slice operations. It
//! includes:
//!
//! - **Copy**: [`duplicate`](sequence::duplicate) a sequence into a new `Vec`
//! - **Sort**: [`sort_ascending`](sequence::sort_ascending) in place
//! - **Transform**: [`double_in_place`](sequence::double_in_place) and friends
//! - **Search**: linear membership test with [`contains`](sequence::contains)
//! - **Set operations**: [`intersect_sorted`](sequence::intersect_sorted),
//!   the sorted, deduplicated intersection of two unsorted sequences
//!
//! ## Feature Flags
//!
//! - `copy`: Sequence duplication
//! - `sort`: In-place ascending sort and sortedness check
//! - `transform`: In-place element transforms (doubling, for-each)
//! - `search`: Linear membership search
//! - `set-ops`: Sorted intersection (implies `copy` and `sort`)
//! - `full`: Enable all features (default)
//!
//! ## Example
//!
//! ```rust
//! use seqkit::prelude::*;
//!
//! let evens = vec![18, 2, 4, 6, 8, 10, 12, 14, 16];
//! let mixed = vec![6, 1, 3, 4, 18, 7, 8, 9, 10, 2];
//!
//! assert_eq!(intersect_sorted(&mixed, &evens), vec![2, 4, 6, 8, 10, 18]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every enabled sequence operation and the error type.
///
/// # Usage
///
/// ```rust
/// use seqkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::SequenceError;
    pub use crate::sequence::*;
}

pub mod error;
pub mod sequence;

pub use error::SequenceError;
