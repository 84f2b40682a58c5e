//! Slice primitives.
//!
//! This module provides the building blocks the other modules are written
//! in terms of:
//!
//! - **Access**: [`head`], [`last`], [`nth`], [`initial`], [`tail`] and the
//!   index searches ([`index_of`], [`find_index`], ...)
//! - **Views**: [`take`], [`drop`], [`slice`] and their `right`/`while`
//!   variants, plus [`chunk`]
//! - **In-place mutation**: [`fill`], [`reverse`], [`pull`], [`pull_at`],
//!   [`remove`]
//! - **Combination**: [`compact`], [`concat`], [`join`], [`from_pairs`],
//!   [`zip`]
//! - **Nesting**: [`Nested`], [`Depth`], [`flatten`], [`flatten_depth`],
//!   [`flatten_deep`] and the [`nested!`](crate::nested) macro
//!
//! Views borrow from their input and never allocate. Operations that build
//! new content clone the elements they keep.
//!
//! # Laws
//!
//! ```text
//! concat(take(s, n), drop(s, n)) == s
//! concat_slices(chunk(s, k)) == s          (k > 0)
//! reverse(reverse(s)) == s
//! flatten_deep(flat) == flat               (for a sequence of scalars)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use rudash::sequence::{chunk, drop, take};
//!
//! let letters = ["a", "b", "c", "d"];
//! assert_eq!(chunk(&letters, 2), vec![vec!["a", "b"], vec!["c", "d"]]);
//!
//! let mut rebuilt = take(&letters, 1).to_vec();
//! rebuilt.extend_from_slice(drop(&letters, 1));
//! assert_eq!(rebuilt, letters);
//! ```

mod access;
mod combine;
mod mutation;
mod nested;
mod slicing;

pub use access::{
    find_index, find_index_with, find_last_index, find_last_index_with, first, head, index_of,
    initial, last, last_index_of, nth, tail,
};
pub use combine::{compact, concat, concat_slices, from_pairs, join, zip, zip_with};
pub use mutation::{fill, fill_in_range, pull, pull_all, pull_all_with, pull_at, remove, reverse};
pub use nested::{Depth, Nested, flatten, flatten_deep, flatten_depth};
pub use slicing::{
    chunk, drop, drop_right, drop_right_while, drop_while, slice, take, take_right,
    take_right_while, take_while,
};
