//! Set-like operations over slices.
//!
//! Slices are treated as ordered multisets. Every operation returns a new
//! `Vec` and keeps the order of first appearance, so results are
//! deterministic regardless of the hasher in use.
//!
//! Each operation comes in up to three flavors:
//!
//! - plain, using `Eq + Hash` (or `PartialEq`) on the elements
//! - `_by`, comparing the keys an iteratee derives, called once per element
//! - `_with`, using an arbitrary comparison closure
//!
//! # Laws
//!
//! ```text
//! uniq(uniq(s)) == uniq(s)
//! union([s]) == uniq(s)
//! difference(s, []) == s
//! intersection(s, []) == []
//! xor([s, s]) == []
//! ```
//!
//! # Examples
//!
//! ```rust
//! use rudash::set::{difference, intersection, union, uniq, xor};
//!
//! assert_eq!(uniq(&[1, 2, 1]), vec![1, 2]);
//! assert_eq!(union(&[&[2][..], &[1, 2]]), vec![2, 1]);
//! assert_eq!(intersection(&[2, 1], &[2, 3]), vec![2]);
//! assert_eq!(difference(&[2, 1], &[2, 3]), vec![1]);
//! assert_eq!(xor(&[&[2, 1][..], &[2, 3]]), vec![1, 3]);
//! ```

mod relation;
mod uniq;
mod xor;

pub use relation::{
    difference, difference_by, difference_with, intersection, intersection_by, intersection_with,
    without,
};
pub use uniq::{union, union_by, union_with, uniq, uniq_by, uniq_with};
pub use xor::{xor, xor_by, xor_with};
