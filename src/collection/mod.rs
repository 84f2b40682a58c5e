//! Functional operations over whole collections.
//!
//! - **Iteration**: [`map`], [`filter`], [`reject`], [`for_each`],
//!   [`for_each_right`], [`every`], [`some`], [`includes`], [`size`]
//! - **Folding**: [`reduce`], [`reduce_with_initial`], [`reduce_right`],
//!   [`reduce_right_with_initial`]
//! - **Searching**: [`find`], [`find_from`], [`find_last`], [`find_last_from`]
//! - **Grouping and ordering**: [`group_by`], [`count_by`], [`sort_by`]
//! - **Flat mapping**: [`flat_map`], [`flat_map_deep`], [`flat_map_depth`]
//! - **Randomness** (feature `random`): [`random::sample`],
//!   [`random::sample_size`], [`random::shuffle`]
//!
//! Iteratees and predicates receive each element by reference and are called
//! at most once per element per call.
//!
//! # Examples
//!
//! ```rust
//! use rudash::collection::{filter, map, reduce};
//!
//! let squares = map(&[1, 2, 3, 4], |value| value * value);
//! let even = filter(&squares, |value| value % 2 == 0);
//! assert_eq!(reduce(&even, |sum, value| sum + value), Some(20));
//! ```

mod flat_map;
mod fold;
mod group;
mod iterate;
mod search;

#[cfg(feature = "random")]
pub mod random;

pub use flat_map::{flat_map, flat_map_deep, flat_map_depth};
pub use fold::{reduce, reduce_right, reduce_right_with_initial, reduce_with_initial};
pub use group::{count_by, group_by, sort_by};
pub use iterate::{every, filter, for_each, for_each_right, includes, map, reject, size, some};
pub use search::{find, find_from, find_last, find_last_from};
