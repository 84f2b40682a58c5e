//! # rudash
//!
//! Slice, collection and string utilities in the spirit of lodash.
//!
//! ## Overview
//!
//! Every function is a stateless, synchronous transformation over borrowed
//! input. The library is organized by topic:
//!
//! - **Sequence**: chunking, slicing views, in-place mutation, zipping and
//!   flattening of [`Nested`](sequence::Nested) sequences
//! - **Set**: `uniq`, `union`, `intersection`, `difference`, `xor`, each with
//!   `_by` (iteratee key) and `_with` (custom comparison) variants
//! - **Collection**: `map`/`filter`/`reduce`, searching, grouping, sorting,
//!   flat mapping and seeded random sampling
//! - **String**: case conversion, padding, escaping, trimming and prefix /
//!   suffix predicates
//!
//! Absence is expressed with `Option`; out-of-range indices and lengths are
//! clamped. The only fallible operation compiles a caller-supplied regular
//! expression and returns a [`Result`].
//!
//! ## Feature Flags
//!
//! - `sequence`: slice primitives and nested flattening
//! - `set`: set-style operations (requires `sequence`)
//! - `collection`: collection operations (requires `sequence`)
//! - `random`: `collection::random` sampling (requires `collection`, `rand`)
//! - `string`: string utilities (requires `regex`)
//! - `serde`: `Serialize`/`Deserialize` for `Nested` and `Depth`
//! - `fxhash` / `ahash`: faster hashers for the crate-wide hash containers
//! - `full`: enable all module features and `serde`
//!
//! ## Example
//!
//! ```rust
//! use rudash::prelude::*;
//!
//! assert_eq!(chunk(&["a", "b", "c", "d"], 2), vec![vec!["a", "b"], vec!["c", "d"]]);
//! assert_eq!(xor(&[&[1, 2, 3][..], &[2, 3, 4]]), vec![1, 4]);
//!
//! let groups = group_by(&[6.1, 4.2, 6.3], |value: &f64| value.floor() as i64);
//! assert_eq!(groups[&6], vec![6.1, 6.3]);
//!
//! assert_eq!(pad("ABC", 5), " ABC ");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every function and type of the enabled modules.
///
/// # Usage
///
/// ```rust
/// use rudash::prelude::*;
/// ```
pub mod prelude {
    pub use crate::function::*;

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;

    #[cfg(feature = "set")]
    pub use crate::set::*;

    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "string")]
    pub use crate::string::*;
}

pub mod function;
pub mod hash;

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "set")]
pub mod set;

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "string")]
pub mod string;
