//! Hash container aliases used throughout the crate.
//!
//! Functions that need a hash table (`uniq`, `group_by`, `count_by`,
//! `from_pairs`, ...) build it through the aliases in this module, so the
//! hashing algorithm is chosen once at build time:
//!
//! - default: the standard library's SipHash (`RandomState`)
//! - `fxhash`: `rustc-hash`'s `FxBuildHasher`
//! - `ahash`: `ahash::RandomState`
//!
//! When both `fxhash` and `ahash` are enabled, `fxhash` wins.
//!
//! # Examples
//!
//! ```rust
//! use rudash::hash::{HashMap, new_map};
//!
//! let mut counts: HashMap<&str, usize> = new_map();
//! *counts.entry("a").or_insert(0) += 1;
//! assert_eq!(counts.get("a"), Some(&1));
//! ```

#[cfg(feature = "fxhash")]
/// The hasher builder selected for this build.
pub type BuildHasher = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
/// The hasher builder selected for this build.
pub type BuildHasher = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
/// The hasher builder selected for this build.
pub type BuildHasher = std::collections::hash_map::RandomState;

/// A `HashMap` using the crate-wide hasher.
pub type HashMap<K, V> = std::collections::HashMap<K, V, BuildHasher>;

/// A `HashSet` using the crate-wide hasher.
pub type HashSet<T> = std::collections::HashSet<T, BuildHasher>;

/// Creates an empty [`HashMap`] with the crate-wide hasher.
#[inline]
pub fn new_map<K, V>() -> HashMap<K, V> {
    HashMap::with_hasher(BuildHasher::default())
}

/// Creates an empty [`HashSet`] with the crate-wide hasher.
#[inline]
pub fn new_set<T>() -> HashSet<T> {
    HashSet::with_hasher(BuildHasher::default())
}

/// Creates an empty [`HashSet`] able to hold `capacity` elements without
/// reallocating.
#[inline]
pub fn set_with_capacity<T>(capacity: usize) -> HashSet<T> {
    HashSet::with_capacity_and_hasher(capacity, BuildHasher::default())
}
