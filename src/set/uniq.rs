//! Deduplication and union.

use std::hash::Hash;

use crate::hash::set_with_capacity;
use crate::sequence::concat_slices;

/// Returns the elements of `items` without duplicates, keeping the first
/// occurrence of each.
///
/// # Examples
///
/// ```rust
/// use rudash::set::uniq;
///
/// assert_eq!(uniq(&[2, 1, 2, 3, 1]), vec![2, 1, 3]);
/// ```
pub fn uniq<T>(items: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = set_with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

/// Like [`uniq`], but two elements are duplicates when `iteratee` derives
/// the same key from them. The first element producing a key is kept.
///
/// # Examples
///
/// ```rust
/// use rudash::set::uniq_by;
///
/// assert_eq!(uniq_by(&[2.1, 1.2, 2.3], |value: &f64| value.floor() as i64), vec![2.1, 1.2]);
/// ```
pub fn uniq_by<T, K, F>(items: &[T], mut iteratee: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut seen = set_with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(iteratee(*item)))
        .cloned()
        .collect()
}

/// Like [`uniq`], but duplicates are judged by `comparison`, which receives
/// `(candidate, kept)`. Each candidate is compared against every element kept
/// so far, so this runs in O(n²).
///
/// # Examples
///
/// ```rust
/// use rudash::set::uniq_with;
///
/// let close = |left: &f64, right: &f64| (left - right).abs() < 0.5;
/// assert_eq!(uniq_with(&[1.0, 1.2, 3.0, 2.9], close), vec![1.0, 3.0]);
/// ```
pub fn uniq_with<T, C>(items: &[T], mut comparison: C) -> Vec<T>
where
    T: Clone,
    C: FnMut(&T, &T) -> bool,
{
    let mut result: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        if !result.iter().any(|kept| comparison(item, kept)) {
            result.push(item.clone());
        }
    }
    result
}

/// Returns the unique elements of all slices, in order of first occurrence.
///
/// # Examples
///
/// ```rust
/// use rudash::set::union;
///
/// assert_eq!(union(&[&[2][..], &[1, 2]]), vec![2, 1]);
/// ```
pub fn union<T>(slices: &[&[T]]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    uniq(&concat_slices(slices))
}

/// Like [`union`], with uniqueness decided by the key `iteratee` derives.
///
/// # Examples
///
/// ```rust
/// use rudash::set::union_by;
///
/// let merged = union_by(&[&[2.1][..], &[1.2, 2.3]], |value: &f64| value.floor() as i64);
/// assert_eq!(merged, vec![2.1, 1.2]);
/// ```
pub fn union_by<T, K, F>(slices: &[&[T]], iteratee: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    uniq_by(&concat_slices(slices), iteratee)
}

/// Like [`union`], with uniqueness decided by `comparison`.
pub fn union_with<T, C>(slices: &[&[T]], comparison: C) -> Vec<T>
where
    T: Clone,
    C: FnMut(&T, &T) -> bool,
{
    uniq_with(&concat_slices(slices), comparison)
}
