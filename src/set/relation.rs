//! Intersection, difference and exclusion.
//!
//! The result always follows the order and multiplicity of the first slice:
//! duplicates there are kept unless the caller deduplicates first.

use crate::sequence::index_of;

/// Returns the elements of `first` that also occur in `second`.
///
/// # Examples
///
/// ```rust
/// use rudash::set::intersection;
///
/// assert_eq!(intersection(&[2, 1, 2], &[2, 3]), vec![2, 2]);
/// ```
pub fn intersection<T>(first: &[T], second: &[T]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    first
        .iter()
        .filter(|item| second.contains(item))
        .cloned()
        .collect()
}

/// Like [`intersection`], but elements match when `iteratee` derives equal
/// keys from them. The iteratee runs once per element of each slice.
///
/// # Examples
///
/// ```rust
/// use rudash::set::intersection_by;
///
/// let floored = |value: &f64| value.floor() as i64;
/// assert_eq!(intersection_by(&[2.1, 1.2], &[2.3, 3.4], floored), vec![2.1]);
/// ```
pub fn intersection_by<T, K, F>(first: &[T], second: &[T], mut iteratee: F) -> Vec<T>
where
    T: Clone,
    K: PartialEq,
    F: FnMut(&T) -> K,
{
    let second_keys: Vec<K> = second.iter().map(&mut iteratee).collect();
    first
        .iter()
        .filter(|item| second_keys.contains(&iteratee(*item)))
        .cloned()
        .collect()
}

/// Like [`intersection`], but elements match when `comparison` accepts
/// `(item, other)`.
///
/// # Examples
///
/// ```rust
/// use rudash::set::intersection_with;
///
/// let objects = [(1, 2), (2, 1)];
/// let others = [(1, 1), (1, 2)];
/// assert_eq!(intersection_with(&objects, &others, |left, right| left == right), vec![(1, 2)]);
/// ```
pub fn intersection_with<T, C>(first: &[T], second: &[T], mut comparison: C) -> Vec<T>
where
    T: Clone,
    C: FnMut(&T, &T) -> bool,
{
    first
        .iter()
        .filter(|item| second.iter().any(|other| comparison(*item, other)))
        .cloned()
        .collect()
}

/// Returns the elements of `items` that do not occur in `others`.
///
/// # Examples
///
/// ```rust
/// use rudash::set::difference;
///
/// assert_eq!(difference(&["a", "b", "c", "d"], &["a", "c", "e", "f"]), vec!["b", "d"]);
/// ```
pub fn difference<T>(items: &[T], others: &[T]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    items
        .iter()
        .filter(|item| index_of(others, *item).is_none())
        .cloned()
        .collect()
}

/// Like [`difference`], but elements match when `iteratee` derives equal
/// keys from them.
///
/// # Examples
///
/// ```rust
/// use rudash::set::difference_by;
///
/// let floored = |value: &f64| value.floor() as i64;
/// assert_eq!(difference_by(&[2.1, 1.2], &[2.3, 3.4], floored), vec![1.2]);
/// ```
pub fn difference_by<T, K, F>(items: &[T], others: &[T], mut iteratee: F) -> Vec<T>
where
    T: Clone,
    K: PartialEq,
    F: FnMut(&T) -> K,
{
    let other_keys: Vec<K> = others.iter().map(&mut iteratee).collect();
    items
        .iter()
        .filter(|item| !other_keys.contains(&iteratee(*item)))
        .cloned()
        .collect()
}

/// Like [`difference`], but elements match when `comparison` accepts
/// `(item, other)`.
pub fn difference_with<T, C>(items: &[T], others: &[T], mut comparison: C) -> Vec<T>
where
    T: Clone,
    C: FnMut(&T, &T) -> bool,
{
    items
        .iter()
        .filter(|item| !others.iter().any(|other| comparison(*item, other)))
        .cloned()
        .collect()
}

/// Returns a copy of `items` without any of `values`.
///
/// # Examples
///
/// ```rust
/// use rudash::set::without;
///
/// assert_eq!(without(&[2, 1, 2, 3], &[1, 2]), vec![3]);
/// ```
pub fn without<T>(items: &[T], values: &[T]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    difference(items, values)
}
