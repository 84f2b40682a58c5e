//! Building new sequences and mappings out of existing ones.

use std::fmt::Display;
use std::hash::Hash;

use crate::hash::{HashMap, new_map};

/// Removes the zero-like values, i.e. every element equal to
/// `T::default()`: `None`, `false`, `0`, `""`.
///
/// # Examples
///
/// ```rust
/// use rudash::sequence::compact;
///
/// assert_eq!(compact(&[0, 1, 0, 2]), vec![1, 2]);
/// assert_eq!(compact(&["", "a", ""]), vec!["a"]);
/// assert_eq!(compact(&[Some(1), None, Some(0)]), vec![Some(1), Some(0)]);
/// ```
pub fn compact<T: Clone + Default + PartialEq>(items: &[T]) -> Vec<T> {
    let zero = T::default();
    items.iter().filter(|item| **item != zero).cloned().collect()
}

/// Creates a new vector holding `items` followed by `more`.
///
/// # Examples
///
/// ```rust
/// use rudash::sequence::concat;
///
/// assert_eq!(concat(&[1, 2], &[3]), vec![1, 2, 3]);
/// ```
pub fn concat<T: Clone>(items: &[T], more: &[T]) -> Vec<T> {
    let mut result = Vec::with_capacity(items.len() + more.len());
    result.extend_from_slice(items);
    result.extend_from_slice(more);
    result
}

/// Concatenates every slice in order.
///
/// # Examples
///
/// ```rust
/// use rudash::sequence::concat_slices;
///
/// assert_eq!(concat_slices(&[&[1][..], &[2, 3], &[]]), vec![1, 2, 3]);
/// ```
pub fn concat_slices<T: Clone>(slices: &[&[T]]) -> Vec<T> {
    slices.concat()
}

/// Converts every element to a string and joins them with `separator`.
///
/// # Examples
///
/// ```rust
/// use rudash::sequence::join;
///
/// assert_eq!(join(&['a', 'b', 'c'], "~"), "a~b~c");
/// assert_eq!(join::<i32>(&[], ","), "");
/// ```
pub fn join<T: Display>(items: &[T], separator: &str) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

/// Builds a mapping out of key-value pairs. When a key repeats, the last
/// pair wins.
///
/// # Examples
///
/// ```rust
/// use rudash::sequence::from_pairs;
///
/// let mapping = from_pairs([("a", 1), ("b", 2), ("a", 3)]);
/// assert_eq!(mapping.len(), 2);
/// assert_eq!(mapping["a"], 3);
/// ```
pub fn from_pairs<K, V, I>(pairs: I) -> HashMap<K, V>
where
    K: Eq + Hash,
    I: IntoIterator<Item = (K, V)>,
{
    let mut result = new_map();
    result.extend(pairs);
    result
}

/// Groups the elements at the same position of every slice. Slices shorter
/// than the longest one contribute `None`.
///
/// # Examples
///
/// ```rust
/// use rudash::sequence::zip;
///
/// let zipped = zip(&[&[1, 2][..], &[10]]);
/// assert_eq!(zipped, vec![vec![Some(1), Some(10)], vec![Some(2), None]]);
/// ```
pub fn zip<T: Clone>(slices: &[&[T]]) -> Vec<Vec<Option<T>>> {
    let longest = slices.iter().map(|slice| slice.len()).max().unwrap_or(0);
    (0..longest)
        .map(|index| {
            slices
                .iter()
                .map(|slice| slice.get(index).cloned())
                .collect()
        })
        .collect()
}

/// Like [`zip`], but combines every group with `iteratee`.
///
/// # Examples
///
/// ```rust
/// use rudash::sequence::zip_with;
///
/// let sums = zip_with(&[&[1, 2][..], &[10, 20], &[100]], |group| {
///     group.iter().flatten().sum::<i32>()
/// });
/// assert_eq!(sums, vec![111, 22]);
/// ```
pub fn zip_with<T, U, F>(slices: &[&[T]], mut iteratee: F) -> Vec<U>
where
    T: Clone,
    F: FnMut(&[Option<T>]) -> U,
{
    zip(slices).iter().map(|group| iteratee(group)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_compact_booleans() {
        assert_eq!(compact(&[true, false, true]), vec![true, true]);
    }

    #[rstest]
    fn test_compact_does_not_recurse() {
        let nested = vec![vec![0], vec![], vec![1]];
        assert_eq!(compact(&nested), vec![vec![0], vec![1]]);
    }

    #[rstest]
    fn test_zip_of_nothing() {
        assert!(zip::<i32>(&[]).is_empty());
    }

    #[rstest]
    fn test_from_pairs_empty() {
        let mapping = from_pairs(Vec::<(i32, i32)>::new());
        assert!(mapping.is_empty());
    }

    #[rstest]
    fn test_join_single() {
        assert_eq!(join(&[42], ", "), "42");
    }
}
