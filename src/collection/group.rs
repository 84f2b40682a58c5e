//! Keyed aggregation and ordering.

use std::cmp::Ordering;
use std::hash::Hash;

use crate::hash::{HashMap, new_map};

/// Groups the elements by the key `iteratee` derives from each of them.
///
/// Within a group the elements keep their input order.
///
/// # Examples
///
/// ```rust
/// use rudash::collection::group_by;
///
/// let groups = group_by(&[6.1, 4.2, 6.3], |value: &f64| value.floor() as i64);
/// assert_eq!(groups[&6], vec![6.1, 6.3]);
/// assert_eq!(groups[&4], vec![4.2]);
/// ```
pub fn group_by<T, K, F>(items: &[T], mut iteratee: F) -> HashMap<K, Vec<T>>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    items.iter().fold(new_map(), |mut groups, item| {
        groups
            .entry(iteratee(item))
            .or_insert_with(Vec::new)
            .push(item.clone());
        groups
    })
}

/// Counts the elements per key `iteratee` derives.
///
/// # Examples
///
/// ```rust
/// use rudash::collection::count_by;
///
/// let counts = count_by(&["one", "two", "three"], |word| word.len());
/// assert_eq!(counts[&3], 2);
/// assert_eq!(counts[&5], 1);
/// ```
pub fn count_by<T, K, F>(items: &[T], mut iteratee: F) -> HashMap<K, usize>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    items.iter().fold(new_map(), |mut counts, item| {
        *counts.entry(iteratee(item)).or_insert(0) += 1;
        counts
    })
}

/// Returns a copy of `items` sorted ascending by the key `iteratee` derives.
///
/// The sort is stable: equal keys keep their input order. An element never
/// moves past one whose key it cannot be compared with, so incomparable keys
/// (such as `f64::NAN`) keep their input position relative to their
/// neighbors. The iteratee runs once per element; the sort itself is an
/// insertion sort, O(n²) in the worst case.
///
/// # Examples
///
/// ```rust
/// use rudash::collection::sort_by;
///
/// let users = [("fred", 48), ("barney", 36), ("fred", 40), ("barney", 34)];
/// assert_eq!(
///     sort_by(&users, |user| user.0),
///     vec![("barney", 36), ("barney", 34), ("fred", 48), ("fred", 40)]
/// );
/// ```
pub fn sort_by<T, K, F>(items: &[T], mut iteratee: F) -> Vec<T>
where
    T: Clone,
    K: PartialOrd,
    F: FnMut(&T) -> K,
{
    let mut sorted: Vec<(K, &T)> = Vec::with_capacity(items.len());
    for item in items {
        let key = iteratee(item);
        let mut position = sorted.len();
        while position > 0 && sorted[position - 1].0.partial_cmp(&key) == Some(Ordering::Greater) {
            position -= 1;
        }
        sorted.insert(position, (key, item));
    }
    sorted.into_iter().map(|(_, item)| item.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_group_by_empty() {
        assert!(group_by(&[] as &[i32], |value| *value).is_empty());
    }

    #[rstest]
    fn test_group_by_parity_keeps_order() {
        let groups = group_by(&[3, 8, 5, 2, 1], |value| value % 2 == 0);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[&true], vec![8, 2]);
        assert_eq!(groups[&false], vec![3, 5, 1]);
    }

    #[rstest]
    fn test_count_by_totals_match_length() {
        let items = ["a", "bb", "c", "dd", "eee"];
        let counts = count_by(&items, |word| word.len());
        assert_eq!(counts.values().sum::<usize>(), items.len());
        assert_eq!(counts[&1], 2);
        assert_eq!(counts[&2], 2);
        assert_eq!(counts[&3], 1);
    }

    #[rstest]
    #[case(vec![3.0, 1.0, 2.0], vec![1.0, 2.0, 3.0])]
    #[case(vec![], vec![])]
    #[case(vec![2.0, 1.0, 2.0], vec![1.0, 2.0, 2.0])]
    fn test_sort_by_float_key(#[case] items: Vec<f64>, #[case] expected: Vec<f64>) {
        assert_eq!(sort_by(&items, |value| *value), expected);
    }

    #[rstest]
    fn test_sort_by_is_stable() {
        let items = [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
        assert_eq!(
            sort_by(&items, |item| item.0),
            vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]
        );
    }

    #[rstest]
    fn test_sort_by_does_not_touch_input() {
        let items = vec!["b", "a"];
        let sorted = sort_by(&items, |item| *item);
        assert_eq!(sorted, vec!["a", "b"]);
        assert_eq!(items, vec!["b", "a"]);
    }

    #[rstest]
    fn test_sort_by_iteratee_runs_once_per_element() {
        let mut calls = 0;
        sort_by(&[5, 3, 4, 1, 2], |value| {
            calls += 1;
            *value
        });
        assert_eq!(calls, 5);
    }

    #[rstest]
    fn test_sort_by_nan_blocks_movement() {
        let sorted = sort_by(&[2.0, f64::NAN, 1.0, 0.5], |value| *value);
        assert_eq!(sorted[0], 2.0);
        assert!(sorted[1].is_nan());
        assert_eq!(&sorted[2..], &[0.5, 1.0]);
    }
}
