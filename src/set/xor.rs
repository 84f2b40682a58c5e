//! Symmetric difference across any number of slices.
//!
//! The N-ary operation folds a pairwise step over the inputs. Each step
//! deduplicates both sides, keeps the left elements without a match on the
//! right, then appends the right elements that were never matched:
//!
//! ```text
//! xor([1, 2, 3], [2, 3, 4]) == [1, 4]
//! xor(a, b, c) == xor(xor(a, b), c)
//! ```
//!
//! The pairwise step is a linear scan per element, O(n·m).

use std::hash::Hash;

use super::uniq::{uniq, uniq_with};

fn xor_pair<T, M>(left: Vec<T>, mut right: Vec<T>, mut matches: M) -> Vec<T>
where
    M: FnMut(&T, &T) -> bool,
{
    let mut result = Vec::with_capacity(left.len() + right.len());
    for item in left {
        if right.iter().any(|other| matches(&item, other)) {
            right.retain(|other| !matches(&item, other));
        } else {
            result.push(item);
        }
    }
    result.append(&mut right);
    result
}

fn first_per_key<K: PartialEq, T>(keyed: Vec<(K, T)>) -> Vec<(K, T)> {
    let mut result: Vec<(K, T)> = Vec::with_capacity(keyed.len());
    for (key, item) in keyed {
        if !result.iter().any(|(kept, _)| *kept == key) {
            result.push((key, item));
        }
    }
    result
}

/// Returns the symmetric difference of the slices: the values that occur in
/// an odd number of the pairwise folds, in order of appearance.
///
/// No slice gives an empty result; a single slice is returned as a copy.
///
/// # Examples
///
/// ```rust
/// use rudash::set::xor;
///
/// assert_eq!(xor(&[&[1, 2, 3][..], &[2, 3, 4]]), vec![1, 4]);
/// assert_eq!(xor(&[&[2, 1][..], &[2, 3]]), vec![1, 3]);
/// ```
pub fn xor<T>(slices: &[&[T]]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let Some((first, rest)) = slices.split_first() else {
        return Vec::new();
    };
    rest.iter().fold(first.to_vec(), |accumulated, slice| {
        xor_pair(uniq(&accumulated), uniq(*slice), |left, right| left == right)
    })
}

/// Like [`xor`], but elements match when `iteratee` derives equal keys from
/// them. The iteratee runs once per input element.
///
/// # Examples
///
/// ```rust
/// use rudash::set::xor_by;
///
/// let floored = |value: &f64| value.floor() as i64;
/// assert_eq!(xor_by(&[&[2.1, 1.2][..], &[2.3, 3.4]], floored), vec![1.2, 3.4]);
/// ```
pub fn xor_by<T, K, F>(slices: &[&[T]], mut iteratee: F) -> Vec<T>
where
    T: Clone,
    K: PartialEq,
    F: FnMut(&T) -> K,
{
    let Some((first, rest)) = slices.split_first() else {
        return Vec::new();
    };
    let mut keyed = |slice: &[T]| -> Vec<(K, T)> {
        slice
            .iter()
            .map(|item| (iteratee(item), item.clone()))
            .collect()
    };
    let initial = keyed(*first);
    rest.iter()
        .fold(initial, |accumulated, slice| {
            xor_pair(
                first_per_key(accumulated),
                first_per_key(keyed(*slice)),
                |left, right| left.0 == right.0,
            )
        })
        .into_iter()
        .map(|(_, item)| item)
        .collect()
}

/// Like [`xor`], but elements match when `comparison` accepts them.
///
/// # Examples
///
/// ```rust
/// use rudash::set::xor_with;
///
/// let objects = [(1, 2), (2, 1)];
/// let others = [(1, 1), (1, 2)];
/// let result = xor_with(&[&objects[..], &others[..]], |left, right| left == right);
/// assert_eq!(result, vec![(2, 1), (1, 1)]);
/// ```
pub fn xor_with<T, C>(slices: &[&[T]], mut comparison: C) -> Vec<T>
where
    T: Clone,
    C: FnMut(&T, &T) -> bool,
{
    let Some((first, rest)) = slices.split_first() else {
        return Vec::new();
    };
    rest.iter().fold(first.to_vec(), |accumulated, slice| {
        let left = uniq_with(&accumulated, &mut comparison);
        let right = uniq_with(*slice, &mut comparison);
        xor_pair(left, right, &mut comparison)
    })
}
