//! Mapping into nested values, then flattening.

use crate::sequence::{Depth, Nested, flatten, flatten_deep, flatten_depth};

use super::map;

/// Maps every element to a [`Nested`] value and flattens the result one
/// level deep.
///
/// # Examples
///
/// ```rust
/// use rudash::collection::flat_map;
/// use rudash::nested;
/// use rudash::sequence::Nested;
///
/// let duplicated = flat_map(&[1, 2], |value| Nested::from_values([*value, *value]));
/// assert_eq!(duplicated, nested![1, 1, 2, 2]);
/// ```
pub fn flat_map<T, U, F>(items: &[T], iteratee: F) -> Vec<Nested<U>>
where
    U: Clone,
    F: FnMut(&T) -> Nested<U>,
{
    flatten(&map(items, iteratee))
}

/// Maps every element to a [`Nested`] value and flattens the result
/// completely.
///
/// # Examples
///
/// ```rust
/// use rudash::collection::flat_map_deep;
/// use rudash::sequence::Nested;
///
/// let result = flat_map_deep(&[1, 2], |value: &i32| {
///     Nested::Sequence(vec![Nested::Scalar(*value), Nested::from_values([*value])])
/// });
/// assert_eq!(result, vec![1, 1, 2, 2]);
/// ```
pub fn flat_map_deep<T, U, F>(items: &[T], iteratee: F) -> Vec<U>
where
    U: Clone,
    F: FnMut(&T) -> Nested<U>,
{
    flatten_deep(&map(items, iteratee))
}

/// Maps every element to a [`Nested`] value and flattens the result up to
/// `depth` levels.
///
/// # Examples
///
/// ```rust
/// use rudash::collection::flat_map_depth;
/// use rudash::nested;
/// use rudash::sequence::{Depth, Nested};
///
/// let wrap = |value: &i32| Nested::Sequence(vec![Nested::Sequence(vec![Nested::from_values([*value])])]);
/// assert_eq!(flat_map_depth(&[1], wrap, Depth::Levels(2)), nested![[1]]);
/// ```
pub fn flat_map_depth<T, U, F>(items: &[T], iteratee: F, depth: Depth) -> Vec<Nested<U>>
where
    U: Clone,
    F: FnMut(&T) -> Nested<U>,
{
    flatten_depth(&map(items, iteratee), depth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nested;
    use rstest::rstest;

    fn pair(value: &i32) -> Nested<i32> {
        Nested::Sequence(vec![Nested::from_values([*value]), Nested::Scalar(*value)])
    }

    #[rstest]
    fn test_flat_map_scalars_pass_through() {
        let result = flat_map(&[1, 2], |value| Nested::Scalar(value * 10));
        assert_eq!(result, nested![10, 20]);
    }

    #[rstest]
    fn test_flat_map_one_level() {
        assert_eq!(flat_map(&[1, 2], pair), nested![[1], 1, [2], 2]);
    }

    #[rstest]
    fn test_flat_map_deep() {
        assert_eq!(flat_map_deep(&[1, 2], pair), vec![1, 1, 2, 2]);
    }

    #[rstest]
    #[case(Depth::Levels(0), vec![Nested::Sequence(nested![[1], 1])])]
    #[case(Depth::Levels(1), nested![[1], 1])]
    #[case(Depth::Levels(2), nested![1, 1])]
    #[case(Depth::Unlimited, nested![1, 1])]
    fn test_flat_map_depth(#[case] depth: Depth, #[case] expected: Vec<Nested<i32>>) {
        assert_eq!(flat_map_depth(&[1], pair, depth), expected);
    }

    #[rstest]
    fn test_flat_map_empty() {
        assert!(flat_map(&[] as &[i32], pair).is_empty());
    }
}
