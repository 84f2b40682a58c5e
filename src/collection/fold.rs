//! Left and right folds.
//!
//! The seeded variants accept any accumulator type. The unseeded variants
//! use the first (or last) element as the seed, so their accumulator is the
//! element type and an empty input has no result.

/// Folds `items` left to right, seeded with the first element.
///
/// Returns `None` for an empty slice. A single element is returned as is,
/// without calling `reducer`.
///
/// # Examples
///
/// ```rust
/// use rudash::collection::reduce;
///
/// assert_eq!(reduce(&[1, 2, 3], |sum, value| sum + value), Some(6));
/// assert_eq!(reduce::<i32, _>(&[], |sum, value| sum + value), None);
/// ```
pub fn reduce<T, F>(items: &[T], reducer: F) -> Option<T>
where
    T: Clone,
    F: FnMut(T, &T) -> T,
{
    let (first, rest) = items.split_first()?;
    Some(rest.iter().fold(first.clone(), reducer))
}

/// Folds `items` left to right, starting from `initial`.
///
/// # Examples
///
/// ```rust
/// use rudash::collection::reduce_with_initial;
///
/// let lengths = reduce_with_initial(&["ab", "cde"], 0, |total, word| total + word.len());
/// assert_eq!(lengths, 5);
/// ```
pub fn reduce_with_initial<T, A, F>(items: &[T], initial: A, reducer: F) -> A
where
    F: FnMut(A, &T) -> A,
{
    items.iter().fold(initial, reducer)
}

/// Like [`reduce`], but folds right to left, seeded with the last element.
///
/// # Examples
///
/// ```rust
/// use rudash::collection::reduce_right;
///
/// let words = ["a".to_string(), "b".to_string(), "c".to_string()];
/// assert_eq!(reduce_right(&words, |joined, word| joined + word).as_deref(), Some("cba"));
/// ```
pub fn reduce_right<T, F>(items: &[T], reducer: F) -> Option<T>
where
    T: Clone,
    F: FnMut(T, &T) -> T,
{
    let (last, rest) = items.split_last()?;
    Some(rest.iter().rev().fold(last.clone(), reducer))
}

/// Like [`reduce_with_initial`], but folds right to left.
pub fn reduce_right_with_initial<T, A, F>(items: &[T], initial: A, reducer: F) -> A
where
    F: FnMut(A, &T) -> A,
{
    items.iter().rev().fold(initial, reducer)
}
