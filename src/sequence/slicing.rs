//! Views over prefixes, suffixes and ranges of a slice.
//!
//! Every count and index is clamped to the slice bounds. The `*_while`
//! variants stop at the first element the predicate rejects and never look
//! past it.

/// Splits the slice into groups of `size` elements. The final group holds
/// the remaining elements when the length is not a multiple of `size`.
///
/// A `size` of zero puts every element into a single group.
///
/// # Examples
///
/// ```rust
/// use rudash::sequence::chunk;
///
/// assert_eq!(chunk(&["a", "b", "c", "d"], 2), vec![vec!["a", "b"], vec!["c", "d"]]);
/// assert_eq!(chunk(&[1, 2, 3], 2), vec![vec![1, 2], vec![3]]);
/// assert!(chunk::<i32>(&[], 2).is_empty());
/// ```
pub fn chunk<T: Clone>(items: &[T], size: usize) -> Vec<Vec<T>> {
    if items.is_empty() {
        return Vec::new();
    }
    if size == 0 {
        tracing::debug!(length = items.len(), "chunk size is zero, returning a single chunk");
        return vec![items.to_vec()];
    }
    items.chunks(size).map(<[T]>::to_vec).collect()
}

/// Returns the first `count` elements.
///
/// # Examples
///
/// ```rust
/// use rudash::sequence::take;
///
/// assert_eq!(take(&[1, 2, 3], 2), &[1, 2]);
/// assert_eq!(take(&[1, 2, 3], 5), &[1, 2, 3]);
/// assert!(take(&[1, 2, 3], 0).is_empty());
/// ```
#[inline]
pub fn take<T>(items: &[T], count: usize) -> &[T] {
    &items[..count.min(items.len())]
}

/// Returns the last `count` elements.
///
/// # Examples
///
/// ```rust
/// use rudash::sequence::take_right;
///
/// assert_eq!(take_right(&[1, 2, 3], 2), &[2, 3]);
/// assert_eq!(take_right(&[1, 2, 3], 5), &[1, 2, 3]);
/// ```
#[inline]
pub fn take_right<T>(items: &[T], count: usize) -> &[T] {
    &items[items.len().saturating_sub(count)..]
}

/// Returns the longest prefix whose elements all satisfy the predicate.
///
/// # Examples
///
/// ```rust
/// use rudash::sequence::take_while;
///
/// assert_eq!(take_while(&[1, 2, 5, 1], |value| *value < 3), &[1, 2]);
/// ```
pub fn take_while<T, P>(items: &[T], mut predicate: P) -> &[T]
where
    P: FnMut(&T) -> bool,
{
    let end = items
        .iter()
        .position(|item| !predicate(item))
        .unwrap_or(items.len());
    &items[..end]
}

/// Returns the longest suffix whose elements all satisfy the predicate.
///
/// # Examples
///
/// ```rust
/// use rudash::sequence::take_right_while;
///
/// assert_eq!(take_right_while(&[1, 5, 2, 1], |value| *value < 3), &[2, 1]);
/// ```
pub fn take_right_while<T, P>(items: &[T], mut predicate: P) -> &[T]
where
    P: FnMut(&T) -> bool,
{
    let start = items
        .iter()
        .rposition(|item| !predicate(item))
        .map_or(0, |index| index + 1);
    &items[start..]
}

/// Returns the slice without its first `count` elements.
///
/// # Examples
///
/// ```rust
/// use rudash::sequence::drop;
///
/// assert_eq!(drop(&[1, 2, 3], 1), &[2, 3]);
/// assert!(drop(&[1, 2, 3], 5).is_empty());
/// ```
#[inline]
pub fn drop<T>(items: &[T], count: usize) -> &[T] {
    &items[count.min(items.len())..]
}

/// Returns the slice without its last `count` elements.
///
/// # Examples
///
/// ```rust
/// use rudash::sequence::drop_right;
///
/// assert_eq!(drop_right(&[1, 2, 3], 1), &[1, 2]);
/// assert!(drop_right(&[1, 2, 3], 5).is_empty());
/// ```
#[inline]
pub fn drop_right<T>(items: &[T], count: usize) -> &[T] {
    &items[..items.len().saturating_sub(count)]
}

/// Drops elements from the front while the predicate holds.
///
/// # Examples
///
/// ```rust
/// use rudash::sequence::drop_while;
///
/// assert_eq!(drop_while(&[1, 2, 5, 1], |value| *value < 3), &[5, 1]);
/// ```
pub fn drop_while<T, P>(items: &[T], mut predicate: P) -> &[T]
where
    P: FnMut(&T) -> bool,
{
    let start = items
        .iter()
        .position(|item| !predicate(item))
        .unwrap_or(items.len());
    &items[start..]
}

/// Drops elements from the back while the predicate holds.
///
/// # Examples
///
/// ```rust
/// use rudash::sequence::drop_right_while;
///
/// assert_eq!(drop_right_while(&[1, 5, 2, 1], |value| *value < 3), &[1, 5]);
/// ```
pub fn drop_right_while<T, P>(items: &[T], mut predicate: P) -> &[T]
where
    P: FnMut(&T) -> bool,
{
    let end = items
        .iter()
        .rposition(|item| !predicate(item))
        .map_or(0, |index| index + 1);
    &items[..end]
}

/// Returns the elements from `start` up to, but not including, `end`.
///
/// `end` is clamped to the length and `start` is clamped to `end`, so an
/// inverted range yields an empty slice.
///
/// # Examples
///
/// ```rust
/// use rudash::sequence::slice;
///
/// assert_eq!(slice(&[1, 2, 3, 4], 1, 3), &[2, 3]);
/// assert_eq!(slice(&[1, 2, 3, 4], 2, 10), &[3, 4]);
/// assert!(slice(&[1, 2, 3, 4], 3, 1).is_empty());
/// ```
pub fn slice<T>(items: &[T], start: usize, end: usize) -> &[T] {
    let end = end.min(items.len());
    if start > end {
        tracing::trace!(start, end, "inverted slice range, returning empty");
        return &[];
    }
    &items[start..end]
}
