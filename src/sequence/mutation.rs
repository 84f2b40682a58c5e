//! In-place operations.
//!
//! These are the only functions in the crate that modify their input. They
//! take `&mut [T]` when the length is preserved and `&mut Vec<T>` when
//! elements are removed.

/// Overwrites every element with `value`.
///
/// # Examples
///
/// ```rust
/// use rudash::sequence::fill;
///
/// let mut items = [1, 2, 3];
/// fill(&mut items, 0);
/// assert_eq!(items, [0, 0, 0]);
/// ```
pub fn fill<T: Clone>(items: &mut [T], value: T) {
    let length = items.len();
    fill_in_range(items, value, 0, length);
}

/// Overwrites the elements from `start` up to, but not including, `end`
/// with `value`. The range is clamped to the slice.
///
/// # Examples
///
/// ```rust
/// use rudash::sequence::fill_in_range;
///
/// let mut items = [4, 6, 8, 10];
/// fill_in_range(&mut items, 0, 1, 3);
/// assert_eq!(items, [4, 0, 0, 10]);
///
/// fill_in_range(&mut items, 1, 2, 99);
/// assert_eq!(items, [4, 0, 1, 1]);
/// ```
pub fn fill_in_range<T: Clone>(items: &mut [T], value: T, start: usize, end: usize) {
    let end = end.min(items.len());
    if start >= end {
        return;
    }
    items[start..end].fill(value);
}

/// Reverses the slice in place so the first element becomes the last.
///
/// # Examples
///
/// ```rust
/// use rudash::sequence::reverse;
///
/// let mut items = [1, 2, 3, 4];
/// reverse(&mut items);
/// assert_eq!(items, [4, 3, 2, 1]);
/// ```
pub fn reverse<T>(items: &mut [T]) {
    let length = items.len();
    for index in 0..length / 2 {
        items.swap(index, length - 1 - index);
    }
}

/// Removes every element equal to one of `values` and returns how many
/// elements were removed.
///
/// # Examples
///
/// ```rust
/// use rudash::sequence::pull;
///
/// let mut items = vec!['a', 'b', 'c', 'a', 'b', 'c'];
/// assert_eq!(pull(&mut items, &['a', 'c']), 4);
/// assert_eq!(items, vec!['b', 'b']);
/// ```
pub fn pull<T: PartialEq>(items: &mut Vec<T>, values: &[T]) -> usize {
    pull_all_with(items, values, |item, value| item == value)
}

/// Alias of [`pull`] taking the values to remove as a slice.
#[inline]
pub fn pull_all<T: PartialEq>(items: &mut Vec<T>, values: &[T]) -> usize {
    pull(items, values)
}

/// Removes every element that `comparison` judges equal to one of `values`
/// and returns how many elements were removed. The comparison receives
/// `(item, value)`.
///
/// # Examples
///
/// ```rust
/// use rudash::sequence::pull_all_with;
///
/// let mut points = vec![(1, 2), (3, 4), (5, 6)];
/// let removed = pull_all_with(&mut points, &[(3, 4)], |left, right| left == right);
/// assert_eq!(removed, 1);
/// assert_eq!(points, vec![(1, 2), (5, 6)]);
/// ```
pub fn pull_all_with<T, C>(items: &mut Vec<T>, values: &[T], mut comparison: C) -> usize
where
    C: FnMut(&T, &T) -> bool,
{
    let before = items.len();
    items.retain(|item| !values.iter().any(|value| comparison(item, value)));
    before - items.len()
}

/// Removes the elements at `indices` and returns them in their original
/// order. Indices out of range and duplicated indices are ignored.
///
/// # Examples
///
/// ```rust
/// use rudash::sequence::pull_at;
///
/// let mut items = vec!['a', 'b', 'c', 'd'];
/// let pulled = pull_at(&mut items, &[3, 1]);
/// assert_eq!(items, vec!['a', 'c']);
/// assert_eq!(pulled, vec!['b', 'd']);
/// ```
pub fn pull_at<T>(items: &mut Vec<T>, indices: &[usize]) -> Vec<T> {
    let (pulled, kept) = std::mem::take(items)
        .into_iter()
        .enumerate()
        .fold((Vec::new(), Vec::new()), |(mut pulled, mut kept), (index, item)| {
            if indices.contains(&index) {
                pulled.push(item);
            } else {
                kept.push(item);
            }
            (pulled, kept)
        });
    *items = kept;
    pulled
}

/// Removes every element the predicate accepts and returns the removed
/// elements in order.
///
/// # Examples
///
/// ```rust
/// use rudash::sequence::remove;
///
/// let mut items = vec![1, 2, 3, 4];
/// let evens = remove(&mut items, |value| value % 2 == 0);
/// assert_eq!(items, vec![1, 3]);
/// assert_eq!(evens, vec![2, 4]);
/// ```
pub fn remove<T, P>(items: &mut Vec<T>, mut predicate: P) -> Vec<T>
where
    P: FnMut(&T) -> bool,
{
    let (removed, kept): (Vec<T>, Vec<T>) =
        std::mem::take(items).into_iter().partition(|item| predicate(item));
    *items = kept;
    removed
}
