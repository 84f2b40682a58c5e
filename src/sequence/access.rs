//! Element access and index search.
//!
//! Absence is always reported as `None`; no function here panics on an
//! out-of-range position.

/// Gets the first element of the slice.
///
/// # Examples
///
/// ```rust
/// use rudash::sequence::head;
///
/// assert_eq!(head(&[1, 2, 3]), Some(&1));
/// assert_eq!(head::<i32>(&[]), None);
/// ```
#[inline]
pub fn head<T>(items: &[T]) -> Option<&T> {
    items.first()
}

/// Alias of [`head`].
#[inline]
pub fn first<T>(items: &[T]) -> Option<&T> {
    head(items)
}

/// Gets the last element of the slice.
///
/// # Examples
///
/// ```rust
/// use rudash::sequence::last;
///
/// assert_eq!(last(&[1, 2, 3]), Some(&3));
/// assert_eq!(last::<i32>(&[]), None);
/// ```
#[inline]
pub fn last<T>(items: &[T]) -> Option<&T> {
    items.last()
}

/// Gets the element at index `n`. A negative `n` counts from the end, so
/// `-1` is the last element.
///
/// # Examples
///
/// ```rust
/// use rudash::sequence::nth;
///
/// let items = ['a', 'b', 'c', 'd'];
/// assert_eq!(nth(&items, 1), Some(&'b'));
/// assert_eq!(nth(&items, -2), Some(&'c'));
/// assert_eq!(nth(&items, 4), None);
/// assert_eq!(nth(&items, -5), None);
/// ```
pub fn nth<T>(items: &[T], n: isize) -> Option<&T> {
    let index = if n >= 0 {
        n.unsigned_abs()
    } else {
        items.len().checked_sub(n.unsigned_abs())?
    };
    items.get(index)
}

/// Gets all but the last element.
///
/// # Examples
///
/// ```rust
/// use rudash::sequence::initial;
///
/// assert_eq!(initial(&[1, 2, 3]), &[1, 2]);
/// assert!(initial::<i32>(&[]).is_empty());
/// ```
#[inline]
pub fn initial<T>(items: &[T]) -> &[T] {
    items.split_last().map_or(&[], |(_, rest)| rest)
}

/// Gets all but the first element.
///
/// # Examples
///
/// ```rust
/// use rudash::sequence::tail;
///
/// assert_eq!(tail(&[1, 2, 3]), &[2, 3]);
/// assert!(tail::<i32>(&[]).is_empty());
/// ```
#[inline]
pub fn tail<T>(items: &[T]) -> &[T] {
    items.split_first().map_or(&[], |(_, rest)| rest)
}

/// Returns the index of the first element equal to `element`.
///
/// # Examples
///
/// ```rust
/// use rudash::sequence::index_of;
///
/// assert_eq!(index_of(&[1, 2, 1, 2], &2), Some(1));
/// assert_eq!(index_of(&[1, 2], &3), None);
/// ```
pub fn index_of<T: PartialEq>(items: &[T], element: &T) -> Option<usize> {
    items.iter().position(|candidate| candidate == element)
}

/// Returns the index of the last element equal to `element`.
///
/// # Examples
///
/// ```rust
/// use rudash::sequence::last_index_of;
///
/// assert_eq!(last_index_of(&[1, 2, 1, 2], &2), Some(3));
/// ```
pub fn last_index_of<T: PartialEq>(items: &[T], element: &T) -> Option<usize> {
    items.iter().rposition(|candidate| candidate == element)
}

/// Returns the index of the first element the predicate accepts.
///
/// # Examples
///
/// ```rust
/// use rudash::sequence::find_index;
///
/// assert_eq!(find_index(&[1, 4, 6], |value| value % 2 == 0), Some(1));
/// ```
pub fn find_index<T, P>(items: &[T], mut predicate: P) -> Option<usize>
where
    P: FnMut(&T) -> bool,
{
    items.iter().position(|candidate| predicate(candidate))
}

/// Returns the index of the first element that `comparison` judges equal to
/// `element`. The comparison receives `(element, candidate)`.
///
/// # Examples
///
/// ```rust
/// use rudash::sequence::find_index_with;
///
/// let close = |left: &f64, right: &f64| (left - right).abs() < 0.01;
/// assert_eq!(find_index_with(&[1.0, 2.001, 3.0], &2.0, close), Some(1));
/// ```
pub fn find_index_with<T, C>(items: &[T], element: &T, mut comparison: C) -> Option<usize>
where
    C: FnMut(&T, &T) -> bool,
{
    items
        .iter()
        .position(|candidate| comparison(element, candidate))
}

/// Returns the index of the last element the predicate accepts.
///
/// # Examples
///
/// ```rust
/// use rudash::sequence::find_last_index;
///
/// assert_eq!(find_last_index(&[1, 4, 6, 7], |value| value % 2 == 0), Some(2));
/// ```
pub fn find_last_index<T, P>(items: &[T], mut predicate: P) -> Option<usize>
where
    P: FnMut(&T) -> bool,
{
    items.iter().rposition(|candidate| predicate(candidate))
}

/// Returns the index of the last element that `comparison` judges equal to
/// `element`.
pub fn find_last_index_with<T, C>(items: &[T], element: &T, mut comparison: C) -> Option<usize>
where
    C: FnMut(&T, &T) -> bool,
{
    items
        .iter()
        .rposition(|candidate| comparison(element, candidate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, Some(&10))]
    #[case(2, Some(&30))]
    #[case(3, None)]
    #[case(-1, Some(&30))]
    #[case(-3, Some(&10))]
    #[case(-4, None)]
    fn test_nth(#[case] n: isize, #[case] expected: Option<&i32>) {
        assert_eq!(nth(&[10, 20, 30], n), expected);
    }

    #[rstest]
    fn test_nth_on_empty() {
        assert_eq!(nth::<i32>(&[], 0), None);
        assert_eq!(nth::<i32>(&[], -1), None);
    }

    #[rstest]
    fn test_initial_single_element_is_empty() {
        assert!(initial(&[1]).is_empty());
    }

    #[rstest]
    fn test_tail_single_element_is_empty() {
        assert!(tail(&[1]).is_empty());
    }

    #[rstest]
    fn test_find_last_index_with_scans_from_the_right() {
        let same_parity = |left: &i32, right: &i32| left % 2 == right % 2;
        assert_eq!(find_last_index_with(&[2, 3, 4, 5], &0, same_parity), Some(2));
        assert_eq!(find_index_with(&[2, 3, 4, 5], &0, same_parity), Some(0));
    }

    #[rstest]
    fn test_index_of_not_found() {
        assert_eq!(index_of(&["a", "b"], &"z"), None);
        assert_eq!(last_index_of(&["a", "b"], &"z"), None);
    }
}
