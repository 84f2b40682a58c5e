//! Predicate searches returning borrowed elements.

/// Returns the first element for which `predicate` holds.
///
/// # Examples
///
/// ```rust
/// use rudash::collection::find;
///
/// let users = [("barney", 36), ("fred", 40), ("pebbles", 1)];
/// assert_eq!(find(&users, |user| user.1 < 40), Some(&("barney", 36)));
/// ```
pub fn find<T, P>(items: &[T], predicate: P) -> Option<&T>
where
    P: FnMut(&T) -> bool,
{
    find_from(items, predicate, 0)
}

/// Like [`find`], but starts the search at index `from`. A start past the
/// end finds nothing.
///
/// # Examples
///
/// ```rust
/// use rudash::collection::find_from;
///
/// assert_eq!(find_from(&[1, 2, 3, 4], |value| value % 2 == 0, 2), Some(&4));
/// assert_eq!(find_from(&[1, 2], |_| true, 5), None);
/// ```
pub fn find_from<T, P>(items: &[T], mut predicate: P, from: usize) -> Option<&T>
where
    P: FnMut(&T) -> bool,
{
    let Some(candidates) = items.get(from..) else {
        tracing::trace!(from, length = items.len(), "find start is past the end");
        return None;
    };
    candidates.iter().find(|item| predicate(*item))
}

/// Returns the last element for which `predicate` holds.
///
/// # Examples
///
/// ```rust
/// use rudash::collection::find_last;
///
/// assert_eq!(find_last(&[1, 2, 3, 4], |value| value % 2 == 1), Some(&3));
/// ```
pub fn find_last<T, P>(items: &[T], predicate: P) -> Option<&T>
where
    P: FnMut(&T) -> bool,
{
    find_last_from(items, predicate, items.len().saturating_sub(1))
}

/// Like [`find_last`], but searches leftwards starting at index `from`. A
/// start past the end begins at the last element.
///
/// # Examples
///
/// ```rust
/// use rudash::collection::find_last_from;
///
/// assert_eq!(find_last_from(&[1, 2, 3, 4], |value| value % 2 == 0, 2), Some(&2));
/// assert_eq!(find_last_from(&[1, 2, 3, 4], |value| value % 2 == 0, 9), Some(&4));
/// ```
pub fn find_last_from<T, P>(items: &[T], mut predicate: P, from: usize) -> Option<&T>
where
    P: FnMut(&T) -> bool,
{
    let last = items.len().checked_sub(1)?;
    let start = if from > last {
        tracing::trace!(from, last, "find_last start clamped to the last element");
        last
    } else {
        from
    };
    items[..=start].iter().rev().find(|item| predicate(*item))
}
