//! Element-wise iteration: mapping, filtering, visiting and testing.

/// Returns the result of `iteratee` for every element, in order.
///
/// # Examples
///
/// ```rust
/// use rudash::collection::map;
///
/// assert_eq!(map(&[4, 8], |value| value * value), vec![16, 64]);
/// ```
pub fn map<T, U, F>(items: &[T], iteratee: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    items.iter().map(iteratee).collect()
}

/// Returns the elements for which `predicate` holds.
///
/// # Examples
///
/// ```rust
/// use rudash::collection::filter;
///
/// assert_eq!(filter(&[1, 2, 3, 4], |value| value % 2 == 0), vec![2, 4]);
/// ```
pub fn filter<T, P>(items: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    items
        .iter()
        .filter(|item| predicate(*item))
        .cloned()
        .collect()
}

/// The opposite of [`filter`]: returns the elements for which `predicate`
/// does not hold.
///
/// # Examples
///
/// ```rust
/// use rudash::collection::reject;
///
/// assert_eq!(reject(&[1, 2, 3, 4], |value| value % 2 == 0), vec![1, 3]);
/// ```
pub fn reject<T, P>(items: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    filter(items, |item| !predicate(item))
}

/// Calls `action` with every element and its index, left to right, and
/// returns the input for chaining.
///
/// # Examples
///
/// ```rust
/// use rudash::collection::for_each;
///
/// let mut visited = Vec::new();
/// let items = for_each(&["a", "b"], |item, index| visited.push(format!("{index}{item}")));
/// assert_eq!(visited, vec!["0a", "1b"]);
/// assert_eq!(items, &["a", "b"]);
/// ```
pub fn for_each<T, A>(items: &[T], mut action: A) -> &[T]
where
    A: FnMut(&T, usize),
{
    for (index, item) in items.iter().enumerate() {
        action(item, index);
    }
    items
}

/// Like [`for_each`], but visits the elements right to left. Indices still
/// refer to positions in `items`.
pub fn for_each_right<T, A>(items: &[T], mut action: A) -> &[T]
where
    A: FnMut(&T, usize),
{
    for (index, item) in items.iter().enumerate().rev() {
        action(item, index);
    }
    items
}

/// Returns `true` if `predicate` holds for every element. Stops at the first
/// failure; an empty slice gives `true`.
///
/// # Examples
///
/// ```rust
/// use rudash::collection::every;
///
/// assert!(every(&[2, 4], |value| value % 2 == 0));
/// assert!(!every(&[2, 3], |value| value % 2 == 0));
/// ```
pub fn every<T, P>(items: &[T], predicate: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    items.iter().all(predicate)
}

/// Returns `true` if `predicate` holds for any element. Stops at the first
/// success; an empty slice gives `false`.
///
/// # Examples
///
/// ```rust
/// use rudash::collection::some;
///
/// assert!(some(&[1, 2], |value| value % 2 == 0));
/// assert!(!some::<i32, _>(&[], |_| true));
/// ```
pub fn some<T, P>(items: &[T], predicate: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    items.iter().any(predicate)
}

/// Returns `true` if `value` occurs in `items`.
///
/// # Examples
///
/// ```rust
/// use rudash::collection::includes;
///
/// assert!(includes(&["a", "b"], &"b"));
/// ```
pub fn includes<T: PartialEq>(items: &[T], value: &T) -> bool {
    items.contains(value)
}

/// Returns the number of elements.
#[inline]
pub const fn size<T>(items: &[T]) -> usize {
    items.len()
}
