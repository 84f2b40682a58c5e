//! Random selection driven by a caller-supplied generator.
//!
//! Every function takes the generator explicitly, so a seeded generator
//! gives reproducible results:
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use rudash::collection::random::sample_size;
//!
//! let items = [1, 2, 3, 4, 5];
//! let first = sample_size(&items, 3, &mut StdRng::seed_from_u64(7));
//! let second = sample_size(&items, 3, &mut StdRng::seed_from_u64(7));
//! assert_eq!(first, second);
//! ```

use rand::Rng;

/// Returns a random element, or `None` for an empty slice.
///
/// # Examples
///
/// ```rust
/// use rudash::collection::random::sample;
///
/// let items = [1, 2, 3];
/// let picked = sample(&items, &mut rand::rng());
/// assert!(picked.is_some_and(|value| items.contains(value)));
/// ```
pub fn sample<'a, T, R>(items: &'a [T], rng: &mut R) -> Option<&'a T>
where
    R: Rng,
{
    if items.is_empty() {
        tracing::trace!("sample of an empty slice");
        return None;
    }
    items.get(rng.random_range(0..items.len()))
}

/// Returns `count` elements taken from distinct random positions.
///
/// `count` is clamped to the length of `items`, so no position is ever
/// picked twice. Each pick removes the chosen element from the remaining
/// pool.
///
/// # Examples
///
/// ```rust
/// use rudash::collection::random::sample_size;
///
/// let picked = sample_size(&[1, 2, 3], 2, &mut rand::rng());
/// assert_eq!(picked.len(), 2);
/// assert_ne!(picked[0], picked[1]);
///
/// assert_eq!(sample_size(&[1, 2, 3], 10, &mut rand::rng()).len(), 3);
/// ```
pub fn sample_size<T, R>(items: &[T], count: usize, rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng,
{
    if count > items.len() {
        tracing::debug!(count, length = items.len(), "sample size clamped to the input length");
    }
    let mut pool: Vec<&T> = items.iter().collect();
    let mut result = Vec::with_capacity(count.min(items.len()));
    while result.len() < count && !pool.is_empty() {
        let index = rng.random_range(0..pool.len());
        result.push(pool.remove(index).clone());
    }
    result
}

/// Returns the elements of `items` in random order.
///
/// # Examples
///
/// ```rust
/// use rudash::collection::random::shuffle;
///
/// let mut shuffled = shuffle(&[1, 2, 3, 4], &mut rand::rng());
/// shuffled.sort_unstable();
/// assert_eq!(shuffled, vec![1, 2, 3, 4]);
/// ```
pub fn shuffle<T, R>(items: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng,
{
    sample_size(items, items.len(), rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::{fixture, rstest};

    #[fixture]
    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[rstest]
    fn test_sample_empty(mut rng: StdRng) {
        assert_eq!(sample::<i32, _>(&[], &mut rng), None);
    }

    #[rstest]
    fn test_sample_single(mut rng: StdRng) {
        assert_eq!(sample(&["only"], &mut rng), Some(&"only"));
    }

    #[rstest]
    #[case(0, 0)]
    #[case(2, 2)]
    #[case(5, 5)]
    #[case(9, 5)]
    fn test_sample_size_length(mut rng: StdRng, #[case] count: usize, #[case] expected: usize) {
        assert_eq!(sample_size(&[1, 2, 3, 4, 5], count, &mut rng).len(), expected);
    }

    #[rstest]
    fn test_sample_size_never_repeats_a_position(mut rng: StdRng) {
        let items: Vec<usize> = (0..50).collect();
        let mut picked = sample_size(&items, 20, &mut rng);
        picked.sort_unstable();
        picked.dedup();
        assert_eq!(picked.len(), 20);
    }

    #[rstest]
    fn test_shuffle_is_a_permutation(mut rng: StdRng) {
        let items = ["a", "b", "c", "d", "e"];
        let mut shuffled = shuffle(&items, &mut rng);
        shuffled.sort_unstable();
        assert_eq!(shuffled, items);
    }

    #[rstest]
    fn test_shuffle_is_reproducible_with_seed() {
        let items: Vec<i32> = (0..10).collect();
        let first = shuffle(&items, &mut StdRng::seed_from_u64(3));
        let second = shuffle(&items, &mut StdRng::seed_from_u64(3));
        assert_eq!(first, second);
    }
}
