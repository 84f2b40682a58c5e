//! Nested sequences and flattening.
//!
//! A heterogeneous "array of values or arrays" is modeled as the recursive
//! sum type [`Nested`]: an element is either a [`Nested::Scalar`] or a
//! [`Nested::Sequence`] of further elements. Flattening unwraps
//! `Sequence` elements up to a [`Depth`] and passes scalars through.
//!
//! # Examples
//!
//! ```rust
//! use rudash::nested;
//! use rudash::sequence::{Depth, Nested, flatten, flatten_deep, flatten_depth};
//!
//! // [1, [2, [3, [4]], 5]]
//! let items = nested![1, [2, [3, [4]], 5]];
//!
//! assert_eq!(flatten(&items), nested![1, 2, [3, [4]], 5]);
//! assert_eq!(flatten_depth(&items, Depth::Levels(2)), nested![1, 2, 3, [4], 5]);
//! assert_eq!(flatten_deep(&items), vec![1, 2, 3, 4, 5]);
//! ```

use std::fmt;

/// An element of a nested sequence.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Nested<T> {
    /// A plain value.
    Scalar(T),
    /// A sequence of further nested elements.
    Sequence(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Wraps a plain value.
    #[inline]
    pub const fn scalar(value: T) -> Self {
        Self::Scalar(value)
    }

    /// Wraps a sequence of nested elements.
    #[inline]
    pub const fn sequence(items: Vec<Self>) -> Self {
        Self::Sequence(items)
    }

    /// Wraps every value of `values` as a scalar inside one sequence.
    ///
    /// ```rust
    /// use rudash::sequence::Nested;
    ///
    /// let flat = Nested::from_values([1, 2]);
    /// assert_eq!(flat, Nested::Sequence(vec![Nested::Scalar(1), Nested::Scalar(2)]));
    /// ```
    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> Self {
        Self::Sequence(values.into_iter().map(Self::Scalar).collect())
    }

    /// Returns `true` for [`Nested::Scalar`].
    #[inline]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }

    /// Returns `true` for [`Nested::Sequence`].
    #[inline]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence(_))
    }

    /// Returns the plain value, if this is a scalar.
    #[inline]
    pub fn into_scalar(self) -> Option<T> {
        match self {
            Self::Scalar(value) => Some(value),
            Self::Sequence(_) => None,
        }
    }

    /// Returns the maximum nesting depth: `0` for a scalar, `1` for a
    /// sequence of scalars (or an empty sequence), and so on.
    ///
    /// ```rust
    /// use rudash::nested;
    /// use rudash::sequence::Nested;
    ///
    /// assert_eq!(Nested::Scalar(1).depth(), 0);
    /// assert_eq!(Nested::Sequence(nested![1, [2, [3]]]).depth(), 3);
    /// ```
    pub fn depth(&self) -> usize {
        match self {
            Self::Scalar(_) => 0,
            Self::Sequence(items) => 1 + items.iter().map(Self::depth).max().unwrap_or(0),
        }
    }

    /// Applies `function` to every scalar, keeping the shape.
    pub fn map<U, F>(self, function: &mut F) -> Nested<U>
    where
        F: FnMut(T) -> U,
    {
        match self {
            Self::Scalar(value) => Nested::Scalar(function(value)),
            Self::Sequence(items) => {
                Nested::Sequence(items.into_iter().map(|item| item.map(function)).collect())
            }
        }
    }
}

impl<T> From<Vec<Nested<T>>> for Nested<T> {
    fn from(items: Vec<Nested<T>>) -> Self {
        Self::Sequence(items)
    }
}

impl<T: fmt::Display> fmt::Display for Nested<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(value) => write!(formatter, "{value}"),
            Self::Sequence(items) => {
                write!(formatter, "[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        write!(formatter, ", ")?;
                    }
                    write!(formatter, "{item}")?;
                }
                write!(formatter, "]")
            }
        }
    }
}

/// How many levels [`flatten_depth`] descends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Depth {
    /// Descend at most this many levels. `Levels(0)` leaves the input as is.
    Levels(usize),
    /// Descend until no sequence is left.
    Unlimited,
}

impl Depth {
    fn descend(self) -> Option<Self> {
        match self {
            Self::Levels(0) => None,
            Self::Levels(levels) => Some(Self::Levels(levels - 1)),
            Self::Unlimited => Some(Self::Unlimited),
        }
    }
}

impl From<usize> for Depth {
    fn from(levels: usize) -> Self {
        Self::Levels(levels)
    }
}

/// Builds a `Vec<Nested<_>>` from a bracketed literal.
///
/// Every item is either a bracketed group, which becomes a
/// [`Nested::Sequence`], or a single token tree, which becomes a
/// [`Nested::Scalar`]. Wrap compound expressions such as `-1` in
/// parentheses.
///
/// ```rust
/// use rudash::nested;
/// use rudash::sequence::Nested;
///
/// let items = nested![1, [2, (-3)]];
/// assert_eq!(
///     items,
///     vec![
///         Nested::Scalar(1),
///         Nested::Sequence(vec![Nested::Scalar(2), Nested::Scalar(-3)]),
///     ]
/// );
/// ```
#[macro_export]
macro_rules! nested {
    (@item [$($inner:tt)*]) => {
        $crate::sequence::Nested::Sequence($crate::nested![$($inner)*])
    };
    (@item $value:tt) => {
        $crate::sequence::Nested::Scalar($value)
    };
    ($($item:tt),* $(,)?) => {
        vec![$($crate::nested!(@item $item)),*]
    };
}

fn flatten_into<T: Clone>(items: &[Nested<T>], depth: Depth, output: &mut Vec<Nested<T>>) {
    for item in items {
        match (item, depth.descend()) {
            (Nested::Sequence(inner), Some(remaining)) => flatten_into(inner, remaining, output),
            _ => output.push(item.clone()),
        }
    }
}

fn flatten_deep_into<T: Clone>(items: &[Nested<T>], output: &mut Vec<T>) {
    for item in items {
        match item {
            Nested::Scalar(value) => output.push(value.clone()),
            Nested::Sequence(inner) => flatten_deep_into(inner, output),
        }
    }
}

/// Flattens one level deep.
///
/// # Examples
///
/// ```rust
/// use rudash::nested;
/// use rudash::sequence::flatten;
///
/// assert_eq!(flatten(&nested![1, [2, [3]]]), nested![1, 2, [3]]);
/// ```
pub fn flatten<T: Clone>(items: &[Nested<T>]) -> Vec<Nested<T>> {
    flatten_depth(items, Depth::Levels(1))
}

/// Flattens up to `depth` levels deep. `Depth::Levels(0)` returns a copy of
/// the input.
///
/// # Examples
///
/// ```rust
/// use rudash::nested;
/// use rudash::sequence::{Depth, flatten_depth};
///
/// let items = nested![1, [2, [3, [4]]]];
/// assert_eq!(flatten_depth(&items, Depth::Levels(0)), items);
/// assert_eq!(flatten_depth(&items, Depth::Levels(2)), nested![1, 2, 3, [4]]);
/// assert_eq!(flatten_depth(&items, Depth::Unlimited), nested![1, 2, 3, 4]);
/// ```
pub fn flatten_depth<T: Clone>(items: &[Nested<T>], depth: Depth) -> Vec<Nested<T>> {
    let mut output = Vec::with_capacity(items.len());
    flatten_into(items, depth, &mut output);
    output
}

/// Flattens recursively, returning the plain values.
///
/// # Examples
///
/// ```rust
/// use rudash::nested;
/// use rudash::sequence::flatten_deep;
///
/// assert_eq!(flatten_deep(&nested![1, [2, [3, [4]], 5]]), vec![1, 2, 3, 4, 5]);
/// ```
pub fn flatten_deep<T: Clone>(items: &[Nested<T>]) -> Vec<T> {
    let mut output = Vec::with_capacity(items.len());
    flatten_deep_into(items, &mut output);
    output
}
