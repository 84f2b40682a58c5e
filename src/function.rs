//! Small combinators used as ready-made iteratees and predicates.
//!
//! - [`identity`]: returns its argument unchanged
//! - [`cloned`]: the identity iteratee over borrowed elements
//! - [`constant`]: a function that ignores its input
//! - [`ternary`]: an expression-level conditional choice
//!
//! # Examples
//!
//! ```rust
//! use rudash::function::cloned;
//! use rudash::set::uniq_by;
//!
//! let unique = uniq_by(&[1, 1, 2], cloned);
//! assert_eq!(unique, vec![1, 2]);
//! ```

/// Returns the value unchanged.
///
/// # Examples
///
/// ```rust
/// use rudash::function::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Clones the borrowed element.
///
/// This is [`identity`] shaped as an iteratee: every `By` operation in this
/// crate hands its iteratee a `&T`, and the derived key must not borrow from
/// the element.
///
/// # Examples
///
/// ```rust
/// use rudash::function::cloned;
///
/// let word = String::from("key");
/// assert_eq!(cloned(&word), "key");
/// ```
#[inline]
pub fn cloned<T: Clone>(value: &T) -> T {
    value.clone()
}

/// Creates a function that always returns the given value, ignoring its input.
///
/// # Examples
///
/// ```rust
/// use rudash::function::constant;
///
/// let zeros: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(zeros, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Chooses `when_true` or `when_false` depending on `condition`.
///
/// Both branches are evaluated eagerly.
///
/// # Examples
///
/// ```rust
/// use rudash::function::ternary;
///
/// assert_eq!(ternary(true, "yes", "no"), "yes");
/// assert_eq!(ternary(false, "yes", "no"), "no");
/// ```
#[inline]
pub fn ternary<T>(condition: bool, when_true: T, when_false: T) -> T {
    if condition { when_true } else { when_false }
}
