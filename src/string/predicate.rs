//! Prefix and suffix checks. Positions and lengths count characters.

fn char_boundary(text: &str, position: usize) -> usize {
    text.char_indices()
        .nth(position)
        .map_or(text.len(), |(offset, _)| offset)
}

/// Returns `true` if `text` starts with `target`.
pub fn starts_with(text: &str, target: &str) -> bool {
    text.starts_with(target)
}

/// Returns `true` if the part of `text` from character `position` on starts
/// with `target`. A position past the end leaves an empty string.
///
/// # Examples
///
/// ```rust
/// use rudash::string::starts_with_from;
///
/// assert!(starts_with_from("Hello", "el", 1));
/// assert!(!starts_with_from("Hello", "el", 2));
/// ```
pub fn starts_with_from(text: &str, target: &str, position: usize) -> bool {
    text[char_boundary(text, position)..].starts_with(target)
}

/// Returns `true` if `text` ends with `target`.
pub fn ends_with(text: &str, target: &str) -> bool {
    text.ends_with(target)
}

/// Returns `true` if the first `position` characters of `text` end with
/// `target`. A position past the end considers the whole string.
///
/// # Examples
///
/// ```rust
/// use rudash::string::ends_with_from;
///
/// assert!(ends_with_from("Hello World", "l", 10));
/// assert!(!ends_with_from("Hello World", "l", 11));
/// assert!(ends_with_from("Hello World", "d", 100));
/// ```
pub fn ends_with_from(text: &str, target: &str, position: usize) -> bool {
    text[..char_boundary(text, position)].ends_with(target)
}

/// Returns `true` if the last `length` characters of `text` contain
/// `target`. A length past the end considers the whole string.
///
/// # Examples
///
/// ```rust
/// use rudash::string::ends_with_by_length;
///
/// assert!(ends_with_by_length("Hello World", "Wor", 5));
/// assert!(!ends_with_by_length("Hello World", "Wor", 4));
/// ```
pub fn ends_with_by_length(text: &str, target: &str, length: usize) -> bool {
    let skipped = text.chars().count().saturating_sub(length);
    text[char_boundary(text, skipped)..].contains(target)
}
