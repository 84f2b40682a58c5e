//! Padding to a target length.
//!
//! Lengths count characters. Each side restarts the pad-character cycle, so
//! `pad_with("ABC", 8, "-+")` is `"-+ABC-+-"`.

#[derive(Clone, Copy)]
enum Side {
    Both,
    Left,
    Right,
}

fn cycle(pad_chars: &str, count: usize) -> impl Iterator<Item = char> + '_ {
    pad_chars.chars().cycle().take(count)
}

fn pad_on(text: &str, length: usize, pad_chars: &str, side: Side) -> String {
    let current = text.chars().count();
    if current >= length {
        return text.to_string();
    }
    let pad_chars = if pad_chars.is_empty() { " " } else { pad_chars };
    let missing = length - current;
    let left = match side {
        Side::Both => missing / 2,
        Side::Left => missing,
        Side::Right => 0,
    };

    let mut result = String::with_capacity(text.len() + missing * pad_chars.len());
    result.extend(cycle(pad_chars, left));
    result.push_str(text);
    result.extend(cycle(pad_chars, missing - left));
    result
}

/// Pads `text` on both sides with spaces up to `length` characters. When the
/// padding is uneven, the extra character goes on the right.
///
/// # Examples
///
/// ```rust
/// use rudash::string::pad;
///
/// assert_eq!(pad("ABC", 2), "ABC");
/// assert_eq!(pad("ABC", 4), "ABC ");
/// assert_eq!(pad("ABC", 5), " ABC ");
/// ```
pub fn pad(text: &str, length: usize) -> String {
    pad_with(text, length, " ")
}

/// Pads `text` on the left with spaces up to `length` characters.
pub fn pad_left(text: &str, length: usize) -> String {
    pad_left_with(text, length, " ")
}

/// Pads `text` on the right with spaces up to `length` characters.
pub fn pad_right(text: &str, length: usize) -> String {
    pad_right_with(text, length, " ")
}

/// Like [`pad`], cycling through `pad_chars`. An empty `pad_chars` pads
/// with spaces.
///
/// # Examples
///
/// ```rust
/// use rudash::string::pad_with;
///
/// assert_eq!(pad_with("ABC", 5, "-+"), "-ABC-");
/// assert_eq!(pad_with("ABC", 8, "-+"), "-+ABC-+-");
/// ```
pub fn pad_with(text: &str, length: usize, pad_chars: &str) -> String {
    pad_on(text, length, pad_chars, Side::Both)
}

/// Like [`pad_left`], cycling through `pad_chars`.
///
/// # Examples
///
/// ```rust
/// use rudash::string::pad_left_with;
///
/// assert_eq!(pad_left_with("ABC", 7, "-+"), "-+-+ABC");
/// ```
pub fn pad_left_with(text: &str, length: usize, pad_chars: &str) -> String {
    pad_on(text, length, pad_chars, Side::Left)
}

/// Like [`pad_right`], cycling through `pad_chars`.
///
/// # Examples
///
/// ```rust
/// use rudash::string::pad_right_with;
///
/// assert_eq!(pad_right_with("ABC", 7, "-+"), "ABC-+-+");
/// ```
pub fn pad_right_with(text: &str, length: usize, pad_chars: &str) -> String {
    pad_on(text, length, pad_chars, Side::Right)
}
