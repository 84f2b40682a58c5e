//! Trimming, repetition, replacement and splitting.

use regex::Regex;

use super::error::StringError;

/// Removes leading and trailing spaces.
///
/// # Examples
///
/// ```rust
/// use rudash::string::trim;
///
/// assert_eq!(trim("  abc  "), "abc");
/// ```
pub fn trim(text: &str) -> &str {
    text.trim_matches(' ')
}

/// Removes leading and trailing characters found in `trim_chars`.
///
/// # Examples
///
/// ```rust
/// use rudash::string::trim_with;
///
/// assert_eq!(trim_with("-_-abc-_-", "_-"), "abc");
/// ```
pub fn trim_with<'a>(text: &'a str, trim_chars: &str) -> &'a str {
    text.trim_matches(|character: char| trim_chars.contains(character))
}

/// Removes leading spaces.
pub fn trim_start(text: &str) -> &str {
    text.trim_start_matches(' ')
}

/// Removes leading characters found in `trim_chars`.
pub fn trim_start_with<'a>(text: &'a str, trim_chars: &str) -> &'a str {
    text.trim_start_matches(|character: char| trim_chars.contains(character))
}

/// Removes trailing spaces.
pub fn trim_end(text: &str) -> &str {
    text.trim_end_matches(' ')
}

/// Removes trailing characters found in `trim_chars`.
///
/// # Examples
///
/// ```rust
/// use rudash::string::trim_end_with;
///
/// assert_eq!(trim_end_with("-_-abc-_-", "_-"), "-_-abc");
/// ```
pub fn trim_end_with<'a>(text: &'a str, trim_chars: &str) -> &'a str {
    text.trim_end_matches(|character: char| trim_chars.contains(character))
}

/// Repeats `text` `count` times.
///
/// # Examples
///
/// ```rust
/// use rudash::string::repeat;
///
/// assert_eq!(repeat("ABC", 2), "ABCABC");
/// assert_eq!(repeat("ABC", 0), "");
/// ```
pub fn repeat(text: &str, count: usize) -> String {
    text.repeat(count)
}

/// Replaces every occurrence of `target` with `replacement`.
///
/// # Examples
///
/// ```rust
/// use rudash::string::replace;
///
/// assert_eq!(replace("ABC-DEF-G", "-", "_"), "ABC_DEF_G");
/// ```
pub fn replace(text: &str, target: &str, replacement: &str) -> String {
    text.replace(target, replacement)
}

/// Replaces every match of the regular expression `pattern` with
/// `replacement`, which may refer to capture groups as `$1` or `$name`.
///
/// # Errors
///
/// Returns [`StringError::InvalidPattern`] if `pattern` does not compile.
///
/// # Examples
///
/// ```rust
/// use rudash::string::replace_regex;
///
/// assert_eq!(replace_regex("ABC_DEF_G", "[A-Z]", "*").unwrap(), "***_***_*");
/// assert_eq!(replace_regex("2024-05", r"(\d+)-(\d+)", "$2/$1").unwrap(), "05/2024");
/// assert!(replace_regex("abc", "(", "").is_err());
/// ```
pub fn replace_regex(text: &str, pattern: &str, replacement: &str) -> Result<String, StringError> {
    let compiled =
        Regex::new(pattern).map_err(|source| StringError::invalid_pattern(pattern, source))?;
    Ok(compiled.replace_all(text, replacement).into_owned())
}

/// Splits `text` around every occurrence of `separator`.
///
/// An empty separator splits into single characters.
///
/// # Examples
///
/// ```rust
/// use rudash::string::split;
///
/// assert_eq!(split("A-B-C", "-"), vec!["A", "B", "C"]);
/// assert_eq!(split("abc", ""), vec!["a", "b", "c"]);
/// ```
pub fn split(text: &str, separator: &str) -> Vec<String> {
    if separator.is_empty() {
        return text.chars().map(String::from).collect();
    }
    text.split(separator).map(String::from).collect()
}

/// Like [`split`], keeping at most the first `limit` pieces.
///
/// # Examples
///
/// ```rust
/// use rudash::string::split_with_count_limit;
///
/// assert_eq!(split_with_count_limit("A-B-C-D", "-", 2), vec!["A", "B"]);
/// assert_eq!(split_with_count_limit("A-B", "-", 100), vec!["A", "B"]);
/// ```
pub fn split_with_count_limit(text: &str, separator: &str, limit: usize) -> Vec<String> {
    let mut pieces = split(text, separator);
    pieces.truncate(limit);
    pieces
}
