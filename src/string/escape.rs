//! HTML entity and regular expression escaping.

/// Converts `& < > " '` to their HTML entities.
///
/// # Examples
///
/// ```rust
/// use rudash::string::escape;
///
/// assert_eq!(escape("<>"), "&lt;&gt;");
/// assert_eq!(escape(r#"fred, "barney" & 'pebbles'"#), "fred, &#34;barney&#34; &amp; &#39;pebbles&#39;");
/// ```
pub fn escape(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for character in text.chars() {
        match character {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&#34;"),
            '\'' => result.push_str("&#39;"),
            other => result.push(other),
        }
    }
    result
}

/// The inverse of [`escape`]: converts HTML character references back to
/// characters.
///
/// Decoding follows the HTML rules for text content: every named entity is
/// recognized, legacy names such as `&amp` need no trailing semicolon, and
/// numeric references to NUL, surrogates or out-of-range code points become
/// U+FFFD. Text that is not a reference stays as is.
///
/// # Examples
///
/// ```rust
/// use rudash::string::unescape;
///
/// assert_eq!(unescape("&lt;&gt;"), "<>");
/// assert_eq!(unescape("fred &amp; &#x27;pebbles&#39;"), "fred & 'pebbles'");
/// assert_eq!(unescape("&copy; 2024"), "\u{a9} 2024");
/// assert_eq!(unescape("&unknown;"), "&unknown;");
/// ```
pub fn unescape(text: &str) -> String {
    htmlize::unescape(text).into_owned()
}

/// Escapes the regular expression meta characters in `text`, so the result
/// matches `text` literally.
///
/// # Examples
///
/// ```rust
/// use rudash::string::escape_reg_exp;
///
/// assert_eq!(escape_reg_exp("[lodash](https://lodash.com/)"), r"\[lodash\]\(https://lodash\.com/\)");
/// ```
pub fn escape_reg_exp(text: &str) -> String {
    regex::escape(text)
}
