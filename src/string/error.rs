//! Error type for the string utilities.

use thiserror::Error;

/// Failure of a string operation.
///
/// The only fallible operations are those compiling a caller-supplied
/// regular expression.
///
/// # Examples
///
/// ```
/// use rudash::string::{StringError, replace_regex};
///
/// let error = replace_regex("abc", "[", "x").unwrap_err();
/// assert!(matches!(error, StringError::InvalidPattern { ref pattern, .. } if pattern == "["));
/// assert!(error.to_string().starts_with("invalid regular expression `[`"));
/// ```
#[derive(Clone, Debug, Error)]
pub enum StringError {
    /// The pattern is not a valid regular expression.
    #[error("invalid regular expression `{pattern}`: {source}")]
    InvalidPattern {
        /// The rejected pattern.
        pattern: String,
        /// The parse or compile error reported by `regex`.
        #[source]
        source: regex::Error,
    },
}

impl StringError {
    pub(crate) fn invalid_pattern(pattern: &str, source: regex::Error) -> Self {
        tracing::warn!(pattern, error = %source, "rejected regular expression");
        Self::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        }
    }

    /// Returns the pattern that caused the error.
    pub fn pattern(&self) -> &str {
        match self {
            Self::InvalidPattern { pattern, .. } => pattern,
        }
    }
}
