//! Case conversion.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::function::ternary;

static SPACE_THEN_CHAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s(.)").expect("Invalid word start regex pattern"));

static SEPARATOR_THEN_LETTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([\d.,\-_])[a-zA-Z]").expect("Invalid separated letter regex pattern")
});

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s").expect("Invalid whitespace regex pattern"));

static FIRST_CHAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.)").expect("Invalid first char regex pattern"));

/// Case of the first character produced by [`camel_case_with_init`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InitCase {
    /// `helloWorld`
    #[default]
    Lower,
    /// `HelloWorld`
    Upper,
}

fn upper_match(captures: &Captures<'_>) -> String {
    captures[0].to_uppercase()
}

fn lower_match(captures: &Captures<'_>) -> String {
    captures[0].to_lowercase()
}

/// Converts `text` to camel case with a lower case first character.
///
/// Letters after whitespace and after a digit or one of `. , - _` become
/// upper case; whitespace is removed. Other separators are kept.
///
/// # Examples
///
/// ```rust
/// use rudash::string::camel_case;
///
/// assert_eq!(camel_case("Hello world"), "helloWorld");
/// assert_eq!(camel_case("001hello from gin"), "001HelloFromGin");
/// assert_eq!(camel_case("aa-bb-cc"), "aa-Bb-Cc");
/// ```
pub fn camel_case(text: &str) -> String {
    camel_case_with_init(text, InitCase::Lower)
}

/// Like [`camel_case`], with the case of the first character chosen by
/// `init`.
///
/// # Examples
///
/// ```rust
/// use rudash::string::{InitCase, camel_case_with_init};
///
/// assert_eq!(camel_case_with_init("Hello world", InitCase::Upper), "HelloWorld");
/// assert_eq!(camel_case_with_init("aa-bb-cc", InitCase::Upper), "Aa-Bb-Cc");
/// ```
pub fn camel_case_with_init(text: &str, init: InitCase) -> String {
    let first_case = ternary(
        init == InitCase::Upper,
        upper_match as fn(&Captures<'_>) -> String,
        lower_match,
    );

    let words = SPACE_THEN_CHAR.replace_all(text, upper_match);
    let separated = SEPARATOR_THEN_LETTER.replace_all(&words, upper_match);
    let joined = WHITESPACE.replace_all(&separated, "");
    FIRST_CHAR.replace(&joined, first_case).into_owned()
}

/// Upper-cases the first letter of every word and leaves the other
/// characters untouched.
///
/// A word is a run of alphanumeric characters; an apostrophe inside a word
/// does not end it.
///
/// # Examples
///
/// ```rust
/// use rudash::string::capitalize;
///
/// assert_eq!(capitalize("jerry"), "Jerry");
/// assert_eq!(capitalize("hello wORLD, it's me"), "Hello WORLD, It's Me");
/// ```
pub fn capitalize(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut in_word = false;
    for character in text.chars() {
        if !in_word && character.is_alphabetic() {
            result.extend(character.to_uppercase());
        } else {
            result.push(character);
        }
        in_word = character.is_alphanumeric() || (in_word && character == '\'');
    }
    result
}

fn map_first(text: &str, convert: impl FnOnce(char) -> String) -> String {
    let mut characters = text.chars();
    characters.next().map_or_else(String::new, |first| {
        let mut result = convert(first);
        result.push_str(characters.as_str());
        result
    })
}

/// Converts the first character to upper case.
///
/// # Examples
///
/// ```rust
/// use rudash::string::upper_first;
///
/// assert_eq!(upper_first("fred"), "Fred");
/// assert_eq!(upper_first("FRED"), "FRED");
/// ```
pub fn upper_first(text: &str) -> String {
    map_first(text, |first| first.to_uppercase().collect())
}

/// Converts the first character to lower case.
///
/// # Examples
///
/// ```rust
/// use rudash::string::lower_first;
///
/// assert_eq!(lower_first("AA"), "aA");
/// assert_eq!(lower_first(""), "");
/// ```
pub fn lower_first(text: &str) -> String {
    map_first(text, |first| first.to_lowercase().collect())
}

/// Converts the whole string to lower case.
pub fn to_lower(text: &str) -> String {
    text.to_lowercase()
}

/// Converts the whole string to upper case.
pub fn to_upper(text: &str) -> String {
    text.to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Hello world", "helloWorld")]
    #[case("Hello World from Ginkgo", "helloWorldFromGinkgo")]
    #[case("001hello from gin", "001HelloFromGin")]
    #[case("0aa1bb2cc", "0Aa1Bb2Cc")]
    #[case("aa-bb-cc", "aa-Bb-Cc")]
    #[case("", "")]
    fn test_camel_case(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(camel_case(input), expected);
    }

    #[rstest]
    #[case("Hello world", "HelloWorld")]
    #[case("Hello World from Ginkgo", "HelloWorldFromGinkgo")]
    #[case("001hello from gin", "001HelloFromGin")]
    #[case("0aa1bb2cc", "0Aa1Bb2Cc")]
    #[case("aa-bb-cc", "Aa-Bb-Cc")]
    fn test_camel_case_with_upper_init(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(camel_case_with_init(input, InitCase::Upper), expected);
    }

    #[rstest]
    fn test_init_case_default_is_lower() {
        assert_eq!(InitCase::default(), InitCase::Lower);
    }

    #[rstest]
    #[case("jerry", "Jerry")]
    #[case("", "")]
    #[case("  two  words", "  Two  Words")]
    #[case("ábc déf", "Ábc Déf")]
    #[case("'quoted'", "'Quoted'")]
    #[case("2nd place", "2nd Place")]
    fn test_capitalize(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(capitalize(input), expected);
    }

    #[rstest]
    #[case("", "")]
    #[case("a", "A")]
    #[case("ßa", "SSa")]
    #[case("éclair", "Éclair")]
    fn test_upper_first(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(upper_first(input), expected);
    }

    #[rstest]
    #[case("", "")]
    #[case("A", "a")]
    #[case("AA", "aA")]
    #[case("Élan", "élan")]
    fn test_lower_first(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(lower_first(input), expected);
    }

    #[rstest]
    fn test_whole_string_case() {
        assert_eq!(to_lower("ABC-Def"), "abc-def");
        assert_eq!(to_upper("abc-Def"), "ABC-DEF");
    }
}
