//! String utilities.
//!
//! All lengths and positions count Unicode scalar values (`char`s), never
//! bytes, so multi-byte text pads, slices and compares as it reads.
//!
//! - **Case**: [`camel_case`], [`camel_case_with_init`], [`capitalize`],
//!   [`upper_first`], [`lower_first`], [`to_lower`], [`to_upper`]
//! - **Padding**: [`pad`], [`pad_left`], [`pad_right`] and their `_with`
//!   variants taking a pad-character cycle
//! - **Escaping**: [`escape`], [`unescape`], [`escape_reg_exp`]
//! - **Predicates**: [`starts_with`], [`starts_with_from`], [`ends_with`],
//!   [`ends_with_from`], [`ends_with_by_length`]
//! - **Transforms**: [`trim`] and friends, [`repeat`], [`replace`],
//!   [`replace_regex`], [`split`], [`split_with_count_limit`]
//!
//! Built-in patterns are compiled once. Only [`replace_regex`], which
//! compiles a caller-supplied pattern, can fail.
//!
//! # Examples
//!
//! ```rust
//! use rudash::string::{camel_case, escape, pad_with, upper_first};
//!
//! assert_eq!(camel_case("Hello World from Ginkgo"), "helloWorldFromGinkgo");
//! assert_eq!(pad_with("ABC", 7, "-+"), "-+ABC-+");
//! assert_eq!(escape("a < b"), "a &lt; b");
//! assert_eq!(upper_first("fred"), "Fred");
//! ```

mod case;
mod error;
mod escape;
mod pad;
mod predicate;
mod transform;

pub use case::{
    InitCase, camel_case, camel_case_with_init, capitalize, lower_first, to_lower, to_upper,
    upper_first,
};
pub use error::StringError;
pub use escape::{escape, escape_reg_exp, unescape};
pub use pad::{pad, pad_left, pad_left_with, pad_right, pad_right_with, pad_with};
pub use predicate::{ends_with, ends_with_by_length, ends_with_from, starts_with, starts_with_from};
pub use transform::{
    repeat, replace, replace_regex, split, split_with_count_limit, trim, trim_end, trim_end_with,
    trim_start, trim_start_with, trim_with,
};
