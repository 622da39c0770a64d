//! Character classes and the single-character parsers built on them.
//!
//! Every single-character parser is a [`sat`] over a classifier, labelled with a
//! description of what it accepts.

use crate::label::expected;
use crate::many::{many, many1};
use crate::parser::Parser;
use crate::sat::sat;

pub use crate::sat::item;

/// Returns true if `c` is an ASCII digit
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Returns true if `c` is whitespace
pub fn is_space(c: char) -> bool {
    c.is_whitespace()
}

/// Returns true if `c` is an ASCII letter, an ASCII digit or the underscore
pub fn is_alphanum(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Returns true if `c` is an ASCII letter
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Returns true if `c` is an upper case ASCII letter
pub fn is_upper(c: char) -> bool {
    c.is_ascii_uppercase()
}

/// Returns true if `c` is a lower case ASCII letter
pub fn is_lower(c: char) -> bool {
    c.is_ascii_lowercase()
}

/// The inverse of a predicate
pub fn negate(predicate: impl Fn(char) -> bool) -> impl Fn(char) -> bool {
    move |c| !predicate(c)
}

pub fn digit() -> impl for<'code> Parser<'code, Output = char> {
    expected(sat(is_digit), "a digit")
}

pub fn space() -> impl for<'code> Parser<'code, Output = char> {
    expected(sat(is_space), "whitespace")
}

pub fn alphanum() -> impl for<'code> Parser<'code, Output = char> {
    expected(sat(is_alphanum), "a word character")
}

pub fn letter() -> impl for<'code> Parser<'code, Output = char> {
    expected(sat(is_letter), "a letter")
}

pub fn upper() -> impl for<'code> Parser<'code, Output = char> {
    expected(sat(is_upper), "an upper case letter")
}

pub fn lower() -> impl for<'code> Parser<'code, Output = char> {
    expected(sat(is_lower), "a lower case letter")
}

pub fn not_digit() -> impl for<'code> Parser<'code, Output = char> {
    expected(sat(negate(is_digit)), "a non-digit")
}

pub fn not_space() -> impl for<'code> Parser<'code, Output = char> {
    expected(sat(negate(is_space)), "a non-whitespace character")
}

pub fn not_alphanum() -> impl for<'code> Parser<'code, Output = char> {
    expected(sat(negate(is_alphanum)), "a non-word character")
}

pub fn not_letter() -> impl for<'code> Parser<'code, Output = char> {
    expected(sat(negate(is_letter)), "a non-letter")
}

pub fn not_upper() -> impl for<'code> Parser<'code, Output = char> {
    expected(sat(negate(is_upper)), "anything but an upper case letter")
}

pub fn not_lower() -> impl for<'code> Parser<'code, Output = char> {
    expected(sat(negate(is_lower)), "anything but a lower case letter")
}

/// Matches exactly the character `c`
pub fn exact_char(c: char) -> impl for<'code> Parser<'code, Output = char> {
    expected(sat(move |i| i == c), format!("the character \"{c}\""))
}

/// Matches any single character except `c`
pub fn not_char(c: char) -> impl for<'code> Parser<'code, Output = char> {
    expected(sat(move |i| i != c), format!("anything but the character \"{c}\""))
}

/// Zero or more whitespace characters
pub fn spaces() -> impl for<'code> Parser<'code, Output = String> {
    many(space())
}

/// One or more whitespace characters
pub fn spaces1() -> impl for<'code> Parser<'code, Output = String> {
    expected(many1(space()), "whitespace")
}

/// Zero or more non-whitespace characters
pub fn not_spaces() -> impl for<'code> Parser<'code, Output = String> {
    many(sat(negate(is_space)))
}

/// One or more non-whitespace characters
pub fn not_spaces1() -> impl for<'code> Parser<'code, Output = String> {
    expected(
        many1(sat(negate(is_space))),
        "one or more non-whitespace characters",
    )
}
