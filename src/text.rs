//! Multi-character literals.

use crate::failure::Failure;
use crate::fragment::Fragment;
use crate::parser::{ParseResult, Parser};
use crate::sat::sat;
use crate::stream::Stream;
use crate::success::{Success, join_matched};
use std::borrow::Cow;

/// Parser that matches an exact string, character by character
///
/// The value is the literal itself. On a mismatch the failure is at the first
/// character that differs and expects the quoted literal. An empty literal succeeds
/// without consuming input.
#[derive(Debug, Clone)]
pub struct ExactString {
    literal: Cow<'static, str>,
    description: Cow<'static, str>,
}

impl ExactString {
    pub fn new(literal: impl Into<Cow<'static, str>>) -> Self {
        let literal = literal.into();
        let description = Cow::Owned(format!("\"{literal}\""));
        ExactString {
            literal,
            description,
        }
    }
}

impl<'code> Parser<'code> for ExactString {
    type Output = Cow<'static, str>;

    fn parse(&self, input: Stream<'code>) -> ParseResult<'code, Self::Output> {
        let mut next = input;
        for c in self.literal.chars() {
            next = match sat(|i| i == c).parse(next) {
                Ok(success) => success.next,
                Err(failure) => {
                    return Err(Failure::expecting(
                        failure.position(),
                        self.description.clone(),
                    ));
                }
            };
        }
        Ok(Success::spanning(self.literal.clone(), input, next))
    }
}

/// Convenience function to create an ExactString parser
pub fn exact_string(literal: impl Into<Cow<'static, str>>) -> ExactString {
    ExactString::new(literal)
}

/// Parser that runs a list of string-valued parsers in order and concatenates their
/// values
///
/// Stops at the first failure. An empty list succeeds with the empty string.
pub struct ConcatAll<P> {
    parts: Vec<P>,
}

impl<P> ConcatAll<P> {
    pub fn new(parts: Vec<P>) -> Self {
        ConcatAll { parts }
    }
}

impl<'code, P> Parser<'code> for ConcatAll<P>
where
    P: Parser<'code>,
    P::Output: Fragment,
{
    type Output = String;

    fn parse(&self, input: Stream<'code>) -> ParseResult<'code, String> {
        let mut value = String::new();
        let mut next = input;
        let mut matched: Cow<'code, str> = Cow::Borrowed("");

        for part in &self.parts {
            let success = part.parse(next)?;
            success.value.push_to(&mut value);
            matched = join_matched(input, next, success.next, matched, success.matched);
            next = success.next;
        }

        Ok(Success::new(value, next, input, matched))
    }
}

/// Convenience function to create a ConcatAll parser
pub fn concat_all<'code, P>(parts: impl IntoIterator<Item = P>) -> ConcatAll<P>
where
    P: Parser<'code>,
    P::Output: Fragment,
{
    ConcatAll::new(parts.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chars::{digit, exact_char};
    use crate::fragment::TextExt;
    use crate::many::many1;
    use crate::maybe::maybe;
    use crate::parser::BoxedExt;

    #[test]
    fn test_exact_string() {
        let success = exact_string("omg").parse(Stream::new("omglol")).unwrap();

        assert_eq!(success.value, "omg");
        assert_eq!(success.matched, "omg");
        assert_eq!(success.next.cursor(), 3);
        assert!(matches!(success.matched, Cow::Borrowed(_)));
    }

    #[test]
    fn test_exact_string_fails_at_first_difference() {
        let failure = exact_string("HTTP/").parse(Stream::new("HTTX/")).unwrap_err();

        assert_eq!(failure.position().cursor(), 3);
        assert_eq!(failure.expected(), ["\"HTTP/\""]);
        assert!(!failure.is_fatal());
    }

    #[test]
    fn test_exact_string_past_end() {
        let failure = exact_string("omg").parse(Stream::new("om")).unwrap_err();
        assert_eq!(failure.position().cursor(), 2);
    }

    #[test]
    fn test_empty_exact_string() {
        let input = Stream::new("abc");
        let success = exact_string("").parse(input).unwrap();

        assert_eq!(success.value, "");
        assert_eq!(success.next, input);
    }

    #[test]
    fn test_exact_string_owned_literal() {
        let literal = String::from("ñandú");
        let success = exact_string(literal).parse(Stream::new("ñandú!")).unwrap();
        assert_eq!(success.value, "ñandú");
        assert_eq!(success.next.cursor(), "ñandú".len());
    }

    #[test]
    fn test_concat_all() {
        let parser = concat_all(vec![
            maybe(exact_char('-').text()).boxed(),
            many1(digit()).boxed(),
            exact_string("px").text().boxed(),
        ]);
        let success = parser.parse(Stream::new("-12px;")).unwrap();

        assert_eq!(success.value, "-12px");
        assert_eq!(success.matched, "-12px");
        assert_eq!(success.next.cursor(), 5);

        let failure = parser.parse(Stream::new("12em")).unwrap_err();
        assert_eq!(failure.position().cursor(), 2);
        assert_eq!(failure.expected(), ["\"px\""]);
    }

    #[test]
    fn test_concat_all_empty() {
        let parser = concat_all(Vec::<ExactString>::new());
        let success = parser.parse(Stream::new("abc")).unwrap();
        assert_eq!(success.value, "");
        assert_eq!(success.next.cursor(), 0);
    }
}
