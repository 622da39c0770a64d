use crate::map::{Map, MapExt};
use crate::or::Or;
use crate::parser::{ParseResult, Parser};
use crate::stream::Stream;
use crate::unit::{DefaultParser, default};

/// Parser combinator that falls back to the default value of its output when the
/// parser fails recoverably
///
/// The fallback consumes nothing. A fatal failure is still propagated.
pub struct Maybe<P, T> {
    inner: Or<P, DefaultParser<T>>,
}

impl<'code, P, T> Parser<'code> for Maybe<P, T>
where
    P: Parser<'code, Output = T>,
    T: Default,
{
    type Output = T;

    fn parse(&self, input: Stream<'code>) -> ParseResult<'code, T> {
        self.inner.parse(input)
    }
}

/// Convenience function to create a Maybe parser
pub fn maybe<'code, P>(parser: P) -> Maybe<P, P::Output>
where
    P: Parser<'code>,
    P::Output: Default,
{
    Maybe {
        inner: Or::new(parser, default()),
    }
}

/// Parser combinator that yields `Some` value when the parser succeeds and `None`
/// without consuming input when it fails recoverably
pub struct Optional<P, T> {
    inner: Or<Map<P, fn(T) -> Option<T>>, DefaultParser<Option<T>>>,
}

impl<'code, P, T> Parser<'code> for Optional<P, T>
where
    P: Parser<'code, Output = T>,
{
    type Output = Option<T>;

    fn parse(&self, input: Stream<'code>) -> ParseResult<'code, Option<T>> {
        self.inner.parse(input)
    }
}

/// Convenience function to create an Optional parser
pub fn optional<'code, P>(parser: P) -> Optional<P, P::Output>
where
    P: Parser<'code>,
{
    Optional {
        inner: Or::new(parser.map(Some as fn(P::Output) -> Option<P::Output>), default()),
    }
}
