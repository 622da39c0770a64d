use crate::failure::Failure;
use crate::parser::{ParseResult, Parser};
use crate::stream::Stream;

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// Both parsers see the same input. If the first failure is fatal the second parser is
/// never tried. If both fail, the failures are merged with [`Failure::extend`], so
/// a fatal second failure only survives when it got further than the first.
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<'code, P1, P2, O> Parser<'code> for Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    type Output = O;

    fn parse(&self, input: Stream<'code>) -> ParseResult<'code, O> {
        match self.parser1.parse(input) {
            Ok(success) => Ok(success),
            Err(first) if first.is_fatal() => Err(first),
            Err(first) => self.parser2.parse(input).map_err(|second| first.extend(second)),
        }
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'code, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create an Or parser
pub fn or<'code, P1, P2, O>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    Or::new(parser1, parser2)
}

/// Parser combinator that tries each parser of a list in order until one succeeds
///
/// Follows the same rules as [`Or`]. If every parser fails, the failure carries all
/// accumulated expectations; an empty list fails with no expectations.
pub struct Choice<P> {
    parsers: Vec<P>,
}

impl<P> Choice<P> {
    pub fn new(parsers: Vec<P>) -> Self {
        Choice { parsers }
    }
}

impl<'code, P> Parser<'code> for Choice<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, input: Stream<'code>) -> ParseResult<'code, Self::Output> {
        let mut failure: Option<Failure<'code>> = None;

        for parser in &self.parsers {
            match parser.parse(input) {
                Ok(success) => return Ok(success),
                Err(next) if next.is_fatal() => return Err(next),
                Err(next) => {
                    failure = Some(match failure {
                        Some(acc) => acc.extend(next),
                        None => next,
                    });
                }
            }
        }

        Err(failure.unwrap_or_else(|| Failure::new(input)))
    }
}

/// Convenience function to create a Choice parser
pub fn choice<'code, P>(parsers: impl IntoIterator<Item = P>) -> Choice<P>
where
    P: Parser<'code>,
{
    Choice::new(parsers.into_iter().collect())
}
