use crate::parser::{ParseResult, Parser};
use crate::stream::Stream;
use std::borrow::Cow;

/// Parser combinator that replaces the expectations of a failure with a single description
///
/// Position and fatality of the failure are kept, so a labelled parser still reports
/// how far it got. Successes pass through untouched.
pub struct Label<P> {
    parser: P,
    description: Cow<'static, str>,
}

impl<P> Label<P> {
    pub fn new(parser: P, description: impl Into<Cow<'static, str>>) -> Self {
        Label {
            parser,
            description: description.into(),
        }
    }
}

impl<'code, P> Parser<'code> for Label<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, input: Stream<'code>) -> ParseResult<'code, Self::Output> {
        self.parser
            .parse(input)
            .map_err(|failure| failure.with_expected(self.description.clone()))
    }
}

/// Extension trait to add .expected() method support for parsers
pub trait LabelExt<'code>: Parser<'code> + Sized {
    fn expected(self, description: impl Into<Cow<'static, str>>) -> Label<Self> {
        Label::new(self, description)
    }
}

/// Implement LabelExt for all parsers
impl<'code, P> LabelExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a Label parser
pub fn expected<'code, P>(parser: P, description: impl Into<Cow<'static, str>>) -> Label<P>
where
    P: Parser<'code>,
{
    Label::new(parser, description)
}
