use crate::parser::{ParseResult, Parser};
use crate::stream::Stream;
use std::borrow::Cow;

/// Values that can be appended to a string; the values of string-valued repetition
pub trait Fragment {
    fn push_to(self, buf: &mut String);
}

impl Fragment for char {
    fn push_to(self, buf: &mut String) {
        buf.push(self);
    }
}

impl Fragment for &str {
    fn push_to(self, buf: &mut String) {
        buf.push_str(self);
    }
}

impl Fragment for String {
    fn push_to(self, buf: &mut String) {
        if buf.is_empty() {
            *buf = self;
        } else {
            buf.push_str(&self);
        }
    }
}

impl Fragment for Cow<'_, str> {
    fn push_to(self, buf: &mut String) {
        buf.push_str(&self);
    }
}

/// Parser combinator that turns a fragment-valued parser into a `String`-valued one
pub struct Text<P> {
    parser: P,
}

impl<P> Text<P> {
    pub fn new(parser: P) -> Self {
        Text { parser }
    }
}

impl<'code, P> Parser<'code> for Text<P>
where
    P: Parser<'code>,
    P::Output: Fragment,
{
    type Output = String;

    fn parse(&self, input: Stream<'code>) -> ParseResult<'code, String> {
        self.parser.parse(input).map(|success| {
            success.map(|value| {
                let mut buf = String::new();
                value.push_to(&mut buf);
                buf
            })
        })
    }
}

/// Extension trait to add .text() method support for parsers
pub trait TextExt<'code>: Parser<'code> + Sized
where
    Self::Output: Fragment,
{
    fn text(self) -> Text<Self> {
        Text::new(self)
    }
}

impl<'code, P> TextExt<'code> for P
where
    P: Parser<'code>,
    P::Output: Fragment,
{
}

/// Convenience function to create a Text parser
pub fn text<'code, P>(parser: P) -> Text<P>
where
    P: Parser<'code>,
    P::Output: Fragment,
{
    Text::new(parser)
}
