use crate::fragment::Fragment;
use crate::parser::{ParseResult, Parser};
use crate::stream::Stream;
use crate::success::{Success, join_matched};
use std::borrow::Cow;

/// Run `parser` repeatedly from `input`, handing every value to `push`.
///
/// Stops at the first recoverable failure once `min` values were collected. A fatal
/// failure, or any failure before `min` values, is propagated. A step that succeeds
/// without consuming input ends the repetition after being recorded once.
fn repeat<'code, P>(
    parser: &P,
    input: Stream<'code>,
    min: usize,
    mut push: impl FnMut(P::Output),
) -> ParseResult<'code, ()>
where
    P: Parser<'code>,
{
    let mut next = input;
    let mut matched: Cow<'code, str> = Cow::Borrowed("");
    let mut count = 0;

    loop {
        match parser.parse(next) {
            Ok(success) => {
                let progressed = success.next.cursor() > next.cursor();
                matched = join_matched(input, next, success.next, matched, success.matched);
                push(success.value);
                next = success.next;
                count += 1;
                if !progressed {
                    break;
                }
            }
            Err(failure) if failure.is_fatal() || count < min => return Err(failure),
            Err(_) => break,
        }
    }

    Ok(Success::new((), next, input, matched))
}

/// Parser combinator that matches zero or more occurrences of the given parser and
/// concatenates their values into a `String`
///
/// Always succeeds unless the parser fails fatally. When nothing matches the value is
/// the empty string and no input is consumed.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<'code, P> Parser<'code> for Many<P>
where
    P: Parser<'code>,
    P::Output: Fragment,
{
    type Output = String;

    fn parse(&self, input: Stream<'code>) -> ParseResult<'code, String> {
        let mut buf = String::new();
        let success = repeat(&self.parser, input, 0, |value| value.push_to(&mut buf))?;
        Ok(success.map(|()| buf))
    }
}

/// Convenience function to create a Many parser
pub fn many<'code, P>(parser: P) -> Many<P>
where
    P: Parser<'code>,
    P::Output: Fragment,
{
    Many::new(parser)
}

/// Parser combinator that matches one or more occurrences of the given parser and
/// concatenates their values into a `String`
///
/// Fails, with the parser's own failure, only if the very first attempt fails.
pub struct Many1<P> {
    parser: P,
}

impl<P> Many1<P> {
    pub fn new(parser: P) -> Self {
        Many1 { parser }
    }
}

impl<'code, P> Parser<'code> for Many1<P>
where
    P: Parser<'code>,
    P::Output: Fragment,
{
    type Output = String;

    fn parse(&self, input: Stream<'code>) -> ParseResult<'code, String> {
        let mut buf = String::new();
        let success = repeat(&self.parser, input, 1, |value| value.push_to(&mut buf))?;
        Ok(success.map(|()| buf))
    }
}

/// Convenience function to create a Many1 parser
pub fn many1<'code, P>(parser: P) -> Many1<P>
where
    P: Parser<'code>,
    P::Output: Fragment,
{
    Many1::new(parser)
}

/// Like [`Many`], but collects the values into a `Vec`
pub struct ManyVec<P> {
    parser: P,
}

impl<P> ManyVec<P> {
    pub fn new(parser: P) -> Self {
        ManyVec { parser }
    }
}

impl<'code, P> Parser<'code> for ManyVec<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, input: Stream<'code>) -> ParseResult<'code, Self::Output> {
        let mut results = Vec::new();
        let success = repeat(&self.parser, input, 0, |value| results.push(value))?;
        Ok(success.map(|()| results))
    }
}

/// Convenience function to create a ManyVec parser
pub fn many_vec<'code, P>(parser: P) -> ManyVec<P>
where
    P: Parser<'code>,
{
    ManyVec::new(parser)
}

/// Like [`Many1`], but collects the values into a `Vec`
pub struct Many1Vec<P> {
    parser: P,
}

impl<P> Many1Vec<P> {
    pub fn new(parser: P) -> Self {
        Many1Vec { parser }
    }
}

impl<'code, P> Parser<'code> for Many1Vec<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, input: Stream<'code>) -> ParseResult<'code, Self::Output> {
        let mut results = Vec::new();
        let success = repeat(&self.parser, input, 1, |value| results.push(value))?;
        Ok(success.map(|()| results))
    }
}

/// Convenience function to create a Many1Vec parser
pub fn many1_vec<'code, P>(parser: P) -> Many1Vec<P>
where
    P: Parser<'code>,
{
    Many1Vec::new(parser)
}
