use crate::parser::{ParseResult, Parser};
use crate::stream::Stream;
use crate::success::{Success, join_matched};

/// Parser combinator that runs a parser and feeds its value to a continuation
/// which picks the parser to run next.
///
/// The continuation receives the first value and the stream the sequence started
/// at. The result spans both parsers and its matched text is their concatenation.
/// A failure from either side is returned unchanged; a success of the first parser
/// is never undone.
///
/// Example:
/// ```
/// use charcomb::chars::{exact_char, item};
/// use charcomb::map::MapExt;
/// use charcomb::parser::execute;
/// use charcomb::seq::SeqExt;
///
/// let pair = item().then(|first, _| {
///     exact_char('=').then(move |_, _| item().map(move |second| (first, second)))
/// });
/// assert_eq!(execute(&pair, "a=b").unwrap(), ('a', 'b'));
/// ```
pub struct Seq<P, F> {
    parser: P,
    continuation: F,
}

impl<P, F> Seq<P, F> {
    pub fn new(parser: P, continuation: F) -> Self {
        Seq {
            parser,
            continuation,
        }
    }
}

impl<'code, P, F, Q> Parser<'code> for Seq<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output, Stream<'code>) -> Q,
    Q: Parser<'code>,
{
    type Output = Q::Output;

    fn parse(&self, input: Stream<'code>) -> ParseResult<'code, Self::Output> {
        let first = self.parser.parse(input)?;
        let second = (self.continuation)(first.value, input).parse(first.next)?;
        let matched = join_matched(
            input,
            first.next,
            second.next,
            first.matched,
            second.matched,
        );
        Ok(Success::new(second.value, second.next, input, matched))
    }
}

/// Extension trait to add .then() method support for parsers
pub trait SeqExt<'code>: Parser<'code> + Sized {
    fn then<F, Q>(self, continuation: F) -> Seq<Self, F>
    where
        F: Fn(Self::Output, Stream<'code>) -> Q,
        Q: Parser<'code>,
    {
        Seq::new(self, continuation)
    }
}

/// Implement SeqExt for all parsers
impl<'code, P> SeqExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a Seq parser
pub fn seq<'code, P, F, Q>(parser: P, continuation: F) -> Seq<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output, Stream<'code>) -> Q,
    Q: Parser<'code>,
{
    Seq::new(parser, continuation)
}

/// Parser combinator that runs a list of parsers one after the other
///
/// Stops at the first failure. The value is that of the last step and the matched
/// text covers every step. An empty list succeeds with the default value without
/// consuming input.
pub struct SeqAll<P> {
    steps: Vec<P>,
}

impl<P> SeqAll<P> {
    pub fn new(steps: Vec<P>) -> Self {
        SeqAll { steps }
    }
}

impl<'code, P> Parser<'code> for SeqAll<P>
where
    P: Parser<'code>,
    P::Output: Default,
{
    type Output = P::Output;

    fn parse(&self, input: Stream<'code>) -> ParseResult<'code, Self::Output> {
        let mut acc = Success::new(P::Output::default(), input, input, "");

        for step in &self.steps {
            let success = step.parse(acc.next)?;
            let matched =
                join_matched(input, acc.next, success.next, acc.matched, success.matched);
            acc = Success::new(success.value, success.next, input, matched);
        }

        Ok(acc)
    }
}

/// Convenience function to create a SeqAll parser
pub fn seq_all<'code, P>(steps: impl IntoIterator<Item = P>) -> SeqAll<P>
where
    P: Parser<'code>,
{
    SeqAll::new(steps.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chars::exact_char;
    use crate::parser::BoxedExt;
    use crate::sat::{item, sat};
    use crate::unit::unit;
    use std::borrow::Cow;

    #[test]
    fn test_seq_two_items() {
        let two = seq(item(), |first, _| {
            seq(item(), move |second, _| unit(format!("{first}{second}")))
        });
        let success = two.parse(Stream::new("hi")).unwrap();

        assert_eq!(success.value, "hi");
        assert_eq!(success.matched, "hi");
        assert_eq!(success.start.cursor(), 0);
        assert_eq!(success.next.cursor(), 2);
        assert!(success.next.at_end());
        assert!(matches!(success.matched, Cow::Borrowed(_)));
    }

    #[test]
    fn test_seq_chain_of_chars() {
        let parser = exact_char('o').then(|_, _| {
            exact_char('h').then(|_, _| {
                exact_char('a').then(|_, _| exact_char('i').then(|_, _| unit("lol")))
            })
        });
        let success = parser.parse(Stream::new("ohai lol")).unwrap();

        assert_eq!(success.value, "lol");
        assert_eq!(success.matched, "ohai");
        assert_eq!(success.start.cursor(), 0);
        assert_eq!(success.next.cursor(), 4);
    }

    #[test]
    fn test_seq_continuation_sees_start() {
        let parser = item().then(|_, start| unit(start.cursor()));
        let input = Stream::new("abc").next().unwrap();
        let success = parser.parse(input).unwrap();

        assert_eq!(success.value, 1);
        assert_eq!(success.next.cursor(), 2);
    }

    #[test]
    fn test_seq_second_failure_not_undone() {
        let parser = item().then(|_, _| sat(|c| c == 'l'));
        let failure = parser.parse(Stream::new("omg")).unwrap_err();
        assert_eq!(failure.position().cursor(), 1);
    }

    #[test]
    fn test_seq_first_failure_propagates() {
        let parser = sat(|c| c == 'x').then(|_, _| item());
        let failure = parser.parse(Stream::new("omg")).unwrap_err();
        assert_eq!(failure.position().cursor(), 0);
    }

    #[test]
    fn test_seq_all() {
        let parser = seq_all(vec![
            exact_char('a').boxed(),
            item().boxed(),
            exact_char('c').boxed(),
        ]);
        let success = parser.parse(Stream::new("abcd")).unwrap();

        assert_eq!(success.value, 'c');
        assert_eq!(success.matched, "abc");
        assert_eq!(success.next.cursor(), 3);
    }

    #[test]
    fn test_seq_all_stops_at_first_failure() {
        let parser = seq_all(vec![
            item().boxed(),
            item().boxed(),
            sat(|c| c == 'l').boxed(),
        ]);
        let failure = parser.parse(Stream::new("omg")).unwrap_err();
        assert_eq!(failure.position().cursor(), 2);
    }

    #[test]
    fn test_seq_all_empty() {
        let parser = seq_all(Vec::<crate::unit::Unit<char>>::new());
        let success = parser.parse(Stream::new("abc")).unwrap();
        assert_eq!(success.value, char::default());
        assert_eq!(success.next.cursor(), 0);
    }
}
