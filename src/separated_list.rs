use crate::many::many_vec;
use crate::parser::{ParseResult, Parser};
use crate::seq::seq;
use crate::stream::Stream;
use crate::success::{Success, join_matched};

/// Parser combinator that matches a list of items separated by a parser
///
/// Parses at least one item, followed by [`many_vec`] over separator then item. A
/// separator that is not followed by an item is left unconsumed. A fatal failure
/// anywhere is propagated.
///
/// # Examples
/// - `"a,b,c"` with separator `,` gives `vec!['a', 'b', 'c']`
/// - `"1;2;3"` with separator `;` gives `vec![1, 2, 3]`
pub struct SeparatedList<P, PS> {
    parser: P,
    separator: PS,
}

impl<P, PS> SeparatedList<P, PS> {
    pub fn new(parser: P, separator: PS) -> Self {
        SeparatedList { parser, separator }
    }
}

impl<'code, P, PS> Parser<'code> for SeparatedList<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, input: Stream<'code>) -> ParseResult<'code, Self::Output> {
        let item = |input: Stream<'code>| self.parser.parse(input);
        let separator = |input: Stream<'code>| self.separator.parse(input);

        let first = item.parse(input)?;
        let rest = many_vec(seq(separator, |_, _| item)).parse(first.next)?;

        let matched = join_matched(input, first.next, rest.next, first.matched, rest.matched);
        let mut items = Vec::with_capacity(rest.value.len() + 1);
        items.push(first.value);
        items.extend(rest.value);

        Ok(Success::new(items, rest.next, input, matched))
    }
}

/// List of one or more items separated by `separator`
pub fn sep_by1<'code, P, PS>(parser: P, separator: PS) -> SeparatedList<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    SeparatedList::new(parser, separator)
}

/// Parser combinator for a possibly empty separated list
///
/// Succeeds with an empty vector, consuming nothing, when the first item does not
/// match.
pub struct SeparatedList0<P, PS> {
    inner: SeparatedList<P, PS>,
}

impl<'code, P, PS> Parser<'code> for SeparatedList0<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, input: Stream<'code>) -> ParseResult<'code, Self::Output> {
        match self.inner.parse(input) {
            Err(failure) if !failure.is_fatal() => Ok(Success::new(Vec::new(), input, input, "")),
            result => result,
        }
    }
}

/// List of zero or more items separated by `separator`
pub fn sep_by<'code, P, PS>(parser: P, separator: PS) -> SeparatedList0<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    SeparatedList0 {
        inner: SeparatedList::new(parser, separator),
    }
}
