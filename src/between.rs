use crate::parser::{ParseResult, Parser};
use crate::stream::Stream;
use crate::success::{Success, join_matched};

/// Parser combinator that matches content between opening and closing delimiters
///
/// Runs `open`, `content` and `close` in sequence and keeps only the content's value.
/// The matched text covers all three parts. Any failure is returned unchanged.
///
/// Example:
/// ```
/// use charcomb::between::between;
/// use charcomb::chars::exact_char;
/// use charcomb::literal::integer;
/// use charcomb::parser::execute;
///
/// let parser = between(exact_char('['), integer(), exact_char(']'));
/// assert_eq!(execute(&parser, "[42]").unwrap(), 42);
/// ```
pub struct Between<O, P, C> {
    open: O,
    content: P,
    close: C,
}

impl<O, P, C> Between<O, P, C> {
    pub fn new(open: O, content: P, close: C) -> Self {
        Between {
            open,
            content,
            close,
        }
    }
}

impl<'code, O, P, C> Parser<'code> for Between<O, P, C>
where
    O: Parser<'code>,
    P: Parser<'code>,
    C: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, input: Stream<'code>) -> ParseResult<'code, Self::Output> {
        let open = self.open.parse(input)?;
        let content = self.content.parse(open.next)?;
        let close = self.close.parse(content.next)?;

        let matched = join_matched(input, open.next, content.next, open.matched, content.matched);
        let matched = join_matched(input, content.next, close.next, matched, close.matched);
        Ok(Success::new(content.value, close.next, input, matched))
    }
}

/// Convenience function to create a Between parser
pub fn between<'code, O, P, C>(open: O, content: P, close: C) -> Between<O, P, C>
where
    O: Parser<'code>,
    P: Parser<'code>,
    C: Parser<'code>,
{
    Between::new(open, content, close)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chars::{exact_char, not_char};
    use crate::many::many;

    #[test]
    fn test_between_parentheses() {
        let parser = between(exact_char('('), many(not_char(')')), exact_char(')'));
        let success = parser.parse(Stream::new("(hello) world")).unwrap();

        assert_eq!(success.value, "hello");
        assert_eq!(success.matched, "(hello)");
        assert_eq!(success.next.cursor(), 7);
    }

    #[test]
    fn test_between_empty_content() {
        let parser = between(exact_char('<'), many(not_char('>')), exact_char('>'));
        let success = parser.parse(Stream::new("<>")).unwrap();
        assert_eq!(success.value, "");
        assert!(success.next.at_end());
    }

    #[test]
    fn test_between_missing_close() {
        let parser = between(exact_char('('), many(not_char(')')), exact_char(')'));
        let failure = parser.parse(Stream::new("(abc")).unwrap_err();

        assert_eq!(failure.position().cursor(), 4);
        assert_eq!(failure.expected(), ["the character \")\""]);
    }

    #[test]
    fn test_between_missing_open() {
        let parser = between(exact_char('('), many(not_char(')')), exact_char(')'));
        let failure = parser.parse(Stream::new("abc)")).unwrap_err();
        assert_eq!(failure.position().cursor(), 0);
    }
}
