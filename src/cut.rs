use crate::parser::{ParseResult, Parser};
use crate::stream::Stream;
use crate::success::{Success, join_matched};

/// Parser combinator that turns any failure of its parser into a fatal one
///
/// A fatal failure is not retried by an enclosing [`or`](crate::or::or) or
/// [`choice`](crate::or::choice), so the error reported is the one from the branch the
/// grammar committed to rather than a shallow list of alternatives.
pub struct Cut<P> {
    parser: P,
}

impl<P> Cut<P> {
    pub fn new(parser: P) -> Self {
        Cut { parser }
    }
}

impl<'code, P> Parser<'code> for Cut<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, input: Stream<'code>) -> ParseResult<'code, Self::Output> {
        self.parser.parse(input).map_err(|failure| failure.escalate())
    }
}

/// Convenience function to create a Cut parser
pub fn cut<'code, P>(parser: P) -> Cut<P>
where
    P: Parser<'code>,
{
    Cut::new(parser)
}

/// Parser combinator that commits to a branch once `guard` has matched.
///
/// Runs `guard`, then `rest` under a [`Cut`]. A failing guard stays recoverable; any
/// failure after it is fatal. The value is the value of `rest`.
pub struct CutAfter<G, P> {
    guard: G,
    rest: Cut<P>,
}

impl<G, P> CutAfter<G, P> {
    pub fn new(guard: G, rest: P) -> Self {
        CutAfter {
            guard,
            rest: Cut::new(rest),
        }
    }
}

impl<'code, G, P> Parser<'code> for CutAfter<G, P>
where
    G: Parser<'code>,
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, input: Stream<'code>) -> ParseResult<'code, Self::Output> {
        let guard = self.guard.parse(input)?;
        let rest = self.rest.parse(guard.next)?;
        let matched = join_matched(input, guard.next, rest.next, guard.matched, rest.matched);
        Ok(Success::new(rest.value, rest.next, input, matched))
    }
}

/// Convenience function to create a CutAfter parser
pub fn cut_after<'code, G, P>(guard: G, rest: P) -> CutAfter<G, P>
where
    G: Parser<'code>,
    P: Parser<'code>,
{
    CutAfter::new(guard, rest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chars::spaces;
    use crate::literal::quoted_string;
    use crate::map::MapExt;
    use crate::or::OrExt;
    use crate::seq::SeqExt;
    use crate::text::exact_string;

    #[test]
    fn test_cut_escalates_failure() {
        let failure = cut(exact_string("hai"))
            .parse(Stream::new("wat"))
            .unwrap_err();

        assert!(failure.is_fatal());
        assert_eq!(failure.expected(), ["\"hai\""]);
        assert_eq!(failure.position().cursor(), 0);
    }

    #[test]
    fn test_cut_passes_success_through() {
        let success = cut(exact_string("hai")).parse(Stream::new("hai")).unwrap();
        assert_eq!(success.value, "hai");
        assert_eq!(success.matched, "hai");
    }

    #[test]
    fn test_cut_after_failing_guard_is_recoverable() {
        let parser = cut_after(exact_string("hai"), spaces());
        let failure = parser.parse(Stream::new("lol")).unwrap_err();
        assert!(!failure.is_fatal());
    }

    #[test]
    fn test_cut_after_commits_to_branch() {
        let branch = |keyword: &'static str| {
            cut_after(
                exact_string(keyword),
                spaces().then(|_, _| quoted_string()).map(|_| 0),
            )
        };
        let parser = branch("hai").or(branch("lol"));

        let failure = parser.parse(Stream::new("hai omg")).unwrap_err();
        assert!(failure.is_fatal());
        assert_eq!(failure.expected(), ["a quoted string"]);
        assert_eq!(failure.position().cursor(), 4);
    }

    #[test]
    fn test_cut_after_success_spans_guard_and_rest() {
        let parser = cut_after(exact_string("hai"), spaces().then(|_, _| quoted_string()));
        let success = parser.parse(Stream::new("hai \"omg\"!")).unwrap();

        assert_eq!(success.value, "omg");
        assert_eq!(success.matched, "hai \"omg\"");
        assert_eq!(success.next.cursor(), 9);
    }
}
