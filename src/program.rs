use crate::failure::Failure;
use crate::parser::{ParseResult, Parser};
use crate::stream::Stream;
use crate::success::{Success, join_matched};
use std::borrow::Cow;

/// The running state of a [`Program`]: where the next step starts and what has been
/// matched so far
pub struct Steps<'code> {
    start: Stream<'code>,
    current: Stream<'code>,
    matched: Cow<'code, str>,
}

impl<'code> Steps<'code> {
    fn new(start: Stream<'code>) -> Self {
        Steps {
            start,
            current: start,
            matched: Cow::Borrowed(""),
        }
    }

    /// Run one step at the current position and return its value.
    ///
    /// On success the position advances past the step and its matched text is
    /// appended. A failure is returned unchanged for the program to propagate with `?`.
    pub fn run<P>(&mut self, parser: &P) -> Result<P::Output, Failure<'code>>
    where
        P: Parser<'code> + ?Sized,
    {
        let success = parser.parse(self.current)?;
        let matched = std::mem::take(&mut self.matched);
        self.matched = join_matched(
            self.start,
            self.current,
            success.next,
            matched,
            success.matched,
        );
        self.current = success.next;
        Ok(success.value)
    }

    /// A failure at the current position with no expectations, for leaving a program
    /// early
    pub fn fail(&self) -> Failure<'code> {
        Failure::new(self.current)
    }

    /// The position the next step will run at
    pub fn position(&self) -> Stream<'code> {
        self.current
    }
}

/// Parser built from an ordinary closure that runs steps one after another.
///
/// The closure receives a [`Steps`] context; each `steps.run(&parser)?` runs a parser
/// where the previous one stopped, and earlier values are plain local bindings. The
/// closure's `Ok` value becomes the value of the parser, spanning from the start to
/// wherever the last step stopped. The first `Err` ends the program.
///
/// Example:
/// ```
/// use charcomb::chars::{exact_char, item};
/// use charcomb::parser::execute;
/// use charcomb::program::program;
///
/// let pair = program(|steps| {
///     let key = steps.run(&item())?;
///     steps.run(&exact_char('='))?;
///     let value = steps.run(&item())?;
///     Ok((key, value))
/// });
/// assert_eq!(execute(&pair, "a=b").unwrap(), ('a', 'b'));
/// ```
pub struct Program<F> {
    body: F,
}

impl<F> Program<F> {
    pub fn new(body: F) -> Self {
        Program { body }
    }
}

impl<'code, F, T> Parser<'code> for Program<F>
where
    F: Fn(&mut Steps<'code>) -> Result<T, Failure<'code>>,
{
    type Output = T;

    fn parse(&self, input: Stream<'code>) -> ParseResult<'code, T> {
        let mut steps = Steps::new(input);
        let value = (self.body)(&mut steps)?;
        Ok(Success::new(value, steps.current, input, steps.matched))
    }
}

/// Convenience function to create a Program parser
pub fn program<'code, F, T>(body: F) -> Program<F>
where
    F: Fn(&mut Steps<'code>) -> Result<T, Failure<'code>>,
{
    Program::new(body)
}
