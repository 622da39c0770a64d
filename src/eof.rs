use crate::failure::Failure;
use crate::parser::{ParseResult, Parser};
use crate::stream::Stream;
use crate::success::Success;

/// Parser that only succeeds at the end of the input
#[derive(Debug, Clone, Copy)]
pub struct EndOfInput;

impl<'code> Parser<'code> for EndOfInput {
    type Output = ();

    fn parse(&self, input: Stream<'code>) -> ParseResult<'code, ()> {
        if input.at_end() {
            Ok(Success::new((), input, input, ""))
        } else {
            Err(Failure::expecting(input, "end of file"))
        }
    }
}

/// Convenience function to create an EndOfInput parser
pub fn end_of_input() -> EndOfInput {
    EndOfInput
}
