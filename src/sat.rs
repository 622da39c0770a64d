use crate::failure::Failure;
use crate::parser::{ParseResult, Parser};
use crate::stream::Stream;
use crate::success::Success;

/// Parser that consumes and returns a single character
#[derive(Debug, Clone, Copy)]
pub struct Item;

impl<'code> Parser<'code> for Item {
    type Output = char;

    fn parse(&self, input: Stream<'code>) -> ParseResult<'code, char> {
        match input.uncons() {
            Some((ch, next)) => Ok(Success::spanning(ch, input, next)),
            None => Err(Failure::new(input)),
        }
    }
}

/// Convenience function to create an Item parser
pub fn item() -> Item {
    Item
}

/// Parser that consumes a single character for which the predicate holds.
///
/// On a mismatch it fails at the position before the character, with no
/// expectation; wrap it in [`expected`](crate::label::expected) to describe it.
#[derive(Clone, Copy)]
pub struct Sat<F> {
    predicate: F,
}

impl<F> Sat<F> {
    pub fn new(predicate: F) -> Self {
        Sat { predicate }
    }
}

impl<'code, F> Parser<'code> for Sat<F>
where
    F: Fn(char) -> bool,
{
    type Output = char;

    fn parse(&self, input: Stream<'code>) -> ParseResult<'code, char> {
        let success = Item.parse(input)?;
        if (self.predicate)(success.value) {
            Ok(success)
        } else {
            Err(Failure::new(input))
        }
    }
}

/// Convenience function to create a Sat parser
pub fn sat<F>(predicate: F) -> Sat<F>
where
    F: Fn(char) -> bool,
{
    Sat::new(predicate)
}
