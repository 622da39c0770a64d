use crate::failure::Failure;
use crate::parser::{ParseResult, Parser};
use crate::stream::Stream;
use crate::success::Success;
use std::borrow::Cow;

/// Parser that always succeeds without consuming input and returns a clone of its value
#[derive(Debug, Clone)]
pub struct Unit<T> {
    value: T,
    matched: Cow<'static, str>,
}

impl<T> Unit<T> {
    pub fn new(value: T) -> Self {
        Unit {
            value,
            matched: Cow::Borrowed(""),
        }
    }

    /// Report `matched` as the text this parser consumed
    pub fn with_matched(value: T, matched: impl Into<Cow<'static, str>>) -> Self {
        Unit {
            value,
            matched: matched.into(),
        }
    }
}

impl<'code, T: Clone> Parser<'code> for Unit<T> {
    type Output = T;

    fn parse(&self, input: Stream<'code>) -> ParseResult<'code, T> {
        Ok(Success::new(
            self.value.clone(),
            input,
            input,
            self.matched.clone(),
        ))
    }
}

/// Convenience function to create a Unit parser
pub fn unit<T: Clone>(value: T) -> Unit<T> {
    Unit::new(value)
}

/// Parser that always succeeds without consuming input and returns the default value of T
pub struct DefaultParser<T> {
    _phantom: std::marker::PhantomData<fn() -> T>,
}

impl<T> DefaultParser<T> {
    pub fn new() -> Self {
        DefaultParser {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<T> Default for DefaultParser<T> {
    fn default() -> Self {
        DefaultParser::new()
    }
}

impl<'code, T: Default> Parser<'code> for DefaultParser<T> {
    type Output = T;

    fn parse(&self, input: Stream<'code>) -> ParseResult<'code, T> {
        Ok(Success::new(T::default(), input, input, ""))
    }
}

/// Convenience function to create a default parser
pub fn default<T: Default>() -> DefaultParser<T> {
    DefaultParser::new()
}

/// Parser that always fails at the current position with no expectation
pub struct Fail<T> {
    _phantom: std::marker::PhantomData<fn() -> T>,
}

impl<'code, T> Parser<'code> for Fail<T> {
    type Output = T;

    fn parse(&self, input: Stream<'code>) -> ParseResult<'code, T> {
        Err(Failure::new(input))
    }
}

/// Convenience function to create a parser that always fails
pub fn fail<T>() -> Fail<T> {
    Fail {
        _phantom: std::marker::PhantomData,
    }
}
