use crate::chars::{digit, exact_char};
use crate::label::expected;
use crate::many::many1;
use crate::maybe::optional;
use crate::parser::Parser;
use crate::program::program;

/// Parser that matches a decimal integer with an optional leading minus sign
///
/// Any failure, including a value that does not fit an `i64`, is reported as
/// expecting "an integer".
pub fn integer<'code>() -> impl Parser<'code, Output = i64> {
    let sign = optional(exact_char('-'));
    let digits = many1(digit());

    let body = program(move |steps| {
        let negative = steps.run(&sign)?.is_some();
        let mut text = steps.run(&digits)?;
        if negative {
            text.insert(0, '-');
        }
        text.parse::<i64>().map_err(|_| steps.fail())
    });
    expected(body, "an integer")
}
