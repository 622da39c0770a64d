use crate::chars::{digit, exact_char};
use crate::label::expected;
use crate::many::{many, many1};
use crate::maybe::optional;
use crate::parser::Parser;
use crate::program::program;
use crate::seq::SeqExt;

/// Parser that matches a decimal number with an optional minus sign and an optional
/// fractional part
///
/// Either side of the point may be empty, but not both: `.5` and `3` parse, `-` and
/// `.` do not. A point that is not followed by a digit is left unconsumed.
pub fn float<'code>() -> impl Parser<'code, Output = f64> {
    let sign = optional(exact_char('-'));
    let whole = many(digit());
    let fraction = optional(exact_char('.').then(|_, _| many1(digit())));

    let body = program(move |steps| {
        let mut text = String::new();
        if steps.run(&sign)?.is_some() {
            text.push('-');
        }
        text.push_str(&steps.run(&whole)?);
        if let Some(fraction) = steps.run(&fraction)? {
            text.push('.');
            text.push_str(&fraction);
        }
        text.parse::<f64>().map_err(|_| steps.fail())
    });
    expected(body, "a number")
}
