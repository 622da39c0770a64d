use crate::chars::{exact_char, item, not_char};
use crate::label::expected;
use crate::many::many;
use crate::or::OrExt;
use crate::parser::Parser;
use crate::program::program;
use crate::seq::SeqExt;

/// Parser that matches a double quoted string and returns its unescaped content
///
/// A backslash escapes the character after it, whatever it is; no other escape
/// sequences are interpreted.
pub fn quoted_string<'code>() -> impl Parser<'code, Output = String> {
    let quote_mark = exact_char('"');
    let content = many(
        exact_char('\\')
            .then(|_, _| item())
            .or(not_char('"')),
    );

    let body = program(move |steps| {
        steps.run(&quote_mark)?;
        let value = steps.run(&content)?;
        steps.run(&quote_mark)?;
        Ok(value)
    });
    expected(body, "a quoted string")
}

/// Render `s` as a double quoted string that [`quoted_string`] parses back to `s`
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}
