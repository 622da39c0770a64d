use crate::diagnostics::{RenderOptions, find_line, next_on_line};
use crate::stream::Stream;
use std::borrow::Cow;
use std::error::Error;
use std::fmt;

/// The outcome of an unsuccessful parse.
///
/// A failure records where the parser gave up, the set of things that would have been
/// accepted there, and whether it is fatal. Fatal failures are not retried by an
/// enclosing [`or`](crate::or::or); see [`cut`](crate::cut::cut).
#[derive(Debug, Clone, PartialEq)]
pub struct Failure<'code> {
    position: Stream<'code>,
    expected: Vec<Cow<'static, str>>,
    fatal: bool,
}

impl<'code> Failure<'code> {
    /// A non-fatal failure at `position` with no expectation
    pub fn new(position: Stream<'code>) -> Self {
        Failure {
            position,
            expected: Vec::new(),
            fatal: false,
        }
    }

    /// A non-fatal failure at `position` expecting `description`
    pub fn expecting(position: Stream<'code>, description: impl Into<Cow<'static, str>>) -> Self {
        Failure {
            position,
            expected: vec![description.into()],
            fatal: false,
        }
    }

    pub fn position(&self) -> Stream<'code> {
        self.position
    }

    /// The expectation descriptions, in the order they were first recorded
    pub fn expected(&self) -> &[Cow<'static, str>] {
        &self.expected
    }

    pub fn is_fatal(&self) -> bool {
        self.fatal
    }

    /// Replace the expectation set with a single description
    pub fn with_expected(self, description: impl Into<Cow<'static, str>>) -> Self {
        Failure {
            position: self.position,
            expected: vec![description.into()],
            fatal: self.fatal,
        }
    }

    /// Combine the failures of two alternatives.
    ///
    /// The failure that got further into the input wins outright. On a tie the
    /// expectations are merged, this failure's entries first, and this failure's
    /// fatal flag is kept.
    pub fn extend(self, other: Failure<'code>) -> Self {
        let (here, there) = (self.position.cursor(), other.position.cursor());
        if there > here {
            return other;
        }
        if there < here {
            return self;
        }

        let mut expected = self.expected;
        for description in other.expected {
            if !expected.contains(&description) {
                expected.push(description);
            }
        }
        Failure {
            position: self.position,
            expected,
            fatal: self.fatal,
        }
    }

    /// Mark this failure as fatal so enclosing alternatives stop backtracking
    pub fn escalate(self) -> Self {
        Failure {
            fatal: true,
            ..self
        }
    }

    /// Render a human readable diagnostic with line, column and an excerpt of the input
    pub fn render(&self) -> String {
        self.to_string()
    }

    pub fn render_with(&self, options: &RenderOptions) -> String {
        Rendered {
            failure: self,
            options,
        }
        .to_string()
    }

    fn saw(&self, options: &RenderOptions) -> String {
        let position = self.position;
        match position.get() {
            Err(_) => "EOF".to_string(),
            Ok(ch) => {
                let excerpt = next_on_line(position.buffer(), position.cursor(), options.excerpt_width);
                if excerpt.is_empty() {
                    format!("\"{}\"", escape_controls(&ch.to_string()))
                } else {
                    format!("\"{}\"", escape_controls(&excerpt))
                }
            }
        }
    }
}

/// Writes control characters as escapes, leaving everything else as is
fn escape_controls(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_control() {
            escaped.extend(c.escape_default());
        } else {
            escaped.push(c);
        }
    }
    escaped
}

struct Rendered<'a, 'code> {
    failure: &'a Failure<'code>,
    options: &'a RenderOptions,
}

impl fmt::Display for Rendered<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let position = self.failure.position;
        let info = find_line(position.buffer(), position.cursor());

        writeln!(f, "At line {}, column {}:", info.row, info.column)?;
        writeln!(f)?;
        if !info.line.trim().is_empty() {
            let pad = " ".repeat(info.column);
            writeln!(f, "{}", info.line)?;
            writeln!(f, "{}^", pad)?;
            writeln!(f, "{}|", pad)?;
        }

        let saw = self.failure.saw(self.options);
        if self.failure.expected.is_empty() {
            write!(f, "Error: unexpected {}", saw)
        } else {
            write!(
                f,
                "Error: expected {}, saw {}",
                self.failure.expected.join(" or "),
                saw
            )
        }
    }
}

impl fmt::Display for Failure<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Rendered {
            failure: self,
            options: &RenderOptions::default(),
        }
        .fmt(f)
    }
}

impl Error for Failure<'_> {}
