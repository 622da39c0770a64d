use crate::stream::Stream;
use std::borrow::Cow;

/// The outcome of a successful parse
#[derive(Debug, Clone, PartialEq)]
pub struct Success<'code, T> {
    /// The value the parser produced
    pub value: T,
    /// The remaining, unconsumed input
    pub next: Stream<'code>,
    /// Where the parser started
    pub start: Stream<'code>,
    /// The text this parser consumed
    pub matched: Cow<'code, str>,
}

impl<'code, T> Success<'code, T> {
    pub fn new(
        value: T,
        next: Stream<'code>,
        start: Stream<'code>,
        matched: impl Into<Cow<'code, str>>,
    ) -> Self {
        Success {
            value,
            next,
            start,
            matched: matched.into(),
        }
    }

    /// A success for the input consumed between `start` and `next`
    pub fn spanning(value: T, start: Stream<'code>, next: Stream<'code>) -> Self {
        Success::new(value, next, start, start.slice_to(&next))
    }

    /// Replace the value, keeping the span and matched text
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Success<'code, U> {
        Success {
            value: f(self.value),
            next: self.next,
            start: self.start,
            matched: self.matched,
        }
    }

    pub fn span(&self) -> Span<'code> {
        Span::new(self.start.buffer(), self.start.cursor(), self.next.cursor())
    }
}

/// Represents a span in the source code with start and end positions
/// and a reference to the source code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'code> {
    /// Reference to the source code
    pub source: &'code str,
    /// Start position (inclusive)
    pub start: usize,
    /// End position (exclusive)
    pub end: usize,
}

impl<'code> Span<'code> {
    pub fn new(source: &'code str, start: usize, end: usize) -> Self {
        Span { source, start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Get the slice of code that this span represents
    pub fn slice(&self) -> &'code str {
        &self.source[self.start..self.end]
    }
}

/// Concatenate the matched text of two consecutive parses.
///
/// `first` was consumed from `start` up to `middle`, `second` from `middle` onwards.
/// When both are borrowed straight out of the buffer the joined text is re-borrowed
/// from the buffer, so long repetitions never copy the input.
pub(crate) fn join_matched<'code>(
    start: Stream<'code>,
    middle: Stream<'code>,
    end: Stream<'code>,
    first: Cow<'code, str>,
    second: Cow<'code, str>,
) -> Cow<'code, str> {
    if first.is_empty() {
        return second;
    }
    if second.is_empty() {
        return first;
    }
    match (&first, &second) {
        (Cow::Borrowed(a), Cow::Borrowed(b))
            if is_slice_of(a, start, middle) && is_slice_of(b, middle, end) =>
        {
            Cow::Borrowed(start.slice_to(&end))
        }
        _ => {
            let mut joined = first.into_owned();
            joined.push_str(&second);
            Cow::Owned(joined)
        }
    }
}

fn is_slice_of(text: &str, from: Stream<'_>, to: Stream<'_>) -> bool {
    let expected = from.slice_to(&to);
    std::ptr::eq(text.as_ptr(), expected.as_ptr()) && text.len() == expected.len()
}
