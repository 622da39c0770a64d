use crate::eof::end_of_input;
use crate::failure::Failure;
use crate::stream::Stream;
use crate::success::Success;

/// Either a [`Success`] or a [`Failure`]; the return type of every parser
pub type ParseResult<'code, T> = Result<Success<'code, T>, Failure<'code>>;

/// Core parser trait for parser combinators
///
/// A parser is a function from a [`Stream`] to a [`ParseResult`]. Parsers hold no
/// mutable state, so running the same parser twice on the same stream gives the same
/// outcome. A failing parser consumes nothing: the failure's position says where it
/// gave up, and the caller still holds the stream it started from.
pub trait Parser<'code> {
    type Output;

    fn parse(&self, input: Stream<'code>) -> ParseResult<'code, Self::Output>;
}

impl<'code, F, T> Parser<'code> for F
where
    F: Fn(Stream<'code>) -> ParseResult<'code, T>,
{
    type Output = T;

    fn parse(&self, input: Stream<'code>) -> ParseResult<'code, T> {
        self(input)
    }
}

/// A type-erased parser, for grammars whose steps differ in type
pub type BoxedParser<'p, 'code, T> = Box<dyn Parser<'code, Output = T> + 'p>;

impl<'code, T> Parser<'code> for Box<dyn Parser<'code, Output = T> + '_> {
    type Output = T;

    fn parse(&self, input: Stream<'code>) -> ParseResult<'code, T> {
        (**self).parse(input)
    }
}

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt<'code>: Parser<'code> + Sized {
    fn boxed<'p>(self) -> BoxedParser<'p, 'code, Self::Output>
    where
        Self: 'p,
    {
        Box::new(self)
    }
}

impl<'code, P> BoxedExt<'code> for P where P: Parser<'code> {}

/// Run `parser` on `input`
pub fn parse<'code, P>(parser: &P, input: Stream<'code>) -> ParseResult<'code, P::Output>
where
    P: Parser<'code> + ?Sized,
{
    parser.parse(input)
}

/// Run `parser` from the start of `text` and return the parsed value.
///
/// This is the boundary where a [`Failure`] stops being an ordinary value and becomes
/// the caller's error.
pub fn execute<'code, P>(parser: &P, text: &'code str) -> Result<P::Output, Failure<'code>>
where
    P: Parser<'code> + ?Sized,
{
    match parser.parse(Stream::new(text)) {
        Ok(success) => {
            tracing::trace!(consumed = success.next.cursor(), "parse succeeded");
            Ok(success.value)
        }
        Err(failure) => {
            tracing::debug!(
                cursor = failure.position().cursor(),
                fatal = failure.is_fatal(),
                expected = ?failure.expected(),
                "parse failed"
            );
            Err(failure)
        }
    }
}

/// Like [`execute`], but the parser must consume the whole of `text`
pub fn execute_complete<'code, P>(
    parser: &P,
    text: &'code str,
) -> Result<P::Output, Failure<'code>>
where
    P: Parser<'code> + ?Sized,
{
    let whole = |input: Stream<'code>| -> ParseResult<'code, P::Output> {
        let success = parser.parse(input)?;
        let end = end_of_input().parse(success.next)?;
        Ok(Success::new(success.value, end.next, success.start, success.matched))
    };
    execute(&whole, text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chars::{digit, exact_char};
    use assert_matches::assert_matches;
    use std::fmt::{self, Write};
    use std::sync::{Arc, Mutex};
    use tracing::field::{Field, Visit};
    use tracing::{Event, Level, Metadata, Subscriber, span};

    /// Keeps the level and the rendered fields of every event it sees
    #[derive(Clone, Default)]
    struct EventLog {
        events: Arc<Mutex<Vec<(Level, String)>>>,
    }

    impl EventLog {
        fn events(&self) -> Vec<(Level, String)> {
            self.events.lock().unwrap().clone()
        }
    }

    struct Fields(String);

    impl Visit for Fields {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            write!(self.0, "{}={:?} ", field.name(), value).unwrap();
        }
    }

    impl Subscriber for EventLog {
        fn enabled(&self, _: &Metadata<'_>) -> bool {
            true
        }

        fn new_span(&self, _: &span::Attributes<'_>) -> span::Id {
            span::Id::from_u64(1)
        }

        fn record(&self, _: &span::Id, _: &span::Record<'_>) {}

        fn record_follows_from(&self, _: &span::Id, _: &span::Id) {}

        fn event(&self, event: &Event<'_>) {
            let mut fields = Fields(String::new());
            event.record(&mut fields);
            self.events
                .lock()
                .unwrap()
                .push((*event.metadata().level(), fields.0));
        }

        fn enter(&self, _: &span::Id) {}

        fn exit(&self, _: &span::Id) {}
    }

    fn always_x(input: Stream<'_>) -> ParseResult<'_, char> {
        Ok(Success::new('x', input, input, ""))
    }

    #[test]
    fn test_function_is_a_parser() {
        let success = parse(&always_x, Stream::new("abc")).unwrap();

        assert_eq!(success.value, 'x');
        assert_eq!(success.next.cursor(), 0);
    }

    #[test]
    fn test_boxed_parser() {
        let parsers: Vec<BoxedParser<'_, '_, char>> =
            vec![digit().boxed(), exact_char('x').boxed()];

        assert_eq!(execute(&parsers[0], "7").unwrap(), '7');
        assert_eq!(execute(&parsers[1], "x").unwrap(), 'x');
    }

    #[test]
    fn test_execute_unwraps_value() {
        assert_eq!(execute(&digit(), "42"), Ok('4'));
    }

    #[test]
    fn test_execute_returns_failure() {
        let failure = execute(&digit(), "x").unwrap_err();
        assert_eq!(failure.position().cursor(), 0);
        assert_eq!(failure.expected(), ["a digit"]);
    }

    #[test]
    fn test_execute_complete_requires_end() {
        assert_eq!(execute_complete(&digit(), "4"), Ok('4'));
        assert_matches!(
            execute_complete(&digit(), "42"),
            Err(f) if f.expected() == ["end of file"]
        );
    }

    #[test]
    fn test_execute_logs_failure_at_debug() {
        let log = EventLog::default();
        let result = tracing::subscriber::with_default(log.clone(), || execute(&digit(), "x"));
        assert!(result.is_err());

        let events = log.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].0, Level::DEBUG);
        assert!(events[0].1.contains("parse failed"));
        assert!(events[0].1.contains("cursor=0"));
        assert!(events[0].1.contains("fatal=false"));
        assert!(events[0].1.contains("a digit"));
    }

    #[test]
    fn test_execute_logs_success_at_trace() {
        let log = EventLog::default();
        let result = tracing::subscriber::with_default(log.clone(), || execute(&digit(), "42"));
        assert_eq!(result, Ok('4'));

        let events = log.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].0, Level::TRACE);
        assert!(events[0].1.contains("parse succeeded"));
        assert!(events[0].1.contains("consumed=1"));
    }
}
