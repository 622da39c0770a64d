use std::fmt;
use thiserror::Error;

/// Contract violations raised by [`Stream`] when it is read or stepped past the end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StreamError {
    #[error("cannot read past end of buffer (cursor {cursor})")]
    ReadPastEnd { cursor: usize },
    #[error("cannot step past end of buffer (cursor {cursor})")]
    StepPastEnd { cursor: usize },
}

/// An immutable cursor into a text buffer.
///
/// A `Stream` is a reference to the whole input plus a byte offset into it. Deriving a
/// new stream never copies or slices the buffer, so stepping through an N character
/// input costs O(N) in total. The cursor always sits on a `char` boundary.
#[derive(Clone, Copy)]
pub struct Stream<'code> {
    buffer: &'code str,
    cursor: usize,
}

impl<'code> Stream<'code> {
    /// Create a stream positioned at the start of `buffer`
    pub fn new(buffer: &'code str) -> Self {
        Stream { buffer, cursor: 0 }
    }

    /// The whole input this stream points into
    pub fn buffer(&self) -> &'code str {
        self.buffer
    }

    /// Byte offset of the current position
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn at_end(&self) -> bool {
        self.cursor >= self.buffer.len()
    }

    /// The character at the current position, together with the stream after it
    pub fn uncons(self) -> Option<(char, Stream<'code>)> {
        let ch = self.buffer[self.cursor..].chars().next()?;
        let next = Stream {
            buffer: self.buffer,
            cursor: self.cursor + ch.len_utf8(),
        };
        Some((ch, next))
    }

    /// Read the character at the current position
    pub fn get(&self) -> Result<char, StreamError> {
        self.uncons()
            .map(|(ch, _)| ch)
            .ok_or(StreamError::ReadPastEnd {
                cursor: self.cursor,
            })
    }

    /// A stream pointing at the next character position
    pub fn next(&self) -> Result<Stream<'code>, StreamError> {
        self.uncons()
            .map(|(_, next)| next)
            .ok_or(StreamError::StepPastEnd {
                cursor: self.cursor,
            })
    }

    /// The input between this stream and `end`, which must come from the same buffer
    pub fn slice_to(&self, end: &Stream<'code>) -> &'code str {
        &self.buffer[self.cursor..end.cursor.max(self.cursor)]
    }

    /// The unconsumed remainder of the input
    pub fn rest(&self) -> &'code str {
        &self.buffer[self.cursor..]
    }

    /// Whether both streams point into the same buffer
    pub fn same_buffer(&self, other: &Stream<'_>) -> bool {
        std::ptr::eq(self.buffer.as_ptr(), other.buffer.as_ptr())
            && self.buffer.len() == other.buffer.len()
    }
}

impl PartialEq for Stream<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.same_buffer(other) && self.cursor == other.cursor
    }
}

impl Eq for Stream<'_> {}

impl fmt::Debug for Stream<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stream")
            .field("cursor", &self.cursor)
            .field("len", &self.buffer.len())
            .finish()
    }
}

impl<'code> From<&'code str> for Stream<'code> {
    fn from(buffer: &'code str) -> Self {
        Stream::new(buffer)
    }
}
