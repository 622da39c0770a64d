//! Locating lines, columns and short excerpts around an offset into a text buffer.

/// Default number of upcoming characters echoed in a diagnostic
pub const DEFAULT_EXCERPT_WIDTH: usize = 6;

const ELLIPSIS: &str = "...";

/// Options controlling how a [`Failure`](crate::Failure) is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// How many characters of the upcoming input to echo after "saw"
    pub excerpt_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            excerpt_width: DEFAULT_EXCERPT_WIDTH,
        }
    }
}

/// The line containing an offset, with zero-based row and column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineInfo<'code> {
    pub row: usize,
    /// Column in characters, not bytes
    pub column: usize,
    /// The line's text without its newline
    pub line: &'code str,
}

/// Find the line containing `offset`. Offsets past the end clamp to the end.
pub fn find_line(text: &str, offset: usize) -> LineInfo<'_> {
    let offset = clamp(text, offset);
    let before = &text[..offset];

    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let line_end = text[offset..]
        .find('\n')
        .map_or(text.len(), |i| offset + i);

    LineInfo {
        row: before.bytes().filter(|&b| b == b'\n').count(),
        column: text[line_start..offset].chars().count(),
        line: &text[line_start..line_end],
    }
}

/// Up to `n` characters starting at `offset`, stopping at a newline.
///
/// An ellipsis is appended when the excerpt was cut short and more text follows on
/// the same line.
pub fn next_on_line(text: &str, offset: usize, n: usize) -> String {
    let offset = clamp(text, offset);
    let mut rest = text[offset..].chars().peekable();
    let mut out = String::new();

    for _ in 0..n {
        match rest.peek() {
            Some(&ch) if ch != '\n' => {
                out.push(ch);
                rest.next();
            }
            _ => break,
        }
    }

    if matches!(rest.peek(), Some(&ch) if ch != '\n') {
        out.push_str(ELLIPSIS);
    }
    out
}

fn clamp(text: &str, offset: usize) -> usize {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}
