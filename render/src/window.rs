//! Trailing-row selection over a pre-styled line buffer.

use ratatui::text::Line;
use ratatui::text::Text;

/// Rows shown when the caller supplies no usable height budget.
pub const DEFAULT_WINDOW_ROWS: usize = 24;

/// An ordered, line-structured buffer of previously rendered terminal
/// output (e.g. a captured subprocess session), append-only from the
/// producer's side. Styling lives in the spans of each [`Line`]; rendering
/// only ever reads a contiguous trailing suffix.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyledDocument {
    lines: Vec<Line<'static>>,
}

impl StyledDocument {
    pub fn new(lines: Vec<Line<'static>>) -> Self {
        Self { lines }
    }

    pub fn push(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl From<Vec<Line<'static>>> for StyledDocument {
    fn from(lines: Vec<Line<'static>>) -> Self {
        Self { lines }
    }
}

impl From<Text<'static>> for StyledDocument {
    fn from(text: Text<'static>) -> Self {
        Self { lines: text.lines }
    }
}

impl FromIterator<Line<'static>> for StyledDocument {
    fn from_iter<I: IntoIterator<Item = Line<'static>>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}

/// Returns the trailing rows of `document` that fit in `available_height`
/// rows; `None` or zero falls back to [`DEFAULT_WINDOW_ROWS`]. Row order
/// and styling are untouched, and no width clipping happens here — a row
/// wider than the viewport is the host's problem at paint time.
pub fn window_trailing(
    document: &StyledDocument,
    available_height: Option<u16>,
) -> &[Line<'static>] {
    let rows = match available_height {
        Some(rows) if rows > 0 => usize::from(rows),
        _ => DEFAULT_WINDOW_ROWS,
    };
    let lines = document.lines();
    let start = lines.len().saturating_sub(rows);
    &lines[start..]
}
