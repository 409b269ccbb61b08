use ansi_to_tui::Error;
use ansi_to_tui::IntoText;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::text::Text;

// Tabs interact badly with gutter prefixes when captured output is replayed
// into a styled buffer (e.g. `nl` separates line numbers from content with a
// tab). A fixed four-space substitution avoids stateful tab-stop math across
// spans and looks acceptable for the outputs we capture.
fn expand_tabs(s: &str) -> std::borrow::Cow<'_, str> {
    if s.contains('\t') {
        std::borrow::Cow::Owned(s.replace('\t', "    "))
    } else {
        std::borrow::Cow::Borrowed(s)
    }
}

/// Parses one row of captured output into a styled line.
///
/// This should be used when the contents of `s` are expected to match a
/// single line. If multiple lines are found, a warning is logged and only
/// the first line is returned.
pub fn ansi_line(s: &str) -> Line<'static> {
    let text = ansi_document(s);
    match text.lines.as_slice() {
        [] => "".into(),
        [only] => only.clone(),
        [first, rest @ ..] => {
            tracing::warn!(
                "ansi_line: expected a single line, got {first:?} plus {} more",
                rest.len()
            );
            first.clone()
        }
    }
}

/// Parses a whole captured buffer into styled lines, one [`Line`] per row.
///
/// This producer never fails: a malformed escape sequence is logged and the
/// affected buffer degrades to its raw text as unstyled runs.
pub fn ansi_document(s: &str) -> Text<'static> {
    let s = expand_tabs(s);
    // to_text() claims to be faster, but introduces complex lifetime issues
    // such that it's not worth it.
    match s.as_ref().into_text() {
        Ok(text) => text,
        Err(err) => {
            match err {
                Error::NomError(message) => {
                    tracing::error!("failed to parse ANSI escapes in captured output: {message}");
                }
                Error::Utf8Error(utf8error) => {
                    tracing::error!("captured output is not valid UTF-8: {utf8error}");
                }
            }
            Text::from(
                s.lines()
                    .map(|line| Line::from(Span::raw(line.to_string())))
                    .collect::<Vec<_>>(),
            )
        }
    }
}
