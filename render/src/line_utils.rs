use ratatui::text::Line;
use ratatui::text::Span;

pub fn span_to_static(span: &Span) -> Span<'static> {
    Span {
        style: span.style,
        content: std::borrow::Cow::Owned(span.content.clone().into_owned()),
    }
}

pub fn line_to_static(line: &Line) -> Line<'static> {
    Line {
        style: line.style,
        alignment: line.alignment,
        spans: line.spans.iter().map(span_to_static).collect(),
    }
}

/// Clones borrowed lines into `dst` as owned lines.
pub fn push_owned_lines(src: &[Line<'_>], dst: &mut Vec<Line<'static>>) {
    for line in src {
        dst.push(line_to_static(line));
    }
}
