//! Adaptive truncation of oversized result text.
//!
//! Two independent guards run in sequence: a hard character cap that bounds
//! the cost of all later line-oriented work, and a wrap-aware line drop that
//! keeps the trailing lines fitting an estimated visual-height budget. Both
//! drop from the head — the end of a result is the part worth keeping.

use std::borrow::Cow;

/// Hard ceiling on the number of characters considered for display.
pub const MAX_RESULT_CHARS: usize = 20_000;

/// Marker signalling dropped content at a truncation boundary.
pub const ELISION: &str = "...";

/// Width and optional height handed down by the host layout system. An
/// absent height means "unbounded": no truncation by height is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LayoutBudget {
    pub terminal_width: u16,
    pub available_height: Option<u16>,
}

impl LayoutBudget {
    pub fn new(terminal_width: u16) -> Self {
        Self {
            terminal_width,
            available_height: None,
        }
    }

    pub fn with_available_height(mut self, rows: u16) -> Self {
        self.available_height = Some(rows);
        self
    }
}

/// Rows the surrounding chrome reserves out of the raw terminal height.
/// These are presentation-tuning values owned by the caller; the defaults
/// carry the reference budget (status line plus padding, one context row,
/// and a two-row content floor).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowReservations {
    pub static_rows: u16,
    pub context_rows: u16,
    pub minimum_floor: u16,
}

impl Default for RowReservations {
    fn default() -> Self {
        Self {
            static_rows: 3,
            context_rows: 1,
            minimum_floor: 2,
        }
    }
}

/// Rows left for content once chrome is reserved. At least
/// `minimum_floor + 1` rows are always attempted.
pub fn effective_height(raw_rows: u16, reservations: RowReservations) -> u16 {
    let reserved = reservations
        .static_rows
        .saturating_add(reservations.context_rows);
    raw_rows
        .saturating_sub(reserved)
        .max(reservations.minimum_floor.saturating_add(1))
}

/// Estimated number of terminal rows one logical line occupies when wrapped
/// at `render_width` columns. An empty line still occupies one row; wrapping
/// is modeled by character count alone, with no word-boundary or
/// wide-character awareness.
pub fn estimate_rows(line_len: usize, render_width: u16) -> usize {
    debug_assert!(render_width > 0, "render width must be positive");
    line_len.max(1).div_ceil(usize::from(render_width.max(1)))
}

/// Bounds `text` for display: the character cap always applies; the
/// line-aware drop applies only when a height budget is present and the
/// host is not in alternate-buffer mode. Full-redraw terminals apply their
/// own scroll-region truncation, and trimming again here would drop rows
/// twice.
pub fn truncate_result(
    text: &str,
    hard_cap: usize,
    budget: LayoutBudget,
    is_alternate_buffer: bool,
) -> Cow<'_, str> {
    let capped = cap_chars(text, hard_cap);
    let Some(available_height) = budget.available_height else {
        return capped;
    };
    if is_alternate_buffer {
        return capped;
    }
    match drop_leading_lines(&capped, usize::from(available_height), budget.terminal_width) {
        Some(suffix) => Cow::Owned(suffix),
        None => capped,
    }
}

/// Keeps the trailing `hard_cap` characters, prepending [`ELISION`] when
/// anything was dropped.
fn cap_chars(text: &str, hard_cap: usize) -> Cow<'_, str> {
    let char_count = text.chars().count();
    if char_count <= hard_cap {
        return Cow::Borrowed(text);
    }
    let dropped = char_count - hard_cap;
    let start = text
        .char_indices()
        .nth(dropped)
        .map_or(text.len(), |(idx, _)| idx);
    Cow::Owned(format!("{ELISION}{}", &text[start..]))
}

/// Walks lines from the last to the first, keeping whole lines while their
/// cumulative estimated row count stays within `available_height`. Returns
/// the retained suffix behind a standalone elision line, or `None` when
/// everything fits. The elision line itself is not counted against the
/// budget.
fn drop_leading_lines(text: &str, available_height: usize, render_width: u16) -> Option<String> {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut rows = 0usize;
    let mut keep_from = lines.len();
    for (idx, line) in lines.iter().enumerate().rev() {
        let line_rows = estimate_rows(line.chars().count(), render_width);
        if rows + line_rows > available_height {
            break;
        }
        rows += line_rows;
        keep_from = idx;
    }
    if keep_from == 0 {
        return None;
    }
    Some(format!("{ELISION}\n{}", lines[keep_from..].join("\n")))
}
