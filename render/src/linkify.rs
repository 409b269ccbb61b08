//! Boundary-accurate URL recognition for running prose.
//!
//! Command output and agent messages routinely embed URLs in sentences
//! (`see https://example.com.`) or delimiters (`<https://example.com>`).
//! Matching naively up to the next whitespace absorbs the trailing
//! punctuation and produces broken links. The pattern here allows the full
//! RFC 3986 character set inside a URL but requires the match to *end* on a
//! narrower set of terminator characters, so sentence punctuation, quotes,
//! angle brackets, and control bytes are never swallowed.
//!
//! A closing parenthesis is never part of a URL here, even when it balances
//! an opening parenthesis inside the path; `https://x.org/Foo_(bar)` loses
//! its final `)`. Dropping it keeps `(see https://example.com)` correct,
//! which is the far more common shape in prose.

use std::ops::Range;
use std::sync::OnceLock;

use regex_lite::Regex;

// One or more RFC 3986 URL characters after the scheme, with the final
// character drawn from the terminator subset (no sentence punctuation,
// quotes, angle brackets, parentheses, or control bytes).
fn url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)https?://[a-z0-9\-._~:/?#\[\]@!$&'()*+,;=%]*[a-z0-9\-_~/#@$&*+=%]")
            .unwrap_or_else(|_| std::process::abort())
    })
}

/// One run of text that is either entirely a URL or entirely not.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub content: String,
    pub is_url: bool,
}

/// Splits `text` into an ordered cover of byte ranges, each flagged as URL
/// or non-URL. Ranges are contiguous and concatenate back to the whole
/// input; text with no URL yields a single non-URL range.
pub fn extract_spans(text: &str) -> Vec<(Range<usize>, bool)> {
    let mut spans: Vec<(Range<usize>, bool)> = Vec::new();
    let mut cursor = 0usize;
    for m in url_regex().find_iter(text) {
        if m.start() > cursor {
            spans.push((cursor..m.start(), false));
        }
        spans.push((m.start()..m.end(), true));
        cursor = m.end();
    }
    if cursor < text.len() || spans.is_empty() {
        spans.push((cursor..text.len(), false));
    }
    spans
}

/// Splits `text` into alternating URL / non-URL segments, in input order.
/// Empty gaps between adjacent matches are omitted; concatenating the
/// segment contents reproduces `text` exactly.
pub fn segment(text: &str) -> Vec<Segment> {
    extract_spans(text)
        .into_iter()
        .filter(|(range, _)| !range.is_empty())
        .map(|(range, is_url)| Segment {
            content: text[range].to_string(),
            is_url,
        })
        .collect()
}
