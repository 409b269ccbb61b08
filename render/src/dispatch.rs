//! Routing from a result payload to the renderer that owns it.
//!
//! The payload variant is decided once, where the result originates, and
//! carried as a closed sum type; nothing here probes object shapes at
//! render time. Dispatch is first-match-wins and returns an explicit
//! [`RenderInstruction`] with width and height already computed, so the
//! downstream collaborators (markdown, plain text, diff, styled text) stay
//! trivially testable.

use ratatui::text::Line;

use crate::line_utils::push_owned_lines;
use crate::truncation::LayoutBudget;
use crate::truncation::MAX_RESULT_CHARS;
use crate::truncation::truncate_result;
use crate::window::StyledDocument;
use crate::window::window_trailing;

/// The renderable outcome of one tool or command invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResultPayload {
    PlainText(String),
    FileDiff { content: String, filename: String },
    /// Todo-list state changed; a dedicated widget outside this core renders
    /// it, so the result row itself shows nothing.
    TodoMarker,
    Styled(StyledDocument),
}

/// What the host should paint, with layout already decided. Each variant
/// names the downstream collaborator that owns the painting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderInstruction {
    Nothing,
    /// For the unified-diff renderer, which applies its own truncation.
    Diff {
        content: String,
        filename: String,
        width: u16,
        available_height: Option<u16>,
    },
    /// For the markdown renderer.
    Markdown { text: String, width: u16 },
    /// For the plain-text renderer, which applies [`crate::linkify::segment`]
    /// before painting so URLs get link styling.
    Text { text: String, width: u16 },
    /// For the styled-text renderer; lines are an owned copy of the
    /// windowed suffix.
    StyledLines {
        lines: Vec<Line<'static>>,
        width: u16,
    },
}

/// Routes `payload` to a [`RenderInstruction`]. Empty payloads render
/// nothing; diffs pass through untruncated; styled documents are windowed
/// to the trailing rows; plain text is truncated and sent to either the
/// markdown or the plain-text renderer.
pub fn dispatch(
    payload: &ResultPayload,
    budget: LayoutBudget,
    render_markdown: bool,
    is_alternate_buffer: bool,
) -> RenderInstruction {
    match payload {
        ResultPayload::PlainText(text) if text.is_empty() => RenderInstruction::Nothing,
        ResultPayload::FileDiff { content, filename } => RenderInstruction::Diff {
            content: content.clone(),
            filename: filename.clone(),
            width: budget.terminal_width,
            available_height: budget.available_height,
        },
        ResultPayload::TodoMarker => RenderInstruction::Nothing,
        ResultPayload::Styled(document) if document.is_empty() => RenderInstruction::Nothing,
        ResultPayload::Styled(document) => {
            let mut lines = Vec::new();
            push_owned_lines(window_trailing(document, budget.available_height), &mut lines);
            RenderInstruction::StyledLines {
                lines,
                width: budget.terminal_width,
            }
        }
        ResultPayload::PlainText(text) => {
            // A height budget in scrolling mode forces plain text: the
            // markdown renderer does not honor height budgets.
            let markdown =
                render_markdown && !(budget.available_height.is_some() && !is_alternate_buffer);
            if render_markdown && !markdown {
                tracing::debug!("height budget active in scrolling mode; rendering as plain text");
            }
            let text =
                truncate_result(text, MAX_RESULT_CHARS, budget, is_alternate_buffer).into_owned();
            if markdown {
                RenderInstruction::Markdown {
                    text,
                    width: budget.terminal_width,
                }
            } else {
                RenderInstruction::Text {
                    text,
                    width: budget.terminal_width,
                }
            }
        }
    }
}
