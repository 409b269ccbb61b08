#![allow(clippy::unwrap_used, clippy::expect_used)]

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use tailview_render::LayoutBudget;
use tailview_render::MAX_RESULT_CHARS;
use tailview_render::RenderInstruction;
use tailview_render::ResultPayload;
use tailview_render::RowReservations;
use tailview_render::dispatch;
use tailview_render::effective_height;
use tailview_render::segment;

fn scrolling_budget(height: u16) -> LayoutBudget {
    LayoutBudget::new(80).with_available_height(height)
}

#[test]
fn oversized_plain_text_is_capped_then_height_limited() {
    // One long line that survives the character cap, followed by enough
    // short lines to overflow the height budget.
    let mut text = "x".repeat(MAX_RESULT_CHARS + 100);
    for i in 0..10 {
        text.push_str(&format!("\ntail{i}"));
    }
    let instruction = dispatch(
        &ResultPayload::PlainText(text),
        scrolling_budget(3),
        false,
        false,
    );

    let RenderInstruction::Text { text, width } = instruction else {
        panic!("expected a plain-text instruction");
    };
    assert_eq!(width, 80);
    assert_eq!(text, "...\ntail7\ntail8\ntail9");
}

#[test]
fn rendered_result_segments_cleanly_for_link_styling() {
    let payload = ResultPayload::PlainText(
        "Build failed. See https://ci.example.com/run/42, then retry.".to_string(),
    );
    let instruction = dispatch(&payload, LayoutBudget::new(120), false, false);

    let RenderInstruction::Text { text, .. } = instruction else {
        panic!("expected a plain-text instruction");
    };
    let segments = segment(&text);
    let reassembled: String = segments.iter().map(|s| s.content.as_str()).collect();
    assert_eq!(reassembled, text);

    let urls: Vec<&str> = segments
        .iter()
        .filter(|s| s.is_url)
        .map(|s| s.content.as_str())
        .collect();
    assert_eq!(urls, vec!["https://ci.example.com/run/42"]);
}

#[test]
fn markdown_preference_only_survives_where_safe() {
    let payload = ResultPayload::PlainText("**bold**".to_string());

    // No height budget: the caller's markdown preference stands.
    assert_matches!(
        dispatch(&payload, LayoutBudget::new(80), true, false),
        RenderInstruction::Markdown { .. }
    );
    // Height budget while scrolling: forced to plain text.
    assert_matches!(
        dispatch(&payload, scrolling_budget(5), true, false),
        RenderInstruction::Text { .. }
    );
    // Height budget in the alternate buffer: markdown again.
    assert_matches!(
        dispatch(&payload, scrolling_budget(5), true, true),
        RenderInstruction::Markdown { .. }
    );
}

#[test]
fn diff_and_todo_payloads_bypass_the_truncator() {
    let diff = ResultPayload::FileDiff {
        content: "@@ -1 +1 @@\n-a\n+b".to_string(),
        filename: "lib.rs".to_string(),
    };
    assert_matches!(
        dispatch(&diff, scrolling_budget(1), false, false),
        RenderInstruction::Diff { ref content, available_height: Some(1), .. }
            if content.contains("@@")
    );
    assert_matches!(
        dispatch(&ResultPayload::TodoMarker, scrolling_budget(1), false, false),
        RenderInstruction::Nothing
    );
}

#[test]
fn host_height_flows_through_reservation_arithmetic() {
    // A 24-row terminal with default chrome reservations leaves 20 rows;
    // dispatch then receives that as the height budget.
    let rows = effective_height(24, RowReservations::default());
    assert_eq!(rows, 20);

    let text = (0..30).map(|i| format!("l{i}")).collect::<Vec<_>>().join("\n");
    let instruction = dispatch(
        &ResultPayload::PlainText(text),
        LayoutBudget::new(80).with_available_height(rows),
        false,
        false,
    );
    let RenderInstruction::Text { text, .. } = instruction else {
        panic!("expected a plain-text instruction");
    };
    let lines: Vec<&str> = text.split('\n').collect();
    assert_eq!(lines.len(), 21);
    assert_eq!(lines[0], "...");
    assert_eq!(lines[20], "l29");
}
