/// End-to-end tests for the full pipeline: journal text → parse → sanitize
/// → (render-time) clean and diff.
mod common;

use common::JournalBuilder;
use serde_json::json;
use session_share::models::{ContentBlock, DisplayableType, ToolResultContent};
use session_share::{clean_user_text, compute_diff, parse_session, sanitize_session, DiffKind};

#[test]
fn test_sequences_are_dense_across_skipped_and_filtered_lines() {
    let jsonl = JournalBuilder::new()
        .user_text("first")
        .raw_line(r#"{"type":"assistant","message":{"role":"assi"#) // torn final write
        .progress()
        .assistant_text("second")
        .raw_line("not json at all")
        .user_text("third")
        .build();

    let session = parse_session(&jsonl, "proj");

    assert_eq!(session.messages.len(), 3);
    let sequences: Vec<usize> = session.messages.iter().map(|m| m.sequence).collect();
    assert_eq!(sequences, vec![0, 1, 2]);
    assert_eq!(session.metadata.message_count, 3);
}

#[test]
fn test_tool_pairs_stay_correlated_through_sanitization() {
    let jsonl = JournalBuilder::new()
        .user_text("edit the config")
        .tool_use(
            "toolu_42",
            "Bash",
            json!({"command": "echo API_KEY=verysecret123 >> /home/dev/.env"}),
        )
        .tool_result("toolu_42", "wrote /home/dev/.env")
        .build();

    let parsed = parse_session(&jsonl, "proj");
    let sanitized = sanitize_session(&parsed, None);

    let tool_use_id = sanitized.messages[1]
        .content
        .iter()
        .find_map(|block| match block {
            ContentBlock::ToolUse { id, .. } => Some(id.clone()),
            _ => None,
        })
        .expect("tool_use present");
    let result_ref = sanitized.messages[2]
        .content
        .iter()
        .find_map(|block| match block {
            ContentBlock::ToolResult { tool_use_id, .. } => Some(tool_use_id.clone()),
            _ => None,
        })
        .expect("tool_result present");

    assert_eq!(tool_use_id, "toolu_42");
    assert_eq!(tool_use_id, result_ref);

    // The payloads themselves were rewritten
    match &sanitized.messages[1].content[0] {
        ContentBlock::ToolUse { input, .. } => {
            let command = input["command"].as_str().unwrap();
            assert!(command.contains("[REDACTED]"), "got: {command}");
            assert!(!command.contains("verysecret123"));
            assert!(command.contains("~/.env"));
        }
        other => panic!("expected tool_use, got {other:?}"),
    }
}

#[test]
fn test_sanitizing_twice_is_a_fixed_point() {
    let jsonl = JournalBuilder::new()
        .user_text("my key is sk-abcdefghijklmnopqrstuvwxyz12 at /home/dev/work")
        .assistant_text("noted, SECRET_TOKEN=abcd1234efgh is unsafe")
        .build();

    let parsed = parse_session(&jsonl, "proj");
    let once = sanitize_session(&parsed, None);
    let twice = sanitize_session(&once, None);

    let as_json = |s: &session_share::ParsedSession| serde_json::to_value(s).unwrap();
    assert_eq!(as_json(&once), as_json(&twice));
}

#[test]
fn test_oversized_tool_result_truncated_through_pipeline() {
    let big_output = "x".repeat(10_001);
    let jsonl = JournalBuilder::new()
        .user_text("run it")
        .tool_use("toolu_1", "Bash", json!({"command": "make"}))
        .tool_result("toolu_1", &big_output)
        .build();

    let sanitized = sanitize_session(&parse_session(&jsonl, "proj"), None);

    match &sanitized.messages[2].content[0] {
        ContentBlock::ToolResult {
            content: ToolResultContent::Text(text),
            ..
        } => {
            assert!(text.starts_with(&"x".repeat(500)));
            assert!(text.ends_with(&"x".repeat(500)));
            assert!(text.contains("[truncated: 9001 bytes removed]"));
        }
        other => panic!("expected tool_result, got {other:?}"),
    }

    // Exactly at the ceiling: untouched
    let at_limit = "x".repeat(10_000);
    let jsonl = JournalBuilder::new()
        .user_text("again")
        .tool_result("toolu_2", &at_limit)
        .build();
    let sanitized = sanitize_session(&parse_session(&jsonl, "proj"), None);
    match &sanitized.messages[1].content[0] {
        ContentBlock::ToolResult {
            content: ToolResultContent::Text(text),
            ..
        } => assert_eq!(*text, at_limit),
        other => panic!("expected tool_result, got {other:?}"),
    }
}

#[test]
fn test_title_derivation_through_wire_format() {
    let long_prompt = "p".repeat(81);
    let jsonl = JournalBuilder::new().user_text(&long_prompt).build();
    let session = parse_session(&jsonl, "proj");

    assert_eq!(session.metadata.title, format!("{}...", "p".repeat(77)));

    let json = serde_json::to_value(&session).unwrap();
    assert_eq!(json["metadata"]["title"], session.metadata.title.as_str());
    assert_eq!(json["metadata"]["messageCount"], 1);
    assert_eq!(json["messages"][0]["hasToolUse"], false);
    assert_eq!(json["messages"][0]["content"][0]["type"], "text");
}

#[test]
fn test_render_time_cleaning_of_command_invocation() {
    let raw = "<command-name>foo</command-name>\
               <command-message>foo</command-message>\
               <system-reminder>injected context</system-reminder>";
    let jsonl = JournalBuilder::new().user_text(raw).build();

    // Cleaning is not persisted: the sanitized session still holds the markup
    let sanitized = sanitize_session(&parse_session(&jsonl, "proj"), None);
    match &sanitized.messages[0].content[0] {
        ContentBlock::Text { text } => {
            assert!(text.contains("<command-name>"));
            assert_eq!(clean_user_text(text), "/foo");
        }
        other => panic!("expected text block, got {other:?}"),
    }
}

#[test]
fn test_edit_tool_diff_at_render_time() {
    let jsonl = JournalBuilder::new()
        .user_text("rename the function")
        .tool_use(
            "toolu_7",
            "Edit",
            json!({
                "file_path": "/home/dev/src/lib.rs",
                "old_string": "fn old_name() {\n    body();\n}",
                "new_string": "fn new_name() {\n    body();\n}",
            }),
        )
        .build();

    let sanitized = sanitize_session(&parse_session(&jsonl, "proj"), None);

    let (before, after) = sanitized.messages[1]
        .content
        .iter()
        .find_map(|block| match block {
            ContentBlock::ToolUse { input, .. } => Some((
                input["old_string"].as_str().unwrap().to_string(),
                input["new_string"].as_str().unwrap().to_string(),
            )),
            _ => None,
        })
        .expect("edit input present");

    let lines = compute_diff(&before, &after);
    let kinds: Vec<DiffKind> = lines.iter().map(|l| l.kind).collect();
    assert_eq!(
        kinds,
        vec![
            DiffKind::Removed,
            DiffKind::Added,
            DiffKind::Context,
            DiffKind::Context,
        ]
    );
    assert_eq!(lines[0].text, "fn old_name() {");
    assert_eq!(lines[1].text, "fn new_name() {");
}

#[test]
fn test_token_totals_and_model_detection_end_to_end() {
    let jsonl = JournalBuilder::new()
        .user_text("question")
        .entry(json!({"type": "assistant", "model": "model-a-2"}))
        .assistant_with_usage("answer", 120, 40)
        .assistant_with_usage("more", 80, 10)
        .build();

    let session = parse_session(&jsonl, "proj");

    assert_eq!(session.metadata.model.as_deref(), Some("model-a-2"));
    assert_eq!(session.metadata.total_input_tokens, 200);
    assert_eq!(session.metadata.total_output_tokens, 50);
    // The model-only record had no content and produced no message
    assert_eq!(session.messages.len(), 3);
    assert_eq!(session.messages[0].message_type, DisplayableType::User);
}

#[test]
fn test_empty_journal_round_trips_as_valid_payload() {
    let session = parse_session("", "proj");
    let sanitized = sanitize_session(&session, None);

    let json = serde_json::to_string(&sanitized).unwrap();
    let back: session_share::ParsedSession = serde_json::from_str(&json).unwrap();
    assert!(back.messages.is_empty());
    assert_eq!(back.metadata.title, "Untitled Session");
}
