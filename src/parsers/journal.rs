use chrono::Utc;
use serde_json::Value;

use crate::models::{
    ContentBlock, DisplayableType, EntryKind, JournalEntry, ParsedMessage, ParsedSession,
    RawContent, SessionMetadata,
};
use crate::parsers::scrub::scrub_strings;

const UNTITLED: &str = "Untitled Session";
const TITLE_MAX_CHARS: usize = 80;
const TITLE_ELLIPSIS: &str = "...";

/// Parse raw journal text (one JSON record per line) into a [`ParsedSession`].
///
/// Malformed lines are skipped, never fatal: the journal may still be
/// appended to and its last line can be incomplete. Empty or fully-malformed
/// input yields a valid zero-message session with a placeholder title.
pub fn parse_session(jsonl: &str, project_name: &str) -> ParsedSession {
    let entries = parse_lines(jsonl);

    let mut sequence = 0usize;
    let mut total_input_tokens = 0u64;
    let mut total_output_tokens = 0u64;
    let mut session_date: Option<String> = None;
    let mut messages = Vec::new();

    for entry in &entries {
        // Earliest timestamp in journal order, displayable or not
        if session_date.is_none() && entry.timestamp.is_some() {
            session_date = entry.timestamp.clone();
        }

        // Token totals count every assistant record carrying usage, even
        // ones filtered out below as non-displayable
        if entry.entry_type == EntryKind::Assistant {
            if let Some(usage) = &entry.usage {
                total_input_tokens += usage.input_tokens.unwrap_or(0);
                total_output_tokens += usage.output_tokens.unwrap_or(0);
            }
        }

        let message_type = match entry.entry_type {
            EntryKind::User => DisplayableType::User,
            EntryKind::Assistant => DisplayableType::Assistant,
            _ => continue,
        };

        let content = extract_content(entry);
        if content.is_empty() {
            continue;
        }

        let has_thinking = content.iter().any(ContentBlock::is_thinking);
        let has_tool_use = content.iter().any(ContentBlock::is_tool_use);

        messages.push(ParsedMessage {
            sequence,
            message_type,
            role: entry
                .message
                .as_ref()
                .and_then(|m| m.role.clone())
                .unwrap_or_else(|| message_type.as_role().to_string()),
            content,
            model: entry.model.clone(),
            input_tokens: entry.usage.as_ref().and_then(|u| u.input_tokens),
            output_tokens: entry.usage.as_ref().and_then(|u| u.output_tokens),
            timestamp: entry.timestamp.clone(),
            has_thinking,
            has_tool_use,
        });
        sequence += 1;
    }

    let metadata = SessionMetadata {
        title: derive_title(&messages),
        project_name: project_name.to_string(),
        branch: None,
        model: detect_model(&entries),
        user_name: None,
        session_date: session_date.unwrap_or_else(|| Utc::now().to_rfc3339()),
        message_count: messages.len(),
        total_input_tokens,
        total_output_tokens,
    };

    ParsedSession { messages, metadata }
}

/// Parse JSONL text into journal entries, skipping invalid lines.
///
/// Each surviving record has its strings scrubbed of control characters
/// before typed deserialization.
fn parse_lines(jsonl: &str) -> Vec<JournalEntry> {
    let mut entries = Vec::new();
    for line in jsonl.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let Ok(mut value) = serde_json::from_str::<Value>(trimmed) else {
            continue;
        };
        scrub_strings(&mut value);
        if let Ok(entry) = serde_json::from_value::<JournalEntry>(value) {
            entries.push(entry);
        }
    }
    entries
}

/// Extract content blocks from a journal entry. A bare-string content is
/// wrapped in a single synthetic text block.
fn extract_content(entry: &JournalEntry) -> Vec<ContentBlock> {
    let Some(message) = &entry.message else {
        return Vec::new();
    };
    match &message.content {
        Some(RawContent::Text(text)) => vec![ContentBlock::Text { text: text.clone() }],
        Some(RawContent::Blocks(blocks)) => blocks.clone(),
        None => Vec::new(),
    }
}

/// Derive a session title from the first user message's first text block.
fn derive_title(messages: &[ParsedMessage]) -> String {
    let first_user = messages
        .iter()
        .find(|m| m.message_type == DisplayableType::User);
    let Some(first_user) = first_user else {
        return UNTITLED.to_string();
    };

    let text = first_user.content.iter().find_map(|block| match block {
        ContentBlock::Text { text } => Some(text),
        _ => None,
    });
    let Some(text) = text else {
        return UNTITLED.to_string();
    };

    let text = text.trim();
    if text.chars().count() <= TITLE_MAX_CHARS {
        return text.to_string();
    }
    let mut title: String = text
        .chars()
        .take(TITLE_MAX_CHARS - TITLE_ELLIPSIS.len())
        .collect();
    title.push_str(TITLE_ELLIPSIS);
    title
}

/// First assistant record with a model field, scanning all entries in
/// journal order (including ones that never become messages).
fn detect_model(entries: &[JournalEntry]) -> Option<String> {
    entries
        .iter()
        .find(|e| e.entry_type == EntryKind::Assistant && e.model.is_some())
        .and_then(|e| e.model.clone())
}
