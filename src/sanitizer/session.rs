use serde_json::Value;

use crate::models::{
    ContentBlock, ParsedMessage, ParsedSession, ResultItem, SessionMetadata, ToolResultContent,
};
use crate::sanitizer::patterns::{home_dir_pattern, secret_patterns, users_dir_pattern, REDACTED};
use crate::utils::resolve_home_dir;

/// Tool result text longer than this gets its interior cut out.
const MAX_TOOL_RESULT_CHARS: usize = 10_000;
/// Characters kept verbatim at each end of a truncated tool result.
const TRUNCATE_KEEP: usize = 500;

/// Substitutions resolved once per session, shared by every block.
struct SanitizeContext<'a> {
    home_dir: String,
    project_path: Option<&'a str>,
}

/// Produce a sanitized copy of a parsed session.
///
/// Content payloads are path-anonymized, secret-redacted and (for tool
/// results) truncated. Identity fields (`id`, `tool_use_id`, `name`),
/// sequence numbers, timestamps and token counts pass through untouched, so
/// every tool_use/tool_result correlation survives. `metadata.projectName`
/// is path-sanitized; `metadata.title` is derived from raw user text at
/// parse time and gets the full path + secret treatment (no truncation,
/// titles are already capped).
pub fn sanitize_session(session: &ParsedSession, project_path: Option<&str>) -> ParsedSession {
    let ctx = SanitizeContext {
        home_dir: resolve_home_dir(),
        project_path,
    };

    ParsedSession {
        metadata: SessionMetadata {
            title: sanitize_text(&session.metadata.title, &ctx),
            project_name: sanitize_paths(&session.metadata.project_name, &ctx),
            ..session.metadata.clone()
        },
        messages: session
            .messages
            .iter()
            .map(|message| sanitize_message(message, &ctx))
            .collect(),
    }
}

fn sanitize_message(message: &ParsedMessage, ctx: &SanitizeContext<'_>) -> ParsedMessage {
    ParsedMessage {
        content: message
            .content
            .iter()
            .map(|block| sanitize_block(block, ctx))
            .collect(),
        ..message.clone()
    }
}

fn sanitize_block(block: &ContentBlock, ctx: &SanitizeContext<'_>) -> ContentBlock {
    match block {
        ContentBlock::Text { text } => ContentBlock::Text {
            text: sanitize_text(text, ctx),
        },
        ContentBlock::Thinking { thinking } => ContentBlock::Thinking {
            thinking: sanitize_text(thinking, ctx),
        },
        ContentBlock::ToolUse { id, name, input } => ContentBlock::ToolUse {
            id: id.clone(),
            name: name.clone(),
            input: sanitize_value(input, ctx),
        },
        ContentBlock::ToolResult {
            tool_use_id,
            content,
            is_error,
        } => ContentBlock::ToolResult {
            tool_use_id: tool_use_id.clone(),
            content: sanitize_result_content(content, ctx),
            is_error: *is_error,
        },
    }
}

fn sanitize_result_content(
    content: &ToolResultContent,
    ctx: &SanitizeContext<'_>,
) -> ToolResultContent {
    match content {
        ToolResultContent::Text(text) => {
            ToolResultContent::Text(truncate_text(sanitize_text(text, ctx)))
        }
        ToolResultContent::Items(items) => ToolResultContent::Items(
            items
                .iter()
                .map(|item| ResultItem {
                    item_type: item.item_type.clone(),
                    text: item
                        .text
                        .as_ref()
                        .map(|text| truncate_text(sanitize_text(text, ctx))),
                })
                .collect(),
        ),
    }
}

/// Redact every string leaf of a tool input value in place of the
/// serialize-redact-reparse round trip: the result is valid JSON by
/// construction, so no re-parse fallback is needed.
fn sanitize_value(value: &Value, ctx: &SanitizeContext<'_>) -> Value {
    match value {
        Value::String(s) => Value::String(sanitize_text(s, ctx)),
        Value::Array(items) => {
            Value::Array(items.iter().map(|item| sanitize_value(item, ctx)).collect())
        }
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, item)| (key.clone(), sanitize_value(item, ctx)))
                .collect(),
        ),
        other => other.clone(),
    }
}

/// Path anonymization followed by secret redaction.
fn sanitize_text(text: &str, ctx: &SanitizeContext<'_>) -> String {
    redact_secrets(&sanitize_paths(text, ctx))
}

/// Replace absolute filesystem paths with relative markers.
///
/// Specific substitutions (resolved home, project root) run before the
/// generic `/Users/...` and `/home/...` fallbacks, which would otherwise
/// consume the specific targets first.
fn sanitize_paths(text: &str, ctx: &SanitizeContext<'_>) -> String {
    let mut result = text.replace(&ctx.home_dir, "~");

    if let Some(project) = ctx.project_path {
        if !project.is_empty() {
            result = result.replace(project, ".");
        }
    }

    let result = users_dir_pattern().replace_all(&result, "~/");
    let result = home_dir_pattern().replace_all(&result, "~/");
    result.into_owned()
}

/// Replace secret-shaped substrings with the redaction marker.
fn redact_secrets(text: &str) -> String {
    let mut result = text.to_string();
    for pattern in secret_patterns() {
        if pattern.is_match(&result) {
            result = pattern.replace_all(&result, REDACTED).into_owned();
        }
    }
    result
}

/// Cut the interior out of oversized tool result text, keeping the first
/// and last [`TRUNCATE_KEEP`] characters verbatim.
///
/// Runs after redaction so the reported count and the kept boundary text
/// reflect post-redaction content rather than leaking original lengths.
fn truncate_text(text: String) -> String {
    let char_count = text.chars().count();
    if char_count <= MAX_TOOL_RESULT_CHARS {
        return text;
    }

    let removed = char_count - TRUNCATE_KEEP * 2;
    let head_end = char_to_byte_offset(&text, TRUNCATE_KEEP);
    let tail_start = char_to_byte_offset(&text, char_count - TRUNCATE_KEEP);

    format!(
        "{}\n\n[truncated: {} bytes removed]\n\n{}",
        &text[..head_end],
        removed,
        &text[tail_start..]
    )
}

fn char_to_byte_offset(text: &str, chars: usize) -> usize {
    text.char_indices()
        .nth(chars)
        .map(|(offset, _)| offset)
        .unwrap_or(text.len())
}
