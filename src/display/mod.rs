//! Display-time text cleaning.
//!
//! Raw (sanitized) data is what gets persisted; these functions strip
//! internal instrumentation markup only for rendering and are re-applied on
//! every render. [`clean_user_text`] is idempotent and safe to call on text
//! that already went through the sanitizer - it operates on structural
//! markup, not on secret or path content.

use std::sync::OnceLock;

use regex::Regex;

/// Paired instrumentation tags (removed with their contents) plus the
/// literal interruption notice, applied strictly in order.
fn strip_patterns() -> &'static [Regex] {
    static STRIP_PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    STRIP_PATTERNS.get_or_init(|| {
        [
            r"(?s)<system-reminder>.*?</system-reminder>",
            r"(?s)<local-command-caveat>.*?</local-command-caveat>",
            r"(?s)<user-prompt-submit-hook>.*?</user-prompt-submit-hook>",
            r"(?s)<antml_thinking>.*?</antml_thinking>",
            r"(?s)<user-memory-input>.*?</user-memory-input>",
            r"(?s)<local-command-stdout>.*?</local-command-stdout>",
            r"(?s)<task-notification>.*?</task-notification>",
            r"(?s)<command-args>.*?</command-args>",
            r"<command-name>[^<]*</command-name>",
            r"<command-message>[^<]*</command-message>",
            r"\[Request interrupted by user(?:\s+for tool use)?\]",
        ]
        .iter()
        .map(|pattern| Regex::new(pattern).expect("valid strip pattern"))
        .collect()
    })
}

fn command_name_pattern() -> &'static Regex {
    static COMMAND_NAME: OnceLock<Regex> = OnceLock::new();
    COMMAND_NAME
        .get_or_init(|| Regex::new(r"<command-name>([^<]+)</command-name>").expect("valid pattern"))
}

fn command_message_pattern() -> &'static Regex {
    static COMMAND_MESSAGE: OnceLock<Regex> = OnceLock::new();
    COMMAND_MESSAGE.get_or_init(|| {
        Regex::new(r"<command-message>([^<]*)</command-message>").expect("valid pattern")
    })
}

/// Strip internal instrumentation markup from user message text.
///
/// When stripping leaves nothing but the original carried a slash-command
/// marker, the cleaned text is rebuilt as `/<command-name>`, plus the
/// command message when it adds information beyond the bare name.
pub fn clean_user_text(text: &str) -> String {
    let command_name = command_name_pattern()
        .captures(text)
        .map(|caps| caps[1].to_string());
    let command_message = command_message_pattern()
        .captures(text)
        .map(|caps| caps[1].to_string());

    let mut result = text.to_string();
    for pattern in strip_patterns() {
        if pattern.is_match(&result) {
            result = pattern.replace_all(&result, "").into_owned();
        }
    }
    let mut result = result.trim().to_string();

    if result.is_empty() {
        if let Some(name) = command_name {
            result = format!("/{name}");
            if let Some(message) = command_message {
                if !message.is_empty() && message != name {
                    result.push(' ');
                    result.push_str(&message);
                }
            }
        }
    }

    result
}
