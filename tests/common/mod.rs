//! Shared test utilities for integration tests
#![allow(dead_code)]

use serde_json::{Value, json};

/// Builder for session journal text (one JSON record per line)
pub struct JournalBuilder {
    lines: Vec<String>,
}

impl JournalBuilder {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Append an arbitrary JSON record
    pub fn entry(mut self, value: Value) -> Self {
        self.lines.push(value.to_string());
        self
    }

    /// Append a raw line verbatim (for malformed-input cases)
    pub fn raw_line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Append a user message with a single text block
    pub fn user_text(self, text: &str) -> Self {
        self.entry(json!({
            "type": "user",
            "message": {"role": "user", "content": [{"type": "text", "text": text}]},
            "timestamp": "2024-01-15T10:00:00Z",
        }))
    }

    /// Append an assistant message with a single text block
    pub fn assistant_text(self, text: &str) -> Self {
        self.entry(json!({
            "type": "assistant",
            "message": {"role": "assistant", "content": [{"type": "text", "text": text}]},
            "timestamp": "2024-01-15T10:00:05Z",
        }))
    }

    /// Append an assistant message carrying token usage
    pub fn assistant_with_usage(self, text: &str, input_tokens: u64, output_tokens: u64) -> Self {
        self.entry(json!({
            "type": "assistant",
            "message": {"role": "assistant", "content": [{"type": "text", "text": text}]},
            "usage": {"input_tokens": input_tokens, "output_tokens": output_tokens},
        }))
    }

    /// Append an assistant message invoking a tool
    pub fn tool_use(self, id: &str, name: &str, input: Value) -> Self {
        self.entry(json!({
            "type": "assistant",
            "message": {
                "role": "assistant",
                "content": [{"type": "tool_use", "id": id, "name": name, "input": input}],
            },
        }))
    }

    /// Append a user message carrying a tool result
    pub fn tool_result(self, tool_use_id: &str, content: &str) -> Self {
        self.entry(json!({
            "type": "user",
            "message": {
                "role": "user",
                "content": [{"type": "tool_result", "tool_use_id": tool_use_id, "content": content}],
            },
        }))
    }

    /// Append a non-displayable bookkeeping record
    pub fn progress(self) -> Self {
        self.entry(json!({"type": "progress", "timestamp": "2024-01-15T10:00:01Z"}))
    }

    pub fn build(self) -> String {
        self.lines.join("\n")
    }
}

impl Default for JournalBuilder {
    fn default() -> Self {
        Self::new()
    }
}
