//! Data models for agent session journals and their parsed form.
//!
//! This module defines the data structures used throughout the pipeline:
//!
//! - [`JournalEntry`] - One raw record from a session journal (JSONL line)
//! - [`ContentBlock`] - One unit of message content (text, thinking, tool call, tool result)
//! - [`ParsedMessage`] - One displayable conversation turn
//! - [`SessionMetadata`] / [`ParsedSession`] - The unit handed to the sanitizer and persisted
//!
//! These models use serde for JSON (de)serialization. The parsed types
//! serialize camelCase to match the wire format the share server persists.

pub mod session;

pub use session::{
    ContentBlock, DisplayableType, EntryKind, EntryMessage, JournalEntry, ParsedMessage,
    ParsedSession, RawContent, ResultItem, SessionMetadata, TokenUsage, ToolResultContent,
};
