use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Record type tag on a raw journal line.
///
/// Journals contain bookkeeping records (`summary`, future additions) beyond
/// the documented set; those fold into [`EntryKind::Other`] so their
/// timestamps still participate in metadata derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryKind {
    User,
    Assistant,
    System,
    Progress,
    FileHistorySnapshot,
    QueueOperation,
    #[serde(other)]
    Other,
}

impl EntryKind {
    /// Only user and assistant records become displayable messages.
    pub fn is_displayable(self) -> bool {
        matches!(self, EntryKind::User | EntryKind::Assistant)
    }
}

/// Token usage counters attached to assistant records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenUsage {
    #[serde(default)]
    pub input_tokens: Option<u64>,
    #[serde(default)]
    pub output_tokens: Option<u64>,
    #[serde(default)]
    pub cache_creation_input_tokens: Option<u64>,
    #[serde(default)]
    pub cache_read_input_tokens: Option<u64>,
}

/// Message content as recorded: either a bare string or structured blocks.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RawContent {
    Text(String),
    Blocks(Vec<ContentBlock>),
}

/// The `message` field of a journal record.
///
/// Content goes through a lenient deserializer so one unrecognized block
/// type cannot drop a whole message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryMessage {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_raw_content"
    )]
    pub content: Option<RawContent>,
}

/// One raw record from the append-only session journal.
#[derive(Debug, Clone, Deserialize)]
pub struct JournalEntry {
    #[serde(rename = "type")]
    pub entry_type: EntryKind,
    #[serde(default)]
    pub message: Option<EntryMessage>,
    #[serde(default)]
    pub usage: Option<TokenUsage>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default, rename = "sessionId")]
    pub session_id: Option<String>,
}

/// One unit of message content.
///
/// This is a closed union: every consumer matches exhaustively, so a new
/// block variant surfaces as a compile error rather than being silently
/// passed through unsanitized.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text {
        text: String,
    },
    Thinking {
        thinking: String,
    },
    ToolUse {
        id: String,
        name: String,
        input: Value,
    },
    ToolResult {
        tool_use_id: String,
        #[serde(default)]
        content: ToolResultContent,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        is_error: Option<bool>,
    },
}

impl ContentBlock {
    pub fn is_thinking(&self) -> bool {
        matches!(self, ContentBlock::Thinking { .. })
    }

    pub fn is_tool_use(&self) -> bool {
        matches!(self, ContentBlock::ToolUse { .. })
    }
}

/// Tool result payload: a plain string or an ordered list of typed items.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ToolResultContent {
    Text(String),
    Items(Vec<ResultItem>),
}

impl Default for ToolResultContent {
    fn default() -> Self {
        ToolResultContent::Text(String::new())
    }
}

/// One item inside an array-valued tool result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultItem {
    #[serde(rename = "type")]
    pub item_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Message types that survive journal filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayableType {
    User,
    Assistant,
}

impl DisplayableType {
    pub fn as_role(self) -> &'static str {
        match self {
            DisplayableType::User => "user",
            DisplayableType::Assistant => "assistant",
        }
    }
}

/// One displayable conversation turn, ready for persistence and rendering.
///
/// Serialized camelCase to match the share-server wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedMessage {
    pub sequence: usize,
    #[serde(rename = "type")]
    pub message_type: DisplayableType,
    pub role: String,
    pub content: Vec<ContentBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_tokens: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_tokens: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    pub has_thinking: bool,
    pub has_tool_use: bool,
}

/// Session-level metadata derived during parsing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionMetadata {
    pub title: String,
    pub project_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    pub session_date: String,
    pub message_count: usize,
    pub total_input_tokens: u64,
    pub total_output_tokens: u64,
}

/// A fully parsed session: the unit handed to the sanitizer and persisted
/// by the storage layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedSession {
    pub messages: Vec<ParsedMessage>,
    pub metadata: SessionMetadata,
}
