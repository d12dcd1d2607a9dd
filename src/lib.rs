//! session-share - Prepare agent conversation journals for public sharing
//!
//! This library turns an append-only session journal (newline-delimited JSON
//! records) into a structured, displayable conversation and removes
//! sensitive content before it is exposed through a public URL. It provides:
//!
//! - Parsing journal records into ordered messages with derived metadata
//! - Redacting secret-shaped strings and anonymizing filesystem paths
//! - Truncating oversized tool outputs
//! - Stripping internal instrumentation markup at render time
//! - A line-level diff for visualizing file edit operations
//!
//! The pipeline is synchronous and pure: parsing, sanitizing, cleaning and
//! diffing operate on in-memory strings with no I/O. Storage, transport and
//! rendering are left to callers.
//!
//! # Example
//!
//! ```
//! use session_share::{parse_session, sanitize_session};
//!
//! let jsonl = r#"{"type":"user","message":{"role":"user","content":"Fix the bug in /home/alice/app"}}"#;
//! let parsed = parse_session(jsonl, "alice/app");
//! let sanitized = sanitize_session(&parsed, None);
//! assert_eq!(sanitized.metadata.message_count, 1);
//! ```

pub mod cli;
pub mod diff;
pub mod display;
pub mod locator;
pub mod models;
pub mod parsers;
pub mod sanitizer;
pub mod utils;

// Re-export the pipeline surface
pub use diff::{DiffKind, DiffLine, added_count, compute_diff, removed_count};
pub use display::clean_user_text;
pub use models::{ContentBlock, ParsedMessage, ParsedSession, SessionMetadata};
pub use parsers::parse_session;
pub use sanitizer::sanitize_session;
