//! JSONL parser for agent session journals
//!
//! # Error Handling Strategy
//!
//! This module follows a **graceful degradation** approach:
//!
//! - **Individual line failures**: a line that fails to parse as JSON is
//!   silently skipped. Journals are append-only and may still be written to,
//!   so a truncated final line is expected, not exceptional.
//!
//! - **No fatal parse states**: empty or fully-malformed input produces a
//!   valid zero-message session with a placeholder title. The caller decides
//!   whether an empty session is worth reporting to the user.
//!
//! - **String hygiene**: every string in a surviving record is scrubbed of
//!   control characters before typed deserialization, so the parsed session
//!   can always be re-serialized downstream.
//!
//! - **Unknown block types**: content arrays are decoded element-by-element
//!   and unrecognized blocks (`image`, future additions) are skipped, so the
//!   recognized content in the same message survives.
//!
//! The only hard failure class lives outside this module: inability to
//! decode the journal file as UTF-8 text at all, surfaced by the CLI layer
//! via `anyhow::Result`.

pub mod deserializers;
pub mod journal;
pub mod scrub;

pub use journal::parse_session;
