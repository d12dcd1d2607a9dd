//! Content sanitization applied before a session becomes publicly visible.
//!
//! Three passes over every text payload, strictly in order:
//!
//! 1. **Path anonymization** - the resolved home directory becomes `~`, a
//!    supplied project root becomes `.`, then generic `/Users/<name>/` and
//!    `/home/<name>/` fallbacks catch paths recorded by other users.
//! 2. **Secret redaction** - a fixed ordered list of secret-shaped patterns
//!    (vendor API key prefixes plus a generic `KEY=value` rule), every match
//!    replaced with `[REDACTED]`.
//! 3. **Truncation** - tool result text over 10,000 characters keeps 500
//!    characters at each end around a removed-count marker.
//!
//! Sanitization rewrites content only. Block identity (`id`, `tool_use_id`,
//! `name`), sequence numbers, timestamps and token counts are untouched.
//!
//! This is best-effort pattern filtering for accidental leaks, not a
//! security boundary against an adversary hiding secrets in exotic formats.

pub mod patterns;
pub mod session;

pub use patterns::REDACTED;
pub use session::sanitize_session;
