//! Line-level diff for visualizing file edit operations.
//!
//! A two-ended common-run reduction: identical leading and trailing line
//! runs become context, everything between is a flat removed block followed
//! by an added block. Intentionally cheap and deterministic - moved or
//! reordered lines inside the changed region are not matched up, which is
//! an accepted trade-off against a full minimum-edit-distance diff.

use serde::{Deserialize, Serialize};

/// Tag on one output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffKind {
    Context,
    Removed,
    Added,
}

/// One line of diff output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffLine {
    pub kind: DiffKind,
    pub text: String,
}

impl DiffLine {
    fn new(kind: DiffKind, text: &str) -> Self {
        DiffLine {
            kind,
            text: text.to_string(),
        }
    }
}

/// Compute the line diff between an edit's before and after state.
pub fn compute_diff(before: &str, after: &str) -> Vec<DiffLine> {
    let old_lines = split_lines(before);
    let new_lines = split_lines(after);

    let prefix_len = old_lines
        .iter()
        .zip(new_lines.iter())
        .take_while(|(old, new)| old == new)
        .count();

    // Suffix run over the remainder; capped so it never overlaps the prefix
    let max_suffix = old_lines.len().min(new_lines.len()) - prefix_len;
    let suffix_len = old_lines
        .iter()
        .rev()
        .zip(new_lines.iter().rev())
        .take(max_suffix)
        .take_while(|(old, new)| old == new)
        .count();

    let mut lines =
        Vec::with_capacity(old_lines.len() + new_lines.len() - prefix_len - suffix_len);

    for line in &old_lines[..prefix_len] {
        lines.push(DiffLine::new(DiffKind::Context, line));
    }
    for line in &old_lines[prefix_len..old_lines.len() - suffix_len] {
        lines.push(DiffLine::new(DiffKind::Removed, line));
    }
    for line in &new_lines[prefix_len..new_lines.len() - suffix_len] {
        lines.push(DiffLine::new(DiffKind::Added, line));
    }
    for line in &old_lines[old_lines.len() - suffix_len..] {
        lines.push(DiffLine::new(DiffKind::Context, line));
    }

    lines
}

/// Number of added lines, for summary display.
pub fn added_count(lines: &[DiffLine]) -> usize {
    lines.iter().filter(|l| l.kind == DiffKind::Added).count()
}

/// Number of removed lines, for summary display.
pub fn removed_count(lines: &[DiffLine]) -> usize {
    lines.iter().filter(|l| l.kind == DiffKind::Removed).count()
}

/// An empty blob is zero lines, so inserting into an empty file produces
/// added lines only.
fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        Vec::new()
    } else {
        text.split('\n').collect()
    }
}
