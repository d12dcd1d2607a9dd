use std::borrow::Cow;
use std::path::Path;

use crate::utils::environment::resolve_home_dir;

/// Decode a dash-encoded project directory name into a readable project name.
///
/// Session journals live under directories named after the project path with
/// separators replaced by dashes (`-Users-alice-dev-tool`). The decoded form
/// drops the leading separator: `Users/alice/dev/tool`.
pub fn decode_project_dir_name(encoded: &str) -> String {
    let decoded = encoded.replace('-', "/");
    decoded.trim_start_matches('/').to_string()
}

/// Format a path for terminal output with `~` substituted for the home
/// directory.
pub fn format_path_with_tilde(path: &Path) -> String {
    let home = resolve_home_dir();
    let path_str = path.to_string_lossy();
    if path_str.starts_with(&home) {
        return path_str.replacen(&home, "~", 1);
    }
    match path_str {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}
