use std::env;

/// Placeholder used when no home directory can be resolved at all.
const FALLBACK_HOME: &str = "/home/user";

/// Resolve the current user's home directory as a string.
///
/// Falls back to `HOME`, then to a fixed placeholder. Never fails: path
/// anonymization must always have a substitution target.
pub fn resolve_home_dir() -> String {
    if let Some(home) = dirs::home_dir() {
        let home = home.to_string_lossy();
        if !home.is_empty() {
            return home.into_owned();
        }
    }
    match env::var("HOME") {
        Ok(home) if !home.is_empty() => home,
        _ => FALLBACK_HOME.to_string(),
    }
}
