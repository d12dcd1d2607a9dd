//! Discovery of session journal files on disk.
//!
//! Journals are stored as `~/.claude/projects/<encoded-project>/<uuid>.jsonl`.
//! The locator scans that tree for the most recently modified journal and
//! derives a project name from the directory encoding. Unreadable entries
//! are skipped; a missing projects directory simply yields no result.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use anyhow::{Context, Result};
use uuid::Uuid;
use walkdir::WalkDir;

use crate::utils::decode_project_dir_name;

/// A discovered journal file and the project it belongs to.
#[derive(Debug, Clone)]
pub struct LocatedSession {
    pub path: PathBuf,
    pub project_name: String,
}

/// Path to the projects directory holding session journals.
pub fn claude_projects_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not resolve home directory")?;
    Ok(home.join(".claude").join("projects"))
}

/// Find the most recently modified session journal under `projects_dir`.
///
/// Returns `Ok(None)` when the directory is missing or holds no journals.
pub fn find_latest_session(projects_dir: &Path) -> Result<Option<LocatedSession>> {
    let mut latest: Option<(SystemTime, LocatedSession)> = None;

    for entry in WalkDir::new(projects_dir)
        .min_depth(2)
        .max_depth(2)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !is_session_file(path) {
            continue;
        }
        let Ok(metadata) = entry.metadata() else {
            continue;
        };
        let Ok(modified) = metadata.modified() else {
            continue;
        };

        if latest.as_ref().is_none_or(|(newest, _)| modified > *newest) {
            let project_name = path
                .parent()
                .and_then(Path::file_name)
                .map(|name| decode_project_dir_name(&name.to_string_lossy()))
                .unwrap_or_else(|| "unknown".to_string());
            latest = Some((
                modified,
                LocatedSession {
                    path: path.to_path_buf(),
                    project_name,
                },
            ));
        }
    }

    Ok(latest.map(|(_, located)| located))
}

/// Journals are `.jsonl` files whose stem is a valid UUID.
fn is_session_file(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    let has_jsonl_ext = path.extension().is_some_and(|ext| ext == "jsonl");
    let has_uuid_stem = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .is_some_and(|stem| Uuid::parse_str(stem).is_ok());
    has_jsonl_ext && has_uuid_stem
}
