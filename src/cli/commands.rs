use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use crate::locator::{LocatedSession, claude_projects_dir, find_latest_session};
use crate::parsers::parse_session;
use crate::sanitizer::sanitize_session;
use crate::utils::format_path_with_tilde;

#[derive(Parser)]
#[command(name = "session-share")]
#[command(version = "0.1.0")]
#[command(about = "Prepare agent session journals for public sharing", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse and sanitize a session journal, emitting share-ready JSON
    Export {
        /// Path to a .jsonl journal; defaults to the most recent session
        #[arg(long)]
        session: Option<PathBuf>,
        /// Project root path used for path anonymization
        #[arg(long)]
        project_path: Option<String>,
        /// Write the JSON here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Show a summary of a session journal without exporting it
    Info {
        /// Path to a .jsonl journal; defaults to the most recent session
        #[arg(long)]
        session: Option<PathBuf>,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Export {
            session,
            project_path,
            output,
        }) => export(session, project_path.as_deref(), output),
        Some(Commands::Info { session }) => info(session),
        None => {
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

/// Resolve the journal to operate on: an explicit path, or the most
/// recently modified session on disk.
fn resolve_session(session: Option<PathBuf>) -> Result<LocatedSession> {
    if let Some(path) = session {
        let project_name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "unknown".to_string());
        return Ok(LocatedSession { path, project_name });
    }

    let projects_dir = claude_projects_dir()?;
    match find_latest_session(&projects_dir)? {
        Some(located) => Ok(located),
        None => bail!(
            "No session journals found under {}",
            format_path_with_tilde(&projects_dir)
        ),
    }
}

fn load_sanitized(
    session: Option<PathBuf>,
    project_path: Option<&str>,
) -> Result<(LocatedSession, crate::models::ParsedSession)> {
    let located = resolve_session(session)?;
    // Reading must decode as UTF-8 text; this is the one hard failure the
    // pipeline propagates
    let jsonl = fs::read_to_string(&located.path)
        .with_context(|| format!("Failed to read session journal: {}", located.path.display()))?;

    let parsed = parse_session(&jsonl, &located.project_name);
    if parsed.messages.is_empty() {
        eprintln!(
            "Warning: no displayable messages in {}",
            located.path.display()
        );
    }

    let sanitized = sanitize_session(&parsed, project_path);
    Ok((located, sanitized))
}

fn export(
    session: Option<PathBuf>,
    project_path: Option<&str>,
    output: Option<PathBuf>,
) -> Result<()> {
    let (_, sanitized) = load_sanitized(session, project_path)?;

    let json =
        serde_json::to_string_pretty(&sanitized).context("Failed to serialize session")?;

    match output {
        Some(path) => {
            fs::write(&path, json)
                .with_context(|| format!("Failed to write output: {}", path.display()))?;
            eprintln!("Wrote sanitized session to {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}

fn info(session: Option<PathBuf>) -> Result<()> {
    let (located, sanitized) = load_sanitized(session, None)?;
    let metadata = &sanitized.metadata;

    println!("Session Summary");
    println!("================");
    println!("Journal: {}", format_path_with_tilde(&located.path));
    println!("Title: {}", metadata.title);
    println!("Project: {}", metadata.project_name);
    if let Some(model) = &metadata.model {
        println!("Model: {model}");
    }
    println!("Date: {}", metadata.session_date);
    println!("Messages: {}", metadata.message_count);
    println!(
        "Tokens: {} in / {} out",
        metadata.total_input_tokens, metadata.total_output_tokens
    );

    Ok(())
}
