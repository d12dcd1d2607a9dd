use anyhow::Result;

fn main() -> Result<()> {
    session_share::cli::run()
}
