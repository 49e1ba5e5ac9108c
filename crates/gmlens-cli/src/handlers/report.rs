use std::path::Path;

use anyhow::{Context, Result};
use gmlens_engine::{analyze, render};
use gmlens_types::SessionData;

pub fn handle(file: &Path) -> Result<()> {
    let session = SessionData::from_json_file(file)
        .with_context(|| format!("Failed to load session file: {}", file.display()))?;

    let analysis = analyze(&session);
    print!("{}", render(&analysis));

    Ok(())
}
