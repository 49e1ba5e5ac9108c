use std::path::Path;

use anyhow::{Context, Result};
use gmlens_engine::analyze;
use gmlens_types::SessionData;

use crate::views;

pub fn handle(file: &Path, json: bool) -> Result<()> {
    let session = SessionData::from_json_file(file)
        .with_context(|| format!("Failed to load session file: {}", file.display()))?;

    let analysis = analyze(&session);

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        views::print_summary(&analysis);
    }

    Ok(())
}
