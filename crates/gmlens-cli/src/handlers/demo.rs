use anyhow::Result;
use gmlens_engine::{analyze, render, sample_session};

pub fn handle(json: bool) -> Result<()> {
    let session = sample_session();
    let analysis = analyze(&session);

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print!("{}", render(&analysis));
    }

    Ok(())
}
