use anyhow::Result;

use super::args::{Cli, Commands};
use super::handlers;

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Analyze { file, json } => handlers::analyze::handle(&file, json),
        Commands::Report { file } => handlers::report::handle(&file),
        Commands::Demo { json } => handlers::demo::handle(json),
    }
}
