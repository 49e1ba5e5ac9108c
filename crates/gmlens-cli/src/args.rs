use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gmlens")]
#[command(about = "Analyze recorded tabletop sessions for the facilitator", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a session recording and print a colored summary
    Analyze {
        /// Path to the session JSON file
        file: PathBuf,

        /// Emit the full analysis as pretty-printed JSON
        #[arg(long)]
        json: bool,
    },

    /// Analyze a session recording and print the full text report
    Report {
        /// Path to the session JSON file
        file: PathBuf,
    },

    /// Run the analysis against the built-in sample session
    Demo {
        /// Emit the full analysis as pretty-printed JSON
        #[arg(long)]
        json: bool,
    },
}
