use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// capreq - inspect capability/requirement manifests
#[derive(Parser, Debug)]
#[command(name = "capreq")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Machine-readable JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Abort on the first bad declaration instead of skipping it
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the diagnostic rendering of every record in a manifest
    Describe {
        /// Manifest file (TOML)
        manifest: PathBuf,
    },

    /// Collapse structurally equal records and report duplicates
    Dedup {
        /// Manifest file (TOML)
        manifest: PathBuf,
    },

    /// Show version information
    Version,
}
