//! capreq CLI - inspect capability/requirement manifests
//!
//! Usage: capreq <COMMAND>
//!
//! Commands:
//!   describe  Print the diagnostic rendering of every record
//!   dedup     Collapse structurally equal records
//!   version   Show version information

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use capreq::config::{Config, OutputFormat, Verbosity};

mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::Context;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let project_root = std::env::current_dir().ok();
    let (config, warnings) = Config::load_or_default(project_root.as_deref());

    let ctx = Context {
        format: if cli.json {
            OutputFormat::Json
        } else {
            config.output.format
        },
        verbosity: config.output.verbosity.raised_by(cli.verbose),
        strict: cli.strict || config.reader.strict,
    };

    init_tracing(ctx.verbosity);
    for warning in &warnings {
        tracing::warn!("{}", warning);
    }

    match cli.command {
        Commands::Describe { manifest } => commands::cmd_describe(&manifest, &ctx),
        Commands::Dedup { manifest } => commands::cmd_dedup(&manifest, &ctx),
        Commands::Version => commands::cmd_version(&ctx),
    }
}

/// Log to stderr; `RUST_LOG` wins over the verbosity-derived default
fn init_tracing(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
