use std::path::Path;

use anyhow::{Context as _, Result};
use serde::Serialize;

use capreq::config::Verbosity;
use capreq::reader::{read_manifest, ReaderOptions};
use capreq::CapReqSet;

use super::{text_lines, Context, RecordView};

#[derive(Serialize)]
struct DedupOutput<'a> {
    source: String,
    unique: Vec<RecordView<'a>>,
    duplicates: usize,
}

pub fn cmd_dedup(manifest: &Path, ctx: &Context) -> Result<()> {
    let report = read_manifest(manifest, ReaderOptions { strict: ctx.strict })
        .with_context(|| format!("failed to read {}", manifest.display()))?;

    let total = report.records.len();
    let set: CapReqSet = report.records.iter().cloned().collect();
    tracing::info!(total, unique = set.len(), "deduplicated records");

    if ctx.json() {
        let output = DedupOutput {
            source: report.source.display().to_string(),
            unique: set.iter().map(RecordView::from).collect(),
            duplicates: set.duplicates(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for record in set.iter() {
        for line in text_lines(record, ctx.verbosity) {
            println!("{}", line);
        }
    }
    if ctx.verbosity > Verbosity::Quiet {
        println!("\n{} unique, {} duplicates", set.len(), set.duplicates());
    }
    Ok(())
}
