use std::path::Path;

use anyhow::{Context as _, Result};
use serde::Serialize;

use capreq::config::Verbosity;
use capreq::reader::{read_manifest, ReaderOptions};

use super::{text_lines, Context, RecordView, SkippedView};

#[derive(Serialize)]
struct DescribeOutput<'a> {
    source: String,
    records: Vec<RecordView<'a>>,
    skipped: Vec<SkippedView<'a>>,
}

pub fn cmd_describe(manifest: &Path, ctx: &Context) -> Result<()> {
    let report = read_manifest(manifest, ReaderOptions { strict: ctx.strict })
        .with_context(|| format!("failed to read {}", manifest.display()))?;

    if ctx.json() {
        let output = DescribeOutput {
            source: report.source.display().to_string(),
            records: report.records.iter().map(RecordView::from).collect(),
            skipped: report.skipped.iter().map(SkippedView::from).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for record in &report.records {
        for line in text_lines(record, ctx.verbosity) {
            println!("{}", line);
        }
    }
    if ctx.verbosity > Verbosity::Quiet {
        println!(
            "\n{} records, {} skipped",
            report.records.len(),
            report.skipped.len()
        );
    }
    Ok(())
}
