//! Command handlers for the capreq binary

mod dedup;
mod describe;

use serde::Serialize;

use capreq::config::{OutputFormat, Verbosity};
use capreq::reader::SkippedDeclaration;
use capreq::CapReq;

pub use dedup::cmd_dedup;
pub use describe::cmd_describe;

/// Settings resolved from CLI flags, environment and config files
#[derive(Debug, Clone, Copy)]
pub struct Context {
    pub format: OutputFormat,
    pub verbosity: Verbosity,
    pub strict: bool,
}

impl Context {
    pub fn json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}

pub fn cmd_version(ctx: &Context) -> anyhow::Result<()> {
    let version = env!("CARGO_PKG_VERSION");
    if ctx.json() {
        println!(
            "{}",
            serde_json::json!({ "name": "capreq", "version": version })
        );
    } else {
        println!("capreq {}", version);
    }
    Ok(())
}

/// JSON view of one record
#[derive(Debug, Serialize)]
struct RecordView<'a> {
    #[serde(flatten)]
    record: &'a CapReq,
    rendering: String,
}

impl<'a> From<&'a CapReq> for RecordView<'a> {
    fn from(record: &'a CapReq) -> Self {
        Self {
            record,
            rendering: record.describe(),
        }
    }
}

/// JSON view of a skipped declaration
#[derive(Debug, Serialize)]
struct SkippedView<'a> {
    resource: Option<&'a str>,
    mode: capreq::CapReqMode,
    index: usize,
    reason: &'a str,
}

impl<'a> From<&'a SkippedDeclaration> for SkippedView<'a> {
    fn from(skipped: &'a SkippedDeclaration) -> Self {
        Self {
            resource: skipped.resource.as_ref().map(|r| r.as_str()),
            mode: skipped.mode,
            index: skipped.index,
            reason: &skipped.reason,
        }
    }
}

/// One text line for a record, plus detail lines when verbose
fn text_lines(record: &CapReq, verbosity: Verbosity) -> Vec<String> {
    let mut lines = vec![format!("{:<12} {}", record.mode(), record)];
    if verbosity >= Verbosity::Verbose {
        if let Some(owner) = record.owner() {
            lines.push(format!("{:<12} owner: {}", "", owner));
        }
        lines.push(format!("{:<12} {}", "", record.detail()));
    }
    lines
}
