//! Manifest reader
//!
//! Builds `CapReq` records from a TOML resource manifest:
//!
//! ```toml
//! [[resource]]
//! id = "com.example.api"
//!
//! [[resource.capability]]
//! namespace = "osgi.wiring.package"
//! attributes = { "osgi.wiring.package" = "com.example", "version:Version" = "1.2.0" }
//!
//! [[resource.requirement]]
//! namespace = "osgi.wiring.package"
//! directives = { filter = "(osgi.wiring.package=com.example.util)" }
//! ```
//!
//! A declaration that cannot become a record either aborts the read
//! (strict) or is skipped with a warning, depending on [`ReaderOptions`].

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::config::ReaderConfig;
use crate::domain::entities::CapReq;
use crate::domain::ports::{Attributes, Directives};
use crate::domain::value_objects::{Attr, CapReqMode, ResourceId};
use crate::error::{CapReqError, CapReqResult};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawManifest {
    #[serde(default, rename = "resource")]
    resources: Vec<RawResource>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawResource {
    id: Option<String>,
    #[serde(default, rename = "capability")]
    capabilities: Vec<RawDeclaration>,
    #[serde(default, rename = "requirement")]
    requirements: Vec<RawDeclaration>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDeclaration {
    namespace: Option<String>,
    #[serde(default)]
    directives: BTreeMap<String, toml::Value>,
    #[serde(default)]
    attributes: BTreeMap<String, toml::Value>,
}

/// How the reader treats declarations that fail to build
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReaderOptions {
    pub strict: bool,
}

impl From<&ReaderConfig> for ReaderOptions {
    fn from(config: &ReaderConfig) -> Self {
        Self {
            strict: config.strict,
        }
    }
}

/// A declaration that was dropped in lenient mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedDeclaration {
    pub resource: Option<ResourceId>,
    pub mode: CapReqMode,
    /// Position among the resource's declarations of the same mode
    pub index: usize,
    pub reason: String,
}

/// Records read from one manifest
#[derive(Debug, Clone, Default)]
pub struct ReadReport {
    pub source: PathBuf,
    pub records: Vec<CapReq>,
    pub skipped: Vec<SkippedDeclaration>,
}

impl ReadReport {
    pub fn capabilities(&self) -> impl Iterator<Item = &CapReq> {
        self.records.iter().filter(|r| r.mode().is_capability())
    }

    pub fn requirements(&self) -> impl Iterator<Item = &CapReq> {
        self.records.iter().filter(|r| r.mode().is_requirement())
    }
}

/// Read a manifest file
pub fn read_manifest(path: &Path, options: ReaderOptions) -> CapReqResult<ReadReport> {
    let content = fs::read_to_string(path)?;
    read_manifest_str(&content, path, options)
}

/// Read manifest content; `source` is only used for reporting
pub fn read_manifest_str(
    content: &str,
    source: &Path,
    options: ReaderOptions,
) -> CapReqResult<ReadReport> {
    let raw: RawManifest = toml::from_str(content).map_err(|e| CapReqError::InvalidManifest {
        file: source.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut report = ReadReport {
        source: source.to_path_buf(),
        ..ReadReport::default()
    };

    for resource in raw.resources {
        let owner = resource.id.map(ResourceId::from);
        let declarations = resource
            .capabilities
            .into_iter()
            .enumerate()
            .map(|(i, d)| (CapReqMode::Capability, i, d))
            .chain(
                resource
                    .requirements
                    .into_iter()
                    .enumerate()
                    .map(|(i, d)| (CapReqMode::Requirement, i, d)),
            );

        for (mode, index, declaration) in declarations {
            match build_record(mode, owner.clone(), declaration) {
                Ok(record) => {
                    tracing::debug!(record = %record, owner = ?owner, "read {}", mode);
                    report.records.push(record);
                }
                Err(err) => {
                    let location = describe_location(owner.as_ref(), mode, index);
                    if options.strict {
                        return Err(CapReqError::InvalidManifest {
                            file: source.to_path_buf(),
                            message: format!("{}: {}", location, err),
                        });
                    }
                    tracing::warn!(
                        file = %source.display(),
                        "skipping {}: {}",
                        location,
                        err
                    );
                    report.skipped.push(SkippedDeclaration {
                        resource: owner.clone(),
                        mode,
                        index,
                        reason: err.to_string(),
                    });
                }
            }
        }
    }

    tracing::info!(
        file = %source.display(),
        records = report.records.len(),
        skipped = report.skipped.len(),
        "read manifest"
    );
    Ok(report)
}

fn describe_location(owner: Option<&ResourceId>, mode: CapReqMode, index: usize) -> String {
    match owner {
        Some(owner) => format!("{} #{} of resource '{}'", mode, index + 1, owner),
        None => format!("{} #{} of unnamed resource", mode, index + 1),
    }
}

fn build_record(
    mode: CapReqMode,
    owner: Option<ResourceId>,
    declaration: RawDeclaration,
) -> CapReqResult<CapReq> {
    let directives = declaration
        .directives
        .into_iter()
        .map(|(key, value)| match value {
            toml::Value::String(s) => Ok((key, s)),
            other => Err(CapReqError::invalid_argument(format!(
                "directive '{}' must be a string, got {}",
                key,
                other.type_str()
            ))),
        })
        .collect::<CapReqResult<Directives>>()?;

    let mut attributes = Attributes::new();
    for (key, value) in declaration.attributes {
        let (name, attr) = convert_attribute(&key, value)?;
        if attributes.contains_key(&name) {
            return Err(CapReqError::invalid_argument(format!(
                "duplicate attribute '{}'",
                name
            )));
        }
        attributes.insert(name, attr);
    }

    CapReq::new(
        Some(mode),
        declaration.namespace.as_deref(),
        owner,
        directives,
        attributes,
    )
}

/// Convert one attribute entry; a `name:Type` key forces the type
fn convert_attribute(key: &str, value: toml::Value) -> CapReqResult<(String, Attr)> {
    if let Some((name, type_name)) = key.rsplit_once(':') {
        if name.is_empty() {
            return Err(CapReqError::invalid_argument(format!(
                "attribute key '{}' has no name",
                key
            )));
        }
        let raw = textual(&value)?;
        return Ok((name.to_string(), Attr::typed(type_name, &raw)?));
    }
    Ok((key.to_string(), untyped(key, value)?))
}

fn untyped(key: &str, value: toml::Value) -> CapReqResult<Attr> {
    match value {
        toml::Value::String(s) => Ok(Attr::String(s)),
        toml::Value::Integer(n) => Ok(Attr::Long(n)),
        toml::Value::Float(d) => Ok(Attr::Double(d)),
        toml::Value::Boolean(b) => Ok(Attr::String(b.to_string())),
        toml::Value::Datetime(dt) => Ok(Attr::String(dt.to_string())),
        toml::Value::Array(items) => items
            .into_iter()
            .map(|item| untyped(key, item))
            .collect::<CapReqResult<Vec<_>>>()
            .map(Attr::List),
        toml::Value::Table(_) => Err(CapReqError::invalid_argument(format!(
            "attribute '{}' cannot be a table",
            key
        ))),
    }
}

/// Textual form of a scalar or flat array, as fed to `Attr::typed`
fn textual(value: &toml::Value) -> CapReqResult<String> {
    match value {
        toml::Value::String(s) => Ok(s.clone()),
        toml::Value::Integer(n) => Ok(n.to_string()),
        toml::Value::Float(d) => Ok(d.to_string()),
        toml::Value::Boolean(b) => Ok(b.to_string()),
        toml::Value::Datetime(dt) => Ok(dt.to_string()),
        toml::Value::Array(items) => items
            .iter()
            .map(textual)
            .collect::<CapReqResult<Vec<_>>>()
            .map(|parts| parts.join(",")),
        toml::Value::Table(_) => Err(CapReqError::invalid_argument(
            "typed attribute cannot be a table",
        )),
    }
}
