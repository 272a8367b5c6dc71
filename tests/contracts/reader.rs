//! Contracts for the manifest reader.

use std::path::Path;

use capreq::{
    read_manifest, read_manifest_str, Attr, CapReqBuilder, CapReqError, CapReqMode, ReaderOptions,
    ResourceId, Version,
};

use crate::common::{TestEnv, API_MANIFEST, DUPLICATED_MANIFEST, PARTLY_BROKEN_MANIFEST};

const LENIENT: ReaderOptions = ReaderOptions { strict: false };
const STRICT: ReaderOptions = ReaderOptions { strict: true };

/// CONTRACT: Records read from a manifest equal records built in code from the same parts.
#[test]
fn contract_read_records_equal_built_records() {
    let report = read_manifest_str(API_MANIFEST, Path::new("api.toml"), LENIENT).unwrap();

    let expected = CapReqBuilder::new("osgi.wiring.package")
        .with_owner(ResourceId::from("com.example.api"))
        .add_attribute("osgi.wiring.package", "com.example")
        .add_attribute("version", Version::new(1, 2, 0))
        .add_directive("uses", "com.example.util")
        .build_capability()
        .unwrap();

    let capabilities: Vec<_> = report.capabilities().collect();
    assert_eq!(capabilities.len(), 1);
    assert_eq!(*capabilities[0], expected);
    assert_eq!(capabilities[0].hash_code(), expected.hash_code());
    assert_eq!(
        capabilities[0].attributes().get("version"),
        Some(&Attr::Version(Version::new(1, 2, 0)))
    );

    let requirements: Vec<_> = report.requirements().collect();
    assert_eq!(requirements.len(), 1);
    assert_eq!(
        requirements[0].to_string(),
        "(osgi.wiring.package=com.example.util)%OPT"
    );
}

/// CONTRACT: Declaration order is preserved, capabilities before requirements per resource.
#[test]
fn contract_read_preserves_declaration_order() {
    let report = read_manifest_str(DUPLICATED_MANIFEST, Path::new("dup.toml"), LENIENT).unwrap();

    let modes: Vec<CapReqMode> = report.records.iter().map(|r| r.mode()).collect();
    assert_eq!(
        modes,
        vec![
            CapReqMode::Capability,
            CapReqMode::Capability,
            CapReqMode::Requirement
        ]
    );
    assert_eq!(report.records[0], report.records[1]);
}

/// CONTRACT: Lenient reading skips bad declarations and keeps the rest.
#[test]
fn contract_lenient_read_skips_bad_declarations() {
    let report =
        read_manifest_str(PARTLY_BROKEN_MANIFEST, Path::new("broken.toml"), LENIENT).unwrap();

    assert_eq!(report.records.len(), 1);
    assert_eq!(report.skipped.len(), 1);
    let skipped = &report.skipped[0];
    assert_eq!(skipped.mode, CapReqMode::Requirement);
    assert_eq!(skipped.index, 0);
    assert_eq!(
        skipped.resource,
        Some(ResourceId::from("com.example.broken"))
    );
    assert!(skipped.reason.contains("namespace"));
}

/// CONTRACT: Strict reading fails on the first bad declaration and names it.
#[test]
fn contract_strict_read_fails_with_location() {
    let err =
        read_manifest_str(PARTLY_BROKEN_MANIFEST, Path::new("broken.toml"), STRICT).unwrap_err();

    match err {
        CapReqError::InvalidManifest { file, message } => {
            assert_eq!(file, Path::new("broken.toml"));
            assert!(message.contains("requirement #1"), "got: {}", message);
            assert!(message.contains("com.example.broken"), "got: {}", message);
        }
        other => panic!("expected InvalidManifest, got {:?}", other),
    }
}

/// CONTRACT: Reading from disk matches reading the same content from memory.
#[test]
fn contract_read_manifest_from_file() {
    let env = TestEnv::new();
    let path = env.write("manifests/api.toml", API_MANIFEST);

    let from_disk = read_manifest(&path, LENIENT).unwrap();
    let from_memory = read_manifest_str(API_MANIFEST, &path, LENIENT).unwrap();

    assert_eq!(from_disk.source, path);
    assert_eq!(from_disk.records, from_memory.records);
}

/// CONTRACT: A missing manifest is an I/O error, not a panic.
#[test]
fn contract_missing_manifest_is_io_error() {
    let env = TestEnv::new();
    let err = read_manifest(&env.project_path().join("absent.toml"), LENIENT).unwrap_err();
    assert!(matches!(err, CapReqError::Io(_)));
}
