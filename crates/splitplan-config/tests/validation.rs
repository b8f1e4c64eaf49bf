//! Tests for configuration validation against the filesystem.

use splitplan_config::{BundleOptions, ConfigError, ConfigValidator, FsValidator, validate_fs};
use std::fs;
use tempfile::TempDir;

fn project() -> TempDir {
    let dir = TempDir::new().expect("tempdir");
    let js_dir = dir.path().join("frontend/javascript");
    fs::create_dir_all(&js_dir).expect("create js dir");
    fs::write(js_dir.join("main.ts"), "export {};").expect("write main");
    fs::write(js_dir.join("document.js"), "").expect("write document");
    dir
}

#[test]
fn validate_succeeds_when_sources_exist() {
    let dir = project();
    let config = BundleOptions::default()
        .with_entry("main", vec!["./frontend/javascript/main.ts"])
        .with_entry("document", "./frontend/javascript/document.js");

    assert!(FsValidator::new(dir.path()).validate(&config).is_ok());
}

#[test]
fn validate_catches_missing_relative_source() {
    let dir = project();
    let config = BundleOptions::default()
        .with_entry("main", "./frontend/javascript/main.ts")
        .with_entry("redact", "./frontend/javascript/redact.js");

    match validate_fs(&config, dir.path()).unwrap_err() {
        ConfigError::EntryNotFound { path } => {
            assert!(path.ends_with("frontend/javascript/redact.js"));
        }
        other => panic!("expected EntryNotFound error, got {other:?}"),
    }
}

#[test]
fn validate_resolves_package_sources_in_node_modules() {
    let dir = project();
    let package_dir = dir.path().join("node_modules/@okfde/filingcabinet/frontend/javascript");
    fs::create_dir_all(&package_dir).expect("create package dir");
    fs::write(package_dir.join("filingcabinet.js"), "").expect("write package entry");

    let config = BundleOptions::default().with_entry(
        "filingcabinet",
        "@okfde/filingcabinet/frontend/javascript/filingcabinet.js",
    );

    assert!(validate_fs(&config, dir.path()).is_ok());
}

#[test]
fn validate_catches_missing_package_source() {
    let dir = project();
    let config = BundleOptions::default().with_entry("pdf", "pdfjs-dist/build/pdf.js");

    assert!(matches!(
        validate_fs(&config, dir.path()).unwrap_err(),
        ConfigError::EntryNotFound { .. }
    ));
}

#[test]
fn fs_validation_runs_schema_checks_first() {
    let dir = project();
    let config = BundleOptions::default();

    assert!(matches!(
        validate_fs(&config, dir.path()).unwrap_err(),
        ConfigError::NoEntries
    ));
}
