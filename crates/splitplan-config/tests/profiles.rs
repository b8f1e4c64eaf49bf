//! Tests for configuration profiles and environment overrides.

use serial_test::serial;
use splitplan_config::{BuildMode, ConfigDiscovery, ConfigError};
use std::env;
use std::fs;
use tempfile::TempDir;

fn clear_env() {
    // SAFETY: every test in this file is #[serial], so no other thread reads the environment.
    unsafe {
        env::remove_var("SPLITPLAN_BUNDLE__MODE");
        env::remove_var("SPLITPLAN_SETTINGS__SEPARATOR");
    }
}

fn write_config(dir: &TempDir, content: &str) {
    fs::write(dir.path().join("splitplan.toml"), content).expect("write config");
}

#[test]
#[serial]
fn profile_overrides_bundle_options() {
    clear_env();
    let dir = TempDir::new().expect("tempdir");
    write_config(
        &dir,
        r#"
[bundle]
mode = "development"
exclude_from_common = ["main"]

[[bundle.entries]]
name = "main"
import = "./main.ts"

[profiles.production.bundle]
mode = "production"
minify = true
"#,
    );

    let config = ConfigDiscovery::new(dir.path())
        .load_with_profile("production")
        .expect("load with profile");

    assert_eq!(config.bundle.mode, BuildMode::Production);
    assert!(config.bundle.minify());
    assert_eq!(config.bundle.exclude_from_common, vec!["main".to_string()]);
    assert_eq!(config.bundle.entries.len(), 1); // preserved
}

#[test]
#[serial]
fn profile_replaces_arrays() {
    clear_env();
    let dir = TempDir::new().expect("tempdir");
    write_config(
        &dir,
        r#"
[bundle]
exclude_from_common = ["main", "tagautocomplete"]

[profiles.lean.bundle]
exclude_from_common = ["main"]
"#,
    );

    let config = ConfigDiscovery::new(dir.path())
        .load_with_profile("lean")
        .expect("load with profile");

    assert_eq!(config.bundle.exclude_from_common, vec!["main".to_string()]);
}

#[test]
#[serial]
fn profile_merges_nested_objects() {
    clear_env();
    let dir = TempDir::new().expect("tempdir");
    write_config(
        &dir,
        r#"
[bundle.output]
dir = "static/js"
filename = "[name].js"

[profiles.ci.bundle.output]
source_maps = false
"#,
    );

    let config = ConfigDiscovery::new(dir.path())
        .load_with_profile("ci")
        .expect("load with profile");

    assert!(!config.bundle.output.source_maps);
    assert_eq!(config.bundle.output.filename, "[name].js");
}

#[test]
#[serial]
fn profile_overrides_settings() {
    clear_env();
    let dir = TempDir::new().expect("tempdir");
    write_config(
        &dir,
        r#"
[settings]
separator = "|"

[profiles.csv.settings]
separator = ","
"#,
    );

    let config = ConfigDiscovery::new(dir.path())
        .load_with_profile("csv")
        .expect("load with profile");

    assert_eq!(config.settings.separator(), ",");
}

#[test]
#[serial]
fn unknown_profile_is_reported() {
    clear_env();
    let dir = TempDir::new().expect("tempdir");
    write_config(&dir, "[bundle]\n");

    let result = ConfigDiscovery::new(dir.path()).load_with_profile("staging");
    assert!(matches!(
        result.unwrap_err(),
        ConfigError::ProfileNotFound { name } if name == "staging"
    ));
}

#[test]
#[serial]
fn env_overrides_file_values() {
    clear_env();
    let dir = TempDir::new().expect("tempdir");
    write_config(
        &dir,
        r#"
[bundle]
mode = "development"
"#,
    );

    // SAFETY: serialised test, see clear_env.
    unsafe {
        env::set_var("SPLITPLAN_BUNDLE__MODE", "production");
    }
    let config = ConfigDiscovery::new(dir.path()).load();
    clear_env();

    assert_eq!(config.expect("load").bundle.mode, BuildMode::Production);
}

#[test]
#[serial]
fn env_overrides_can_be_disabled() {
    clear_env();
    let dir = TempDir::new().expect("tempdir");
    write_config(&dir, "[settings]\nseparator = \"|\"\n");

    // SAFETY: serialised test, see clear_env.
    unsafe {
        env::set_var("SPLITPLAN_SETTINGS__SEPARATOR", ";");
    }
    let config = ConfigDiscovery::new(dir.path()).without_env().load();
    clear_env();

    assert_eq!(config.expect("load").settings.separator(), "|");
}
