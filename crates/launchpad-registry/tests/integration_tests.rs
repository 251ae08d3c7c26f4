//! Integration tests for launchpad-registry with manifests on disk.
//!
//! These tests verify the path from a launcher manifest and installed app
//! directories to compatibility verdicts.

use launchpad_compat::{check_compatibility_default, CompatibilityChecker, CompatibilityRule};
use launchpad_core::{LauncherConfig, SHARED_PACKAGE};
use launchpad_registry::{read_installed_app, LauncherManifest, APP_MANIFEST_FILE};
use std::fs;
use std::path::Path;

fn write_app(root: &Path, name: &str, manifest: &str) -> std::path::PathBuf {
    let dir = root.join(name);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(APP_MANIFEST_FILE), manifest).unwrap();
    dir
}

fn write_launcher(root: &Path, dependencies: &str) -> std::path::PathBuf {
    let path = root.join("launcher.json");
    fs::write(
        &path,
        format!(
            r#"{{ "name": "launchpad", "version": "4.2.0", "dependencies": {} }}"#,
            dependencies
        ),
    )
    .unwrap();
    path
}

// =============================================================================
// Environment Resolution
// =============================================================================

#[test]
fn test_check_installed_apps_against_launcher() {
    let root = tempfile::tempdir().unwrap();
    let launcher = write_launcher(root.path(), &format!(r#"{{ "{}": "8.0.0" }}"#, SHARED_PACKAGE));

    let supported = write_app(
        root.path(),
        "supported",
        r#"{ "name": "supported", "version": "1.0.0",
             "engines": { "launcher": "^4.0.0" },
             "launcher": { "sharedVersion": "7.5.0" } }"#,
    );
    let unsupported = write_app(
        root.path(),
        "unsupported",
        r#"{ "name": "unsupported", "version": "1.0.0", "engines": { "launcher": "1.x" } }"#,
    );
    let undeclared = write_app(root.path(), "undeclared", r#"{ "name": "undeclared", "version": "1.0.0" }"#);

    let manifest = LauncherManifest::from_file(&launcher).unwrap();
    let checker = CompatibilityChecker::from_source(&manifest.with_config(LauncherConfig::default())).unwrap();

    let apps: Vec<_> = [&supported, &unsupported, &undeclared]
        .iter()
        .map(|dir| read_installed_app("local", dir).unwrap())
        .collect();
    let report = checker.check_all(&apps);

    assert!(report.entries[0].compatibility.is_compatible());

    let unsupported = report.entries[1].compatibility.incompatibility().unwrap();
    assert_eq!(unsupported.rule, CompatibilityRule::EngineIsSupported);
    assert!(unsupported.warning.contains("The app only supports Launchpad 1.x"));

    let undeclared = report.entries[2].compatibility.incompatibility().unwrap();
    assert_eq!(undeclared.rule, CompatibilityRule::EngineVersionIsSet);
}

#[test]
fn test_custom_shared_package_named_in_warnings() {
    let root = tempfile::tempdir().unwrap();
    let launcher = write_launcher(root.path(), r#"{ "custom-shared": "8.0.0" }"#);
    let app_dir = write_app(
        root.path(),
        "newer",
        r#"{ "name": "newer", "version": "1.0.0",
             "engines": { "launcher": "^4.0.0" },
             "launcher": { "sharedVersion": "9.0.0" } }"#,
    );

    let config = LauncherConfig::from_yaml("shared_package: custom-shared\n").unwrap();
    let environment = LauncherManifest::from_file(&launcher).unwrap().with_config(config);
    let app = read_installed_app("local", &app_dir).unwrap();

    let compatibility = check_compatibility_default(&app, &environment).unwrap();
    let warning = compatibility.warning().unwrap();
    assert_eq!(
        warning,
        "The app requires 9.0.0 of custom-shared, but Launchpad only provides 8.0.0. \
         Inform the app developer that the app needs a more recent version of Launchpad."
    );
}

#[test]
fn test_launcher_without_shared_dependency_aborts() {
    let root = tempfile::tempdir().unwrap();
    let launcher = write_launcher(root.path(), r#"{ "serde": "1.0.0" }"#);
    let app_dir = write_app(
        root.path(),
        "app",
        r#"{ "name": "app", "version": "1.0.0", "engines": { "launcher": "^4.0.0" } }"#,
    );

    let manifest = LauncherManifest::from_file(&launcher).unwrap();
    let app = read_installed_app("local", &app_dir).unwrap();

    let err = check_compatibility_default(&app, &manifest).unwrap_err();
    assert!(err.is_fatal_setup());
}

#[test]
fn test_missing_app_manifest_is_an_error() {
    let root = tempfile::tempdir().unwrap();
    let err = read_installed_app("local", root.path().join("nowhere")).unwrap_err();
    assert!(err.to_string().starts_with("MANIFEST/"));
}
