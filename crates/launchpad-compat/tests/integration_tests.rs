//! Integration tests for launchpad-compat.
//!
//! These tests drive the full rule chain through the public API, the way the
//! app list and the launch action use it.

use launchpad_compat::{
    check_compatibility, Compatibility, CompatibilityChecker, CompatibilityRule,
    IncompatibilityCategory, LaunchDecision,
};
use launchpad_core::{AppMetadata, AppSpec, LauncherCompatibilityConfig, LauncherConfig};

fn app(engine_version: Option<&str>, shared_version: Option<&str>) -> AppMetadata {
    let mut app = AppMetadata::new(AppSpec::new("official", "test name"))
        .with_display_name("test display name")
        .with_description("test description")
        .with_current_version("1.0.0")
        .installed_at("/apps/official/test-name");
    app.engine_version = engine_version.map(str::to_string);
    app.shared_version = shared_version.map(str::to_string);
    app
}

fn env(engine: &str, shared: &str) -> LauncherCompatibilityConfig {
    LauncherCompatibilityConfig::new(engine, shared).unwrap()
}

fn decided_by(result: &Compatibility) -> Option<CompatibilityRule> {
    result.incompatibility().map(|reason| reason.rule)
}

// =============================================================================
// Engine Checks
// =============================================================================

#[test]
fn test_missing_engine_version_fails_regardless_of_env() {
    let envs = [
        env("1.0.0", "1.0.0"),
        env("9.9.9-beta.1", "garbage"),
        env("0.0.1", "4.0.0"),
    ];

    for env in &envs {
        let result = check_compatibility(&app(None, Some("4.0.0")), env);
        assert_eq!(decided_by(&result), Some(CompatibilityRule::EngineVersionIsSet));
        assert!(result.warning().unwrap().contains("does not specify"));
        assert!(result.warning().unwrap().contains("version(s)"));
    }
}

#[test]
fn test_failing_engine_combinations() {
    let cases = [
        ("the app fails to specify engine version", None, "1.0.0"),
        ("the app requires a higher engine version", Some("^1.0.1"), "1.0.0"),
        ("the app requires another major version", Some("^2.0.0"), "1.2.3"),
    ];

    for (description, engine_version, provided) in cases {
        let result = check_compatibility(&app(engine_version, None), &env(provided, "1.0.0"));
        assert!(result.warning().is_some(), "{}", description);
        assert!(result.long_warning().is_some(), "{}", description);
    }
}

#[test]
fn test_successful_engine_combinations() {
    let cases = [
        ("all versions are exactly as specified", "^1.0.0", "1.0.0"),
        ("the provided versions are higher as required", "^1.0.0", "1.0.1"),
        ("the engine is a pre-release of a supported version", "^1.2.3", "1.2.3-alpha.0"),
        ("the app uses an x-range", "1.x", "1.9.0"),
    ];

    for (description, engine_version, provided) in cases {
        let result = check_compatibility(&app(Some(engine_version), None), &env(provided, "1.0.0"));
        assert_eq!(result, Compatibility::Compatible, "{}", description);
    }
}

#[test]
fn test_unsupported_engine_cites_both_versions() {
    let result = check_compatibility(&app(Some("^2.0.0"), None), &env("1.2.3", "1.0.0"));

    assert_eq!(decided_by(&result), Some(CompatibilityRule::EngineIsSupported));
    for text in [result.warning().unwrap(), result.long_warning().unwrap()] {
        assert!(text.contains("2.0.0"));
        assert!(text.contains("1.2.3"));
    }
}

// =============================================================================
// Shared Package Checks
// =============================================================================

#[test]
fn test_unset_shared_version_ignores_provided_validity() {
    let result = check_compatibility(&app(Some("^1.0.0"), None), &env("1.0.0", "definitely broken"));
    assert_eq!(result, Compatibility::Compatible);
}

#[test]
fn test_identical_malformed_shared_is_compatible() {
    let result = check_compatibility(
        &app(Some("^1.0.0"), Some("file:../shared")),
        &env("1.0.0", "file:../shared"),
    );
    assert_eq!(result, Compatibility::Compatible);
}

#[test]
fn test_invalid_provided_shared_is_environment_misconfiguration() {
    let result = check_compatibility(&app(Some("^1.0.0"), Some("4.0.0")), &env("1.0.0", "file:../shared"));

    let reason = result.incompatibility().unwrap();
    assert_eq!(reason.rule, CompatibilityRule::ProvidedVersionOfSharedIsValid);
    assert_eq!(reason.category(), IncompatibilityCategory::EnvironmentMisconfiguration);
}

#[test]
fn test_invalid_provided_reported_before_invalid_requested() {
    let result = check_compatibility(&app(Some("^1.0.0"), Some("4.x")), &env("1.0.0", "main"));
    assert_eq!(decided_by(&result), Some(CompatibilityRule::ProvidedVersionOfSharedIsValid));

    let result = check_compatibility(&app(Some("^1.0.0"), Some("4.x")), &env("1.0.0", "4.0.0"));
    assert_eq!(decided_by(&result), Some(CompatibilityRule::RequestedVersionOfSharedIsValid));
}

#[test]
fn test_required_shared_above_provided_fails() {
    let result = check_compatibility(&app(Some("^1.0.0"), Some("2.0.0")), &env("1.0.0", "1.0.0"));
    assert_eq!(decided_by(&result), Some(CompatibilityRule::RequestedSharedIsProvided));
    assert!(result.warning().unwrap().contains("2.0.0"));
    assert!(result.warning().unwrap().contains("1.0.0"));
}

#[test]
fn test_required_shared_below_provided_passes() {
    let result = check_compatibility(&app(Some("^1.0.0"), Some("1.0.0")), &env("1.0.0", "2.0.0"));
    assert_eq!(result, Compatibility::Compatible);
}

// =============================================================================
// Chain Properties
// =============================================================================

#[test]
fn test_idempotent() {
    let app = app(Some("^3.0.0"), Some("2.0.0"));
    let env = env("1.0.0", "1.0.0");

    let first = check_compatibility(&app, &env);
    let second = check_compatibility(&app, &env);
    assert_eq!(first, second);
}

#[test]
fn test_only_first_problem_is_reported() {
    // Fails rules 1, 5 and would fail 4
    let result = check_compatibility(&app(None, Some("nope")), &env("1.0.0", "also nope"));

    let reason = result.incompatibility().unwrap();
    assert_eq!(reason.rule, CompatibilityRule::EngineVersionIsSet);
    assert!(!reason.warning.contains("nope"));
}

#[test]
fn test_batch_checks_are_independent() {
    let checker = CompatibilityChecker::new(env("4.1.0", "8.0.0"));
    let apps = vec![
        AppMetadata::new(AppSpec::local("first")).with_engine_version("^4.0.0"),
        AppMetadata::new(AppSpec::local("second")),
        AppMetadata::new(AppSpec::new("official", "third"))
            .with_engine_version("^4.0.0")
            .with_shared_version("9.0.0"),
    ];

    let report = checker.check_all(&apps);
    let reversed: Vec<AppMetadata> = apps.iter().rev().cloned().collect();
    let reversed_report = checker.check_all(&reversed);

    for entry in &report.entries {
        assert_eq!(Some(&entry.compatibility), reversed_report.get(&entry.app));
    }
    assert_eq!(report.incompatible().count(), 2);
}

#[test]
fn test_launch_flow() {
    let checker = CompatibilityChecker::new(env("1.2.3", "1.0.0"));
    let unsupported = app(Some("^2.0.0"), None);

    match checker.decide_launch(&unsupported) {
        LaunchDecision::ConfirmLaunch { text, .. } => {
            assert!(text.contains("It might not work as expected"))
        }
        other => panic!("expected confirmation, got {:?}", other),
    }

    let config = LauncherConfig {
        is_running_launcher_from_source: true,
        ..LauncherConfig::default()
    };
    let checker = checker.with_config(&config);
    assert!(!checker.decide_launch(&unsupported).needs_confirmation());
}
