//! Launchpad Compat: is an app safe to launch on this launcher?
//!
//! Apps declare the launcher versions they support and the version of the
//! shared runtime-support package they were built against. This crate
//! checks those declarations against what the running launcher provides.
//!
//! # Architecture
//!
//! ```text
//! (app, env) → EngineVersionIsSet → EngineIsSupported → IdenticalShared
//!            → ProvidedVersionOfSharedIsValid → RequestedVersionOfSharedIsValid
//!            → RequestedSharedIsProvided → Compatible
//!
//! Each step either decides (Compatible / Incompatible) or defers to the next.
//! ```
//!
//! # Example
//!
//! ```
//! use launchpad_compat::{check_compatibility, Compatibility};
//! use launchpad_core::{AppMetadata, AppSpec, LauncherCompatibilityConfig};
//!
//! let env = LauncherCompatibilityConfig::new("4.1.0", "8.0.0").unwrap();
//!
//! let app = AppMetadata::new(AppSpec::local("serial-terminal"))
//!     .with_engine_version("^4.0.0")
//!     .with_shared_version("7.2.0");
//! assert_eq!(check_compatibility(&app, &env), Compatibility::Compatible);
//!
//! let legacy = AppMetadata::new(AppSpec::local("legacy"));
//! let verdict = check_compatibility(&legacy, &env);
//! println!("{}", verdict.warning().unwrap());
//! ```

pub mod checker;
pub mod launch;
pub mod result;
pub mod rule;

pub use checker::{
    check_compatibility, check_compatibility_default, AppCompatibility, CompatibilityChecker,
    CompatibilityReport, EnvironmentSource,
};
pub use launch::{decide_launch, LaunchDecision};
pub use result::{Compatibility, CompatibilityResult, Incompatibility, IncompatibilityCategory};
pub use rule::{
    check_engine_is_supported, check_engine_version_is_set, check_identical_shared,
    check_provided_version_of_shared_is_valid, check_requested_shared_is_provided,
    check_requested_version_of_shared_is_valid, AppCompatibilityChecker, CompatibilityRule,
    ENGINE_NAME,
};

/// Quick check: would this app launch without a warning?
pub fn would_launch_without_warning(
    app: &launchpad_core::AppMetadata,
    env: &launchpad_core::LauncherCompatibilityConfig,
) -> bool {
    check_compatibility(app, env).is_compatible()
}
