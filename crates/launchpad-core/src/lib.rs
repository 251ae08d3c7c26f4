//! Launchpad Core: data model, version primitives and errors
//!
//! Shared types for the launcher's compatibility checker and the manifest
//! readers that feed it.

pub mod config;
pub mod data_model;
pub mod error;
pub mod version;

pub use config::LauncherConfig;
pub use data_model::{
    AppMetadata, AppSpec, DeclaredVersion, LauncherCompatibilityConfig, LOCAL_SOURCE,
    OFFICIAL_SOURCE,
};
pub use error::LaunchpadError;
pub use version::{is_valid_version, lte, parse_version, satisfies_range, strip_prerelease, VersionRange};

pub use semver::Version;

/// Version of this launcher build
pub const LAUNCHPAD_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the shared runtime-support package
pub const SHARED_PACKAGE: &str = "launchpad-shared";
