//! Individual compatibility rules
//!
//! Every rule looks at the full `(app, env)` pair and either decides or
//! defers with [`CompatibilityResult::Undecided`]. Rules never fail and never
//! panic: malformed version strings are data, reported as incompatibilities.

use launchpad_core::{
    is_valid_version, lte, satisfies_range, strip_prerelease, AppMetadata, DeclaredVersion,
    LauncherCompatibilityConfig,
};
use serde::{Deserialize, Serialize};

use crate::result::{CompatibilityResult, IncompatibilityCategory};

/// Product name used in warnings
pub const ENGINE_NAME: &str = "Launchpad";

/// Signature shared by all rules
pub type AppCompatibilityChecker =
    fn(&AppMetadata, &LauncherCompatibilityConfig) -> CompatibilityResult;

/// The rules, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompatibilityRule {
    EngineVersionIsSet,
    EngineIsSupported,
    IdenticalShared,
    ProvidedVersionOfSharedIsValid,
    RequestedVersionOfSharedIsValid,
    RequestedSharedIsProvided,
}

impl CompatibilityRule {
    pub const ALL: [CompatibilityRule; 6] = [
        CompatibilityRule::EngineVersionIsSet,
        CompatibilityRule::EngineIsSupported,
        CompatibilityRule::IdenticalShared,
        CompatibilityRule::ProvidedVersionOfSharedIsValid,
        CompatibilityRule::RequestedVersionOfSharedIsValid,
        CompatibilityRule::RequestedSharedIsProvided,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            CompatibilityRule::EngineVersionIsSet => "engine_version_is_set",
            CompatibilityRule::EngineIsSupported => "engine_is_supported",
            CompatibilityRule::IdenticalShared => "identical_shared",
            CompatibilityRule::ProvidedVersionOfSharedIsValid => "provided_version_of_shared_is_valid",
            CompatibilityRule::RequestedVersionOfSharedIsValid => "requested_version_of_shared_is_valid",
            CompatibilityRule::RequestedSharedIsProvided => "requested_shared_is_provided",
        }
    }

    pub fn checker(&self) -> AppCompatibilityChecker {
        match self {
            CompatibilityRule::EngineVersionIsSet => check_engine_version_is_set,
            CompatibilityRule::EngineIsSupported => check_engine_is_supported,
            CompatibilityRule::IdenticalShared => check_identical_shared,
            CompatibilityRule::ProvidedVersionOfSharedIsValid => {
                check_provided_version_of_shared_is_valid
            }
            CompatibilityRule::RequestedVersionOfSharedIsValid => {
                check_requested_version_of_shared_is_valid
            }
            CompatibilityRule::RequestedSharedIsProvided => check_requested_shared_is_provided,
        }
    }

    pub fn check(&self, app: &AppMetadata, env: &LauncherCompatibilityConfig) -> CompatibilityResult {
        (self.checker())(app, env)
    }

    pub fn category(&self) -> IncompatibilityCategory {
        match self {
            CompatibilityRule::ProvidedVersionOfSharedIsValid => {
                IncompatibilityCategory::EnvironmentMisconfiguration
            }
            _ => IncompatibilityCategory::DeclaredIncompatibility,
        }
    }
}

pub fn check_engine_version_is_set(
    app: &AppMetadata,
    _env: &LauncherCompatibilityConfig,
) -> CompatibilityResult {
    if app.engine_version().is_some() {
        return CompatibilityResult::Undecided;
    }

    CompatibilityResult::incompatible(
        CompatibilityRule::EngineVersionIsSet,
        format!("The app does not specify which {ENGINE_NAME} version(s) it supports"),
        format!(
            "The app does not specify which {ENGINE_NAME} version(s) it supports. \
             Ask the app author to add an engines.launcher definition to the app manifest."
        ),
    )
}

pub fn check_engine_is_supported(
    app: &AppMetadata,
    env: &LauncherCompatibilityConfig,
) -> CompatibilityResult {
    // A missing range is reported by check_engine_version_is_set
    let Some(required) = app.engine_version() else {
        return CompatibilityResult::Undecided;
    };

    // Range matching rejects pre-releases outright, so 2.0.0-alpha.0 is checked as 2.0.0
    let provided = strip_prerelease(&env.provided_version_of_engine);
    if satisfies_range(&provided, required) {
        return CompatibilityResult::Undecided;
    }

    let installed = &env.provided_version_of_engine;
    CompatibilityResult::incompatible(
        CompatibilityRule::EngineIsSupported,
        format!(
            "The app only supports {ENGINE_NAME} {required}, which does not match \
             your currently installed version {installed}"
        ),
        format!(
            "The app only supports {ENGINE_NAME} {required} while your installed version \
             is {installed}. It might not work as expected."
        ),
    )
}

pub fn check_identical_shared(
    app: &AppMetadata,
    env: &LauncherCompatibilityConfig,
) -> CompatibilityResult {
    match app.shared_version.as_deref() {
        Some(requested) if requested == env.provided_version_of_shared => {
            CompatibilityResult::Compatible
        }
        _ => CompatibilityResult::Undecided,
    }
}

pub fn check_provided_version_of_shared_is_valid(
    app: &AppMetadata,
    env: &LauncherCompatibilityConfig,
) -> CompatibilityResult {
    if app.declared_shared_version().is_absent()
        || is_valid_version(&env.provided_version_of_shared)
    {
        return CompatibilityResult::Undecided;
    }

    let provided = &env.provided_version_of_shared;
    let package = &env.shared_package;
    let warning = format!(
        "{ENGINE_NAME} uses \"{provided}\" of {package} which cannot be checked \
         against the version required by this app."
    );
    let long_warning = format!(
        "{warning} Inform the developer that the launcher needs to reference a correct \
         version of {package}. The app might not work as expected."
    );
    CompatibilityResult::incompatible(
        CompatibilityRule::ProvidedVersionOfSharedIsValid,
        warning,
        long_warning,
    )
}

pub fn check_requested_version_of_shared_is_valid(
    app: &AppMetadata,
    env: &LauncherCompatibilityConfig,
) -> CompatibilityResult {
    let DeclaredVersion::Malformed(requested) = app.declared_shared_version() else {
        return CompatibilityResult::Undecided;
    };

    let package = &env.shared_package;
    let warning = format!(
        "The app requires \"{requested}\" of {package} which cannot be checked \
         against the version provided by {ENGINE_NAME}."
    );
    let long_warning = format!(
        "{warning} Inform the developer that the app needs to reference a correct \
         version of {package}. The app might not work as expected."
    );
    CompatibilityResult::incompatible(
        CompatibilityRule::RequestedVersionOfSharedIsValid,
        warning,
        long_warning,
    )
}

pub fn check_requested_shared_is_provided(
    app: &AppMetadata,
    env: &LauncherCompatibilityConfig,
) -> CompatibilityResult {
    // Unparseable versions on either side are reported by the validity rules
    let (DeclaredVersion::Valid(requested), DeclaredVersion::Valid(provided)) =
        (app.declared_shared_version(), env.declared_shared_version())
    else {
        return CompatibilityResult::Undecided;
    };

    if lte(&requested, &provided) {
        return CompatibilityResult::Undecided;
    }

    let requested = app.shared_version.as_deref().unwrap_or_default();
    let provided = &env.provided_version_of_shared;
    let package = &env.shared_package;
    let warning = format!(
        "The app requires {requested} of {package}, but {ENGINE_NAME} only \
         provides {provided}. Inform the app developer that the app needs a more \
         recent version of {ENGINE_NAME}."
    );
    let long_warning = format!("{warning} The app might not work as expected.");
    CompatibilityResult::incompatible(
        CompatibilityRule::RequestedSharedIsProvided,
        warning,
        long_warning,
    )
}
