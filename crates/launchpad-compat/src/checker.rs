//! Chain evaluator
//!
//! Runs the rules in [`CompatibilityRule::ALL`] order. The first rule that
//! decides wins; if every rule defers, the app is compatible.

use launchpad_core::{AppMetadata, AppSpec, LaunchpadError, LauncherCompatibilityConfig, LauncherConfig};
use serde::Serialize;

use crate::launch::{decide_launch, LaunchDecision};
use crate::result::Compatibility;
use crate::rule::CompatibilityRule;

/// Check an app against the launcher's provided versions
pub fn check_compatibility(app: &AppMetadata, env: &LauncherCompatibilityConfig) -> Compatibility {
    for rule in CompatibilityRule::ALL {
        if let Some(decision) = rule.check(app, env).decided() {
            tracing::debug!(
                app = %app.spec(),
                rule = rule.id(),
                compatible = decision.is_compatible(),
                "compatibility decided"
            );
            return decision;
        }
    }

    tracing::debug!(app = %app.spec(), "no rule objected");
    Compatibility::Compatible
}

/// Where the running launcher's versions come from
pub trait EnvironmentSource {
    fn resolve(&self) -> Result<LauncherCompatibilityConfig, LaunchpadError>;
}

impl EnvironmentSource for LauncherCompatibilityConfig {
    fn resolve(&self) -> Result<LauncherCompatibilityConfig, LaunchpadError> {
        Ok(self.clone())
    }
}

/// Resolve the environment from `source`, then check.
///
/// Fails only if the environment itself cannot be resolved.
pub fn check_compatibility_default(
    app: &AppMetadata,
    source: &impl EnvironmentSource,
) -> Result<Compatibility, LaunchpadError> {
    let env = source.resolve()?;
    Ok(check_compatibility(app, &env))
}

/// A checker bound to one resolved environment
#[derive(Debug, Clone)]
pub struct CompatibilityChecker {
    env: LauncherCompatibilityConfig,
    running_from_source: bool,
}

impl CompatibilityChecker {
    pub fn new(env: LauncherCompatibilityConfig) -> Self {
        Self {
            env,
            running_from_source: false,
        }
    }

    pub fn from_source(source: &impl EnvironmentSource) -> Result<Self, LaunchpadError> {
        Ok(Self::new(source.resolve()?))
    }

    /// Apply launcher settings that affect launching
    pub fn with_config(mut self, config: &LauncherConfig) -> Self {
        self.running_from_source = config.is_running_launcher_from_source;
        self
    }

    pub fn env(&self) -> &LauncherCompatibilityConfig {
        &self.env
    }

    pub fn check(&self, app: &AppMetadata) -> Compatibility {
        check_compatibility(app, &self.env)
    }

    /// Annotate a list of apps; each app is checked independently.
    pub fn check_all<'a>(&self, apps: impl IntoIterator<Item = &'a AppMetadata>) -> CompatibilityReport {
        let entries = apps
            .into_iter()
            .map(|app| AppCompatibility {
                app: app.spec(),
                compatibility: self.check(app),
            })
            .collect();

        CompatibilityReport { entries }
    }

    pub fn decide_launch(&self, app: &AppMetadata) -> LaunchDecision {
        decide_launch(app, &self.check(app), self.running_from_source)
    }
}

/// Compatibility of one app in a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppCompatibility {
    pub app: AppSpec,
    #[serde(flatten)]
    pub compatibility: Compatibility,
}

/// Results of a batch check, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompatibilityReport {
    pub entries: Vec<AppCompatibility>,
}

impl CompatibilityReport {
    pub fn get(&self, app: &AppSpec) -> Option<&Compatibility> {
        self.entries
            .iter()
            .find(|entry| &entry.app == app)
            .map(|entry| &entry.compatibility)
    }

    pub fn incompatible(&self) -> impl Iterator<Item = &AppCompatibility> {
        self.entries
            .iter()
            .filter(|entry| !entry.compatibility.is_compatible())
    }

    pub fn all_compatible(&self) -> bool {
        self.incompatible().next().is_none()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
