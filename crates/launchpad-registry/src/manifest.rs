//! Launcher and app manifests
//!
//! The launcher's own manifest tells us which engine version is running and
//! which version of the shared package it bundles. App manifests carry the
//! declarations the compatibility rules check.

use launchpad_compat::EnvironmentSource;
use launchpad_core::{
    AppMetadata, AppSpec, LaunchpadError, LauncherCompatibilityConfig, LauncherConfig,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// File name of an installed app's manifest
pub const APP_MANIFEST_FILE: &str = "package.json";

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LaunchpadError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        LaunchpadError::ManifestError(format!("cannot read {}: {}", path.display(), e))
    })?;
    serde_json::from_str(&content)
        .map_err(|e| LaunchpadError::ManifestError(format!("{}: {}", path.display(), e)))
}

/// The launcher's own manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LauncherManifest {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,
    #[serde(default)]
    pub dev_dependencies: BTreeMap<String, String>,
}

impl LauncherManifest {
    pub fn from_json(json: &str) -> Result<Self, LaunchpadError> {
        serde_json::from_str(json).map_err(|e| LaunchpadError::ManifestError(e.to_string()))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LaunchpadError> {
        read_json(path.as_ref())
    }

    /// Version of `package` the launcher depends on, if it declares one.
    ///
    /// Git specifiers (`github:org/shared#v4.18.0`) resolve to their ref
    /// without the leading `v`.
    pub fn required_version_of(&self, package: &str) -> Option<String> {
        let specifier = self
            .dependencies
            .get(package)
            .or_else(|| self.dev_dependencies.get(package))?;

        let version = match specifier.rsplit_once('#') {
            Some((_, git_ref)) => git_ref.strip_prefix('v').unwrap_or(git_ref),
            None => specifier.as_str(),
        };
        Some(version.trim().to_string())
    }

    pub fn with_config(self, config: LauncherConfig) -> ManifestEnvironment {
        ManifestEnvironment {
            manifest: self,
            config,
        }
    }
}

/// Resolves the running launcher's versions from its manifest and config
#[derive(Debug, Clone)]
pub struct ManifestEnvironment {
    manifest: LauncherManifest,
    config: LauncherConfig,
}

impl ManifestEnvironment {
    pub fn manifest(&self) -> &LauncherManifest {
        &self.manifest
    }

    pub fn config(&self) -> &LauncherConfig {
        &self.config
    }
}

impl EnvironmentSource for ManifestEnvironment {
    fn resolve(&self) -> Result<LauncherCompatibilityConfig, LaunchpadError> {
        let package = &self.config.shared_package;
        let shared = self.manifest.required_version_of(package).ok_or_else(|| {
            LaunchpadError::MissingSharedDependency {
                package: package.clone(),
            }
        })?;

        let engine = self
            .config
            .engine_version
            .as_deref()
            .unwrap_or(&self.manifest.version);

        let env = LauncherCompatibilityConfig::new(engine, shared)?.with_shared_package(package.clone());
        tracing::info!(
            engine = %env.provided_version_of_engine,
            package = %env.shared_package,
            shared = %env.provided_version_of_shared,
            "resolved launcher environment"
        );
        Ok(env)
    }
}

impl EnvironmentSource for LauncherManifest {
    fn resolve(&self) -> Result<LauncherCompatibilityConfig, LaunchpadError> {
        self.clone().with_config(LauncherConfig::default()).resolve()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engines {
    /// Range of launcher versions the app supports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launcher: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LauncherSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_version: Option<String>,
}

/// An app's manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppManifest {
    pub name: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    #[serde(default)]
    pub engines: Engines,
    #[serde(default)]
    pub launcher: LauncherSection,
}

impl AppManifest {
    pub fn from_json(json: &str) -> Result<Self, LaunchpadError> {
        serde_json::from_str(json).map_err(|e| LaunchpadError::ManifestError(e.to_string()))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LaunchpadError> {
        read_json(path.as_ref())
    }

    /// Metadata for this app, installed from `source` into `app_dir`
    pub fn to_metadata(&self, source: &str, app_dir: impl AsRef<Path>) -> AppMetadata {
        let mut app = AppMetadata::new(AppSpec::new(source, self.name.clone()))
            .with_current_version(self.version.clone())
            .installed_at(app_dir);

        if let Some(display_name) = &self.display_name {
            app.display_name = display_name.clone();
        }
        if let Some(description) = &self.description {
            app.description = description.clone();
        }
        app.engine_version = self.engines.launcher.clone();
        app.shared_version = self.launcher.shared_version.clone();
        app
    }
}

/// Read the manifest of the app installed in `app_dir`
pub fn read_installed_app(source: &str, app_dir: impl AsRef<Path>) -> Result<AppMetadata, LaunchpadError> {
    let app_dir = app_dir.as_ref();
    let manifest = AppManifest::from_file(app_dir.join(APP_MANIFEST_FILE))?;
    Ok(manifest.to_metadata(source, app_dir))
}
