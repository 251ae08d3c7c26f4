//! Data Model: AppSpec, AppMetadata, LauncherCompatibilityConfig
use crate::error::LaunchpadError;
use crate::version::parse_version;
use crate::SHARED_PACKAGE;
use semver::Version;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Source name for apps installed from a local archive or directory
pub const LOCAL_SOURCE: &str = "local";

/// Source name of the vendor's own app registry
pub const OFFICIAL_SOURCE: &str = "official";

/// Identity of an app: the registry it came from and its name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AppSpec {
    pub source: String,
    pub name: String,
}

impl AppSpec {
    pub fn new(source: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            name: name.into(),
        }
    }

    pub fn local(name: impl Into<String>) -> Self {
        Self::new(LOCAL_SOURCE, name)
    }

    pub fn is_local(&self) -> bool {
        self.source == LOCAL_SOURCE
    }
}

impl fmt::Display for AppSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.source, self.name)
    }
}

/// Metadata of an installed or downloadable app, as read from its manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppMetadata {
    pub source: String,
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub current_version: String,
    pub path: PathBuf,
    pub icon_path: PathBuf,
    pub shortcut_icon_path: PathBuf,
    /// Range of launcher versions the app supports (`engines.launcher`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<String>,
    /// Version of the shared runtime-support package the app was built against
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_version: Option<String>,
}

impl AppMetadata {
    /// Minimal metadata for `spec`; display name defaults to the app name.
    pub fn new(spec: AppSpec) -> Self {
        Self {
            display_name: spec.name.clone(),
            source: spec.source,
            name: spec.name,
            description: String::new(),
            current_version: String::new(),
            path: PathBuf::new(),
            icon_path: PathBuf::new(),
            shortcut_icon_path: PathBuf::new(),
            engine_version: None,
            shared_version: None,
        }
    }

    pub fn with_engine_version(mut self, range: impl Into<String>) -> Self {
        self.engine_version = Some(range.into());
        self
    }

    pub fn with_shared_version(mut self, version: impl Into<String>) -> Self {
        self.shared_version = Some(version.into());
        self
    }

    pub fn with_current_version(mut self, version: impl Into<String>) -> Self {
        self.current_version = version.into();
        self
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the install directory and derive the icon paths inside it.
    pub fn installed_at(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let resources = path.join("resources");
        self.path = path.to_path_buf();
        self.icon_path = resources.join("icon.png");
        self.shortcut_icon_path = resources.join("icon.svg");
        self
    }

    pub fn spec(&self) -> AppSpec {
        AppSpec::new(self.source.clone(), self.name.clone())
    }

    pub fn engine_version(&self) -> Option<&str> {
        self.engine_version.as_deref()
    }

    pub fn declared_shared_version(&self) -> DeclaredVersion<'_> {
        DeclaredVersion::classify(self.shared_version.as_deref())
    }
}

/// A version string that may be missing, present but malformed, or valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclaredVersion<'a> {
    Absent,
    Malformed(&'a str),
    Valid(Version),
}

impl<'a> DeclaredVersion<'a> {
    pub fn classify(value: Option<&'a str>) -> Self {
        match value {
            None => DeclaredVersion::Absent,
            Some(raw) => match parse_version(raw) {
                Some(version) => DeclaredVersion::Valid(version),
                None => DeclaredVersion::Malformed(raw),
            },
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, DeclaredVersion::Absent)
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, DeclaredVersion::Malformed(_))
    }

    pub fn valid(&self) -> Option<&Version> {
        match self {
            DeclaredVersion::Valid(version) => Some(version),
            _ => None,
        }
    }
}

/// Versions the running launcher provides to apps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LauncherCompatibilityConfig {
    /// The launcher's own version; always concrete.
    pub provided_version_of_engine: Version,
    /// The bundled shared package version; may be malformed through misconfiguration.
    pub provided_version_of_shared: String,
    /// Name of the shared package the launcher bundles.
    #[serde(default = "default_shared_package")]
    pub shared_package: String,
}

fn default_shared_package() -> String {
    SHARED_PACKAGE.to_string()
}

impl LauncherCompatibilityConfig {
    pub fn new(
        provided_version_of_engine: &str,
        provided_version_of_shared: impl Into<String>,
    ) -> Result<Self, LaunchpadError> {
        let engine = parse_version(provided_version_of_engine).ok_or_else(|| {
            let trimmed = provided_version_of_engine.trim();
            let reason = Version::parse(trimmed.strip_prefix('v').unwrap_or(trimmed))
                .err()
                .map(|e| e.to_string())
                .unwrap_or_default();
            LaunchpadError::InvalidEngineVersion {
                version: provided_version_of_engine.to_string(),
                reason,
            }
        })?;

        Ok(Self::from_parts(engine, provided_version_of_shared))
    }

    pub fn from_parts(engine: Version, provided_version_of_shared: impl Into<String>) -> Self {
        Self {
            provided_version_of_engine: engine,
            provided_version_of_shared: provided_version_of_shared.into(),
            shared_package: default_shared_package(),
        }
    }

    pub fn with_shared_package(mut self, package: impl Into<String>) -> Self {
        self.shared_package = package.into();
        self
    }

    pub fn declared_shared_version(&self) -> DeclaredVersion<'_> {
        DeclaredVersion::classify(Some(&self.provided_version_of_shared))
    }
}
