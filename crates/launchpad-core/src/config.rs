//! Launcher Config: settings that shape environment resolution and launching
use crate::error::LaunchpadError;
use crate::{LAUNCHPAD_VERSION, SHARED_PACKAGE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    /// Overrides the version read from the launcher manifest
    pub engine_version: Option<String>,
    /// Package name the launcher and apps share
    pub shared_package: String,
    /// The launcher's own manifest
    pub launcher_manifest: Option<PathBuf>,
    /// Development builds skip the confirmation dialog on launch
    pub is_running_launcher_from_source: bool,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            engine_version: None,
            shared_package: SHARED_PACKAGE.to_string(),
            launcher_manifest: None,
            is_running_launcher_from_source: false,
        }
    }
}

impl LauncherConfig {
    /// Load config from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self, LaunchpadError> {
        serde_yaml::from_str(yaml).map_err(|e| LaunchpadError::ConfigError(e.to_string()))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LaunchpadError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|e| {
            LaunchpadError::ConfigError(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config = Self::from_yaml(&yaml)?;
        tracing::debug!(path = %path.display(), "loaded launcher config");
        Ok(config)
    }

    /// Version of this launcher build, unless overridden
    pub fn engine_version(&self) -> &str {
        self.engine_version.as_deref().unwrap_or(LAUNCHPAD_VERSION)
    }
}
