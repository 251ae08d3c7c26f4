//! App Sources
use launchpad_core::{LaunchpadError, LOCAL_SOURCE, OFFICIAL_SOURCE};
use serde::{Deserialize, Serialize};

/// Sources every launcher has; they can be neither added nor removed.
pub const STANDARD_SOURCES: [&str; 2] = [OFFICIAL_SOURCE, LOCAL_SOURCE];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub name: String,
    /// Where the source manifest lives; standard sources are built in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Source {
    pub fn is_standard(&self) -> bool {
        STANDARD_SOURCES.contains(&self.name.as_str())
    }
}

/// A source manifest (`source.json`), listing the app manifests it offers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceManifest {
    /// Absent for the official source
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub apps: Vec<String>,
}

impl SourceManifest {
    pub fn from_json(json: &str) -> Result<Self, LaunchpadError> {
        serde_json::from_str(json).map_err(|e| LaunchpadError::ManifestError(e.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRegistry {
    sources: Vec<Source>,
}

impl SourceRegistry {
    pub fn new() -> Self {
        Self {
            sources: STANDARD_SOURCES
                .iter()
                .map(|name| Source {
                    name: name.to_string(),
                    url: None,
                })
                .collect(),
        }
    }

    /// Register the source described by `manifest`, downloaded from `url`.
    /// Re-adding a known source updates its URL.
    pub fn add(&mut self, url: impl Into<String>, manifest: &SourceManifest) -> Result<&Source, LaunchpadError> {
        let name = match manifest.name.as_deref() {
            Some(name) if !STANDARD_SOURCES.contains(&name) => name,
            _ => {
                return Err(LaunchpadError::SourceError(
                    "The official source cannot be added.".to_string(),
                ))
            }
        };
        let url = url.into();

        let index = match self.sources.iter().position(|s| s.name == name) {
            Some(index) => {
                self.sources[index].url = Some(url);
                index
            }
            None => {
                self.sources.push(Source {
                    name: name.to_string(),
                    url: Some(url),
                });
                self.sources.len() - 1
            }
        };

        let source = &self.sources[index];
        tracing::info!(source = %source.name, apps = manifest.apps.len(), "added app source");
        Ok(source)
    }

    pub fn remove(&mut self, name: Option<&str>) -> Result<Source, LaunchpadError> {
        let name = match name {
            Some(name) if !STANDARD_SOURCES.contains(&name) => name,
            _ => {
                return Err(LaunchpadError::SourceError(
                    "The official or local source shall not be removed.".to_string(),
                ))
            }
        };

        let index = self
            .sources
            .iter()
            .position(|s| s.name == name)
            .ok_or_else(|| LaunchpadError::SourceError(format!("Unknown source `{}`", name)))?;

        let removed = self.sources.remove(index);
        tracing::info!(source = %removed.name, "removed app source");
        Ok(removed)
    }

    pub fn get(&self, name: &str) -> Option<&Source> {
        self.sources.iter().find(|s| s.name == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Source> {
        self.sources.iter()
    }
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
