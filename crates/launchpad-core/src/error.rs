//! Unified Error Model
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaunchpadError {
    /// The launcher manifest declares no dependency on the shared package.
    /// This is a packaging defect, never a compatibility verdict.
    #[error("SETUP/The launcher must depend on a version of {package}")]
    MissingSharedDependency { package: String },

    #[error("VERSION/`{version}` is not a valid engine version: {reason}")]
    InvalidEngineVersion { version: String, reason: String },

    #[error("MANIFEST/{0}")]
    ManifestError(String),

    #[error("CONFIG/{0}")]
    ConfigError(String),

    #[error("SOURCE/{0}")]
    SourceError(String),
}

impl LaunchpadError {
    /// Fatal setup errors abort environment resolution instead of producing a warning.
    pub fn is_fatal_setup(&self) -> bool {
        matches!(self, Self::MissingSharedDependency { .. })
    }
}
