//! Launchpad Registry: manifests, environment resolution and app sources
pub mod manifest;
pub mod sources;

pub use manifest::{
    read_installed_app, AppManifest, Engines, LauncherManifest, LauncherSection,
    ManifestEnvironment, APP_MANIFEST_FILE,
};
pub use sources::{Source, SourceManifest, SourceRegistry, STANDARD_SOURCES};
