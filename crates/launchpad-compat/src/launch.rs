//! Launch decisions
//!
//! Before an app is launched, an incompatible app asks the user to confirm
//! with the long warning. Development builds of the launcher skip the dialog.

use launchpad_core::{AppMetadata, AppSpec};
use serde::Serialize;

use crate::result::Compatibility;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum LaunchDecision {
    /// Launch right away
    Launch { app: AppSpec },
    /// Show `text` and launch only if the user acknowledges it
    ConfirmLaunch { app: AppSpec, text: String },
}

impl LaunchDecision {
    pub fn needs_confirmation(&self) -> bool {
        matches!(self, LaunchDecision::ConfirmLaunch { .. })
    }

    pub fn app(&self) -> &AppSpec {
        match self {
            LaunchDecision::Launch { app } | LaunchDecision::ConfirmLaunch { app, .. } => app,
        }
    }
}

pub fn decide_launch(
    app: &AppMetadata,
    compatibility: &Compatibility,
    running_from_source: bool,
) -> LaunchDecision {
    let spec = app.spec();

    match compatibility.long_warning() {
        Some(text) if !running_from_source => {
            tracing::warn!(app = %spec, warning = %text, "launch needs confirmation");
            LaunchDecision::ConfirmLaunch {
                app: spec,
                text: text.to_string(),
            }
        }
        _ => {
            tracing::info!(
                app = %spec,
                app_version = %app.current_version,
                engine_version = app.engine_version().unwrap_or("unspecified"),
                "launching app"
            );
            LaunchDecision::Launch { app: spec }
        }
    }
}
