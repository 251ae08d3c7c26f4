//! Result types for compatibility checks
//!
//! A single rule answers with a [`CompatibilityResult`], which may be
//! `Undecided`. The chain evaluator only ever hands out a [`Compatibility`],
//! which has no undecided state.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::rule::CompatibilityRule;

/// Outcome of a single rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompatibilityResult {
    /// The rule has no opinion; the next rule decides
    Undecided,
    Compatible,
    Incompatible(Incompatibility),
}

impl CompatibilityResult {
    pub fn incompatible(
        rule: CompatibilityRule,
        warning: impl Into<String>,
        long_warning: impl Into<String>,
    ) -> Self {
        CompatibilityResult::Incompatible(Incompatibility {
            rule,
            warning: warning.into(),
            long_warning: long_warning.into(),
        })
    }

    pub fn is_decided(&self) -> bool {
        !matches!(self, CompatibilityResult::Undecided)
    }

    /// The final decision, if this rule made one
    pub fn decided(self) -> Option<Compatibility> {
        match self {
            CompatibilityResult::Undecided => None,
            CompatibilityResult::Compatible => Some(Compatibility::Compatible),
            CompatibilityResult::Incompatible(reason) => Some(Compatibility::Incompatible(reason)),
        }
    }
}

impl From<Compatibility> for CompatibilityResult {
    fn from(compatibility: Compatibility) -> Self {
        match compatibility {
            Compatibility::Compatible => CompatibilityResult::Compatible,
            Compatibility::Incompatible(reason) => CompatibilityResult::Incompatible(reason),
        }
    }
}

/// Final verdict for an app
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Compatibility {
    Compatible,
    Incompatible(Incompatibility),
}

impl Compatibility {
    pub fn is_compatible(&self) -> bool {
        matches!(self, Compatibility::Compatible)
    }

    pub fn incompatibility(&self) -> Option<&Incompatibility> {
        match self {
            Compatibility::Compatible => None,
            Compatibility::Incompatible(reason) => Some(reason),
        }
    }

    /// Short text for inline display in the app list
    pub fn warning(&self) -> Option<&str> {
        self.incompatibility().map(|reason| reason.warning.as_str())
    }

    /// Long text for the confirmation dialog
    pub fn long_warning(&self) -> Option<&str> {
        self.incompatibility().map(|reason| reason.long_warning.as_str())
    }
}

impl fmt::Display for Compatibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Compatibility::Compatible => write!(f, "COMPATIBLE"),
            Compatibility::Incompatible(reason) => write!(f, "INCOMPATIBLE: {}", reason.warning),
        }
    }
}

/// Why an app was judged incompatible
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Incompatibility {
    /// Rule that decided
    pub rule: CompatibilityRule,
    pub warning: String,
    pub long_warning: String,
}

impl Incompatibility {
    pub fn category(&self) -> IncompatibilityCategory {
        self.rule.category()
    }
}

/// Who is at fault for an incompatibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncompatibilityCategory {
    /// The app's declared requirements do not match the launcher
    DeclaredIncompatibility,
    /// The launcher references a shared package version it cannot check
    EnvironmentMisconfiguration,
}
