//! Version primitives
//!
//! Apps declare their requirements with npm-style ranges (`^1.2.3`,
//! `>=1.0.0 <2.0.0`, `1.x || 2.x`, `1.0.0 - 1.4.0`). This module translates
//! those ranges into [`semver::VersionReq`] sets and exposes the three
//! primitives the compatibility rules are written against:
//! [`is_valid_version`], [`satisfies_range`] and [`lte`].

use semver::{BuildMetadata, Version, VersionReq};
use std::fmt;

const OPERATORS: [&str; 8] = [">=", "<=", ">", "<", "=", "^", "~", "~>"];

/// A requirement nothing satisfies: no version sorts below `0.0.0-0`.
const UNSATISFIABLE: &str = "<0.0.0-0";

/// Parse a concrete version, tolerating surrounding whitespace and a leading `v`.
pub fn parse_version(s: &str) -> Option<Version> {
    let trimmed = s.trim();
    let trimmed = trimmed.strip_prefix('v').unwrap_or(trimmed);
    Version::parse(trimmed).ok()
}

/// True iff `s` is a concrete `major.minor.patch[-pre][+build]` version.
pub fn is_valid_version(s: &str) -> bool {
    parse_version(s).is_some()
}

/// Drop the pre-release qualifier (and build metadata): `2.0.0-alpha.0` becomes `2.0.0`.
pub fn strip_prerelease(version: &Version) -> Version {
    Version::new(version.major, version.minor, version.patch)
}

/// `a <= b` by semver precedence. Build metadata does not take part in ordering.
pub fn lte(a: &Version, b: &Version) -> bool {
    without_build(a) <= without_build(b)
}

/// True iff `version` falls within the npm-style `range`.
///
/// A range that cannot be parsed is satisfied by nothing.
pub fn satisfies_range(version: &Version, range: &str) -> bool {
    VersionRange::parse(range)
        .map(|range| range.matches(version))
        .unwrap_or(false)
}

fn without_build(version: &Version) -> Version {
    let mut version = version.clone();
    version.build = BuildMetadata::EMPTY;
    version
}

/// A parsed npm-style range: a union of comparator sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRange {
    raw: String,
    alternatives: Vec<VersionReq>,
}

impl VersionRange {
    /// Parse a range. Returns `None` if any alternative is malformed.
    pub fn parse(range: &str) -> Option<Self> {
        let mut alternatives = Vec::new();
        for set in range.split("||") {
            let translated = translate_comparator_set(set)?;
            alternatives.push(VersionReq::parse(&translated).ok()?);
        }

        Some(Self {
            raw: range.trim().to_string(),
            alternatives,
        })
    }

    pub fn matches(&self, version: &Version) -> bool {
        self.alternatives.iter().any(|req| req.matches(version))
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Translate one whitespace-separated comparator set into `VersionReq` syntax.
fn translate_comparator_set(set: &str) -> Option<String> {
    let set = set.trim();
    if set.is_empty() {
        return Some("*".to_string());
    }

    if let Some((low, high)) = set.split_once(" - ") {
        return Some(format!(
            ">={}, <={}",
            normalize_version(low.trim())?,
            normalize_version(high.trim())?
        ));
    }

    let mut comparators = Vec::new();
    let mut pending_op: Option<&str> = None;

    for token in set.split_whitespace() {
        // npm allows a space between operator and version: `>= 1.2.3`
        if OPERATORS.contains(&token) {
            if pending_op.is_some() {
                return None;
            }
            pending_op = Some(token);
            continue;
        }

        let comparator = match pending_op.take() {
            Some(op) => with_operator(op, token)?,
            None => translate_comparator(token)?,
        };
        comparators.push(comparator);
    }

    if pending_op.is_some() || comparators.is_empty() {
        return None;
    }

    Some(comparators.join(", "))
}

fn translate_comparator(token: &str) -> Option<String> {
    let split = token.find(|c: char| c.is_ascii_alphanumeric() || c == '*')?;
    let (op, version) = token.split_at(split);

    if op.is_empty() {
        // A bare version is an exact match in npm, not Cargo's implicit caret.
        let version = normalize_version(version)?;
        return Some(if version == "*" {
            version
        } else {
            format!("={}", version)
        });
    }

    if !OPERATORS.contains(&op) {
        return None;
    }
    with_operator(op, version)
}

fn with_operator(op: &str, version: &str) -> Option<String> {
    let version = normalize_version(version)?;
    if version == "*" {
        // Strictly above or below every version
        return Some(match op {
            "<" | ">" => UNSATISFIABLE.to_string(),
            _ => version,
        });
    }

    // `~>` is an alias for tilde
    let op = if op == "~>" { "~" } else { op };
    Some(format!("{}{}", op, version))
}

/// Strip a leading `v` and truncate x-ranges (`1.x`, `1.2.*`) to the partial
/// version `semver` understands. A fully wild version becomes `*`.
fn normalize_version(version: &str) -> Option<String> {
    let version = version.strip_prefix('v').unwrap_or(version);
    if version.is_empty() {
        return None;
    }

    let core_end = version.find(['-', '+']).unwrap_or(version.len());
    let core = &version[..core_end];

    let parts: Vec<&str> = core.split('.').collect();
    match parts.iter().position(|part| matches!(*part, "x" | "X" | "*")) {
        Some(0) => Some("*".to_string()),
        Some(wild) => Some(parts[..wild].join(".")),
        None => Some(version.to_string()),
    }
}
