//! Command handlers
use anyhow::{bail, Context, Result};
use launchpad_compat::{CompatibilityChecker, CompatibilityReport, EnvironmentSource, LaunchDecision};
use launchpad_core::{AppMetadata, LauncherConfig};
use launchpad_registry::{read_installed_app, AppManifest, LauncherManifest, ManifestEnvironment};
use std::fmt::Write;
use std::path::Path;

use crate::{CheckArgs, Cli, Command, LaunchArgs, Status};

pub fn run(cli: Cli) -> Result<Status> {
    let config = match &cli.config {
        Some(path) => LauncherConfig::from_file(path)?,
        None => LauncherConfig::default(),
    };
    let environment = launcher_environment(cli.launcher.as_deref(), config)?;

    match cli.cmd {
        Command::Check(args) => check(&environment, &args),
        Command::Launch(args) => launch(&environment, &args),
        Command::Env => env(&environment),
    }
}

fn launcher_environment(launcher: Option<&Path>, config: LauncherConfig) -> Result<ManifestEnvironment> {
    let Some(path) = launcher.or(config.launcher_manifest.as_deref()) else {
        bail!("no launcher manifest given; pass --launcher or set launcher_manifest in the config");
    };

    let manifest = LauncherManifest::from_file(path)
        .with_context(|| format!("loading launcher manifest {}", path.display()))?;
    Ok(manifest.with_config(config))
}

fn read_app(source: &str, path: &Path) -> Result<AppMetadata> {
    let app = if path.is_dir() {
        read_installed_app(source, path)?
    } else {
        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        AppManifest::from_file(path)?.to_metadata(source, dir)
    };
    Ok(app)
}

fn checker(environment: &ManifestEnvironment) -> Result<CompatibilityChecker> {
    let checker = CompatibilityChecker::from_source(environment)
        .context("resolving the launcher environment")?;
    Ok(checker.with_config(environment.config()))
}

fn check(environment: &ManifestEnvironment, args: &CheckArgs) -> Result<Status> {
    let checker = checker(environment)?;
    let apps = args
        .apps
        .iter()
        .map(|path| read_app(&args.source, path))
        .collect::<Result<Vec<_>>>()?;

    let report = checker.check_all(&apps);
    print!("{}", render_report(&report, args.json)?);

    tracing::info!(
        apps = report.len(),
        incompatible = report.incompatible().count(),
        "compatibility check finished"
    );

    Ok(if report.all_compatible() {
        Status::Success
    } else {
        Status::Incompatible
    })
}

/// One line per app, or the whole report as JSON
pub fn render_report(report: &CompatibilityReport, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(report)? + "\n");
    }

    let mut out = String::new();
    for entry in &report.entries {
        match entry.compatibility.warning() {
            None => writeln!(out, "{}: compatible", entry.app)?,
            Some(warning) => writeln!(out, "{}: {}", entry.app, warning)?,
        }
    }
    Ok(out)
}

fn launch(environment: &ManifestEnvironment, args: &LaunchArgs) -> Result<Status> {
    let checker = checker(environment)?;
    let app = read_app(&args.source, &args.app)?;

    match checker.decide_launch(&app) {
        LaunchDecision::Launch { app } => {
            println!("launch {}", app);
            Ok(Status::Success)
        }
        LaunchDecision::ConfirmLaunch { app, text } => {
            println!("confirm before launching {}:\n{}", app, text);
            Ok(Status::NeedsConfirmation)
        }
    }
}

fn env(environment: &ManifestEnvironment) -> Result<Status> {
    let env = environment
        .resolve()
        .context("resolving the launcher environment")?;
    println!("{}", serde_json::to_string_pretty(&env)?);
    Ok(Status::Success)
}
