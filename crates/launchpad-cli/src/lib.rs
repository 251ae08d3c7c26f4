//! Launchpad CLI: check app manifests against a launcher
pub mod commands;

use clap::{Args, Parser, Subcommand};
use launchpad_core::LaunchpadError;
use std::path::PathBuf;
use std::process::ExitCode;

/// Check whether apps are compatible with the running launcher.
///
/// Exit codes:
///   0  every app is compatible, or the app launches without confirmation
///   1  at least one app is incompatible
///   2  the app needs confirmation before launching
///   3  the launcher is misconfigured (no dependency on the shared package)
///   4  any other error: unreadable manifest or config, bad arguments
#[derive(Parser, Debug)]
#[command(
    name = "launchpad",
    version,
    about = "Check whether apps are compatible with the running launcher",
    verbatim_doc_comment
)]
pub struct Cli {
    /// Launcher config file (YAML)
    #[arg(long, global = true, env = "LAUNCHPAD_CONFIG")]
    pub config: Option<PathBuf>,

    /// The launcher's own manifest; overrides `launcher_manifest` in the config
    #[arg(long, global = true)]
    pub launcher: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check installed apps and print a verdict for each
    Check(CheckArgs),
    /// Decide whether an app can launch without confirmation
    Launch(LaunchArgs),
    /// Print the versions the launcher provides to apps
    Env,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// App directories, or app manifest files
    #[arg(required = true)]
    pub apps: Vec<PathBuf>,

    /// Source the apps were installed from
    #[arg(long, default_value = launchpad_core::LOCAL_SOURCE)]
    pub source: String,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct LaunchArgs {
    /// App directory or manifest file
    pub app: PathBuf,

    #[arg(long, default_value = launchpad_core::LOCAL_SOURCE)]
    pub source: String,
}

/// How a command finished; maps onto the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Incompatible,
    NeedsConfirmation,
    SetupError,
    Error,
}

impl Status {
    pub fn code(self) -> u8 {
        match self {
            Status::Success => 0,
            Status::Incompatible => 1,
            Status::NeedsConfirmation => 2,
            Status::SetupError => 3,
            Status::Error => 4,
        }
    }

    /// Status for a command that failed with `err`
    pub fn from_error(err: &anyhow::Error) -> Self {
        let fatal_setup = err
            .chain()
            .filter_map(|cause| cause.downcast_ref::<LaunchpadError>())
            .any(LaunchpadError::is_fatal_setup);

        if fatal_setup {
            Status::SetupError
        } else {
            Status::Error
        }
    }
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        ExitCode::from(status.code())
    }
}

pub use commands::run;

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_exit_codes_are_distinct() {
        let codes = [
            Status::Success,
            Status::Incompatible,
            Status::NeedsConfirmation,
            Status::SetupError,
            Status::Error,
        ]
        .map(Status::code);
        assert_eq!(codes, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_setup_error_found_behind_context() {
        let err = Err::<(), _>(LaunchpadError::MissingSharedDependency {
            package: "launchpad-shared".to_string(),
        })
        .context("resolving the launcher environment")
        .unwrap_err();
        assert_eq!(Status::from_error(&err), Status::SetupError);

        let err = anyhow::Error::new(LaunchpadError::ManifestError("bad".to_string()));
        assert_eq!(Status::from_error(&err), Status::Error);
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
