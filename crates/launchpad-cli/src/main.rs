//! Binary entrypoint for the Launchpad CLI.
use clap::Parser;
use launchpad_cli::{run, Cli, Status};
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;

fn main() -> ExitCode {
    // Log level can be overridden with LAUNCHPAD_LOG
    let level = std::env::var("LAUNCHPAD_LOG")
        .ok()
        .and_then(|level| level.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::INFO);

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    // clap exits with 2 on usage errors, which would read as "needs confirmation"
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                Status::Error.into()
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(cli) {
        Ok(status) => status.into(),
        Err(err) => {
            tracing::error!("{:#}", err);
            Status::from_error(&err).into()
        }
    }
}
