//! Runref - command-line entry point
//!
//! Usage: `runref <VARIABLE_NAME> <JOB_NAME#BUILD_NUMBER>`
//!
//! Reads `RUNREF_ROOT_URL` and `RUNREF_REGISTRY`, then prints the projected
//! variables as `KEY=VALUE` lines. Logs go to stderr (`RUST_LOG`, default `warn`).

use std::io::Write;

use clap::Parser;
use runref::Cli;
use runref_infrastructure::HostConfig;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let reference = Cli::parse().into_reference()?;
    let config = HostConfig::from_env()?;

    let vars = runref::project(&config, &reference).inspect_err(|e| {
        tracing::error!(token = %reference.token(), error = %e, "projection failed");
    })?;

    let mut stdout = std::io::stdout().lock();
    write!(stdout, "{vars}")?;
    stdout.flush()?;

    Ok(())
}
