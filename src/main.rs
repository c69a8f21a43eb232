mod cli;
mod commands;
mod infra;
mod shared;

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `GH_LOL_LOG=debug`).
const LOG_ENV: &str = "GH_LOL_LOG";

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e, &mut std::io::stderr()),
    }
}

async fn run() -> anyhow::Result<()> {
    let Cli { repo, command } = Cli::parse();
    let config = shared::config::load_config()?;
    command.run(&config, repo.as_deref()).await
}

/// Write `X <error chain>` and return the failing exit status.
fn report<W: Write>(err: &anyhow::Error, out: &mut W) -> ExitCode {
    // Nothing else to do if stderr itself is gone.
    let _ = writeln!(out, "X {err:#}");
    ExitCode::FAILURE
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}
