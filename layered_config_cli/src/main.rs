//! CLI entrypoint for `layered-config`.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use layered_config_cli::{Args, run};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut stdout = io::stdout().lock();
    match run(&args, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "layered-config failed");
            ExitCode::FAILURE
        }
    }
}
