//! trello-export CLI entrypoint.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use tracing::info;
use tracing_subscriber::EnvFilter;
use trello_export::ExportError;
use trello_export::cli::{load_config_from_args, run};

fn main() -> ExitCode {
    init_tracing();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

fn execute() -> Result<(), ExportError> {
    let config = load_config_from_args(env::args_os())?;
    let written = run(&config)?;
    for path in &written {
        info!(path = %path, "wrote file");
    }
    Ok(())
}

/// Installs a stderr subscriber filtered by `RUST_LOG`, defaulting to `info`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
