//! Runsheet CLI entry point.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use runsheet::cli::{Cli, CommandDispatcher, CommandIo};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr so they never mix with rendered documents.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("runsheet=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("runsheet=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Runsheet starting with args: {:?}", cli);

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    let mut error = io::stderr().lock();
    let mut streams = CommandIo::new(&mut input, &mut output, &mut error);

    match CommandDispatcher::new().dispatch(&cli, &mut streams) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}
