//! Entry point for the `porto` command-line interface.
#![forbid(unsafe_code)]

use porto_cli::CliError;
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();
    match porto_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("porto: {err}");
            std::process::exit(1);
        }
    }
}

/// Send `log` records to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("porto: failed to install logger: {err}");
    }
}
