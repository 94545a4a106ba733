//! nif: Network Interface Finder
//!
//! Entry point for the nif application.

use nif::config::{Cli, QueryOptions};
use std::process::ExitCode;

mod app;
mod run;

use app::{exit_code, print_config_hint, report_parse_error, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = match Cli::try_parse_args() {
        Ok(cli) => cli,
        Err(e) => return report_parse_error(&e),
    };

    // Validate flags before touching the OS
    let options = match QueryOptions::from_cli(&cli) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {e}");
            print_config_hint(&e);
            return exit_code::CONFIG_ERROR;
        }
    };

    setup_tracing(options.debug);
    tracing::debug!("{options}");

    run_application(&options)
}

/// Runs one report pass on a current-thread runtime.
///
/// Excluded from coverage - requires async runtime.
#[cfg(not(tarpaulin_include))]
fn run_application(options: &QueryOptions) -> ExitCode {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Error: failed to create runtime: {e}");
            return exit_code::runtime_error();
        }
    };

    match runtime.block_on(run::execute(options)) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code::runtime_error()
        }
    }
}
