//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error hints
//! that support the main entry point.

use nif::config::ConfigError;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - conflicting or missing flags.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Runtime error (exit code 2) - OS query or output failure.
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Prints a clap parse outcome and picks the exit code.
///
/// `--help` and `--version` go to stdout and succeed; usage errors go to
/// stderr and count as configuration errors.
pub fn report_parse_error(error: &clap::Error) -> ExitCode {
    if let Err(e) = error.print() {
        eprintln!("Error: {e}");
    }
    parse_exit_code(error)
}

fn parse_exit_code(error: &clap::Error) -> ExitCode {
    if error.use_stderr() {
        exit_code::CONFIG_ERROR
    } else {
        exit_code::SUCCESS
    }
}

/// Prints a hint for configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    match error {
        ConfigError::ConflictingFlags { .. } | ConfigError::MissingFlag { .. } => {
            eprintln!("\nRun 'nif --help' for usage.");
        }
    }
}

/// Sets up the tracing subscriber for diagnostics on stderr.
///
/// Stdout carries only report lines.
pub fn setup_tracing(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::WARN };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
