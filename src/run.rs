//! Application execution logic.
//!
//! Runs one report pass against the platform interface tables and writes
//! the resulting lines to stdout.

use std::io::{self, Write};

use thiserror::Error;

use nif::NifError;
use nif::config::QueryOptions;
use nif::network::InterfaceFetcher;
use nif::network::platform::PlatformFetcher;
use nif::output::write_lines;
use nif::report::report;
use nif::time::{Sleeper, TokioSleeper};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Interface enumeration or address resolution failed.
    #[error(transparent)]
    Nif(#[from] NifError),

    /// Writing the report failed.
    #[error("Failed to write output: {0}")]
    Output(#[source] io::Error),
}

/// Executes a single report pass against the host's interfaces.
///
/// # Errors
///
/// Returns an error if the OS tables cannot be read or stdout cannot be
/// written.
///
/// # Coverage Note
///
/// Excluded from coverage because it reads the real interface tables.
#[cfg(not(tarpaulin_include))]
pub async fn execute(options: &QueryOptions) -> Result<(), RunError> {
    let fetcher = PlatformFetcher::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    execute_with(&fetcher, TokioSleeper, options, &mut out).await
}

/// Executes a report pass with injected dependencies.
///
/// Nothing is written unless every interface resolved successfully.
pub async fn execute_with<F, S, W>(
    fetcher: &F,
    sleeper: S,
    options: &QueryOptions,
    out: &mut W,
) -> Result<(), RunError>
where
    F: InterfaceFetcher,
    S: Sleeper,
    W: Write,
{
    let lines = report(fetcher, sleeper, options).await?;
    tracing::debug!("Writing {} line(s)", lines.len());
    write_lines(&lines, out).map_err(RunError::Output)
}
