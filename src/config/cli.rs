//! CLI argument parsing using clap.

use clap::Parser;

use super::defaults;

/// Simple network interface info tool
///
/// Prints the names of interesting network interfaces and, on request,
/// their IPv4/IPv6 addresses. Output is meant to be consumed by scripts.
#[derive(Debug, Parser)]
#[command(name = "nif")]
#[command(version, about, long_about = None)]
#[allow(clippy::struct_excessive_bools)] // CLI flags are naturally boolean
pub struct Cli {
    /// List all available network interfaces
    #[arg(short = 'a', long)]
    pub all: bool,

    /// Show only single best guessed network interface and/or IP address
    #[arg(short = '1', long, short_alias = 'o')]
    pub one: bool,

    /// Show IPv4 addresses next to network interface
    #[arg(short = '4', long)]
    pub ipv4: bool,

    /// Show IPv6 addresses next to network interface
    #[arg(short = '6', long)]
    pub ipv6: bool,

    /// Only show IP addresses of network interface
    #[arg(short = 'i', long = "only-ip")]
    pub only_ip: bool,

    /// Retry n times in intervals of 1sec if no interface addresses could be found
    #[arg(short = 'r', long, value_name = "N", default_value_t = defaults::RETRY_COUNT)]
    pub retry: u32,

    /// Show additional debug information
    #[arg(short = 'd', long)]
    pub debug: bool,
}

impl Cli {
    /// Parses CLI arguments from the command line, returning parse errors.
    ///
    /// `--help` and `--version` also arrive as errors; see
    /// [`clap::Error::use_stderr`].
    ///
    /// # Errors
    ///
    /// Returns a [`clap::Error`] for unknown flags or invalid values.
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Like [`parse_from_iter`](Self::parse_from_iter), returning parse errors.
    ///
    /// # Errors
    ///
    /// Returns a [`clap::Error`] for unknown flags or invalid values.
    pub fn try_parse_from_iter<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(iter)
    }
}
