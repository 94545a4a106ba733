//! Configuration layer for nif.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`])
//! - Validated options ([`QueryOptions`])
//! - Default values ([`defaults`])
//!
//! There are no configuration files: every option comes from the command
//! line and is validated before any OS query is made.
//!
//! # Flag Rules
//!
//! - `--one` and `--all` cannot be combined.
//! - `--only-ip` needs `--ipv4` and/or `--ipv6`, otherwise nothing would be printed.
//! - Without `--ipv4`/`--ipv6` no address query is made at all.

mod cli;
pub mod defaults;
mod error;
mod options;

#[cfg(test)]
mod cli_tests;

pub use cli::Cli;
pub use error::{ConfigError, flag};
pub use options::QueryOptions;
