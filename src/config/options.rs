//! Validated query options.
//!
//! [`QueryOptions`] is built once from the CLI and passed explicitly to
//! every stage of the pipeline. All validation happens in [`QueryOptions::validate`].

use std::fmt;

use crate::network::IpVersion;

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, flag};

/// Options for one enumeration pass.
///
/// # Invariants
///
/// - `only_addresses` requires `want_ipv4` or `want_ipv6`
/// - `select_single` and `include_all` are mutually exclusive
///
/// [`QueryOptions::from_cli`] enforces both; code building the struct
/// directly should call [`QueryOptions::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct QueryOptions {
    /// List every interface instead of only the interesting ones.
    pub include_all: bool,

    /// Report only the first interesting interface and the first address per family.
    pub select_single: bool,

    /// Show IPv4 addresses.
    pub want_ipv4: bool,

    /// Show IPv6 addresses.
    pub want_ipv6: bool,

    /// Omit the identity column.
    pub only_addresses: bool,

    /// Extra address query attempts per interface.
    pub retry_count: u32,

    /// Show index, hardware address and flags, and enable debug logging.
    pub debug: bool,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            include_all: false,
            select_single: false,
            want_ipv4: false,
            want_ipv6: false,
            only_addresses: false,
            retry_count: defaults::RETRY_COUNT,
            debug: false,
        }
    }
}

impl fmt::Display for QueryOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let families = self
            .ip_version()
            .map_or_else(|| "none".to_string(), |v| v.to_string());

        write!(
            f,
            "Options {{ all: {}, one: {}, families: {}, only_ip: {}, retry: {}x/{}s, debug: {} }}",
            self.include_all,
            self.select_single,
            families,
            self.only_addresses,
            self.retry_count,
            defaults::RETRY_DELAY_SECS,
            self.debug,
        )
    }
}

impl QueryOptions {
    /// Builds validated options from parsed CLI arguments.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the flags violate an invariant.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let options = Self {
            include_all: cli.all,
            select_single: cli.one,
            want_ipv4: cli.ipv4,
            want_ipv6: cli.ipv6,
            only_addresses: cli.only_ip,
            retry_count: cli.retry,
            debug: cli.debug,
        };
        options.validate()?;
        Ok(options)
    }

    /// Checks the invariants.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::ConflictingFlags`] if both `select_single` and `include_all` are set
    /// - [`ConfigError::MissingFlag`] if `only_addresses` is set without a family
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.select_single && self.include_all {
            return Err(ConfigError::ConflictingFlags {
                first: flag::ONE,
                second: flag::ALL,
            });
        }

        if self.only_addresses && !self.want_ipv4 && !self.want_ipv6 {
            return Err(ConfigError::MissingFlag {
                missing: flag::IPV4_OR_IPV6,
                required_by: flag::ONLY_IP,
            });
        }

        Ok(())
    }

    /// Returns the wanted families, or `None` if no address column is requested.
    #[must_use]
    pub const fn ip_version(&self) -> Option<IpVersion> {
        IpVersion::from_wanted(self.want_ipv4, self.want_ipv6)
    }
}
