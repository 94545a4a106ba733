//! Error types for option validation.

use thiserror::Error;

/// Error type for option validation.
///
/// Raised before any OS query is made.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Two flags that cannot be combined were both given.
    #[error("conflicting flags: {first} and {second}")]
    ConflictingFlags {
        /// First conflicting flag
        first: &'static str,
        /// Second conflicting flag
        second: &'static str,
    },

    /// A flag needs another flag that was not given.
    #[error("missing flag: {missing} (required by {required_by})")]
    MissingFlag {
        /// The flag (or alternatives) that must be added
        missing: &'static str,
        /// The flag that requires it
        required_by: &'static str,
    },
}

/// Well-known flag spellings used in error messages.
pub mod flag {
    /// The single-result flag.
    pub const ONE: &str = "-1/-o/--one";
    /// The list-everything flag.
    pub const ALL: &str = "-a/--all";
    /// The addresses-only flag.
    pub const ONLY_IP: &str = "-i/--only-ip";
    /// Either family flag.
    pub const IPV4_OR_IPV6: &str = "-4/--ipv4 or -6/--ipv6";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflicting_flags_names_both() {
        let error = ConfigError::ConflictingFlags {
            first: flag::ONE,
            second: flag::ALL,
        };
        assert_eq!(
            error.to_string(),
            "conflicting flags: -1/-o/--one and -a/--all"
        );
    }

    #[test]
    fn missing_flag_names_requirement() {
        let error = ConfigError::MissingFlag {
            missing: flag::IPV4_OR_IPV6,
            required_by: flag::ONLY_IP,
        };
        assert_eq!(
            error.to_string(),
            "missing flag: -4/--ipv4 or -6/--ipv6 (required by -i/--only-ip)"
        );
    }
}
