//! Interface addresses and family classification.

use std::fmt;
use std::net::{AddrParseError, IpAddr};

/// IP address family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpFamily {
    /// IPv4.
    V4,
    /// IPv6.
    V6,
}

/// Classifies an address literal by its syntax.
///
/// Any literal containing a `.` is IPv4, everything else is IPv6. This is
/// not a parser: malformed literals are classified by the same rule, and an
/// IPv4-mapped IPv6 literal such as `::ffff:10.0.0.1` counts as IPv4.
#[must_use]
pub fn classify(literal: &str) -> IpFamily {
    if literal.contains('.') {
        IpFamily::V4
    } else {
        IpFamily::V6
    }
}

/// An address assigned to an interface, kept as the literal the OS reported.
///
/// Platform fetchers produce CIDR notation (`192.168.1.10/24`). The family
/// is derived from the literal with [`classify`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address(String);

impl Address {
    /// Creates an address from its literal.
    #[must_use]
    pub fn new(literal: impl Into<String>) -> Self {
        Self(literal.into())
    }

    /// Returns the literal as reported.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the family of this address.
    #[must_use]
    pub fn family(&self) -> IpFamily {
        classify(&self.0)
    }

    /// Returns the host part of the literal (everything before `/`).
    #[must_use]
    pub fn host(&self) -> &str {
        self.0.split_once('/').map_or(self.0.as_str(), |(host, _)| host)
    }

    /// Parses the host part into an [`IpAddr`].
    ///
    /// # Errors
    ///
    /// Returns [`AddrParseError`] if the host part is not a valid IP address.
    pub fn ip(&self) -> Result<IpAddr, AddrParseError> {
        self.host().parse()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Address {
    fn from(literal: &str) -> Self {
        Self::new(literal)
    }
}

impl From<String> for Address {
    fn from(literal: String) -> Self {
        Self(literal)
    }
}

/// Splits addresses into IPv4 and IPv6 buckets, preserving order.
#[must_use]
pub fn partition(addresses: Vec<Address>) -> (Vec<Address>, Vec<Address>) {
    addresses
        .into_iter()
        .partition(|addr| addr.family() == IpFamily::V4)
}
