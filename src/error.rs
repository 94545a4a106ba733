//! Error type for the enumerate/resolve pipeline.

use std::net::AddrParseError;

use thiserror::Error;

use crate::network::FetchError;

/// Error type for core operations.
///
/// Both OS failures are unrecoverable: callers are expected to abort the
/// whole invocation. An interface without addresses is not an error.
#[derive(Debug, Error)]
pub enum NifError {
    /// The OS interface table could not be read.
    #[error("Failed to enumerate interfaces: {0}")]
    Enumeration(#[source] FetchError),

    /// The OS address table for an interface could not be read.
    #[error("Failed to query addresses of '{interface}': {source}")]
    AddressQuery {
        /// Name of the interface being queried.
        interface: String,
        /// Underlying fetch error.
        #[source]
        source: FetchError,
    },

    /// An address literal is not a valid IP address.
    #[error("Invalid address '{literal}': {source}")]
    AddressParse {
        /// The literal as reported by the OS.
        literal: String,
        /// Underlying parse error.
        #[source]
        source: AddrParseError,
    },
}
