//! Interface fetching trait and error types.

use super::{Address, Interface};
use thiserror::Error;

/// Error type for OS interface queries.
///
/// Describes what went wrong without dictating recovery strategy.
/// Callers decide how to handle each error variant.
#[derive(Debug, Error)]
pub enum FetchError {
    /// A Unix system call failed.
    #[cfg(unix)]
    #[error("System call failed: {0}")]
    Unix(#[from] nix::Error),

    /// Windows API call failed.
    #[cfg(windows)]
    #[error("Windows API error: {0}")]
    WindowsApi(#[from] windows::core::Error),

    /// The interface disappeared from the OS table.
    #[error("Interface not found: {name}")]
    InterfaceNotFound {
        /// Name of the interface that was queried.
        name: String,
    },

    /// Platform-specific error with a generic message.
    #[error("Platform error: {message}")]
    Platform {
        /// Error message describing the platform-specific failure.
        message: String,
    },
}

/// Trait for reading the OS interface and address tables.
///
/// # Design
///
/// - Platform implementations live in [`platform`](super::platform)
/// - Enables dependency injection for testing with mock implementations
/// - Both operations are synchronous reads of locally cached OS state
///
/// # Example
///
/// ```
/// use nif::network::{Address, FetchError, Interface, InterfaceFetcher};
///
/// struct StaticFetcher;
///
/// impl InterfaceFetcher for StaticFetcher {
///     fn interfaces(&self) -> Result<Vec<Interface>, FetchError> {
///         Ok(vec![])
///     }
///
///     fn addresses(&self, _interface: &Interface) -> Result<Vec<Address>, FetchError> {
///         Ok(vec![])
///     }
/// }
///
/// assert!(StaticFetcher.interfaces().unwrap().is_empty());
/// ```
pub trait InterfaceFetcher: Send + Sync {
    /// Lists all interfaces in OS enumeration order.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when the OS interface table cannot be read.
    fn interfaces(&self) -> Result<Vec<Interface>, FetchError>;

    /// Lists the addresses currently assigned to `interface`.
    ///
    /// Every call reflects current OS state; implementations must not cache.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when the OS call fails or the interface is gone.
    fn addresses(&self, interface: &Interface) -> Result<Vec<Address>, FetchError>;
}

impl<T: InterfaceFetcher + ?Sized> InterfaceFetcher for &T {
    fn interfaces(&self) -> Result<Vec<Interface>, FetchError> {
        (*self).interfaces()
    }

    fn addresses(&self, interface: &Interface) -> Result<Vec<Address>, FetchError> {
        (*self).addresses(interface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{HardwareAddr, InterfaceFlags};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// A mock fetcher that returns predefined address results.
    ///
    /// Uses `Mutex<VecDeque>` to avoid requiring `Clone` on `FetchError`.
    struct MockFetcher {
        interfaces: Vec<Interface>,
        addresses: Mutex<VecDeque<Result<Vec<Address>, FetchError>>>,
    }

    impl MockFetcher {
        fn new(
            interfaces: Vec<Interface>,
            addresses: Vec<Result<Vec<Address>, FetchError>>,
        ) -> Self {
            Self {
                interfaces,
                addresses: Mutex::new(addresses.into()),
            }
        }
    }

    impl InterfaceFetcher for MockFetcher {
        fn interfaces(&self) -> Result<Vec<Interface>, FetchError> {
            Ok(self.interfaces.clone())
        }

        fn addresses(&self, _interface: &Interface) -> Result<Vec<Address>, FetchError> {
            self.addresses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(vec![]))
        }
    }

    fn eth0() -> Interface {
        Interface::new(
            2,
            "eth0",
            HardwareAddr::new([1, 2, 3, 4, 5, 6]),
            InterfaceFlags::UP,
        )
    }

    #[test]
    fn mock_fetcher_returns_different_results_on_each_call() {
        let fetcher = MockFetcher::new(
            vec![eth0()],
            vec![Ok(vec![]), Ok(vec![Address::new("10.0.0.1/8")])],
        );

        assert!(fetcher.addresses(&eth0()).unwrap().is_empty());
        assert_eq!(fetcher.addresses(&eth0()).unwrap().len(), 1);
    }

    #[test]
    fn reference_forwards_to_inner_fetcher() {
        let fetcher = MockFetcher::new(vec![eth0()], vec![]);
        let by_ref = &fetcher;

        assert_eq!(InterfaceFetcher::interfaces(&by_ref).unwrap(), vec![eth0()]);
    }

    #[test]
    fn mock_fetcher_can_return_errors() {
        let fetcher = MockFetcher::new(
            vec![],
            vec![Err(FetchError::Platform {
                message: "test error".to_string(),
            })],
        );

        let error = fetcher.addresses(&eth0()).unwrap_err();
        assert!(error.to_string().contains("test error"));
    }

    #[test]
    fn interface_not_found_displays_name() {
        let error = FetchError::InterfaceNotFound {
            name: "wlan0".to_string(),
        };
        assert_eq!(error.to_string(), "Interface not found: wlan0");
    }

    #[cfg(unix)]
    #[test]
    fn unix_error_converts_from_errno() {
        let error: FetchError = nix::Error::EACCES.into();
        assert!(error.to_string().starts_with("System call failed"));
    }
}
