//! Interface filtering for default (non-`--all`) listings.
//!
//! # Design
//!
//! - **Pure Matchers**: [`OfInterestFilter`] only answers "is this interface
//!   worth reporting?" and has no side effects.
//! - **Decorator**: [`FilteredFetcher`] applies any [`InterfaceFilter`]
//!   transparently to an [`InterfaceFetcher`].
//! - **Enumeration**: [`candidates`] produces the candidate list the rest of
//!   the pipeline works on.

use crate::error::NifError;

use super::{Address, FetchError, Interface, InterfaceFetcher};

/// Trait for filtering network interfaces.
///
/// # Thread Safety
///
/// Filters must be `Send + Sync` so filtered fetchers stay `Send + Sync`.
pub trait InterfaceFilter: Send + Sync {
    /// Returns `true` if the interface should be included.
    fn matches(&self, interface: &Interface) -> bool;
}

/// Default-mode heuristic: a live, physical-ish, non-loopback link.
///
/// Excludes an interface if ANY of these hold:
/// - it has no hardware address
/// - it is a loopback interface
/// - it belongs to a point-to-point link
/// - it is not up
///
/// # Examples
///
/// ```
/// use nif::network::filter::{InterfaceFilter, OfInterestFilter};
/// use nif::network::{HardwareAddr, Interface, InterfaceFlags};
///
/// let eth0 = Interface::new(2, "eth0", HardwareAddr::new([2, 0, 0, 0, 0, 1]), InterfaceFlags::UP);
/// let lo = Interface::new(1, "lo", HardwareAddr::empty(), InterfaceFlags::UP | InterfaceFlags::LOOPBACK);
///
/// assert!(OfInterestFilter.matches(&eth0));
/// assert!(!OfInterestFilter.matches(&lo));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct OfInterestFilter;

impl InterfaceFilter for OfInterestFilter {
    fn matches(&self, interface: &Interface) -> bool {
        is_of_interest(interface)
    }
}

/// Returns true if `interface` passes the default-mode heuristic.
///
/// See [`OfInterestFilter`] for the exclusion rules.
#[must_use]
pub fn is_of_interest(interface: &Interface) -> bool {
    !interface.hardware_addr.is_empty()
        && !interface.is_loopback()
        && !interface.is_point_to_point()
        && interface.is_up()
}

/// A fetcher decorator that applies a filter to the interface list.
///
/// Address queries pass through to the inner fetcher unchanged.
///
/// # Examples
///
/// ```ignore
/// use nif::network::filter::{FilteredFetcher, OfInterestFilter};
/// use nif::network::platform::PlatformFetcher;
///
/// let fetcher = FilteredFetcher::new(PlatformFetcher::new(), OfInterestFilter);
/// let interfaces = fetcher.interfaces()?; // Only interfaces of interest
/// ```
#[derive(Debug)]
pub struct FilteredFetcher<F, A> {
    inner: F,
    filter: A,
}

impl<F, A> FilteredFetcher<F, A> {
    /// Creates a new filtered fetcher.
    #[must_use]
    pub const fn new(inner: F, filter: A) -> Self {
        Self { inner, filter }
    }
}

impl<F: InterfaceFetcher, A: InterfaceFilter> InterfaceFetcher for FilteredFetcher<F, A> {
    fn interfaces(&self) -> Result<Vec<Interface>, FetchError> {
        let interfaces = self.inner.interfaces()?;
        Ok(interfaces
            .into_iter()
            .filter(|interface| {
                let keep = self.filter.matches(interface);
                if !keep {
                    tracing::debug!(interface = %interface.name, "Skipping interface");
                }
                keep
            })
            .collect())
    }

    fn addresses(&self, interface: &Interface) -> Result<Vec<Address>, FetchError> {
        self.inner.addresses(interface)
    }
}

/// Enumerates the interfaces to report on.
///
/// With `include_all` the OS table is returned unfiltered. Otherwise only
/// interfaces passing [`is_of_interest`] are kept, and with `select_single`
/// only the first of them, in OS enumeration order.
///
/// # Errors
///
/// Returns [`NifError::Enumeration`] if the OS interface table cannot be read.
pub fn candidates<F: InterfaceFetcher>(
    fetcher: &F,
    include_all: bool,
    select_single: bool,
) -> Result<Vec<Interface>, NifError> {
    if include_all {
        return fetcher.interfaces().map_err(NifError::Enumeration);
    }

    let mut interfaces = FilteredFetcher::new(fetcher, OfInterestFilter)
        .interfaces()
        .map_err(NifError::Enumeration)?;

    if select_single {
        interfaces.truncate(1);
    }

    tracing::debug!(count = interfaces.len(), "Selected candidate interfaces");
    Ok(interfaces)
}
