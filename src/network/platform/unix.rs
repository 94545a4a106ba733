//! Unix interface fetching using `getifaddrs`.

use nix::ifaddrs::{InterfaceAddress, getifaddrs};
use nix::net::if_::{InterfaceFlags as IfFlags, if_nametoindex};
use nix::sys::socket::SockaddrStorage;

use crate::network::{
    Address, FetchError, HardwareAddr, Interface, InterfaceFetcher, InterfaceFlags,
};

/// Unix implementation of [`InterfaceFetcher`] using `getifaddrs`.
///
/// `getifaddrs` returns one entry per (interface, address) pair. Entries are
/// grouped by device name in first-seen order, which on Linux is the
/// kernel's index order. Linux reports labelled addresses under their label
/// (`eth0:1`); those entries belong to the device before the `:`.
///
/// # Example
///
/// ```no_run
/// use nif::network::{InterfaceFetcher, platform::UnixFetcher};
///
/// let fetcher = UnixFetcher::new();
/// for interface in fetcher.interfaces().expect("Failed to list interfaces") {
///     println!("{} {}", interface.index, interface.name);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct UnixFetcher {
    _private: (),
}

impl UnixFetcher {
    /// Creates a new Unix interface fetcher.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl InterfaceFetcher for UnixFetcher {
    fn interfaces(&self) -> Result<Vec<Interface>, FetchError> {
        let entries: Vec<InterfaceAddress> = getifaddrs()?.collect();
        Ok(group_interfaces(&entries, lookup_index))
    }

    fn addresses(&self, interface: &Interface) -> Result<Vec<Address>, FetchError> {
        let entries: Vec<InterfaceAddress> = getifaddrs()?.collect();
        addresses_of(&entries, &interface.name)
            .ok_or_else(|| FetchError::InterfaceNotFound {
                name: interface.name.clone(),
            })
    }
}

fn lookup_index(name: &str) -> Option<u32> {
    match if_nametoindex(name) {
        Ok(index) => Some(index),
        Err(e) => {
            tracing::debug!(interface = name, "Skipping interface without index: {e}");
            None
        }
    }
}

/// Returns the device part of a `getifaddrs` name, dropping any `:label`.
fn device_name(name: &str) -> &str {
    name.split_once(':').map_or(name, |(device, _)| device)
}

/// Folds `getifaddrs` entries into one [`Interface`] per device.
///
/// Devices whose index cannot be looked up (gone since `getifaddrs`) are
/// skipped.
fn group_interfaces<I>(entries: &[InterfaceAddress], index_of: I) -> Vec<Interface>
where
    I: Fn(&str) -> Option<u32>,
{
    let mut interfaces: Vec<Interface> = Vec::new();
    let mut vanished: Vec<&str> = Vec::new();

    for entry in entries {
        let device = device_name(&entry.interface_name);
        if vanished.contains(&device) {
            continue;
        }

        let slot = match interfaces.iter().position(|known| known.name == device) {
            Some(slot) => slot,
            None => {
                let Some(index) = index_of(device) else {
                    vanished.push(device);
                    continue;
                };
                interfaces.push(Interface::new(
                    index,
                    device,
                    HardwareAddr::empty(),
                    map_flags(entry.flags),
                ));
                interfaces.len() - 1
            }
        };

        if let Some(hardware_addr) = link_address(entry) {
            interfaces[slot].hardware_addr = hardware_addr;
        }
    }

    interfaces
}

/// Collects the addresses of device `name`, including labelled ones.
///
/// Returns `None` if no entry belongs to the device.
fn addresses_of(entries: &[InterfaceAddress], name: &str) -> Option<Vec<Address>> {
    let mut found = false;
    let addresses: Vec<Address> = entries
        .iter()
        .filter(|entry| device_name(&entry.interface_name) == name)
        .inspect(|_| found = true)
        .filter_map(address_of)
        .collect();

    found.then_some(addresses)
}

/// Native flags and their [`InterfaceFlags`] counterparts.
const FLAG_MAP: [(IfFlags, InterfaceFlags); 6] = [
    (IfFlags::IFF_UP, InterfaceFlags::UP),
    (IfFlags::IFF_BROADCAST, InterfaceFlags::BROADCAST),
    (IfFlags::IFF_LOOPBACK, InterfaceFlags::LOOPBACK),
    (IfFlags::IFF_POINTOPOINT, InterfaceFlags::POINT_TO_POINT),
    (IfFlags::IFF_MULTICAST, InterfaceFlags::MULTICAST),
    (IfFlags::IFF_RUNNING, InterfaceFlags::RUNNING),
];

/// Maps `IFF_*` flags to [`InterfaceFlags`].
fn map_flags(flags: IfFlags) -> InterfaceFlags {
    FLAG_MAP
        .iter()
        .filter(|(native, _)| flags.contains(*native))
        .fold(InterfaceFlags::empty(), |acc, (_, mapped)| acc | *mapped)
}

/// Extracts the hardware address from a link-layer entry.
///
/// An all-zero address (loopback, tunnels) counts as no address.
fn link_address(entry: &InterfaceAddress) -> Option<HardwareAddr> {
    let mac = entry.address.as_ref()?.as_link_addr()?.addr()?;
    non_zero_mac(mac)
}

fn non_zero_mac(mac: [u8; 6]) -> Option<HardwareAddr> {
    mac.iter()
        .any(|&octet| octet != 0)
        .then(|| HardwareAddr::new(mac))
}

/// Formats an `AF_INET`/`AF_INET6` entry as a CIDR literal.
fn address_of(entry: &InterfaceAddress) -> Option<Address> {
    let addr = entry.address.as_ref()?;
    let netmask = entry.netmask.as_ref();

    if let Some(sin) = addr.as_sockaddr_in() {
        let prefix = netmask
            .and_then(SockaddrStorage::as_sockaddr_in)
            .map_or(32, |mask| u32::from(mask.ip()).count_ones());
        return Some(Address::new(format!("{}/{prefix}", sin.ip())));
    }

    let sin6 = addr.as_sockaddr_in6()?;
    let prefix = netmask
        .and_then(SockaddrStorage::as_sockaddr_in6)
        .map_or(128, |mask| u128::from(mask.ip()).count_ones());
    Some(Address::new(format!("{}/{prefix}", sin6.ip())))
}
