//! Windows-specific interface fetching using `GetAdaptersAddresses`.

use crate::network::{
    Address, FetchError, HardwareAddr, Interface, InterfaceFetcher, InterfaceFlags,
};
use std::net::{Ipv4Addr, Ipv6Addr};
use windows::Win32::Foundation::WIN32_ERROR;
use windows::Win32::NetworkManagement::IpHelper::{
    GAA_FLAG_SKIP_ANYCAST, GAA_FLAG_SKIP_DNS_SERVER, GAA_FLAG_SKIP_MULTICAST, GetAdaptersAddresses,
    IF_TYPE_ETHERNET_CSMACD, IF_TYPE_IEEE80211, IF_TYPE_SOFTWARE_LOOPBACK, IP_ADAPTER_ADDRESSES_LH,
};
use windows::Win32::NetworkManagement::Ndis::IfOperStatusUp;
use windows::Win32::Networking::WinSock::{AF_INET, AF_INET6, AF_UNSPEC, SOCKADDR_IN, SOCKADDR_IN6};

/// Interface type for token ring adapters.
/// Value from Windows SDK `ipifcons.h` - not exported by the `windows` crate.
const IF_TYPE_ISO88025_TOKENRING: u32 = 9;

/// Interface type for PPP (Point-to-Point Protocol) adapters.
/// Value from Windows SDK `ipifcons.h` - not exported by the `windows` crate.
const IF_TYPE_PPP: u32 = 23;

/// Interface type for ATM adapters.
const IF_TYPE_ATM: u32 = 37;

/// Interface type for tunnel adapters (VPN, etc.).
const IF_TYPE_TUNNEL: u32 = 131;

/// Interface type for IEEE 1394 (FireWire) adapters.
const IF_TYPE_IEEE1394: u32 = 144;

/// Adapter flag set when the adapter does not receive multicast traffic.
/// Value from Windows SDK `iptypes.h`.
const IP_ADAPTER_NO_MULTICAST: u32 = 0x0010;

/// Buffer size hint for `GetAdaptersAddresses`.
/// The API will tell us the actual required size if this is insufficient.
const INITIAL_BUFFER_SIZE: u32 = 16384;

/// Windows implementation of [`InterfaceFetcher`] using `GetAdaptersAddresses`.
///
/// Interfaces are named by their friendly name ("Ethernet", "Wi-Fi").
///
/// # Example
///
/// ```no_run
/// use nif::network::{InterfaceFetcher, platform::WindowsFetcher};
///
/// let fetcher = WindowsFetcher::new();
/// for interface in fetcher.interfaces().expect("Failed to list interfaces") {
///     println!("{} {}", interface.index, interface.name);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct WindowsFetcher {
    _private: (),
}

impl WindowsFetcher {
    /// Creates a new Windows interface fetcher.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl InterfaceFetcher for WindowsFetcher {
    fn interfaces(&self) -> Result<Vec<Interface>, FetchError> {
        let buffer = get_adapter_addresses()?;
        Ok(adapters(&buffer).filter_map(parse_interface).collect())
    }

    fn addresses(&self, interface: &Interface) -> Result<Vec<Address>, FetchError> {
        let buffer = get_adapter_addresses()?;
        adapters(&buffer)
            .find(|adapter| if_index(adapter) == interface.index)
            .map(collect_addresses)
            .ok_or_else(|| FetchError::InterfaceNotFound {
                name: interface.name.clone(),
            })
    }
}

/// Iterates the adapter linked list stored in `buffer`.
fn adapters(buffer: &[u8]) -> impl Iterator<Item = &IP_ADAPTER_ADDRESSES_LH> {
    // SAFETY: GetAdaptersAddresses returns a properly aligned buffer for IP_ADAPTER_ADDRESSES_LH.
    #[allow(clippy::cast_ptr_alignment)]
    let first = buffer.as_ptr().cast::<IP_ADAPTER_ADDRESSES_LH>();

    // SAFETY: The linked list is valid as long as `buffer` is alive, which the
    // returned iterator's lifetime guarantees.
    std::iter::successors(unsafe { first.as_ref() }, |adapter| unsafe {
        adapter.Next.as_ref()
    })
}

/// Calls `GetAdaptersAddresses` and returns the raw buffer containing adapter data.
///
/// This function handles the two-call pattern:
/// 1. First call with estimated buffer size
/// 2. Retry with exact size if buffer was too small
fn get_adapter_addresses() -> Result<Vec<u8>, FetchError> {
    // Flags to skip data we don't need (anycast, multicast, DNS servers)
    let flags = GAA_FLAG_SKIP_ANYCAST | GAA_FLAG_SKIP_MULTICAST | GAA_FLAG_SKIP_DNS_SERVER;
    let family = u32::from(AF_UNSPEC.0);

    let mut buffer: Vec<u8> = vec![0u8; INITIAL_BUFFER_SIZE as usize];
    let mut size = INITIAL_BUFFER_SIZE;

    // SAFETY: We provide a valid buffer and size. The function writes adapter
    // information to the buffer and updates `size` with the required length.
    let result = unsafe {
        GetAdaptersAddresses(
            family,
            flags,
            None,
            Some(buffer.as_mut_ptr().cast()),
            &raw mut size,
        )
    };

    handle_api_result(result, &mut buffer, &mut size, flags, family)?;

    Ok(buffer)
}

/// Handles the result of `GetAdaptersAddresses`, retrying once with a larger buffer.
#[cfg(not(tarpaulin_include))]
fn handle_api_result(
    result: u32,
    buffer: &mut Vec<u8>,
    size: &mut u32,
    flags: windows::Win32::NetworkManagement::IpHelper::GET_ADAPTERS_ADDRESSES_FLAGS,
    family: u32,
) -> Result<(), FetchError> {
    use windows::Win32::Foundation::{ERROR_BUFFER_OVERFLOW, NO_ERROR};

    if result == ERROR_BUFFER_OVERFLOW.0 {
        buffer.resize(*size as usize, 0);

        // SAFETY: Same as above, but with correctly sized buffer
        let result = unsafe {
            GetAdaptersAddresses(
                family,
                flags,
                None,
                Some(buffer.as_mut_ptr().cast()),
                &raw mut *size,
            )
        };

        if result != NO_ERROR.0 {
            return Err(windows::core::Error::from(WIN32_ERROR(result)).into());
        }
    } else if result != NO_ERROR.0 {
        return Err(windows::core::Error::from(WIN32_ERROR(result)).into());
    }

    Ok(())
}

/// Returns the interface index of an adapter.
///
/// `IfIndex` is 0 when IPv4 is disabled on the adapter; the IPv6 index is
/// used instead.
fn if_index(adapter: &IP_ADAPTER_ADDRESSES_LH) -> u32 {
    // SAFETY: Both union variants start with the same length/index layout.
    let ipv4_index = unsafe { adapter.Anonymous1.Anonymous.IfIndex };
    effective_index(ipv4_index, adapter.Ipv6IfIndex)
}

const fn effective_index(ipv4_index: u32, ipv6_index: u32) -> u32 {
    if ipv4_index == 0 { ipv6_index } else { ipv4_index }
}

/// Parses a single `IP_ADAPTER_ADDRESSES_LH` structure into an [`Interface`].
///
/// Returns `None` if the adapter name cannot be read.
fn parse_interface(adapter: &IP_ADAPTER_ADDRESSES_LH) -> Option<Interface> {
    // SAFETY: FriendlyName is a valid NUL-terminated wide string while the buffer is alive.
    let name = unsafe { adapter.FriendlyName.to_string().ok()? };

    let len = (adapter.PhysicalAddressLength as usize).min(adapter.PhysicalAddress.len());
    let hardware_addr = HardwareAddr::new(&adapter.PhysicalAddress[..len]);

    // SAFETY: Flags is the only field of the union variant we read.
    let adapter_flags = unsafe { adapter.Anonymous2.Flags };
    let flags = map_flags(
        adapter.IfType,
        adapter.OperStatus == IfOperStatusUp,
        adapter_flags,
    );

    Some(Interface::new(if_index(adapter), name, hardware_addr, flags))
}

/// Derives [`InterfaceFlags`] from the adapter type and status.
fn map_flags(if_type: u32, oper_up: bool, adapter_flags: u32) -> InterfaceFlags {
    let mut flags = if oper_up {
        InterfaceFlags::UP | InterfaceFlags::RUNNING
    } else {
        InterfaceFlags::empty()
    };

    flags |= match if_type {
        IF_TYPE_ETHERNET_CSMACD
        | IF_TYPE_ISO88025_TOKENRING
        | IF_TYPE_IEEE80211
        | IF_TYPE_IEEE1394 => InterfaceFlags::BROADCAST | InterfaceFlags::MULTICAST,
        IF_TYPE_PPP | IF_TYPE_TUNNEL => InterfaceFlags::POINT_TO_POINT | InterfaceFlags::MULTICAST,
        IF_TYPE_SOFTWARE_LOOPBACK => InterfaceFlags::LOOPBACK | InterfaceFlags::MULTICAST,
        IF_TYPE_ATM => {
            InterfaceFlags::BROADCAST | InterfaceFlags::POINT_TO_POINT | InterfaceFlags::MULTICAST
        }
        _ => InterfaceFlags::empty(),
    };

    if adapter_flags & IP_ADAPTER_NO_MULTICAST != 0 {
        flags.remove(InterfaceFlags::MULTICAST);
    }

    flags
}

/// Collects unicast addresses of an adapter as CIDR literals.
///
/// # Safety Note
///
/// The pointer casts to `SOCKADDR_IN` and `SOCKADDR_IN6` are allowed despite alignment
/// concerns because Windows guarantees proper alignment of these structures when returned
/// from the networking APIs.
#[allow(clippy::cast_ptr_alignment)]
fn collect_addresses(adapter: &IP_ADAPTER_ADDRESSES_LH) -> Vec<Address> {
    let mut addresses = Vec::new();
    let mut unicast = adapter.FirstUnicastAddress;

    // SAFETY: We iterate through a linked list of unicast addresses.
    // Each address is valid as long as the parent adapter buffer is alive.
    while !unicast.is_null() {
        let addr_entry = unsafe { &*unicast };
        let prefix = addr_entry.OnLinkPrefixLength;

        // SAFETY: The Address field contains a valid SOCKET_ADDRESS structure
        // pointing to either SOCKADDR_IN (IPv4) or SOCKADDR_IN6 (IPv6).
        if let Some(sockaddr) = unsafe { addr_entry.Address.lpSockaddr.as_ref() } {
            match sockaddr.sa_family {
                f if f == AF_INET => {
                    // SAFETY: We verified the family is AF_INET, so this is a valid cast.
                    let sockaddr_in =
                        unsafe { &*(std::ptr::from_ref(sockaddr).cast::<SOCKADDR_IN>()) };
                    // SAFETY: sin_addr contains the IPv4 address bytes in network order.
                    let octets = unsafe { sockaddr_in.sin_addr.S_un.S_un_b };
                    let ip = Ipv4Addr::new(octets.s_b1, octets.s_b2, octets.s_b3, octets.s_b4);
                    addresses.push(Address::new(format!("{ip}/{prefix}")));
                }
                f if f == AF_INET6 => {
                    // SAFETY: We verified the family is AF_INET6, so this is a valid cast.
                    let sockaddr_in6 =
                        unsafe { &*(std::ptr::from_ref(sockaddr).cast::<SOCKADDR_IN6>()) };
                    // SAFETY: We verified this is an IPv6 address, so the union field is valid.
                    let ip = Ipv6Addr::from(unsafe { sockaddr_in6.sin6_addr.u.Byte });
                    addresses.push(Address::new(format!("{ip}/{prefix}")));
                }
                // Windows only returns AF_INET or AF_INET6 for unicast addresses
                _ => {}
            }
        }

        unicast = addr_entry.Next;
    }

    addresses
}
