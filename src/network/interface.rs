//! Core network types for interface representation.

use std::fmt;

use bitflags::bitflags;

/// IP families requested by the caller.
///
/// "Neither family" is expressed as `Option::<IpVersion>::None` by callers
/// that allow it, so this type always names at least one family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpVersion {
    /// IPv4 addresses only.
    V4,
    /// IPv6 addresses only.
    V6,
    /// Both IPv4 and IPv6 addresses.
    Both,
}

impl IpVersion {
    /// Maps a pair of "wanted" switches onto a version.
    ///
    /// Returns `None` when neither family is wanted.
    #[must_use]
    pub const fn from_wanted(v4: bool, v6: bool) -> Option<Self> {
        match (v4, v6) {
            (true, true) => Some(Self::Both),
            (true, false) => Some(Self::V4),
            (false, true) => Some(Self::V6),
            (false, false) => None,
        }
    }

    /// Returns true if this version includes IPv4.
    #[must_use]
    pub const fn includes_v4(self) -> bool {
        matches!(self, Self::V4 | Self::Both)
    }

    /// Returns true if this version includes IPv6.
    #[must_use]
    pub const fn includes_v6(self) -> bool {
        matches!(self, Self::V6 | Self::Both)
    }
}

impl fmt::Display for IpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V4 => write!(f, "IPv4"),
            Self::V6 => write!(f, "IPv6"),
            Self::Both => write!(f, "Both"),
        }
    }
}

bitflags! {
    /// Status and type flags of a network interface.
    ///
    /// Platform fetchers translate their native flag words into this set.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct InterfaceFlags: u32 {
        /// Interface is administratively up.
        const UP = 1 << 0;
        /// Interface supports broadcast access.
        const BROADCAST = 1 << 1;
        /// Interface is a loopback interface.
        const LOOPBACK = 1 << 2;
        /// Interface belongs to a point-to-point link.
        const POINT_TO_POINT = 1 << 3;
        /// Interface supports multicast access.
        const MULTICAST = 1 << 4;
        /// Interface is in the running state.
        const RUNNING = 1 << 5;
    }
}

/// Display order and names of the individual flags.
const FLAG_NAMES: [(InterfaceFlags, &str); 6] = [
    (InterfaceFlags::UP, "up"),
    (InterfaceFlags::BROADCAST, "broadcast"),
    (InterfaceFlags::LOOPBACK, "loopback"),
    (InterfaceFlags::POINT_TO_POINT, "pointtopoint"),
    (InterfaceFlags::MULTICAST, "multicast"),
    (InterfaceFlags::RUNNING, "running"),
];

impl fmt::Display for InterfaceFlags {
    /// Formats the set as `up|broadcast|multicast`, or `0` when empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names = FLAG_NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .peekable();

        if names.peek().is_none() {
            return f.write_str("0");
        }

        for (i, name) in names.enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            f.write_str(name)?;
        }
        Ok(())
    }
}

/// A link-layer (hardware) address. May be empty for virtual interfaces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct HardwareAddr(Vec<u8>);

impl HardwareAddr {
    /// Creates a hardware address from raw octets.
    #[must_use]
    pub fn new(octets: impl Into<Vec<u8>>) -> Self {
        Self(octets.into())
    }

    /// Creates an empty hardware address.
    #[must_use]
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// Returns true if the address has no octets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the raw octets.
    #[must_use]
    pub fn octets(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for HardwareAddr {
    /// Formats as lowercase colon-separated hex (`00:1a:2b:3c:4d:5e`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, octet) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(":")?;
            }
            write!(f, "{octet:02x}")?;
        }
        Ok(())
    }
}

/// A snapshot of a single network interface.
///
/// Addresses are not stored here; they are queried on demand through
/// [`InterfaceFetcher::addresses`](super::InterfaceFetcher::addresses)
/// because they may change while the interface is being configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interface {
    /// OS interface index.
    pub index: u32,
    /// OS interface name (e.g. "eth0", "Wi-Fi").
    pub name: String,
    /// Hardware address, empty when the interface has none.
    pub hardware_addr: HardwareAddr,
    /// Status and type flags.
    pub flags: InterfaceFlags,
}

impl Interface {
    /// Creates a new interface snapshot.
    #[must_use]
    pub fn new(
        index: u32,
        name: impl Into<String>,
        hardware_addr: HardwareAddr,
        flags: InterfaceFlags,
    ) -> Self {
        Self {
            index,
            name: name.into(),
            hardware_addr,
            flags,
        }
    }

    /// Returns true if the interface is up.
    #[must_use]
    pub const fn is_up(&self) -> bool {
        self.flags.contains(InterfaceFlags::UP)
    }

    /// Returns true if this is a loopback interface.
    #[must_use]
    pub const fn is_loopback(&self) -> bool {
        self.flags.contains(InterfaceFlags::LOOPBACK)
    }

    /// Returns true if this interface belongs to a point-to-point link.
    #[must_use]
    pub const fn is_point_to_point(&self) -> bool {
        self.flags.contains(InterfaceFlags::POINT_TO_POINT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod ip_version {
        use super::*;

        #[test]
        fn from_wanted_maps_all_combinations() {
            assert_eq!(IpVersion::from_wanted(true, true), Some(IpVersion::Both));
            assert_eq!(IpVersion::from_wanted(true, false), Some(IpVersion::V4));
            assert_eq!(IpVersion::from_wanted(false, true), Some(IpVersion::V6));
            assert_eq!(IpVersion::from_wanted(false, false), None);
        }

        #[test]
        fn v4_includes_only_v4() {
            assert!(IpVersion::V4.includes_v4());
            assert!(!IpVersion::V4.includes_v6());
        }

        #[test]
        fn v6_includes_only_v6() {
            assert!(!IpVersion::V6.includes_v4());
            assert!(IpVersion::V6.includes_v6());
        }

        #[test]
        fn both_includes_both() {
            assert!(IpVersion::Both.includes_v4());
            assert!(IpVersion::Both.includes_v6());
        }

        #[test]
        fn display_formats_correctly() {
            assert_eq!(format!("{}", IpVersion::V4), "IPv4");
            assert_eq!(format!("{}", IpVersion::V6), "IPv6");
            assert_eq!(format!("{}", IpVersion::Both), "Both");
        }
    }

    mod interface_flags {
        use super::*;

        #[test]
        fn empty_displays_zero() {
            assert_eq!(InterfaceFlags::empty().to_string(), "0");
        }

        #[test]
        fn single_flag_displays_name() {
            assert_eq!(InterfaceFlags::UP.to_string(), "up");
            assert_eq!(InterfaceFlags::POINT_TO_POINT.to_string(), "pointtopoint");
        }

        #[test]
        fn multiple_flags_join_in_fixed_order() {
            let flags = InterfaceFlags::MULTICAST | InterfaceFlags::UP | InterfaceFlags::BROADCAST;
            assert_eq!(flags.to_string(), "up|broadcast|multicast");
        }

        #[test]
        fn all_flags_display() {
            assert_eq!(
                InterfaceFlags::all().to_string(),
                "up|broadcast|loopback|pointtopoint|multicast|running"
            );
        }
    }

    mod hardware_addr {
        use super::*;

        #[test]
        fn displays_lowercase_hex_pairs() {
            let addr = HardwareAddr::new([0x00, 0x1A, 0x2B, 0x3C, 0x4D, 0x5E]);
            assert_eq!(addr.to_string(), "00:1a:2b:3c:4d:5e");
        }

        #[test]
        fn empty_displays_empty_string() {
            assert_eq!(HardwareAddr::empty().to_string(), "");
            assert!(HardwareAddr::empty().is_empty());
        }

        #[test]
        fn octets_returns_raw_bytes() {
            let addr = HardwareAddr::new(vec![1, 2, 3]);
            assert_eq!(addr.octets(), &[1, 2, 3]);
            assert!(!addr.is_empty());
        }
    }

    mod interface {
        use super::*;

        #[test]
        fn new_creates_interface_with_correct_fields() {
            let iface = Interface::new(
                2,
                "eth0",
                HardwareAddr::new([1, 2, 3, 4, 5, 6]),
                InterfaceFlags::UP,
            );

            assert_eq!(iface.index, 2);
            assert_eq!(iface.name, "eth0");
            assert_eq!(iface.hardware_addr.octets().len(), 6);
            assert!(iface.is_up());
            assert!(!iface.is_loopback());
            assert!(!iface.is_point_to_point());
        }

        #[test]
        fn flag_accessors_reflect_flags() {
            let iface = Interface::new(
                1,
                "lo",
                HardwareAddr::empty(),
                InterfaceFlags::LOOPBACK | InterfaceFlags::POINT_TO_POINT,
            );

            assert!(!iface.is_up());
            assert!(iface.is_loopback());
            assert!(iface.is_point_to_point());
        }
    }
}
