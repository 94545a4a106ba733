//! Line rendering for interface reports.
//!
//! One line per interface, columns separated by single spaces:
//!
//! ```text
//! [identity] [ipv4|ipv4...] [ipv6|ipv6...]
//! ```
//!
//! The identity column is the interface name, or `index name hwaddr flags`
//! in debug mode. Absent columns leave no separator behind, and a line with
//! no columns at all is not emitted.

use std::io::{self, Write};

use crate::config::QueryOptions;
use crate::network::{Address, Interface};
use crate::resolve::ResolvedAddresses;

/// Renders the report line for one interface, or `None` if it would be empty.
///
/// # Example
///
/// ```
/// use nif::config::QueryOptions;
/// use nif::network::{Address, HardwareAddr, Interface, InterfaceFlags};
/// use nif::output::render_line;
/// use nif::resolve::ResolvedAddresses;
///
/// let eth0 = Interface::new(2, "eth0", HardwareAddr::new([2, 0, 0, 0, 0, 1]), InterfaceFlags::UP);
/// let addresses = ResolvedAddresses::new(vec![Address::new("192.168.1.10/24")], vec![]);
/// let options = QueryOptions { want_ipv4: true, ..QueryOptions::default() };
///
/// assert_eq!(render_line(&eth0, &addresses, &options).as_deref(), Some("eth0 192.168.1.10"));
/// ```
#[must_use]
pub fn render_line(
    interface: &Interface,
    addresses: &ResolvedAddresses,
    options: &QueryOptions,
) -> Option<String> {
    let mut columns: Vec<String> = Vec::with_capacity(3);

    if !options.only_addresses {
        columns.push(identity(interface, options.debug));
    }
    if options.want_ipv4 {
        columns.extend(address_column(&addresses.ipv4, options.select_single));
    }
    if options.want_ipv6 {
        columns.extend(address_column(&addresses.ipv6, options.select_single));
    }

    columns.retain(|column| !column.is_empty());
    if columns.is_empty() {
        return None;
    }
    Some(columns.join(" "))
}

/// Renders lines for a sequence of interfaces, skipping empty lines.
#[must_use]
pub fn render<'a, I>(entries: I, options: &QueryOptions) -> Vec<String>
where
    I: IntoIterator<Item = (&'a Interface, &'a ResolvedAddresses)>,
{
    entries
        .into_iter()
        .filter_map(|(interface, addresses)| render_line(interface, addresses, options))
        .collect()
}

/// Writes each line followed by a single newline.
///
/// # Errors
///
/// Returns any I/O error from `out`.
pub fn write_lines<W: Write>(lines: &[String], out: &mut W) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}

fn identity(interface: &Interface, debug: bool) -> String {
    if debug {
        format!(
            "{} {} {} {}",
            interface.index, interface.name, interface.hardware_addr, interface.flags
        )
    } else {
        interface.name.clone()
    }
}

/// Joins host parts with `|`; with `first_only` just the first address.
fn address_column(addresses: &[Address], first_only: bool) -> Option<String> {
    let take = if first_only { 1 } else { addresses.len() };
    let hosts: Vec<&str> = addresses.iter().take(take).map(Address::host).collect();
    (!hosts.is_empty()).then(|| hosts.join("|"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{HardwareAddr, InterfaceFlags};

    fn eth0() -> Interface {
        Interface::new(
            2,
            "eth0",
            HardwareAddr::new([0x02, 0x42, 0xac, 0x11, 0x00, 0x02]),
            InterfaceFlags::UP | InterfaceFlags::BROADCAST | InterfaceFlags::MULTICAST,
        )
    }

    fn addrs(literals: &[&str]) -> Vec<Address> {
        literals.iter().copied().map(Address::from).collect()
    }

    fn v4_only() -> QueryOptions {
        QueryOptions {
            want_ipv4: true,
            ..QueryOptions::default()
        }
    }

    fn both() -> QueryOptions {
        QueryOptions {
            want_ipv4: true,
            want_ipv6: true,
            ..QueryOptions::default()
        }
    }

    mod identity_column {
        use super::*;

        #[test]
        fn name_only_by_default() {
            let line = render_line(
                &eth0(),
                &ResolvedAddresses::default(),
                &QueryOptions::default(),
            );
            assert_eq!(line.as_deref(), Some("eth0"));
        }

        #[test]
        fn debug_shows_index_hwaddr_and_flags() {
            let options = QueryOptions {
                debug: true,
                ..QueryOptions::default()
            };
            let line = render_line(&eth0(), &ResolvedAddresses::default(), &options);
            assert_eq!(
                line.as_deref(),
                Some("2 eth0 02:42:ac:11:00:02 up|broadcast|multicast")
            );
        }

        #[test]
        fn debug_keeps_empty_hwaddr_slot() {
            let lo = Interface::new(
                1,
                "lo",
                HardwareAddr::empty(),
                InterfaceFlags::UP | InterfaceFlags::LOOPBACK,
            );
            let options = QueryOptions {
                debug: true,
                include_all: true,
                ..QueryOptions::default()
            };
            let line = render_line(&lo, &ResolvedAddresses::default(), &options);
            assert_eq!(line.as_deref(), Some("1 lo  up|loopback"));
        }

        #[test]
        fn name_with_ipv4_column() {
            let addresses = ResolvedAddresses::new(addrs(&["192.168.1.10/24"]), vec![]);
            let line = render_line(&eth0(), &addresses, &v4_only());
            assert_eq!(line.as_deref(), Some("eth0 192.168.1.10"));
        }
    }

    mod address_columns {
        use super::*;

        #[test]
        fn only_addresses_omits_identity() {
            let options = QueryOptions {
                only_addresses: true,
                ..v4_only()
            };
            let addresses = ResolvedAddresses::new(addrs(&["10.0.0.5"]), vec![]);
            let line = render_line(&eth0(), &addresses, &options);
            assert_eq!(line.as_deref(), Some("10.0.0.5"));
        }

        #[test]
        fn multiple_addresses_join_with_pipe() {
            let addresses =
                ResolvedAddresses::new(addrs(&["10.0.0.5/8", "192.168.1.10/24"]), vec![]);
            let line = render_line(&eth0(), &addresses, &v4_only());
            assert_eq!(line.as_deref(), Some("eth0 10.0.0.5|192.168.1.10"));
        }

        #[test]
        fn both_families_separated_by_one_space() {
            let addresses = ResolvedAddresses::new(
                addrs(&["10.0.0.5/8"]),
                addrs(&["fe80::1/64", "2001:db8::5/64"]),
            );
            let line = render_line(&eth0(), &addresses, &both());
            assert_eq!(line.as_deref(), Some("eth0 10.0.0.5 fe80::1|2001:db8::5"));
        }

        #[test]
        fn missing_v4_leaves_no_stray_separator() {
            let options = QueryOptions {
                only_addresses: true,
                ..both()
            };
            let addresses = ResolvedAddresses::new(vec![], addrs(&["fe80::1/64"]));
            let line = render_line(&eth0(), &addresses, &options);
            assert_eq!(line.as_deref(), Some("fe80::1"));
        }

        #[test]
        fn missing_v6_leaves_no_trailing_space() {
            let addresses = ResolvedAddresses::new(addrs(&["10.0.0.5/8"]), vec![]);
            let line = render_line(&eth0(), &addresses, &both());
            assert_eq!(line.as_deref(), Some("eth0 10.0.0.5"));
        }

        #[test]
        fn unwanted_family_is_never_printed() {
            let addresses = ResolvedAddresses::new(addrs(&["10.0.0.5/8"]), addrs(&["fe80::1/64"]));
            let line = render_line(&eth0(), &addresses, &v4_only());
            assert_eq!(line.as_deref(), Some("eth0 10.0.0.5"));
        }

        #[test]
        fn select_single_keeps_first_per_family() {
            let options = QueryOptions {
                select_single: true,
                ..both()
            };
            let addresses = ResolvedAddresses::new(
                addrs(&["10.0.0.5/8", "10.0.0.6/8"]),
                addrs(&["fe80::1/64", "fe80::2/64"]),
            );
            let line = render_line(&eth0(), &addresses, &options);
            assert_eq!(line.as_deref(), Some("eth0 10.0.0.5 fe80::1"));
        }
    }

    mod suppression {
        use super::*;

        #[test]
        fn empty_only_addresses_line_is_suppressed() {
            let options = QueryOptions {
                include_all: true,
                only_addresses: true,
                ..v4_only()
            };
            assert_eq!(
                render_line(&eth0(), &ResolvedAddresses::default(), &options),
                None
            );
        }

        #[test]
        fn render_skips_suppressed_lines() {
            let options = QueryOptions {
                include_all: true,
                only_addresses: true,
                ..v4_only()
            };
            let lo = Interface::new(1, "lo", HardwareAddr::empty(), InterfaceFlags::LOOPBACK);
            let configured = ResolvedAddresses::new(addrs(&["10.0.0.5/8"]), vec![]);
            let empty = ResolvedAddresses::default();

            let lines = render([(&lo, &empty), (&eth0(), &configured)], &options);

            assert_eq!(lines, vec!["10.0.0.5".to_string()]);
        }
    }

    mod writing {
        use super::*;

        #[test]
        fn each_line_ends_with_single_newline() {
            let mut out = Vec::new();
            let lines = ["eth0".to_string(), "wlan0 10.0.0.2".to_string()];
            write_lines(&lines, &mut out).unwrap();
            assert_eq!(String::from_utf8(out).unwrap(), "eth0\nwlan0 10.0.0.2\n");
        }

        #[test]
        fn no_lines_writes_nothing() {
            let mut out = Vec::new();
            write_lines(&[], &mut out).unwrap();
            assert!(out.is_empty());
        }
    }
}
