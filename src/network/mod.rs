//! Network layer for reading and representing interface information.
//!
//! This module provides types and traits for:
//! - Representing interface snapshots ([`Interface`], [`InterfaceFlags`], [`HardwareAddr`])
//! - Address literals and family classification ([`Address`], [`classify`])
//! - Reading the OS tables ([`InterfaceFetcher`])
//! - Default-mode filtering ([`filter`])
//! - Platform-specific implementations ([`platform`])

mod address;
mod fetcher;
pub mod filter;
mod interface;
pub mod platform;


pub use address::{Address, IpFamily, classify, partition};
pub use fetcher::{FetchError, InterfaceFetcher};
pub use interface::{HardwareAddr, Interface, InterfaceFlags, IpVersion};
