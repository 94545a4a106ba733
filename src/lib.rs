//! nif: Network Interface Finder
//!
//! A library for listing network interfaces of interest and the addresses
//! assigned to them, with retrying resolution for interfaces that are
//! still being configured.

pub mod config;
pub mod error;
pub mod network;
pub mod output;
pub mod report;
pub mod resolve;
pub mod time;

pub use error::NifError;
