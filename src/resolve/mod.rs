//! Address resolution layer.
//!
//! This module provides:
//! - Fixed-delay retry configuration ([`RetryPolicy`])
//! - The retrying per-interface resolver ([`AddressResolver`])
//! - Per-family results ([`ResolvedAddresses`])

mod resolver;
mod retry;


pub use resolver::{AddressResolver, ResolvedAddresses};
pub use retry::RetryPolicy;
