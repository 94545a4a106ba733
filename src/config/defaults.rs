//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use std::time::Duration;

/// Default number of address query retries.
pub const RETRY_COUNT: u32 = 0;

/// Delay between address query attempts in seconds.
pub const RETRY_DELAY_SECS: u64 = 1;

/// Delay between address query attempts as Duration.
#[must_use]
pub const fn retry_delay() -> Duration {
    Duration::from_secs(RETRY_DELAY_SECS)
}
