//! Retry policy for address resolution.

use std::time::Duration;

use crate::config::defaults;

/// Fixed-delay retry behavior.
///
/// Controls how many extra address queries are made after the first one and
/// how long to wait between them. The delay does not grow between attempts.
///
/// # Defaults
///
/// - `retries`: 0 (a single attempt)
/// - `delay`: 1 second
///
/// # Example
///
/// ```
/// use nif::resolve::RetryPolicy;
/// use std::time::Duration;
///
/// let policy = RetryPolicy::new().with_retries(3);
/// assert_eq!(policy.max_attempts(), 4);
/// assert_eq!(policy.delay, Duration::from_secs(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Number of attempts after the first one.
    pub retries: u32,

    /// Delay between attempts.
    pub delay: Duration,
}

impl RetryPolicy {
    /// Default number of retries.
    pub const DEFAULT_RETRIES: u32 = defaults::RETRY_COUNT;

    /// Default delay between attempts (1 second).
    pub const DEFAULT_DELAY: Duration = defaults::retry_delay();

    /// Creates a new retry policy with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            retries: Self::DEFAULT_RETRIES,
            delay: Self::DEFAULT_DELAY,
        }
    }

    /// Sets the number of retries.
    #[must_use]
    pub const fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// Sets the delay between attempts.
    ///
    /// Zero delay is supported (useful for testing) but creates a tight loop.
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Total number of attempts, including the first.
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.retries.saturating_add(1)
    }

    /// Returns true if another attempt may follow attempt number `attempt`.
    ///
    /// # Arguments
    ///
    /// * `attempt` - The attempt just made (1 = first attempt, 2 = first retry, etc.)
    #[must_use]
    pub const fn should_retry(&self, attempt: u32) -> bool {
        attempt < self.max_attempts()
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new()
    }
}
