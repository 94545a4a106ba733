//! Address resolution with retry.

use std::net::IpAddr;

use crate::error::NifError;
use crate::network::{Address, Interface, InterfaceFetcher, IpVersion, partition};
use crate::time::{Sleeper, TokioSleeper};

use super::RetryPolicy;

/// Per-family addresses of one interface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedAddresses {
    /// IPv4 addresses in OS order.
    pub ipv4: Vec<Address>,
    /// IPv6 addresses in OS order.
    pub ipv6: Vec<Address>,
}

impl ResolvedAddresses {
    /// Creates a result from both buckets.
    #[must_use]
    pub const fn new(ipv4: Vec<Address>, ipv6: Vec<Address>) -> Self {
        Self { ipv4, ipv6 }
    }

    /// Returns true if both buckets are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ipv4.is_empty() && self.ipv6.is_empty()
    }

    /// Returns true if the buckets satisfy `version`.
    ///
    /// `Both` needs both buckets populated; a single family needs its own.
    #[must_use]
    pub fn satisfies(&self, version: IpVersion) -> bool {
        match version {
            IpVersion::Both => !self.ipv4.is_empty() && !self.ipv6.is_empty(),
            IpVersion::V4 => !self.ipv4.is_empty(),
            IpVersion::V6 => !self.ipv6.is_empty(),
        }
    }

    /// Drops the bucket of any family not included in `version`.
    #[must_use]
    pub fn retain(mut self, version: IpVersion) -> Self {
        if !version.includes_v4() {
            self.ipv4.clear();
        }
        if !version.includes_v6() {
            self.ipv6.clear();
        }
        self
    }

    /// Parses both buckets into IP addresses.
    ///
    /// # Errors
    ///
    /// Returns [`NifError::AddressParse`] on the first malformed literal.
    pub fn to_ips(&self) -> Result<(Vec<IpAddr>, Vec<IpAddr>), NifError> {
        Ok((parse_all(&self.ipv4)?, parse_all(&self.ipv6)?))
    }
}

fn parse_all(addresses: &[Address]) -> Result<Vec<IpAddr>, NifError> {
    addresses
        .iter()
        .map(|addr| {
            addr.ip().map_err(|source| NifError::AddressParse {
                literal: addr.to_string(),
                source,
            })
        })
        .collect()
}

/// Queries interface addresses until the wanted families show up.
///
/// Addresses may appear some time after an interface comes up (DHCP, SLAAC),
/// so each attempt re-reads the OS table and waits a fixed delay before the
/// next one.
///
/// # Type Parameters
///
/// - `F`: The fetcher used for address queries
/// - `S`: The sleeper used between attempts (defaults to [`TokioSleeper`])
#[derive(Debug)]
pub struct AddressResolver<F, S = TokioSleeper> {
    fetcher: F,
    sleeper: S,
    policy: RetryPolicy,
}

impl<F> AddressResolver<F, TokioSleeper> {
    /// Creates a resolver with the default policy and [`TokioSleeper`].
    #[must_use]
    pub const fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            sleeper: TokioSleeper,
            policy: RetryPolicy::new(),
        }
    }
}

impl<F, S> AddressResolver<F, S> {
    /// Sets a custom sleeper for retry delays.
    ///
    /// This is primarily useful for testing to avoid actual delays.
    #[must_use]
    pub fn with_sleeper<S2>(self, sleeper: S2) -> AddressResolver<F, S2> {
        AddressResolver {
            fetcher: self.fetcher,
            sleeper,
            policy: self.policy,
        }
    }

    /// Sets the delay between attempts. The retry count is per call.
    #[must_use]
    pub const fn with_delay(mut self, delay: std::time::Duration) -> Self {
        self.policy = self.policy.with_delay(delay);
        self
    }
}

impl<F: InterfaceFetcher, S: Sleeper> AddressResolver<F, S> {
    /// Resolves the wanted address families of `interface`.
    ///
    /// Makes up to `retries + 1` queries, stopping as soon as the wanted
    /// families are populated. When neither family is wanted no query is
    /// made at all. Running out of attempts is not an error: the buckets of
    /// the last query are returned, possibly empty. Only wanted families
    /// are ever returned.
    ///
    /// # Errors
    ///
    /// Returns [`NifError::AddressQuery`] as soon as an OS query fails.
    pub async fn resolve(
        &self,
        interface: &Interface,
        want_ipv4: bool,
        want_ipv6: bool,
        retries: u32,
    ) -> Result<ResolvedAddresses, NifError> {
        let Some(version) = IpVersion::from_wanted(want_ipv4, want_ipv6) else {
            return Ok(ResolvedAddresses::default());
        };

        let policy = self.policy.with_retries(retries);
        self.resolve_version(interface, version, &policy).await
    }

    /// Like [`resolve`](Self::resolve), with the addresses parsed into [`IpAddr`]s.
    ///
    /// # Errors
    ///
    /// Returns [`NifError::AddressQuery`] if an OS query fails, or
    /// [`NifError::AddressParse`] if the OS reports a malformed literal.
    pub async fn resolve_ips(
        &self,
        interface: &Interface,
        want_ipv4: bool,
        want_ipv6: bool,
        retries: u32,
    ) -> Result<(Vec<IpAddr>, Vec<IpAddr>), NifError> {
        self.resolve(interface, want_ipv4, want_ipv6, retries)
            .await?
            .to_ips()
    }

    async fn resolve_version(
        &self,
        interface: &Interface,
        version: IpVersion,
        policy: &RetryPolicy,
    ) -> Result<ResolvedAddresses, NifError> {
        let mut attempt = 1;

        loop {
            let addresses = self
                .fetcher
                .addresses(interface)
                .map_err(|source| NifError::AddressQuery {
                    interface: interface.name.clone(),
                    source,
                })?;

            let (ipv4, ipv6) = partition(addresses);
            let resolved = ResolvedAddresses::new(ipv4, ipv6);

            tracing::debug!(
                interface = %interface.name,
                attempt,
                ipv4 = resolved.ipv4.len(),
                ipv6 = resolved.ipv6.len(),
                "Queried interface addresses"
            );

            if resolved.satisfies(version) || !policy.should_retry(attempt) {
                return Ok(resolved.retain(version));
            }

            tracing::debug!(
                interface = %interface.name,
                "No {version} addresses yet, retrying in {}s",
                policy.delay.as_secs()
            );
            self.sleeper.sleep(policy.delay).await;
            attempt += 1;
        }
    }
}
