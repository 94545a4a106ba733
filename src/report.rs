//! The enumerate → resolve → render pipeline.

use crate::config::QueryOptions;
use crate::error::NifError;
use crate::network::InterfaceFetcher;
use crate::network::filter::candidates;
use crate::output::render_line;
use crate::resolve::AddressResolver;
use crate::time::Sleeper;

/// Produces the report lines for one enumeration pass.
///
/// Interfaces are processed one after another in OS order. All lines are
/// collected before returning, so a failure on any interface yields no
/// partial output.
///
/// # Errors
///
/// Returns [`NifError::Enumeration`] or [`NifError::AddressQuery`] on OS
/// failures. Interfaces without addresses are not an error.
pub async fn report<F, S>(
    fetcher: &F,
    sleeper: S,
    options: &QueryOptions,
) -> Result<Vec<String>, NifError>
where
    F: InterfaceFetcher,
    S: Sleeper,
{
    let interfaces = candidates(fetcher, options.include_all, options.select_single)?;
    let resolver = AddressResolver::new(fetcher).with_sleeper(sleeper);

    let mut lines = Vec::with_capacity(interfaces.len());
    for interface in &interfaces {
        let addresses = resolver
            .resolve(
                interface,
                options.want_ipv4,
                options.want_ipv6,
                options.retry_count,
            )
            .await?;
        lines.extend(render_line(interface, &addresses, options));
    }

    Ok(lines)
}
