//! Reverse DNS for the private path.

use super::types::LookupError;
use std::net::IpAddr;
use tracing::debug;

/// Maps an address back to a host name.
pub trait HostnameResolver: Send + Sync {
    fn reverse_lookup(&self, address: &IpAddr) -> Result<String, LookupError>;
}

/// Blocking lookup through the system resolver (`getnameinfo`).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemResolver;

impl HostnameResolver for SystemResolver {
    fn reverse_lookup(&self, address: &IpAddr) -> Result<String, LookupError> {
        debug!(%address, "reverse DNS lookup");
        let answer = dns_lookup::lookup_addr(address).map_err(|e| LookupError::DnsResolution {
            address: *address,
            reason: e.to_string(),
        })?;
        hostname_from_answer(*address, answer)
    }
}

/// `getnameinfo` falls back to the numeric form when there is no PTR
/// record; that is a failed lookup, not a host name.
fn hostname_from_answer(address: IpAddr, answer: String) -> Result<String, LookupError> {
    let name = answer.trim().trim_end_matches('.');
    let echoed = name.parse::<IpAddr>().is_ok_and(|parsed| parsed == address);
    if name.is_empty() || echoed {
        return Err(LookupError::DnsResolution {
            address,
            reason: "no PTR record".into(),
        });
    }
    Ok(name.to_string())
}
