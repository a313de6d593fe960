//! Lookup orchestration: validate → classify → reverse DNS or providers.
//!
//! Private flow: address → reverse DNS → outcome
//! Public flow:  address → every provider on its own thread → outcome

use super::address::{is_private, parse_address};
use super::dns::{HostnameResolver, SystemResolver};
use super::providers::{default_providers, GeoProvider};
use super::types::{LookupError, LookupOutcome, ProviderError, ProviderReport};
use std::net::IpAddr;
use std::thread;
use tracing::{debug, info};

/// The lookup pipeline with its backends.
pub struct IpLookup {
    providers: Vec<Box<dyn GeoProvider>>,
    hostnames: Box<dyn HostnameResolver>,
}

impl IpLookup {
    /// ip-api.com + ipinfo.io, system resolver.
    pub fn new() -> Self {
        Self::with_backends(default_providers(), Box::new(SystemResolver))
    }

    /// Create a lookup with specific backends (for testing).
    pub fn with_backends(
        providers: Vec<Box<dyn GeoProvider>>,
        hostnames: Box<dyn HostnameResolver>,
    ) -> Self {
        Self { providers, hostnames }
    }

    /// Validate raw input and run the matching path.
    ///
    /// Invalid input returns before any DNS or network call.
    pub fn run(&self, input: &str) -> Result<LookupOutcome, LookupError> {
        let address = parse_address(input)?;
        Ok(self.lookup(address))
    }

    /// Run the path for an already validated address.
    pub fn lookup(&self, address: IpAddr) -> LookupOutcome {
        if is_private(address) {
            info!(%address, "private address, resolving host name");
            LookupOutcome::Private {
                address,
                hostname: self.hostnames.reverse_lookup(&address),
            }
        } else {
            info!(%address, providers = self.providers.len(), "public address, querying providers");
            LookupOutcome::Public {
                address,
                reports: self.query_providers(address),
            }
        }
    }

    /// Query every provider concurrently and wait for all of them.
    ///
    /// Reports come back in provider order. A provider that fails, or
    /// panics, only affects its own report.
    pub fn query_providers(&self, address: IpAddr) -> Vec<ProviderReport> {
        thread::scope(|scope| {
            let pending: Vec<_> = self
                .providers
                .iter()
                .map(|provider| {
                    let handle = scope.spawn(move || provider.lookup(&address));
                    (provider.name(), handle)
                })
                .collect();

            pending
                .into_iter()
                .map(|(name, handle)| {
                    let result = handle.join().unwrap_or_else(|_| {
                        Err(ProviderError::Transport("provider task panicked".into()))
                    });
                    debug!(provider = name, ok = result.is_ok(), "provider finished");
                    ProviderReport {
                        provider: name.to_string(),
                        result,
                    }
                })
                .collect()
        })
    }
}

impl Default for IpLookup {
    fn default() -> Self {
        Self::new()
    }
}
