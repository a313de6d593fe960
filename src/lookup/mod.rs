//! IP lookup subsystem for ZeroTrace.
//!
//! Validates an address, applies the private-range policy, then either
//! reverse-resolves it (private) or asks the geolocation providers (public).

pub mod address;
pub mod dns;
pub mod providers;
pub mod resolver;
pub mod types;

pub use address::{is_private, parse_address};
pub use dns::{HostnameResolver, SystemResolver};
pub use providers::{default_providers, GeoProvider, HttpProvider, ProviderKind};
pub use resolver::IpLookup;
pub use types::{GeoRecord, LookupError, LookupOutcome, ProviderError, ProviderReport};
