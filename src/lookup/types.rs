//! Core types for the lookup subsystem.

use serde::{Deserialize, Deserializer};
use std::fmt;
use std::net::IpAddr;
use thiserror::Error;

/// One provider's answer, normalized.
///
/// Every field is optional: providers omit what they don't know, and
/// ip-api only returns the fields it was asked for. Keys are matched
/// after lowercasing (see `providers::decode_record`), so the serde
/// names below are the lowercase forms.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GeoRecord {
    /// ip-api: "success" or "fail"
    pub status: Option<String>,
    /// ip-api: reason when status is "fail"
    pub message: Option<String>,
    pub country: Option<String>,
    #[serde(rename = "regionname")]
    pub region_name: Option<String>,
    pub region: Option<String>,
    pub city: Option<String>,
    /// ip-api spelling of the postal code
    pub zip: Option<String>,
    /// ipinfo spelling of the postal code
    pub postal: Option<String>,
    #[serde(deserialize_with = "lenient_f64")]
    pub lat: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub lon: Option<f64>,
    /// ipinfo: "lat,lon"
    pub loc: Option<String>,
    pub isp: Option<String>,
    pub org: Option<String>,
    #[serde(rename = "as")]
    pub as_name: Option<String>,
    /// ip-api: echoed address
    pub query: Option<String>,
    /// ipinfo: echoed address
    pub ip: Option<String>,
    pub hostname: Option<String>,
    pub timezone: Option<String>,
    /// ipinfo: set for reserved/unroutable addresses
    pub bogon: Option<bool>,
}

impl GeoRecord {
    /// Region name, preferring the long form.
    pub fn region_label(&self) -> Option<&str> {
        self.region_name.as_deref().or(self.region.as_deref())
    }

    pub fn postal_code(&self) -> Option<&str> {
        self.zip.as_deref().or(self.postal.as_deref())
    }

    /// Latitude and longitude. Explicit fields win; otherwise ipinfo's
    /// `loc` string is split.
    pub fn coordinates(&self) -> (Option<f64>, Option<f64>) {
        if self.lat.is_some() || self.lon.is_some() {
            return (self.lat, self.lon);
        }
        match self.loc.as_deref().and_then(|l| l.split_once(',')) {
            Some((lat, lon)) => (lat.trim().parse().ok(), lon.trim().parse().ok()),
            None => (None, None),
        }
    }

    pub fn echoed_address(&self) -> Option<&str> {
        self.query.as_deref().or(self.ip.as_deref())
    }

    /// Why the provider refused this lookup, if it did.
    ///
    /// A 2xx body can still be a failure: ip-api answers
    /// `{"status":"fail","message":"reserved range"}` and ipinfo marks
    /// unroutable addresses with `"bogon": true`.
    pub fn rejection(&self) -> Option<String> {
        if self
            .status
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case("fail"))
        {
            return Some(
                self.message
                    .clone()
                    .unwrap_or_else(|| "provider reported failure".into()),
            );
        }
        if self.bogon == Some(true) {
            return Some("bogon address".into());
        }
        None
    }
}

/// Accepts a JSON number, a numeric string, or null.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Number(v)) => Some(v),
        Some(Raw::Text(s)) => s.trim().parse().ok(),
        None => None,
    })
}

/// Run-level failures. Both end the run's path but never panic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("invalid IP address: '{0}'")]
    InvalidAddress(String),

    #[error("reverse DNS lookup failed for {address}: {reason}")]
    DnsResolution { address: IpAddr, reason: String },
}

/// A single provider's failure. Isolated: it never affects the other provider.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("network error: {0}")]
    Transport(String),

    #[error("HTTP {code}: {message}")]
    Status { code: u16, message: String },

    #[error("invalid response: {0}")]
    Decode(String),

    #[error("request rejected: {0}")]
    Rejected(String),
}

/// Labeled result of one provider call.
#[derive(Debug, Clone)]
pub struct ProviderReport {
    pub provider: String,
    pub result: Result<GeoRecord, ProviderError>,
}

/// Where a validated address ended up.
#[derive(Debug, Clone)]
pub enum LookupOutcome {
    Private {
        address: IpAddr,
        hostname: Result<String, LookupError>,
    },
    Public {
        address: IpAddr,
        reports: Vec<ProviderReport>,
    },
}

impl fmt::Display for LookupOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Private { address, .. } => write!(f, "private {}", address),
            Self::Public { address, reports } => {
                let ok = reports.iter().filter(|r| r.result.is_ok()).count();
                write!(f, "public {} ({}/{} providers answered)", address, ok, reports.len())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_region_prefers_region_name() {
        let rec = GeoRecord {
            region_name: Some("California".into()),
            region: Some("CA".into()),
            ..Default::default()
        };
        assert_eq!(rec.region_label(), Some("California"));

        let rec = GeoRecord {
            region: Some("Île-de-France".into()),
            ..Default::default()
        };
        assert_eq!(rec.region_label(), Some("Île-de-France"));
    }

    #[test]
    fn test_postal_code_either_spelling() {
        let zip = GeoRecord { zip: Some("94043".into()), ..Default::default() };
        let postal = GeoRecord { postal: Some("75001".into()), ..Default::default() };
        assert_eq!(zip.postal_code(), Some("94043"));
        assert_eq!(postal.postal_code(), Some("75001"));
        assert_eq!(GeoRecord::default().postal_code(), None);
    }

    #[test]
    fn test_coordinates_from_loc() {
        let rec = GeoRecord { loc: Some("37.4056,-122.0775".into()), ..Default::default() };
        let (lat, lon) = rec.coordinates();
        assert_relative_eq!(lat.unwrap(), 37.4056);
        assert_relative_eq!(lon.unwrap(), -122.0775);
    }

    #[test]
    fn test_coordinates_explicit_win() {
        let rec = GeoRecord {
            lat: Some(48.85),
            lon: Some(2.35),
            loc: Some("0,0".into()),
            ..Default::default()
        };
        assert_eq!(rec.coordinates(), (Some(48.85), Some(2.35)));
    }

    #[test]
    fn test_coordinates_garbage_loc() {
        let rec = GeoRecord { loc: Some("nowhere".into()), ..Default::default() };
        assert_eq!(rec.coordinates(), (None, None));
    }

    #[test]
    fn test_rejection_fail_status() {
        let rec = GeoRecord {
            status: Some("FAIL".into()),
            message: Some("reserved range".into()),
            ..Default::default()
        };
        assert_eq!(rec.rejection(), Some("reserved range".to_string()));
    }

    #[test]
    fn test_rejection_bogon() {
        let rec = GeoRecord { bogon: Some(true), ..Default::default() };
        assert!(rec.rejection().is_some());
    }

    #[test]
    fn test_success_not_rejected() {
        let rec = GeoRecord { status: Some("success".into()), ..Default::default() };
        assert_eq!(rec.rejection(), None);
    }

    #[test]
    fn test_lenient_lat_from_string() {
        let rec: GeoRecord = serde_json::from_str(r#"{"lat":"12.5","lon":null}"#).unwrap();
        assert_eq!(rec.lat, Some(12.5));
        assert_eq!(rec.lon, None);
    }

    #[test]
    fn test_error_display() {
        let e = ProviderError::Status { code: 429, message: "rate limited".into() };
        assert_eq!(e.to_string(), "HTTP 429: rate limited");
        let e = LookupError::InvalidAddress("999.999.1.1".into());
        assert_eq!(e.to_string(), "invalid IP address: '999.999.1.1'");
    }
}
