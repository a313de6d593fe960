//! Geolocation providers: ip-api.com and ipinfo.io.

use super::types::{GeoRecord, ProviderError};
use serde_json::{Map, Value};
use std::io::Read;
use std::net::IpAddr;
use tracing::{debug, warn};

const USER_AGENT: &str = concat!("ZeroTrace/", env!("CARGO_PKG_VERSION"));

/// Fields requested from ip-api; it returns only these.
const IP_API_FIELDS: &str = "status,message,country,regionName,city,zip,lat,lon,isp,org,as,query";

/// Longest error body excerpt kept in a `Status` error.
const MAX_ERROR_EXCERPT: usize = 200;

/// Cap on a provider body; real answers are well under 1 KiB.
const MAX_BODY_BYTES: u64 = 1024 * 1024;

/// One geolocation backend.
pub trait GeoProvider: Send + Sync {
    /// Label shown above this provider's section.
    fn name(&self) -> &str;

    fn lookup(&self, address: &IpAddr) -> Result<GeoRecord, ProviderError>;
}

// ─── Provider catalogue ─────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    IpApi,
    IpInfo,
}

impl ProviderKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::IpApi => "IP-API",
            Self::IpInfo => "IPInfo",
        }
    }

    pub fn default_base_url(self) -> &'static str {
        match self {
            // ip-api's free tier is HTTP only.
            Self::IpApi => "http://ip-api.com",
            Self::IpInfo => "https://ipinfo.io",
        }
    }

    fn url(self, base: &str, address: &IpAddr) -> String {
        let base = base.trim_end_matches('/');
        match self {
            Self::IpApi => format!("{}/json/{}?fields={}", base, address, IP_API_FIELDS),
            Self::IpInfo => format!("{}/{}/json", base, address),
        }
    }
}

// ─── HTTP provider ──────────────────────────────────────────────

/// A provider reached with one plain GET: no auth, no retry, ureq's
/// default timeouts.
#[derive(Debug, Clone)]
pub struct HttpProvider {
    kind: ProviderKind,
    base_url: String,
}

impl HttpProvider {
    pub fn new(kind: ProviderKind) -> Self {
        Self::with_base_url(kind, kind.default_base_url())
    }

    /// Point a provider at another host (for testing).
    pub fn with_base_url(kind: ProviderKind, base_url: impl Into<String>) -> Self {
        Self {
            kind,
            base_url: base_url.into(),
        }
    }

    pub fn request_url(&self, address: &IpAddr) -> String {
        self.kind.url(&self.base_url, address)
    }
}

impl GeoProvider for HttpProvider {
    fn name(&self) -> &str {
        self.kind.label()
    }

    fn lookup(&self, address: &IpAddr) -> Result<GeoRecord, ProviderError> {
        let url = self.request_url(address);
        debug!(provider = self.name(), %url, "GET");

        let response = ureq::get(&url)
            .set("User-Agent", USER_AGENT)
            .set("Accept", "application/json")
            .call()
            .map_err(|e| {
                let err = request_error(e);
                warn!(provider = self.name(), error = %err, "request failed");
                err
            })?;

        // Reading and parsing are separate steps: a connection dropping
        // mid-body is a transport failure, bad JSON is a decode failure.
        let mut raw = Vec::new();
        response
            .into_reader()
            .take(MAX_BODY_BYTES)
            .read_to_end(&mut raw)
            .map_err(|e| {
                warn!(provider = self.name(), error = %e, "body read failed");
                ProviderError::Transport(e.to_string())
            })?;

        let record = decode_body(&raw)?;
        if let Some(reason) = record.rejection() {
            warn!(provider = self.name(), %reason, "lookup rejected");
            return Err(ProviderError::Rejected(reason));
        }
        debug!(provider = self.name(), country = ?record.country, city = ?record.city, "decoded");
        Ok(record)
    }
}

/// The two providers the tool always queries, in display order.
pub fn default_providers() -> Vec<Box<dyn GeoProvider>> {
    vec![
        Box::new(HttpProvider::new(ProviderKind::IpApi)),
        Box::new(HttpProvider::new(ProviderKind::IpInfo)),
    ]
}

// ─── Decoding ───────────────────────────────────────────────────

/// Parse raw body bytes, then decode them into a record.
pub fn decode_body(raw: &[u8]) -> Result<GeoRecord, ProviderError> {
    let body: Value = serde_json::from_slice(raw).map_err(|e| ProviderError::Decode(e.to_string()))?;
    decode_record(body)
}

/// Decode a provider body into a record, matching keys case-insensitively.
///
/// Only the top level is folded; that is where every field we read lives.
/// Absent keys are fine. A body that is not an object, or has a known key
/// with the wrong type, is a decode error.
pub fn decode_record(body: Value) -> Result<GeoRecord, ProviderError> {
    let map = match body {
        Value::Object(map) => map,
        other => {
            return Err(ProviderError::Decode(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            )))
        }
    };
    let folded: Map<String, Value> = map
        .into_iter()
        .map(|(key, value)| (key.to_lowercase(), value))
        .collect();
    serde_json::from_value(Value::Object(folded)).map_err(|e| ProviderError::Decode(e.to_string()))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn request_error(err: ureq::Error) -> ProviderError {
    match err {
        ureq::Error::Status(code, response) => {
            let body = response.into_string().unwrap_or_default();
            let message = error_message(&body).unwrap_or_else(|| format!("status {}", code));
            ProviderError::Status { code, message }
        }
        ureq::Error::Transport(transport) => ProviderError::Transport(transport.to_string()),
    }
}

/// Best-effort message from an error body: `{"message": ..}`,
/// ipinfo's `{"error": {"message": ..}}`, or the raw text.
fn error_message(body: &str) -> Option<String> {
    if let Ok(json) = serde_json::from_str::<Value>(body) {
        let nested = json
            .get("error")
            .and_then(|e| e.get("message").or_else(|| e.get("title")))
            .and_then(Value::as_str);
        if let Some(msg) = nested.or_else(|| json.get("message").and_then(Value::as_str)) {
            return Some(msg.to_string());
        }
    }
    let text = body.trim();
    if text.is_empty() {
        return None;
    }
    Some(text.chars().take(MAX_ERROR_EXCERPT).collect())
}
