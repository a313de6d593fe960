//! Text presenter: turns lookup outcomes into console output.

use crate::i18n::Messages;
use crate::lookup::{GeoRecord, LookupError, LookupOutcome, ProviderReport};
use std::io::{self, Write};

/// Renders outcomes with one message table.
pub struct Presenter {
    messages: &'static Messages,
    /// Also print ISP, organization, AS and the echoed address.
    details: bool,
}

impl Presenter {
    pub fn new(messages: &'static Messages) -> Self {
        Self {
            messages,
            details: false,
        }
    }

    pub fn with_details(mut self, details: bool) -> Self {
        self.details = details;
        self
    }

    pub fn render_invalid(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "\u{274C} {}", self.messages.invalid_address)
    }

    pub fn render(&self, out: &mut impl Write, outcome: &LookupOutcome) -> io::Result<()> {
        match outcome {
            LookupOutcome::Private { hostname, .. } => self.render_private(out, hostname),
            LookupOutcome::Public { address, reports } => {
                writeln!(out)?;
                writeln!(out, "\u{1F50E} {} {}...", self.messages.searching, address)?;
                for report in reports {
                    writeln!(out)?;
                    self.render_report(out, report)?;
                }
                Ok(())
            }
        }
    }

    fn render_private(
        &self,
        out: &mut impl Write,
        hostname: &Result<String, LookupError>,
    ) -> io::Result<()> {
        let m = self.messages;
        writeln!(out, "\u{26A0}\u{FE0F} {}", m.private_address)?;
        match hostname {
            Ok(name) => writeln!(out, "\u{1F539} {}{}{}", m.hostname, m.colon, name),
            Err(LookupError::DnsResolution { address, reason }) => {
                writeln!(out, "\u{274C} {} ({}){}{}", m.dns_failure, address, m.colon, reason)
            }
            Err(e) => writeln!(out, "\u{274C} {}{}{}", m.dns_failure, m.colon, e),
        }
    }

    fn render_report(&self, out: &mut impl Write, report: &ProviderReport) -> io::Result<()> {
        let m = self.messages;
        match &report.result {
            Ok(record) => {
                writeln!(out, "\u{2500}\u{2500} {} \u{2500}\u{2500}", report.provider)?;
                self.render_record(out, record)
            }
            Err(e) => writeln!(out, "\u{274C} {}{}{} - {}", report.provider, m.colon, m.error, e),
        }
    }

    fn render_record(&self, out: &mut impl Write, record: &GeoRecord) -> io::Result<()> {
        let m = self.messages;
        let (lat, lon) = record.coordinates();
        let (lat, lon) = (lat.map(|v| v.to_string()), lon.map(|v| v.to_string()));

        self.field(out, m.country, record.country.as_deref())?;
        self.field(out, m.city, record.city.as_deref())?;
        self.field(out, m.region, record.region_label())?;
        self.field(out, m.postal_code, record.postal_code())?;
        writeln!(
            out,
            " {}{}{} {}{}{}",
            m.latitude,
            m.colon,
            self.value(lat.as_deref()),
            m.longitude,
            m.colon,
            self.value(lon.as_deref()),
        )?;

        if self.details {
            self.field(out, m.isp, record.isp.as_deref())?;
            self.field(out, m.organization, record.org.as_deref())?;
            self.field(out, m.autonomous_system, record.as_name.as_deref())?;
            self.field(out, m.queried_address, record.echoed_address())?;
        }
        Ok(())
    }

    fn field(&self, out: &mut impl Write, label: &str, value: Option<&str>) -> io::Result<()> {
        writeln!(out, " {}{}{}", label, self.messages.colon, self.value(value))
    }

    /// Missing and blank values both show the placeholder.
    fn value<'a>(&self, value: Option<&'a str>) -> &'a str {
        match value.map(str::trim) {
            Some(v) if !v.is_empty() => v,
            _ => self.messages.not_available,
        }
    }
}
