//! User-facing strings.
//!
//! French is the default, as in the original tool; English is available
//! with `--lang en`.

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Locale {
    #[default]
    Fr,
    En,
}

impl Locale {
    pub fn messages(self) -> &'static Messages {
        match self {
            Self::Fr => &FR,
            Self::En => &EN,
        }
    }
}

/// One complete message table.
#[derive(Debug)]
pub struct Messages {
    pub prompt: &'static str,
    pub invalid_address: &'static str,
    pub private_address: &'static str,
    pub hostname: &'static str,
    pub dns_failure: &'static str,
    pub searching: &'static str,
    pub country: &'static str,
    pub city: &'static str,
    pub region: &'static str,
    pub postal_code: &'static str,
    pub latitude: &'static str,
    pub longitude: &'static str,
    pub isp: &'static str,
    pub organization: &'static str,
    pub autonomous_system: &'static str,
    pub queried_address: &'static str,
    pub not_available: &'static str,
    pub error: &'static str,
    pub pause: &'static str,
    /// Label/value separator; French puts a space before the colon.
    pub colon: &'static str,
}

static FR: Messages = Messages {
    prompt: "Entrez une adresse IP : ",
    invalid_address: "Adresse IP invalide.",
    private_address: "Cette IP est privée.",
    hostname: "Hostname",
    dns_failure: "Résolution DNS impossible",
    searching: "Recherche d'informations sur",
    country: "Pays",
    city: "Ville",
    region: "Région",
    postal_code: "Code Postal",
    latitude: "Latitude",
    longitude: "Longitude",
    isp: "FAI",
    organization: "Organisation",
    autonomous_system: "AS",
    queried_address: "Adresse",
    not_available: "Non disponible",
    error: "Erreur",
    pause: "Appuyez sur Entrée pour quitter...",
    colon: " : ",
};

static EN: Messages = Messages {
    prompt: "Enter an IP address: ",
    invalid_address: "Invalid IP address.",
    private_address: "This IP is private.",
    hostname: "Hostname",
    dns_failure: "Reverse DNS lookup failed",
    searching: "Looking up",
    country: "Country",
    city: "City",
    region: "Region",
    postal_code: "Postal code",
    latitude: "Latitude",
    longitude: "Longitude",
    isp: "ISP",
    organization: "Organization",
    autonomous_system: "AS",
    queried_address: "Address",
    not_available: "Not available",
    error: "Error",
    pause: "Press Enter to quit...",
    colon: ": ",
};
