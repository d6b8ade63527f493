// 3rd party crates
use reqwest::Client;
use serde::Deserialize;

/// Represents a client for the read-only slice of the Cloudflare API
/// the monitor consumes.
#[derive(Debug, Clone)]
pub struct Cloudflare {
    pub config: CfConfig,
    pub client: Client,
}

/// Configuration for Cloudflare API interactions.
#[derive(Debug, Deserialize, Clone)]
pub struct CfConfig {
    pub api_key: String,
    pub email: String,
    pub zone: String,
    pub domain: String,
    pub drain_domain: String,
}

/// Represents the response from the zone listing endpoint.
#[derive(Debug, Deserialize)]
pub struct ZonesResponse {
    pub result: Vec<ZoneEntry>,
}

/// One zone in the account listing.
#[derive(Debug, Deserialize)]
pub struct ZoneEntry {
    pub id: String,
    pub name: String,
}

/// Represents the response from a DNS record request.
#[derive(Debug, Deserialize)]
pub struct DnsRecordsResponse {
    pub result: Vec<DnsRecord>,
}

/// One address record behind a monitored domain.
///
/// Records are fetched fresh every cycle and discarded at its end; they
/// are never cached across cycles.
#[derive(Debug, Deserialize, Clone)]
pub struct DnsRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub content: String,
}
