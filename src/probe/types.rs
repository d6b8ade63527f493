// 3rd party crates
use reqwest::Client;

// Project imports
use crate::providers::cloudflare::types::DnsRecord;

/// Issues liveness probes against individual nodes.
#[derive(Debug, Clone)]
pub struct HealthProber {
    pub client: Client,
}

/// Outcome of probing one address record.
///
/// `success` means a response arrived at all; the HTTP status is recorded
/// but a non-2xx answer still counts as responsive. Latency is present
/// only on success, the error detail only on transport failure.
#[derive(Debug, Clone)]
pub struct ProbeResult {
    pub record: DnsRecord,
    pub success: bool,
    pub latency_ms: Option<f64>,
    pub status: Option<u16>,
    pub error: Option<String>,
}
