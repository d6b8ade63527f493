// Standard library
use std::time::{Duration, Instant};

// 3rd party crates
use reqwest::Client;
use tracing::debug;

// Project imports
use crate::providers::cloudflare::types::DnsRecord;

// Current module imports
use super::types::{HealthProber, ProbeResult};

impl HealthProber {
    /// Builds a prober whose requests are bounded by `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client: Client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Probes a single node and measures the round trip.
    ///
    /// Never fails: a transport error, refused connection, or timeout is
    /// folded into the result, so one dead node cannot disturb the rest
    /// of the cycle.
    pub async fn probe(&self, record: DnsRecord) -> ProbeResult {
        let url: String = probe_url(&record.content);
        let started = Instant::now();

        match self.client.get(&url).send().await {
            Ok(response) => {
                let latency_ms: f64 = started.elapsed().as_secs_f64() * 1000.0;
                let status: u16 = response.status().as_u16();

                debug!(
                    node = %record.content,
                    status = status,
                    latency_ms = latency_ms,
                    "Probe completed"
                );

                ProbeResult {
                    record,
                    success: true,
                    latency_ms: Some(latency_ms),
                    status: Some(status),
                    error: None,
                }
            }
            Err(e) => {
                debug!(node = %record.content, error = %e, "Probe failed");

                ProbeResult {
                    record,
                    success: false,
                    latency_ms: None,
                    status: None,
                    error: Some(e.to_string()),
                }
            }
        }
    }
}

/// Prefixes bare addresses with a scheme; record contents are plain IPs.
pub(crate) fn probe_url(address: &str) -> String {
    if address.starts_with("http://") || address.starts_with("https://") {
        address.to_string()
    } else {
        format!("http://{}", address)
    }
}
