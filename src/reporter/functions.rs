// Standard library
use std::time::{SystemTime, UNIX_EPOCH};

// 3rd party crates
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;

// Current module imports
use super::constants::STATUSPAGE_API_BASE;
use super::errors::StatusPageError;
use super::types::{Metric, SpConfig, StatusPage};

/// Creates a reqwest client with the authorization header for the
/// dashboard API.
pub(super) fn create_reqwest_client(config: &SpConfig) -> Result<Client, StatusPageError> {
    // Create headers.
    let mut headers: HeaderMap = HeaderMap::new();

    // Mark security-sensitive headers with `set_sensitive`.
    let oauth_token: String = format!("OAuth {}", &config.api_key);
    let mut auth_value: HeaderValue = HeaderValue::from_str(&oauth_token)?;
    auth_value.set_sensitive(true);
    headers.insert(header::AUTHORIZATION, auth_value);

    // Build the client.
    let client: Client = Client::builder().default_headers(headers).build()?;

    Ok(client)
}

/// Pushes one datapoint for one metric.
///
/// Each push is independent; the caller logs failures and carries on
/// with the remaining metrics of the cycle.
pub async fn push_metric(
    statuspage: &StatusPage,
    metric: Metric,
    value: f64,
    timestamp: u64,
) -> Result<(), StatusPageError> {
    let metric_id: &str = statuspage
        .config
        .metrics
        .id_for(metric)
        .ok_or(StatusPageError::UnboundMetric(metric.name()))?;

    let url = format!(
        "{}/v1/pages/{}/metrics/{}/data.json",
        STATUSPAGE_API_BASE, statuspage.config.page_id, metric_id
    );

    let response = statuspage
        .client
        .post(&url)
        .json(&metric_payload(timestamp, value))
        .send()
        .await
        .map_err(|e| StatusPageError::PushFailed {
            metric: metric.name(),
            message: format!("Failed to send datapoint: {}", e),
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(StatusPageError::PushFailed {
            metric: metric.name(),
            message: format!("HTTP {}", status),
        });
    }

    debug!(
        metric = metric.name(),
        value = value,
        "Pushed metric datapoint"
    );

    Ok(())
}

/// Datapoint body for the per-metric data endpoint.
fn metric_payload(timestamp: u64, value: f64) -> Value {
    json!({
        "data": {
            "timestamp": timestamp,
            "value": value,
        }
    })
}

/// Seconds since the Unix epoch.
pub fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
