// Standard library
use std::time::Duration;

// 3rd party crates
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode};
use tracing::{debug, error, info};

// Current module imports
use super::constants::CLOUDFLARE_API_BASE;
use super::errors::CloudflareError;
use super::types::{CfConfig, Cloudflare, DnsRecord, DnsRecordsResponse, ZonesResponse};

/// Upper bound for any single control-API request.
const API_TIMEOUT: Duration = Duration::from_secs(10);

/// Creates a reqwest client with the appropriate headers for the Cloudflare API.
pub(super) fn create_reqwest_client(config: &CfConfig) -> Result<Client, CloudflareError> {
    if config.api_key.is_empty() || config.api_key == "your_api_key" {
        error!(
            zone = %config.zone,
            "API key is not set or invalid for '{}'",
            config.zone
        );
        return Err(CloudflareError::InvalidApiKey(config.zone.clone()));
    }

    // Create headers.
    let mut headers: HeaderMap = HeaderMap::new();

    // Mark security-sensitive headers with `set_sensitive`.
    let mut key_value: HeaderValue = HeaderValue::from_str(&config.api_key).map_err(|e| {
        error!(
            zone = %config.zone,
            "Invalid API key format: {}",
            e
        );
        CloudflareError::InvalidHeaderValue(e)
    })?;
    key_value.set_sensitive(true);
    headers.insert("X-Auth-Key", key_value);
    headers.insert("X-Auth-Email", HeaderValue::from_str(&config.email)?);

    // Build the client.
    let client: Client = Client::builder()
        .default_headers(headers)
        .timeout(API_TIMEOUT)
        .build()
        .map_err(|e| {
            error!(
                zone = %config.zone,
                "Failed to build HTTP client: {}",
                e
            );
            CloudflareError::HttpClientBuild(e)
        })?;

    Ok(client)
}

/// Resolves the configured zone name to its provider-assigned id.
///
/// Called once before the periodic loop starts; without a resolved zone
/// there is nothing to monitor, so the error propagates out of startup.
pub async fn resolve_zone_id(cloudflare: &Cloudflare) -> Result<String, CloudflareError> {
    let url = format!("{}/zones", CLOUDFLARE_API_BASE);

    let response = cloudflare
        .client
        .get(&url)
        .send()
        .await
        .map_err(|e| CloudflareError::Unavailable {
            zone: cloudflare.config.zone.clone(),
            message: format!("Failed to list zones: {}", e),
        })?;

    let status = response.status();
    if status == StatusCode::UNAUTHORIZED {
        return Err(CloudflareError::InvalidApiKey(
            cloudflare.config.zone.clone(),
        ));
    }

    if !status.is_success() {
        return Err(CloudflareError::Unavailable {
            zone: cloudflare.config.zone.clone(),
            message: format!("HTTP {}", status),
        });
    }

    let zones: ZonesResponse =
        response
            .json()
            .await
            .map_err(|e| CloudflareError::Unavailable {
                zone: cloudflare.config.zone.clone(),
                message: format!("Failed to parse zone listing: {}", e),
            })?;

    let zone_id: String = zone_id_for(&zones, &cloudflare.config.zone)?;

    info!(
        zone = %cloudflare.config.zone,
        zone_id = %zone_id,
        "Resolved zone id"
    );

    Ok(zone_id)
}

/// Picks the id of the zone whose name matches exactly.
fn zone_id_for(zones: &ZonesResponse, zone_name: &str) -> Result<String, CloudflareError> {
    zones
        .result
        .iter()
        .find(|zone| zone.name == zone_name)
        .map(|zone| zone.id.clone())
        .ok_or_else(|| CloudflareError::ZoneNotFound(zone_name.to_string()))
}

/// Fetches the A records for a specific domain within the zone.
///
/// Every returned record must carry the queried name and type; anything
/// else means the provider ignored the filter and the result cannot be
/// trusted for this cycle.
pub async fn list_address_records(
    cloudflare: &Cloudflare,
    zone_id: &str,
    domain: &str,
) -> Result<Vec<DnsRecord>, CloudflareError> {
    let url = format!(
        "{}/zones/{}/dns_records?type=A&name={}",
        CLOUDFLARE_API_BASE, zone_id, domain
    );

    debug!(
        zone = %cloudflare.config.zone,
        domain = %domain,
        "Sending DNS records request"
    );

    let response = tokio::time::timeout(API_TIMEOUT, cloudflare.client.get(&url).send())
        .await
        .map_err(|_| CloudflareError::Timeout {
            zone: cloudflare.config.zone.clone(),
            message: "DNS record fetch request timed out".to_string(),
        })?
        .map_err(|e| CloudflareError::Unavailable {
            zone: cloudflare.config.zone.clone(),
            message: format!("Failed to fetch DNS records: {}", e),
        })?;

    let status = response.status();
    match status {
        StatusCode::OK => {
            let records: DnsRecordsResponse =
                response
                    .json()
                    .await
                    .map_err(|e| CloudflareError::Unavailable {
                        zone: cloudflare.config.zone.clone(),
                        message: format!("Failed to parse DNS records response: {}", e),
                    })?;

            validate_record_filter(records.result, domain)
        }
        StatusCode::UNAUTHORIZED => Err(CloudflareError::InvalidApiKey(
            cloudflare.config.zone.clone(),
        )),
        _ => Err(CloudflareError::Unavailable {
            zone: cloudflare.config.zone.clone(),
            message: format!("HTTP {}", status),
        }),
    }
}

/// Rejects any record that falls outside the `type=A&name={domain}` filter.
fn validate_record_filter(
    records: Vec<DnsRecord>,
    domain: &str,
) -> Result<Vec<DnsRecord>, CloudflareError> {
    for record in &records {
        if record.name != domain {
            return Err(CloudflareError::DataIntegrity {
                domain: domain.to_string(),
                detail: format!("unexpected record name '{}'", record.name),
            });
        }
        if record.record_type != "A" {
            return Err(CloudflareError::DataIntegrity {
                domain: domain.to_string(),
                detail: format!("unexpected record type '{}'", record.record_type),
            });
        }
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::cloudflare::types::ZoneEntry;

    fn zones() -> ZonesResponse {
        ZonesResponse {
            result: vec![
                ZoneEntry {
                    id: "1".to_string(),
                    name: "a.org".to_string(),
                },
                ZoneEntry {
                    id: "2".to_string(),
                    name: "b.org".to_string(),
                },
            ],
        }
    }

    fn record(name: &str, record_type: &str) -> DnsRecord {
        DnsRecord {
            id: "rec-1".to_string(),
            name: name.to_string(),
            record_type: record_type.to_string(),
            content: "203.0.113.10".to_string(),
        }
    }

    #[test]
    fn resolves_zone_id_by_exact_name() {
        let zone_id = zone_id_for(&zones(), "b.org").unwrap();
        assert_eq!(zone_id, "2");
    }

    #[test]
    fn unknown_zone_name_is_an_error() {
        let err = zone_id_for(&zones(), "c.org").unwrap_err();
        assert!(matches!(err, CloudflareError::ZoneNotFound(name) if name == "c.org"));
    }

    #[test]
    fn matching_records_pass_validation() {
        let records = vec![record("pool.b.org", "A"), record("pool.b.org", "A")];
        let validated = validate_record_filter(records, "pool.b.org").unwrap();
        assert_eq!(validated.len(), 2);
    }

    #[test]
    fn empty_record_set_passes_validation() {
        let validated = validate_record_filter(Vec::new(), "pool.b.org").unwrap();
        assert!(validated.is_empty());
    }

    #[test]
    fn mismatched_record_name_is_a_data_integrity_error() {
        let records = vec![record("pool.b.org", "A"), record("other.b.org", "A")];
        let err = validate_record_filter(records, "pool.b.org").unwrap_err();
        assert!(matches!(err, CloudflareError::DataIntegrity { .. }));
    }

    #[test]
    fn mismatched_record_type_is_a_data_integrity_error() {
        let records = vec![record("pool.b.org", "AAAA")];
        let err = validate_record_filter(records, "pool.b.org").unwrap_err();
        assert!(matches!(err, CloudflareError::DataIntegrity { .. }));
    }
}
