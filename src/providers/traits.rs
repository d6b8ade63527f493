// 3rd party crates
use async_trait::async_trait;

// Project imports
use crate::providers::cloudflare::types::DnsRecord;

/// Read-only directory of the address records behind a monitored domain.
///
/// The monitor never writes to DNS; implementors only expose zone
/// resolution and filtered record enumeration. The associated error type
/// carries provider-specific failure detail.
#[async_trait]
pub trait NodeDirectory: Send + Sync {
    /// The error type for this directory.
    type Error: std::error::Error + Send + Sync;

    /// Resolves the configured zone name to the provider's zone id.
    ///
    /// Exactly one zone in the account must match the configured name;
    /// anything else is an error.
    async fn resolve_zone_id(&self) -> Result<String, Self::Error>;

    /// Lists the address records for `domain` within the resolved zone.
    async fn list_address_records(
        &self,
        zone_id: &str,
        domain: &str,
    ) -> Result<Vec<DnsRecord>, Self::Error>;
}
