// 3rd party crates
use async_trait::async_trait;

// Project imports
use crate::providers::traits::NodeDirectory;

// Current module imports
use super::errors::{CloudflareError, CloudflareValidationError};
use super::functions::{self, create_reqwest_client};
use super::types::{CfConfig, Cloudflare, DnsRecord};

impl Cloudflare {
    /// Builds a client bound to the configured account credentials.
    pub fn new(config: CfConfig) -> Result<Self, CloudflareError> {
        let client = create_reqwest_client(&config)?;
        Ok(Self { config, client })
    }
}

#[async_trait]
impl NodeDirectory for Cloudflare {
    type Error = CloudflareError;

    async fn resolve_zone_id(&self) -> Result<String, CloudflareError> {
        functions::resolve_zone_id(self).await
    }

    async fn list_address_records(
        &self,
        zone_id: &str,
        domain: &str,
    ) -> Result<Vec<DnsRecord>, CloudflareError> {
        functions::list_address_records(self, zone_id, domain).await
    }
}

impl CfConfig {
    pub fn validate(&self) -> Result<(), CloudflareValidationError> {
        if self.api_key.trim().is_empty() {
            return Err(CloudflareValidationError::MissingApiKey);
        }

        if self.email.trim().is_empty() {
            return Err(CloudflareValidationError::MissingEmail);
        }

        if self.zone.trim().is_empty() {
            return Err(CloudflareValidationError::MissingZone);
        }

        if self.domain.trim().is_empty() {
            return Err(CloudflareValidationError::MissingDomain);
        }

        if self.drain_domain.trim().is_empty() {
            return Err(CloudflareValidationError::MissingDrainDomain);
        }

        Ok(())
    }
}
