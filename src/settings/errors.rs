// 3rd party crates
use thiserror::Error;

// Project imports
use crate::providers::cloudflare::errors::CloudflareValidationError;
use crate::reporter::errors::StatusPageValidationError;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid log level: {0}. Must be one of: error, warn, info, debug, trace")]
    InvalidLogLevel(String),
    #[error("Check interval must be greater than 0, got {0}")]
    InvalidCheckInterval(u64),
    #[error("Probe timeout must be nonzero and shorter than the check interval, got {timeout}s against {interval}s")]
    InvalidProbeTimeout { timeout: u64, interval: u64 },
    #[error("Cloudflare configuration error: {0}")]
    CloudflareConfig(#[from] CloudflareValidationError),
    #[error("Statuspage configuration error: {0}")]
    StatusPageConfig(#[from] StatusPageValidationError),
}
