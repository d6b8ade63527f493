// 3rd party crates
use thiserror::Error;

/// Custom error type for Cloudflare operations.
#[derive(Debug, Error)]
pub enum CloudflareError {
    #[error("Invalid API key for zone '{0}'")]
    InvalidApiKey(String),

    #[error("Invalid header value: {0}")]
    InvalidHeaderValue(#[from] reqwest::header::InvalidHeaderValue),

    #[error("HTTP client error: {0}")]
    HttpClientBuild(#[from] reqwest::Error),

    #[error("Zone '{0}' not found in the account")]
    ZoneNotFound(String),

    #[error("Cloudflare request failed for zone '{zone}': {message}")]
    Unavailable { zone: String, message: String },

    #[error("Request timed out for zone '{zone}': {message}")]
    Timeout { zone: String, message: String },

    #[error("Record outside the requested filter for '{domain}': {detail}")]
    DataIntegrity { domain: String, detail: String },
}

/// Validation errors for the Cloudflare configuration section.
#[derive(Debug, Error)]
pub enum CloudflareValidationError {
    #[error("Cloudflare API key is not set")]
    MissingApiKey,

    #[error("Cloudflare account email is not set")]
    MissingEmail,

    #[error("Zone name is not set")]
    MissingZone,

    #[error("Main pool domain is not set")]
    MissingDomain,

    #[error("Drain pool domain is not set")]
    MissingDrainDomain,
}
