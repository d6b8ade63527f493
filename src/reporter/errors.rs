// 3rd party crates
use thiserror::Error;

/// Custom error type for dashboard operations.
#[derive(Debug, Error)]
pub enum StatusPageError {
    #[error("Invalid header value: {0}")]
    InvalidHeaderValue(#[from] reqwest::header::InvalidHeaderValue),

    #[error("HTTP client error: {0}")]
    HttpClientBuild(#[from] reqwest::Error),

    #[error("No dashboard metric bound for '{0}'")]
    UnboundMetric(&'static str),

    #[error("Failed to push metric '{metric}': {message}")]
    PushFailed {
        metric: &'static str,
        message: String,
    },
}

/// Validation errors for the status dashboard configuration section.
#[derive(Debug, Error)]
pub enum StatusPageValidationError {
    #[error("Statuspage API key is not set")]
    MissingApiKey,

    #[error("Statuspage page id is not set")]
    MissingPageId,

    #[error("Metric id for '{0}' is not set")]
    EmptyMetricId(&'static str),
}
