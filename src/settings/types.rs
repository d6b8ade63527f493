// Standard library
use std::path::PathBuf;
use std::sync::Arc;

// 3rd party crates
use serde::Deserialize;
use tokio::sync::RwLock;

// Project imports
use crate::providers::cloudflare::types::CfConfig;
use crate::reporter::types::SpConfig;

#[derive(Debug, Deserialize, Clone)]
pub struct Log {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Check {
    #[serde(default = "default_check_interval")]
    pub interval: u64,
    #[serde(default = "default_probe_timeout")]
    pub probe_timeout: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub log: Log,
    pub check: Check,
    pub cloudflare: CfConfig,
    pub statuspage: SpConfig,
}

fn default_check_interval() -> u64 {
    60 // 1 minute
}

fn default_probe_timeout() -> u64 {
    15 // a quarter of the default interval
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Manages the application settings, loading them once at startup.
pub struct ConfigManager {
    pub settings: Arc<RwLock<Settings>>,
    pub _config_path: PathBuf,
}

/// Settings that passed validation.
pub struct ValidatedSettings(pub(super) Settings);
