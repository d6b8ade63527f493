// Standard library
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::{env, fs};

// 3rd party crates
use config::{Config, ConfigError, Environment, File};
use tokio::sync::RwLock;
use tracing::{error, info};

// Current module imports
use super::constants::DEFAULT_CONFIG;
use super::errors::ValidationError;
use super::types::{ConfigManager, Settings, ValidatedSettings};

impl Settings {
    pub fn get_log_level(&self) -> String {
        self.log.level.to_lowercase()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        // Validate log level
        match self.log.level.to_lowercase().as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => {}
            _ => return Err(ValidationError::InvalidLogLevel(self.log.level.clone())),
        }

        // Validate check interval
        if self.check.interval == 0 {
            return Err(ValidationError::InvalidCheckInterval(self.check.interval));
        }

        // A probe must give up well before the next cycle is due
        if self.check.probe_timeout == 0 || self.check.probe_timeout >= self.check.interval {
            return Err(ValidationError::InvalidProbeTimeout {
                timeout: self.check.probe_timeout,
                interval: self.check.interval,
            });
        }

        self.cloudflare.validate()?;
        self.statuspage.validate()?;

        Ok(())
    }
}

impl ConfigManager {
    /// Creates a new `ConfigManager` instance by loading and validating the configuration.
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let config_path: PathBuf = Self::get_config_path()?;
        Self::ensure_config_file_exists(&config_path)?;

        let settings: Settings = Self::load_settings(&config_path)?;

        // Validate settings before proceeding
        let validated_settings = ValidatedSettings::new(settings).map_err(|e| {
            error!("Configuration validation failed: {}", e);
            e
        })?;

        Ok(ConfigManager {
            settings: Arc::new(RwLock::new(validated_settings.into_inner())),
            _config_path: config_path,
        })
    }

    /// Determines the configuration file path.
    fn get_config_path() -> Result<PathBuf, ConfigError> {
        if let Ok(path) = env::var("FLEETWATCH_CONFIG_PATH") {
            Ok(PathBuf::from(path))
        } else if let Some(config_dir) = dirs::config_dir() {
            Ok(config_dir.join("fleetwatch").join("config.toml"))
        } else {
            let msg: &str = "Could not determine the configuration directory";
            error!("{}", msg);
            Err(ConfigError::Message(msg.into()))
        }
    }

    /// Ensures that the configuration file exists, creating it if necessary.
    fn ensure_config_file_exists(config_path: &Path) -> Result<(), ConfigError> {
        if !config_path.exists() {
            if let Some(parent_dir) = config_path.parent() {
                fs::create_dir_all(parent_dir).map_err(|e| {
                    let msg: String = format!("Failed to create configuration directory: {}", e);
                    error!("{}", msg);
                    ConfigError::Message(msg)
                })?;
            }
            fs::write(config_path, DEFAULT_CONFIG).map_err(|e| {
                let msg: String = format!("Failed to create default configuration file: {}", e);
                error!("{}", msg);
                ConfigError::Message(msg)
            })?;
            info!("Default configuration file created at: {:?}", config_path);
        }
        Ok(())
    }

    /// Loads the settings from the configuration file and environment variables.
    fn load_settings(config_path: &Path) -> Result<Settings, ConfigError> {
        let config_file: &str = config_path.to_str().ok_or_else(|| {
            let msg: &str = "Configuration file path contains invalid UTF-8 characters";
            error!("{}", msg);
            ConfigError::Message(msg.into())
        })?;

        let settings: Config = Config::builder()
            .add_source(File::with_name(config_file))
            .add_source(Environment::with_prefix("FLEETWATCH").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    /// Provides a read-locked reference to the current settings.
    pub async fn get_settings(&self) -> tokio::sync::RwLockReadGuard<'_, Settings> {
        self.settings.read().await
    }

    pub async fn get_log_level(&self) -> String {
        self.settings.read().await.get_log_level()
    }
}

impl ValidatedSettings {
    pub fn new(settings: Settings) -> Result<Self, ValidationError> {
        settings.validate()?;
        Ok(ValidatedSettings(settings))
    }

    pub fn into_inner(self) -> Settings {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::cloudflare::types::CfConfig;
    use crate::reporter::types::{MetricBindings, SpConfig};
    use crate::settings::types::{Check, Log};
    use config::FileFormat;

    fn settings() -> Settings {
        Settings {
            log: Log {
                level: "info".to_string(),
            },
            check: Check {
                interval: 60,
                probe_timeout: 15,
            },
            cloudflare: CfConfig {
                api_key: "key".to_string(),
                email: "ops@example.org".to_string(),
                zone: "example.org".to_string(),
                domain: "pool.example.org".to_string(),
                drain_domain: "drain.example.org".to_string(),
            },
            statuspage: SpConfig {
                api_key: "sp-key".to_string(),
                page_id: "page".to_string(),
                metrics: MetricBindings {
                    active_nodes: "m1".to_string(),
                    unresponsive_nodes: "m2".to_string(),
                    average_response: "m3".to_string(),
                    max_response: "m4".to_string(),
                    min_response: "m5".to_string(),
                    drain_nodes: None,
                },
            },
        }
    }

    #[test]
    fn complete_settings_validate() {
        assert!(settings().validate().is_ok());
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let mut s = settings();
        s.log.level = "verbose".to_string();
        assert!(matches!(
            s.validate(),
            Err(ValidationError::InvalidLogLevel(_))
        ));
    }

    #[test]
    fn zero_interval_is_rejected() {
        let mut s = settings();
        s.check.interval = 0;
        assert!(matches!(
            s.validate(),
            Err(ValidationError::InvalidCheckInterval(0))
        ));
    }

    #[test]
    fn probe_timeout_must_stay_below_the_interval() {
        let mut s = settings();
        s.check.probe_timeout = 60;
        assert!(matches!(
            s.validate(),
            Err(ValidationError::InvalidProbeTimeout {
                timeout: 60,
                interval: 60
            })
        ));
    }

    #[test]
    fn validated_settings_wraps_only_valid_input() {
        assert!(ValidatedSettings::new(settings()).is_ok());

        let mut bad = settings();
        bad.statuspage.page_id = String::new();
        assert!(ValidatedSettings::new(bad).is_err());
    }

    #[test]
    fn default_config_parses_and_validates() {
        let settings: Settings = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert!(settings.validate().is_ok());
        assert_eq!(settings.check.interval, 60);
        assert_eq!(settings.cloudflare.domain, "pool.example.org");
        assert!(settings.statuspage.metrics.drain_nodes.is_none());
    }
}
