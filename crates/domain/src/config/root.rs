use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::filter::FilterConfig;
use super::logging::{LogFormat, LoggingConfig};
use super::output::OutputConfig;
use super::provider::ProviderConfig;

const LOCAL_CONFIG_PATH: &str = "ferrous-dnsmap.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ferrous-dnsmap/config.toml";

/// Main configuration structure for Ferrous DNS Mapper
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// DNS provider API access
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Where the rendered hierarchy goes
    #[serde(default)]
    pub output: OutputConfig,

    /// Record filtering before the hierarchy is built
    #[serde(default)]
    pub filter: FilterConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-dnsmap.toml in current directory
    /// 3. /etc/ferrous-dnsmap/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(token) = overrides.api_token {
            self.provider.api_token = token;
        }
        if let Some(base_url) = overrides.base_url {
            self.provider.base_url = base_url;
        }
        if let Some(path) = overrides.output_path {
            self.output.path = path;
        }
        if overrides.exclude_txt {
            self.filter.exclude_txt = true;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(format) = overrides.log_format {
            self.logging.format = format;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.provider.api_token.trim().is_empty() {
            return Err(ConfigError::Validation(
                "No API token configured".to_string(),
            ));
        }

        if self.provider.base_url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Provider base URL cannot be empty".to_string(),
            ));
        }

        if self.provider.zones_per_page == 0 || self.provider.records_per_page == 0 {
            return Err(ConfigError::Validation(
                "Page sizes must be greater than 0".to_string(),
            ));
        }

        if self.provider.request_timeout == 0 {
            return Err(ConfigError::Validation(
                "Request timeout cannot be 0".to_string(),
            ));
        }

        if self.output.path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Output path cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|p| std::path::Path::new(p).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub api_token: Option<String>,
    pub base_url: Option<String>,
    pub output_path: Option<String>,
    pub exclude_txt: bool,
    pub log_level: Option<String>,
    pub log_format: Option<LogFormat>,
}
