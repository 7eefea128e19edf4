//! Configuration loading
//!
//! Handles loading configuration from TOML files, environment variables
//! and default values, merged with Figment.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use prism_domain::error::{Error, Result};

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "PRISM";

/// Default configuration file name looked up in the working directory
pub const DEFAULT_CONFIG_FILENAME: &str = "prism.toml";

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn or error
    pub level: String,
    /// Emit JSON-structured log lines instead of human-readable ones
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Configuration loader service
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    /// Configuration file path, when given explicitly
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration from all sources
    ///
    /// Sources merge in this order, later overriding earlier:
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (explicit path, else `prism.toml` if present)
    /// 3. Environment variables with prefix (e.g. `PRISM_LOGGING_LEVEL`)
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        let file = self
            .config_path
            .clone()
            .or_else(|| Some(PathBuf::from(DEFAULT_CONFIG_FILENAME)).filter(|p| p.exists()));
        if let Some(path) = file {
            tracing::debug!(path = %path.display(), exists = path.exists(), "merging config file");
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed(&format!("{CONFIG_ENV_PREFIX}_")).split("_"));

        let config: AppConfig = figment.extract().map_err(|e| Error::Configuration {
            message: "Failed to extract configuration".to_string(),
            source: Some(Box::new(e)),
        })?;

        self.validate(&config)?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string = toml::to_string_pretty(config).map_err(|e| Error::Configuration {
            message: "Failed to serialize config to TOML".to_string(),
            source: Some(Box::new(e)),
        })?;
        std::fs::write(path.as_ref(), toml_string).map_err(|e| Error::Configuration {
            message: "Failed to write config file".to_string(),
            source: Some(Box::new(e)),
        })?;
        Ok(())
    }

    /// Get the explicitly configured file path, if any
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    fn validate(&self, config: &AppConfig) -> Result<()> {
        crate::logging::parse_log_level(&config.logging.level)?;
        Ok(())
    }
}
