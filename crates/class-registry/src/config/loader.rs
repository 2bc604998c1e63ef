//! Configuration loader
//!
//! Sources are merged in this order (later sources override earlier):
//! 1. Default values from `RegistryConfig::default()`
//! 2. TOML configuration file, if present
//! 3. Environment variables with prefix (e.g. `CLASS_REGISTRY__LOGGING__LEVEL`)

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};

use crate::config::RegistryConfig;
use crate::constants::{CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_FILENAME};
use crate::error::{Error, Result};
use crate::logging::{log_config_loaded, parse_log_level};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    pub fn load(&self) -> Result<RegistryConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(RegistryConfig::default()));

        if let Some(config_path) = &self.config_path {
            let found = config_path.exists();
            if found {
                figment = figment.merge(Toml::file(config_path));
            }
            log_config_loaded(config_path, found);
        } else {
            let default_path = Path::new(DEFAULT_CONFIG_FILENAME);
            if default_path.exists() {
                figment = figment.merge(Toml::file(default_path));
                log_config_loaded(default_path, true);
            }
        }

        let prefix = format!("{}{}", self.env_prefix, CONFIG_ENV_SEPARATOR);
        figment = figment.merge(Env::prefixed(&prefix).split(CONFIG_ENV_SEPARATOR));

        let config: RegistryConfig = figment.extract()?;
        Self::validate_config(&config)?;

        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &RegistryConfig, path: P) -> Result<()> {
        let toml_string = toml::to_string_pretty(config).map_err(|e| {
            Error::configuration_with_source("Failed to serialize config to TOML", e)
        })?;
        std::fs::write(path.as_ref(), toml_string)?;
        Ok(())
    }

    fn validate_config(config: &RegistryConfig) -> Result<()> {
        parse_log_level(&config.logging.level)?;
        Ok(())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
