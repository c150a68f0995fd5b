//! Configuration management for fundweb
//!
//! This module handles loading, validation, and management of
//! fundweb configuration from YAML files.

pub mod error;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use error::{ConfigError, ConfigResult};

// ==================== Configuration Types ====================

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,
    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8090
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Backend REST service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the donation platform backend
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Donor session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Path to the persisted donor identity blob
    #[serde(default = "default_donor_file")]
    pub donor_file: PathBuf,
}

fn default_donor_file() -> PathBuf {
    PathBuf::from("./data/current_donor.json")
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            donor_file: default_donor_file(),
        }
    }
}

/// UI behavior settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// How delete actions ask for confirmation
    #[serde(default)]
    pub confirm_mode: ConfirmMode,
}

/// Delete confirmation mode enumeration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfirmMode {
    /// Browser-native confirm dialog on the delete button
    Inline,
    /// Dedicated confirmation modal
    Modal,
}

impl Default for ConfirmMode {
    fn default() -> Self {
        ConfirmMode::Modal
    }
}

impl std::str::FromStr for ConfirmMode {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "inline" => Ok(ConfirmMode::Inline),
            "modal" => Ok(ConfirmMode::Modal),
            _ => Err(format!("Invalid confirm mode: {}", s)),
        }
    }
}

impl std::fmt::Display for ConfirmMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfirmMode::Inline => write!(f, "inline"),
            ConfirmMode::Modal => write!(f, "modal"),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Backend service settings
    #[serde(default)]
    pub backend: BackendConfig,
    /// Donor session settings
    #[serde(default)]
    pub session: SessionConfig,
    /// UI behavior settings
    #[serde(default)]
    pub ui: UiConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load(path: PathBuf) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::FileNotFound {
                    path: path.to_string_lossy().to_string(),
                }
            } else {
                ConfigError::IoError
            }
        })?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|_| ConfigError::InvalidYaml)?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> ConfigResult<()> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".to_string(),
                reason: "Port must be greater than 0".to_string(),
            });
        }

        if self.backend.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "backend.timeout_secs".to_string(),
                reason: "Timeout must be greater than 0".to_string(),
            });
        }

        if !self.backend.base_url.starts_with("http://")
            && !self.backend.base_url.starts_with("https://")
        {
            return Err(ConfigError::InvalidValue {
                field: "backend.base_url".to_string(),
                reason: "Base URL must start with http:// or https://".to_string(),
            });
        }

        Ok(())
    }

    /// Generate a default configuration file
    pub fn generate_default() -> &'static str {
        include_str!("../templates/default_config.yaml")
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_yaml() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8090);
        assert_eq!(config.backend.base_url, "http://localhost:8080");
        assert_eq!(config.backend.timeout_secs, 30);
        assert_eq!(config.ui.confirm_mode, ConfirmMode::Modal);
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_overrides() {
        let yaml = "server:\n  port: 9000\nui:\n  confirm_mode: inline\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.ui.confirm_mode, ConfirmMode::Inline);
        // Untouched sections keep their defaults
        assert_eq!(config.backend.timeout_secs, 30);
    }

    #[test]
    fn test_validate_rejects_zero_port() {
        let config: Config = serde_yaml::from_str("server:\n  port: 0\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let yaml = "backend:\n  base_url: ftp://example.com\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        let err = config.validate().unwrap_err();
        match err {
            ConfigError::InvalidValue { field, .. } => assert_eq!(field, "backend.base_url"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_confirm_mode_from_str() {
        assert_eq!("inline".parse::<ConfirmMode>().unwrap(), ConfirmMode::Inline);
        assert_eq!("Modal".parse::<ConfirmMode>().unwrap(), ConfirmMode::Modal);
        assert!("popup".parse::<ConfirmMode>().is_err());
    }

    #[test]
    fn test_default_template_parses() {
        let config: Config = serde_yaml::from_str(Config::generate_default()).unwrap();
        assert!(config.validate().is_ok());
    }
}
