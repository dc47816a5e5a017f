//! Configuration loading and validation.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::models::{Round, RoundSchedule};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Main application configuration.
///
/// The round table is configuration, not a global: two tournaments with
/// different point schemes can be scored side by side from two configs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Rounds in playing order with their point values.
    #[serde(default = "default_rounds")]
    pub rounds: Vec<Round>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_rounds() -> Vec<Round> {
    RoundSchedule::default().rounds().to_vec()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            rounds: default_rounds(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// The configured round schedule.
    pub fn schedule(&self) -> RoundSchedule {
        RoundSchedule::new(self.rounds.clone())
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.schedule()
            .validate()
            .map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.rounds.len(), 5);
        assert_eq!(config.schedule().points("f"), 13);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_custom_rounds() {
        let toml_str = r#"
            log_level = "debug"

            [[rounds]]
            key = "sf"
            points = 8

            [[rounds]]
            key = "f"
            points = 16
        "#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.schedule().points("f"), 16);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_non_increasing_points() {
        let toml_str = r#"
            [[rounds]]
            key = "sf"
            points = 8

            [[rounds]]
            key = "f"
            points = 8
        "#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("./does-not-exist.toml")).unwrap();
        assert_eq!(config.rounds.len(), 5);
    }

    #[test]
    fn test_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_level = \"warn\"").unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.log_level, "warn");
        // Rounds fall back to the canonical table.
        assert_eq!(config.schedule().points("r32"), 2);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = AppConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config.rounds, parsed.rounds);
    }
}
